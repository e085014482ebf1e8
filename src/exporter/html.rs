use anyhow::{Context, Result};
use regex::Regex;
use std::path::{Path, PathBuf};

use super::Exporter;
use crate::card::CardNode;
use crate::config::ExportFormat;

/// HTML导出：生成自包含的独立文档
///
/// 卡片标记内联全部样式与远端头像URL，不依赖任何外部资源文件。
/// 输出目录不可写时退回系统临时目录，而不是让整次导出失败。
pub struct HtmlExporter;

impl Exporter for HtmlExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Html
    }

    async fn export(&self, card: &mut CardNode, output_dir: &Path) -> Result<PathBuf> {
        let document = build_document(card);
        let filename = card.filename(ExportFormat::Html);
        let path = output_dir.join(&filename);

        match tokio::fs::write(&path, &document).await {
            Ok(()) => Ok(path),
            Err(e) => {
                let fallback = std::env::temp_dir().join(&filename);
                eprintln!(
                    "⚠️ 写入{}失败({})，改写到临时目录: {}",
                    path.display(),
                    e,
                    fallback.display()
                );
                tokio::fs::write(&fallback, &document)
                    .await
                    .context(format!("写入临时目录也失败: {:?}", fallback))?;
                Ok(fallback)
            }
        }
    }
}

/// 完整HTML文档：基础reset + 卡片样式表 + 清理后的卡片标记
fn build_document(card: &CardNode) -> String {
    let markup = clean_markup(&card.to_html());
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n<title>{} - GitHub Report Card</title>\n<style>\n* {{ margin: 0; padding: 0; box-sizing: border-box; }}\nbody {{ background-color: #F3F4F6; padding: 2rem 1rem; min-height: 100vh; }}\n{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        card.data.name,
        card.stylesheet(),
        markup
    )
}

/// 清理卡片标记用于对外导出
///
/// 去掉仅供内部定位的data-*属性，给缺失alt的图片补上空alt。
pub(crate) fn clean_markup(html: &str) -> String {
    let internal_attrs =
        Regex::new(r#"\s(?:data-testid|data-language-item|data-contributor-item)="[^"]*""#)
            .unwrap();
    let cleaned = internal_attrs.replace_all(html, "");

    let img_tags = Regex::new(r"<img[^>]*>").unwrap();
    img_tags
        .replace_all(&cleaned, |caps: &regex::Captures| {
            let tag = &caps[0];
            if tag.contains(" alt=") {
                tag.to_string()
            } else {
                tag.replacen("<img", "<img alt=\"\"", 1)
            }
        })
        .into_owned()
}
