use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::card::CardNode;
use crate::config::{Config, ExportFormat};

pub mod html;
pub mod pdf;
pub mod png;
pub mod raster;

pub use html::HtmlExporter;
pub use pdf::PdfExporter;
pub use png::PngExporter;
pub use raster::{CapturedBitmap, Rasterizer, SvgRasterizer};

/// 把卡片按配置的格式逐一落盘
///
/// 单个格式失败不终止整体流程，打印警告并继续下一个格式，
/// 提示用户HTML是兼容性最好的降级选项。
pub async fn save(card: &mut CardNode, config: &Config) -> Result<Vec<PathBuf>> {
    tokio::fs::create_dir_all(&config.output_path)
        .await
        .context(format!(
            "Failed to create output directory: {:?}",
            config.output_path
        ))?;

    let mut written = Vec::new();
    for format in &config.formats {
        let result = match format {
            ExportFormat::Html => HtmlExporter.export(card, &config.output_path).await,
            ExportFormat::Png => {
                PngExporter::new(&config.export)
                    .export(card, &config.output_path)
                    .await
            }
            ExportFormat::Pdf => {
                PdfExporter::new(&config.export)
                    .export(card, &config.output_path)
                    .await
            }
        };
        match result {
            Ok(path) => {
                println!("💾 已导出{}: {}", format, path.display());
                written.push(path);
            }
            Err(e) => {
                eprintln!("⚠️ {}导出失败，可改用HTML格式重试: {}", format, e);
            }
        }
    }
    Ok(written)
}

/// 单一导出格式的落盘接口
#[allow(async_fn_in_trait)]
pub trait Exporter {
    fn format(&self) -> ExportFormat;

    /// 导出卡片到目标目录，返回写入的文件路径
    ///
    /// 卡片以可变引用传入：位图类导出器会临时改写内联样式，
    /// 返回前必须恢复原值。
    async fn export(&self, card: &mut CardNode, output_dir: &Path) -> Result<PathBuf>;
}
