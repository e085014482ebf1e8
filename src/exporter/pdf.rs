use anyhow::{Context, Result};
use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::{Image, ImageTransform, Mm, PdfDocument, Pt};
use std::io::Cursor;
use std::path::{Path, PathBuf};

use super::Exporter;
use super::raster::{self, SvgRasterizer};
use crate::card::CardNode;
use crate::config::{ExportConfig, ExportFormat};

/// PDF页面方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOrientation {
    Portrait,
    Landscape,
}

/// 由位图的自然像素尺寸推导PDF页面尺寸（单位pt）
///
/// 先除以倍率还原逻辑像素，再按CSS像素到pt的比例(0.75)换算；
/// 宽大于高时页面为横向。
pub fn page_size(
    natural_width: f64,
    natural_height: f64,
    scale: f64,
) -> (f64, f64, PageOrientation) {
    let logical_width = natural_width / scale;
    let logical_height = natural_height / scale;
    let width_pt = logical_width * 0.75;
    let height_pt = logical_height * 0.75;
    let orientation = if width_pt > height_pt {
        PageOrientation::Landscape
    } else {
        PageOrientation::Portrait
    };
    (width_pt, height_pt, orientation)
}

/// PDF导出：捕获位图，按位图尺寸开单页文档，图像铺满整页
pub struct PdfExporter {
    width: u32,
    scale: f64,
}

impl PdfExporter {
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            width: config.card_width,
            scale: config.scale,
        }
    }

    fn assemble(&self, card: &CardNode, bitmap: &raster::CapturedBitmap) -> Result<Vec<u8>> {
        let dimensions = image::load_from_memory(&bitmap.png).context("读取捕获位图失败")?;
        let (width_pt, height_pt, _) = page_size(
            dimensions.width() as f64,
            dimensions.height() as f64,
            bitmap.scale,
        );

        let (doc, page, layer) = PdfDocument::new(
            format!("{} Report Card", card.data.name),
            Mm::from(Pt(width_pt as f32)),
            Mm::from(Pt(height_pt as f32)),
            "Card",
        );

        let decoder =
            PngDecoder::new(Cursor::new(bitmap.png.as_slice())).context("解析PNG流失败")?;
        let pdf_image = Image::try_from(decoder).context("PNG嵌入PDF失败")?;

        // dpi = 96 * 倍率，使图像恰好铺满整页
        pdf_image.add_to_layer(
            doc.get_page(page).get_layer(layer),
            ImageTransform {
                translate_x: Some(Mm(0.0)),
                translate_y: Some(Mm(0.0)),
                dpi: Some((96.0 * bitmap.scale) as f32),
                ..Default::default()
            },
        );

        doc.save_to_bytes().context("序列化PDF失败")
    }
}

impl Exporter for PdfExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    async fn export(&self, card: &mut CardNode, output_dir: &Path) -> Result<PathBuf> {
        let bitmap = raster::capture(card, &SvgRasterizer, self.width, self.scale)?;
        let bytes = self.assemble(card, &bitmap)?;
        let path = output_dir.join(card.filename(ExportFormat::Pdf));
        tokio::fs::write(&path, &bytes)
            .await
            .context(format!("写入PDF失败: {:?}", path))?;
        Ok(path)
    }
}
