use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::Exporter;
use super::raster::{self, SvgRasterizer};
use crate::card::CardNode;
use crate::config::{ExportConfig, ExportFormat};

/// PNG导出：捕获位图后直接落盘
pub struct PngExporter {
    width: u32,
    scale: f64,
}

impl PngExporter {
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            width: config.card_width,
            scale: config.scale,
        }
    }
}

impl Exporter for PngExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Png
    }

    async fn export(&self, card: &mut CardNode, output_dir: &Path) -> Result<PathBuf> {
        let bitmap = raster::capture(card, &SvgRasterizer, self.width, self.scale)?;
        let path = output_dir.join(card.filename(ExportFormat::Png));
        tokio::fs::write(&path, &bitmap.png)
            .await
            .context(format!("写入PNG失败: {:?}", path))?;
        Ok(path)
    }
}
