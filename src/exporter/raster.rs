use anyhow::{Context, Result};

use crate::card::{CardNode, InlineStyle};

/// 一次捕获的产物：PNG字节与实际使用的倍率
#[derive(Debug, Clone)]
pub struct CapturedBitmap {
    pub png: Vec<u8>,
    pub scale: f64,
}

/// SVG -> PNG光栅化接口，PNG与PDF导出共用
pub trait Rasterizer {
    fn rasterize(&self, svg: &str, scale: f64) -> Result<Vec<u8>>;
}

/// 基于resvg的默认光栅化实现
pub struct SvgRasterizer;

impl Rasterizer for SvgRasterizer {
    fn rasterize(&self, svg: &str, scale: f64) -> Result<Vec<u8>> {
        let mut options = resvg::usvg::Options::default();
        options.fontdb_mut().load_system_fonts();

        let tree = resvg::usvg::Tree::from_str(svg, &options).context("解析卡片SVG失败")?;
        let size = tree.size();
        let width = (size.width() as f64 * scale).ceil() as u32;
        let height = (size.height() as f64 * scale).ceil() as u32;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .context(format!("创建{}x{}画布失败", width, height))?;
        let transform = resvg::tiny_skia::Transform::from_scale(scale as f32, scale as f32);
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        pixmap.encode_png().context("编码PNG失败")
    }
}

/// 离开作用域时把卡片的内联样式恢复为快照值
///
/// 恢复挂在Drop上，提前返回、`?`传播乃至光栅化器panic展开
/// 都会触发，卡片不会带着捕获样式泄漏出去。
struct StyleGuard<'a> {
    card: &'a mut CardNode,
    snapshot: InlineStyle,
}

impl Drop for StyleGuard<'_> {
    fn drop(&mut self) {
        self.card.style = self.snapshot.clone();
    }
}

/// 捕获卡片位图
///
/// 流程：记录当前内联样式 -> 钉住捕获样式 -> 光栅化 -> 恢复样式。
pub fn capture(
    card: &mut CardNode,
    rasterizer: &dyn Rasterizer,
    width: u32,
    scale: f64,
) -> Result<CapturedBitmap> {
    let guard = StyleGuard {
        snapshot: card.style.clone(),
        card,
    };
    guard.card.apply_capture_style(width);
    let svg = guard.card.to_svg();

    let png = rasterizer.rasterize(&svg, scale)?;
    Ok(CapturedBitmap { png, scale })
}
