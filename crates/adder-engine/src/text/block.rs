use crate::coords::Vec2;
use crate::paint::Color;
use crate::surface::Surface;

use super::{FontId, FontRef, TextRasterizer};

/// Fontless rasterizer that draws every character as a solid cell.
///
/// Cells are `ceil(size / 2)` wide and `ceil(size)` tall with a one pixel
/// gap on each side; whitespace leaves the cell empty. Layout is fully
/// deterministic, which makes it useful for tests and for running without
/// any font file.
#[derive(Debug, Default, Copy, Clone)]
pub struct BlockFont;

impl BlockFont {
    /// A [`FontRef`] to pass to widgets rendered with this rasterizer.
    pub const fn font(size: f32) -> FontRef {
        FontRef::new(FontId(0), size)
    }

    fn cell(size: f32) -> (u32, u32) {
        ((size / 2.0).ceil() as u32, size.ceil() as u32)
    }
}

impl TextRasterizer for BlockFont {
    fn render_text(&self, text: &str, font: FontRef, fg: Color, bg: Option<Color>) -> Surface {
        let (cw, ch) = Self::cell(font.size);
        let n = text.chars().count() as u32;
        let mut out = Surface::filled(cw * n, ch, bg.unwrap_or(Color::transparent()));
        for (i, c) in text.chars().enumerate() {
            if c.is_whitespace() || cw < 3 || ch < 3 {
                continue;
            }
            out.fill_rect((i as u32 * cw + 1) as i32, 1, cw - 2, ch - 2, fg);
        }
        out
    }

    fn measure_text(&self, text: &str, font: FontRef) -> Vec2 {
        let (cw, ch) = Self::cell(font.size);
        Vec2::new((cw * text.chars().count() as u32) as f32, ch as f32)
    }
}
