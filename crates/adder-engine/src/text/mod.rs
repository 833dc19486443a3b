//! Text rasterization.
//!
//! The UI layer never touches fontdue directly; it talks to a
//! [`TextRasterizer`], implemented by [`FontSystem`] for real fonts and by
//! [`BlockFont`] for headless use.

mod block;
mod font_system;

pub use block::BlockFont;
pub use font_system::{FontId, FontLoadError, FontRef, FontSystem};

use crate::coords::Vec2;
use crate::paint::Color;
use crate::surface::Surface;

/// Font provider: renders a single run of text into a fresh surface.
pub trait TextRasterizer {
    /// Renders `text` with `fg` glyphs over `bg` (transparent when `None`).
    ///
    /// The returned surface is exactly as large as the laid out text.
    fn render_text(&self, text: &str, font: FontRef, fg: Color, bg: Option<Color>) -> Surface;

    /// Size `render_text` would produce, in logical pixels.
    fn measure_text(&self, text: &str, font: FontRef) -> Vec2;
}
