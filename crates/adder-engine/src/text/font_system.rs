use std::fmt;

use fontdue::layout::{CoordinateSystem, GlyphPosition, Layout, LayoutSettings, TextStyle};

use crate::coords::Vec2;
use crate::paint::Color;
use crate::surface::Surface;

use super::TextRasterizer;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// A loaded font at a specific pixel size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FontRef {
    pub id: FontId,
    /// Font size in logical pixels.
    pub size: f32,
}

impl FontRef {
    #[inline]
    pub const fn new(id: FontId, size: f32) -> Self {
        Self { id, size }
    }
}

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font {:?} ({} bytes)", id, bytes.len());
        Ok(id)
    }

    fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    fn layout(&self, font: &fontdue::Font, text: &str, size: f32) -> (Vec<GlyphPosition>, Vec2) {
        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size, 0));

        let glyphs = layout.glyphs().clone();

        // Pen position after each glyph, not the bitmap right edge, so trailing
        // spaces and side bearings count towards the width.
        let w = glyphs
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        let h = glyphs
            .iter()
            .map(|g| g.y + g.height as f32)
            .fold(layout.height(), f32::max);
        (glyphs, Vec2::new(w.ceil(), h.ceil()))
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRasterizer for FontSystem {
    fn render_text(&self, text: &str, font: FontRef, fg: Color, bg: Option<Color>) -> Surface {
        let Some(f) = self.get(font.id) else {
            log::warn!("render_text: unknown font {:?}", font.id);
            let h = (font.size * 6.0 / 5.0).ceil() as u32;
            return Surface::filled(0, h, bg.unwrap_or(Color::transparent()));
        };

        let (glyphs, size) = self.layout(f, text, font.size);
        let mut out = Surface::filled(
            size.x as u32,
            size.y as u32,
            bg.unwrap_or(Color::transparent()),
        );

        for g in &glyphs {
            if g.width == 0 || g.height == 0 {
                continue;
            }
            let (_, coverage) = f.rasterize_config(g.key);
            let mut glyph = Surface::new(g.width as u32, g.height as u32);
            for (i, &a) in coverage.iter().enumerate() {
                if a == 0 {
                    continue;
                }
                let x = (i % g.width) as i32;
                let y = (i / g.width) as i32;
                let alpha = ((fg.a as u16 * a as u16) / 255) as u8;
                glyph.fill_rect(x, y, 1, 1, Color::rgba(fg.r, fg.g, fg.b, alpha));
            }
            out.blit(&glyph, g.x.round() as i32, g.y.round() as i32);
        }
        out
    }

    fn measure_text(&self, text: &str, font: FontRef) -> Vec2 {
        match self.get(font.id) {
            Some(f) => self.layout(f, text, font.size).1,
            None => Vec2::new(0.0, (font.size * 6.0 / 5.0).ceil()),
        }
    }
}
