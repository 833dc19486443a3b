use adder_engine::coords::{Rect, Vec2};
use adder_engine::paint::Color;
use adder_engine::surface::Surface;
use adder_engine::text::{FontRef, TextRasterizer};

use crate::event::{Callback, Commands};

const PAD_X: u32 = 8;
const PAD_Y: u32 = 4;

/// One row of a context menu.
#[derive(Debug)]
pub struct MenuEntry {
    label:    String,
    image:    Surface,
    callback: Callback,
}

impl MenuEntry {
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn image(&self) -> &Surface {
        &self.image
    }
}

/// Right-click menu: an ordered list of pre-rendered rows drawn as a vertical
/// stack at the pointer.
///
/// Rows share the width of the widest label so the stack reads as one panel.
#[derive(Debug, Default)]
pub struct ContextMenu {
    entries: Vec<MenuEntry>,
}

impl ContextMenu {
    pub const DEFAULT_FG: Color = Color::black();
    pub const DEFAULT_BG: Color = Color::rgb(235, 235, 235);

    /// Renders every `(label, callback)` pair with `fg` over `bg`.
    pub fn build(
        entries: Vec<(String, Callback)>,
        text: &dyn TextRasterizer,
        font: FontRef,
        fg: Color,
        bg: Color,
    ) -> Self {
        let width = entries
            .iter()
            .map(|(label, _)| text.measure_text(label, font).x.ceil() as u32)
            .max()
            .unwrap_or(0)
            + 2 * PAD_X;

        let entries = entries
            .into_iter()
            .map(|(label, callback)| {
                let glyphs = text.render_text(&label, font, fg, None);
                let mut image = Surface::filled(width, glyphs.height() + 2 * PAD_Y, bg);
                image.blit(&glyphs, PAD_X as i32, PAD_Y as i32);
                MenuEntry { label, image, callback }
            })
            .collect();

        Self { entries }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Row rectangles when the menu's top-left corner is at `at`.
    pub fn layout(&self, at: Vec2) -> Vec<Rect> {
        let mut y = at.y;
        self.entries
            .iter()
            .map(|e| {
                let size = e.image.size();
                let row = Rect::from_origin_size(Vec2::new(at.x, y), size);
                y += size.y;
                row
            })
            .collect()
    }

    /// Bounding box of [`layout`](Self::layout).
    pub fn bounds(&self, at: Vec2) -> Rect {
        let (w, h) = self
            .entries
            .iter()
            .fold((0.0f32, 0.0f32), |(w, h), e| (w.max(e.image.size().x), h + e.image.size().y));
        Rect::from_origin_size(at, Vec2::new(w, h))
    }

    /// Index of the row under `p` for a menu drawn at `at`.
    pub fn entry_at(&self, at: Vec2, p: Vec2) -> Option<usize> {
        self.layout(at).iter().position(|r| r.contains(p))
    }

    /// Composites every row onto `target`. Returns the menu bounds.
    pub fn draw(&self, target: &mut Surface, at: Vec2) -> Rect {
        for (entry, row) in self.entries.iter().zip(self.layout(at)) {
            let (x, y) = row.pixel_origin();
            target.blit(&entry.image, x, y);
        }
        self.bounds(at)
    }

    /// Runs the callback of row `index`. Returns `false` if out of range.
    pub fn activate(&mut self, index: usize, commands: &mut Commands) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                log::debug!("context menu entry `{}` activated", entry.label);
                entry.callback.call(commands);
                true
            }
            None => false,
        }
    }
}
