use std::any::Any;
use std::fmt;
use std::time::Duration;

use adder_engine::coords::{Anchor, Rect, Vec2};
use adder_engine::input::PointerState;
use adder_engine::surface::Surface;
use adder_engine::window::CursorIcon;

use crate::context_menu::ContextMenu;
use crate::error::UiError;
use crate::event::{Commands, EventTable};

// ── ComponentId ───────────────────────────────────────────────────────────

/// Name identifying a component inside a registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(String);

impl ComponentId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ComponentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for ComponentId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ComponentId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ── CursorStyle ───────────────────────────────────────────────────────────

/// Pointer shape a component asks for while hovered.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum CursorStyle {
    #[default]
    Default,
    Pointer,
    Text,
}

impl From<CursorStyle> for CursorIcon {
    fn from(style: CursorStyle) -> Self {
        match style {
            CursorStyle::Default => CursorIcon::Default,
            CursorStyle::Pointer => CursorIcon::Pointer,
            CursorStyle::Text    => CursorIcon::Text,
        }
    }
}

// ── Placement ─────────────────────────────────────────────────────────────

/// Position + anchor rule and the rectangle derived from them.
///
/// `rect` always has the size of the last image passed to [`fit`](Self::fit)
/// and `anchor.point(rect) == position`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
    position: Vec2,
    anchor:   Anchor,
    rect:     Rect,
}

impl Placement {
    pub fn new(position: Vec2, anchor: Anchor, size: Vec2) -> Self {
        Self { position, anchor, rect: anchor.rect_for(size, position) }
    }

    /// Rebuilds `rect` for an image of `size`, holding the anchor point.
    pub fn fit(&mut self, size: Vec2) {
        self.rect = self.anchor.rect_for(size, self.position);
    }

    pub fn move_to(&mut self, position: Vec2) {
        self.position = position;
        self.fit(self.rect.size);
    }

    pub fn set_anchor(&mut self, anchor: Anchor) {
        self.anchor = anchor;
        self.fit(self.rect.size);
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

// ── Component ─────────────────────────────────────────────────────────────

/// Per-component view of the current tick.
pub struct RefreshCtx<'a> {
    pub pointer:  PointerState,
    /// Monotonic clock reading taken once at the start of the frame.
    pub now:      Duration,
    /// Debounce window for components that do not set their own.
    pub debounce: Duration,
    pub commands: &'a mut Commands,
}

/// A retained visual element driven by the frame loop.
///
/// The frame loop calls [`refresh`](Component::refresh) once per tick and then
/// composites [`image`](Component::image) at the origin of
/// [`rect`](Component::rect).
pub trait Component: Any {
    fn id(&self) -> &ComponentId;

    fn image(&self) -> &Surface;

    fn rect(&self) -> Rect;

    fn anchor(&self) -> Anchor;

    fn events(&self) -> &EventTable;

    fn events_mut(&mut self) -> &mut EventTable;

    /// Reconciles `image` and `rect` and reacts to the pointer.
    ///
    /// Afterwards `rect` has the size of `image` and its anchor point sits at
    /// the component's position.
    fn refresh(&mut self, ctx: &mut RefreshCtx<'_>) -> Result<(), UiError>;

    fn cursor_hint(&self) -> Option<CursorStyle> {
        None
    }

    fn context_menu(&self) -> Option<&ContextMenu> {
        None
    }

    fn context_menu_mut(&mut self) -> Option<&mut ContextMenu> {
        None
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_holds_anchor_point_across_resizes() {
        let mut p = Placement::new(Vec2::new(100.0, 100.0), Anchor::Center, Vec2::new(40.0, 20.0));
        assert_eq!(p.rect(), Rect::new(80.0, 90.0, 40.0, 20.0));

        p.fit(Vec2::new(10.0, 60.0));
        assert_eq!(p.rect(), Rect::new(95.0, 70.0, 10.0, 60.0));
        assert_eq!(p.anchor().point(p.rect()), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn placement_move_and_reanchor_keep_size() {
        let mut p = Placement::new(Vec2::zero(), Anchor::TopLeft, Vec2::new(30.0, 10.0));
        p.move_to(Vec2::new(50.0, 50.0));
        assert_eq!(p.rect(), Rect::new(50.0, 50.0, 30.0, 10.0));

        p.set_anchor(Anchor::BottomRight);
        assert_eq!(p.rect(), Rect::new(20.0, 40.0, 30.0, 10.0));
    }

    #[test]
    fn component_ids_compare_with_strings() {
        let id = ComponentId::from("quit");
        assert_eq!(id, "quit");
        assert_eq!(id.to_string(), "quit");
        assert_ne!(id, ComponentId::new("btn1"));
    }

    #[test]
    fn cursor_styles_map_to_platform_icons() {
        assert_eq!(CursorIcon::from(CursorStyle::Pointer), CursorIcon::Pointer);
        assert_eq!(CursorIcon::from(CursorStyle::default()), CursorIcon::Default);
    }
}
