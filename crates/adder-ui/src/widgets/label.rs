use std::any::Any;

use adder_engine::coords::{Anchor, Rect, Vec2};
use adder_engine::paint::{Color, ColorError, IntoColor};
use adder_engine::surface::Surface;
use adder_engine::text::{FontRef, TextRasterizer};

use crate::component::{Component, ComponentId, Placement, RefreshCtx};
use crate::error::UiError;
use crate::event::{Callback, Commands, EventTable};

/// Pre-rendered text that can be rotated around its anchor point.
///
/// Rotation is applied lazily: [`rotate`](Label::rotate) only accumulates an
/// angle, and the next refresh regenerates the image from the unrotated
/// bitmap.
///
/// # Example
/// ```rust,ignore
/// let welcome = Label::builder("welcome", "Welcome to adder", font)
///     .position(Vec2::new(100.0, 100.0))
///     .anchor(Anchor::TopLeft)
///     .foreground((255u8, 255, 255))
///     .build(&fonts)?;
/// ui.register(welcome)?;
/// ```
#[derive(Debug)]
pub struct Label {
    id:        ComponentId,
    events:    EventTable,
    text:      String,
    font:      FontRef,
    fg:        Color,
    bg:        Option<Color>,
    /// Unrotated rendering; every rotation starts from this.
    original:  Surface,
    image:     Surface,
    placement: Placement,
    /// Angle requested by `rotate`, not yet normalized.
    pending:   f64,
    /// Angle `image` was rendered at, in `[0, 360)`.
    angle:     f64,
}

impl Label {
    pub fn builder(id: impl Into<ComponentId>, text: impl Into<String>, font: FontRef) -> LabelBuilder {
        LabelBuilder {
            id:       id.into(),
            text:     text.into(),
            font,
            position: Vec2::zero(),
            anchor:   Anchor::TopLeft,
            fg:       Ok(Color::white()),
            bg:       None,
            events:   Vec::new(),
        }
    }

    /// Adds `delta_degrees` (counter-clockwise) to the pending rotation.
    pub fn rotate(&mut self, delta_degrees: f32) {
        self.pending += f64::from(delta_degrees);
    }

    /// Drops any accumulated rotation; the next refresh shows the original.
    pub fn reset_rotation(&mut self) {
        self.pending = 0.0;
    }

    /// Rotation the next refresh will render at, normalized.
    pub fn angle(&self) -> f32 {
        normalize(self.pending) as f32
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Re-renders the label with new text. Rotation is kept.
    pub fn set_text(&mut self, text: impl Into<String>, rasterizer: &dyn TextRasterizer) {
        self.text = text.into();
        self.original = rasterizer.render_text(&self.text, self.font, self.fg, self.bg);
        self.image = self.original.clone();
        self.angle = 0.0;
        self.placement.fit(self.image.size());
    }

    pub fn set_position(&mut self, position: impl Into<Vec2>) {
        self.placement.move_to(position.into());
    }

    pub fn set_anchor(&mut self, anchor: Anchor) {
        self.placement.set_anchor(anchor);
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.placement.position()
    }
}

/// Angles are compared on this grid so that whole turns land back on the
/// angle they started from.
const ANGLE_GRID: f64 = 1e4;

fn normalize(degrees: f64) -> f64 {
    let a = (degrees.rem_euclid(360.0) * ANGLE_GRID).round() / ANGLE_GRID;
    // Rounding can carry a value just under 360 up to exactly 360.
    if a >= 360.0 { 0.0 } else { a }
}

impl Component for Label {
    fn id(&self) -> &ComponentId {
        &self.id
    }

    fn image(&self) -> &Surface {
        &self.image
    }

    fn rect(&self) -> Rect {
        self.placement.rect()
    }

    fn anchor(&self) -> Anchor {
        self.placement.anchor()
    }

    fn events(&self) -> &EventTable {
        &self.events
    }

    fn events_mut(&mut self) -> &mut EventTable {
        &mut self.events
    }

    fn refresh(&mut self, _ctx: &mut RefreshCtx<'_>) -> Result<(), UiError> {
        let angle = normalize(self.pending);
        self.pending = angle;

        if angle != self.angle {
            self.image = if angle == 0.0 {
                self.original.clone()
            } else {
                self.original.rotated(angle as f32)
            };
            self.angle = angle;
        }

        self.placement.fit(self.image.size());
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ── LabelBuilder ──────────────────────────────────────────────────────────

/// Builder returned by [`Label::builder`].
///
/// Colors are validated in [`build`](LabelBuilder::build), before anything is
/// rendered.
pub struct LabelBuilder {
    id:       ComponentId,
    text:     String,
    font:     FontRef,
    position: Vec2,
    anchor:   Anchor,
    fg:       Result<Color, ColorError>,
    bg:       Option<Result<Color, ColorError>>,
    events:   Vec<(String, Callback)>,
}

impl LabelBuilder {
    pub fn position(mut self, position: impl Into<Vec2>) -> Self {
        self.position = position.into();
        self
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn foreground(mut self, color: impl IntoColor) -> Self {
        self.fg = color.into_color();
        self
    }

    pub fn background(mut self, color: impl IntoColor) -> Self {
        self.bg = Some(color.into_color());
        self
    }

    /// Binds `f` to the event `name` (e.g. `"onclick"`).
    pub fn event(mut self, name: impl Into<String>, f: impl FnMut(&mut Commands) + 'static) -> Self {
        self.events.push((name.into(), Callback::new(f)));
        self
    }

    pub fn build(self, rasterizer: &dyn TextRasterizer) -> Result<Label, UiError> {
        let fg = self.fg?;
        let bg = self.bg.transpose()?;

        let original = rasterizer.render_text(&self.text, self.font, fg, bg);
        let placement = Placement::new(self.position, self.anchor, original.size());

        Ok(Label {
            id: self.id,
            events: EventTable::new(self.events),
            text: self.text,
            font: self.font,
            fg,
            bg,
            image: original.clone(),
            original,
            placement,
            pending: 0.0,
            angle: 0.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adder_engine::input::PointerState;
    use adder_engine::text::BlockFont;
    use std::time::Duration;

    fn refresh(label: &mut Label) {
        let mut commands = Commands::default();
        let mut ctx = RefreshCtx {
            pointer:  PointerState::default(),
            now:      Duration::ZERO,
            debounce: Duration::from_millis(100),
            commands: &mut commands,
        };
        label.refresh(&mut ctx).unwrap();
    }

    fn welcome(anchor: Anchor) -> Label {
        Label::builder("welcome", "Hello", BlockFont::font(10.0))
            .position(Vec2::new(100.0, 100.0))
            .anchor(anchor)
            .foreground(Color::white())
            .background(Color::black())
            .build(&BlockFont)
            .unwrap()
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn rect_is_derived_from_image_and_anchor() {
        let label = welcome(Anchor::TopLeft);
        assert_eq!(label.rect(), Rect::new(100.0, 100.0, 25.0, 10.0));

        let label = welcome(Anchor::Center);
        assert_eq!(label.rect(), Rect::new(87.5, 95.0, 25.0, 10.0));
    }

    #[test]
    fn malformed_colors_fail_before_rendering() {
        let err = Label::builder("x", "x", BlockFont::font(10.0))
            .foreground((256i32, 0i32, 0i32))
            .build(&BlockFont)
            .unwrap_err();
        assert!(matches!(err, UiError::InvalidColor(ColorError::OutOfRange { index: 0, value: 256 })));

        let err = Label::builder("x", "x", BlockFont::font(10.0))
            .background(&[1i64, 2][..])
            .build(&BlockFont)
            .unwrap_err();
        assert!(matches!(err, UiError::InvalidColor(ColorError::WrongLength(2))));

        let err = Label::builder("x", "x", BlockFont::font(10.0))
            .foreground(&[1.5f64, 0.0, 0.0][..])
            .build(&BlockFont)
            .unwrap_err();
        assert!(matches!(err, UiError::InvalidColor(ColorError::NotInteger { index: 0, .. })));
    }

    #[test]
    fn reserved_events_exist_without_handlers() {
        let label = welcome(Anchor::TopLeft);
        assert!(label.events().contains("onclick"));
        assert!(label.events().contains("ondoubleclick"));
    }

    // ── rotation ──────────────────────────────────────────────────────────

    #[test]
    fn full_turn_is_pixel_identical() {
        let mut label = welcome(Anchor::Center);
        let before = (label.image().clone(), label.rect());
        label.rotate(360.0);
        refresh(&mut label);
        assert_eq!(label.image(), &before.0);
        assert_eq!(label.rect(), before.1);
    }

    #[test]
    fn full_turn_from_any_angle_is_pixel_identical() {
        let mut angle = 0.1f32;
        while angle < 360.0 {
            let mut label = Label::builder("spin", "Hello", BlockFont::font(40.0))
                .position(Vec2::new(100.0, 100.0))
                .anchor(Anchor::Center)
                .build(&BlockFont)
                .unwrap();
            label.rotate(angle);
            refresh(&mut label);
            let before = (label.image().clone(), label.rect(), label.angle());

            label.rotate(360.0);
            refresh(&mut label);
            assert_eq!(label.angle(), before.2, "angle drifted from {angle}");
            assert!(label.image() == &before.0, "image changed after a full turn from {angle}");
            assert_eq!(label.rect(), before.1);

            angle += 6.3;
        }
    }

    #[test]
    fn reset_rotation_restores_original() {
        let mut label = welcome(Anchor::Center);
        let before = (label.image().clone(), label.rect());
        label.rotate(13.2);
        refresh(&mut label);
        label.reset_rotation();
        refresh(&mut label);
        assert_eq!(label.angle(), 0.0);
        assert_eq!(label.image(), &before.0);
        assert_eq!(label.rect(), before.1);
    }

    #[test]
    fn quarter_turn_swaps_size_and_holds_anchor() {
        let mut label = welcome(Anchor::Center);
        label.rotate(90.0);
        refresh(&mut label);
        assert_eq!(label.image().size(), Vec2::new(10.0, 25.0));
        assert_eq!(Anchor::Center.point(label.rect()), Vec2::new(100.0, 100.0));

        let mut label = welcome(Anchor::TopLeft);
        label.rotate(90.0);
        refresh(&mut label);
        assert_eq!(label.rect(), Rect::new(100.0, 100.0, 10.0, 25.0));
    }

    #[test]
    fn rotation_never_compounds() {
        let mut stepped = welcome(Anchor::Center);
        for _ in 0..3 {
            stepped.rotate(15.0);
            refresh(&mut stepped);
        }

        let mut direct = welcome(Anchor::Center);
        direct.rotate(45.0);
        refresh(&mut direct);

        assert_eq!(stepped.image(), direct.image());
    }

    #[test]
    fn negative_angles_normalize() {
        let mut label = welcome(Anchor::Center);
        label.rotate(-90.0);
        assert_eq!(label.angle(), 270.0);
        label.rotate(-270.0);
        refresh(&mut label);
        assert_eq!(label.angle(), 0.0);
        assert_eq!(label.image().size(), Vec2::new(25.0, 10.0));
    }

    // ── mutation ──────────────────────────────────────────────────────────

    #[test]
    fn set_text_rerenders_and_keeps_anchor() {
        let mut label = welcome(Anchor::Right);
        label.set_text("Hi", &BlockFont);
        assert_eq!(label.text(), "Hi");
        assert_eq!(label.rect(), Rect::new(90.0, 95.0, 10.0, 10.0));
    }

    #[test]
    fn set_text_keeps_pending_rotation() {
        let mut label = welcome(Anchor::TopLeft);
        label.rotate(90.0);
        refresh(&mut label);
        label.set_text("Hi", &BlockFont);
        refresh(&mut label);
        assert_eq!(label.image().size(), Vec2::new(10.0, 10.0));
        label.set_text("Hey", &BlockFont);
        refresh(&mut label);
        assert_eq!(label.image().size(), Vec2::new(10.0, 15.0));
    }

    #[test]
    fn set_position_and_anchor_move_rect() {
        let mut label = welcome(Anchor::TopLeft);
        label.set_position(Vec2::zero());
        assert_eq!(label.rect(), Rect::new(0.0, 0.0, 25.0, 10.0));
        label.set_anchor(Anchor::BottomRight);
        assert_eq!(label.rect(), Rect::new(-25.0, -10.0, 25.0, 10.0));
        assert_eq!(label.position(), Vec2::zero());
    }
}
