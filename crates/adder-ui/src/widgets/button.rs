use std::any::Any;
use std::time::Duration;

use adder_engine::coords::{Anchor, Rect, Vec2};
use adder_engine::paint::{Color, ColorError, IntoColor};
use adder_engine::surface::Surface;
use adder_engine::text::{FontRef, TextRasterizer};

use crate::component::{Component, ComponentId, CursorStyle, Placement, RefreshCtx};
use crate::context_menu::ContextMenu;
use crate::error::UiError;
use crate::event::{Callback, Commands, EventTable};

/// Default activation spacing while the primary button is held.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

/// A filled rectangle with centered text that fires a click callback while
/// the primary button is held over it.
///
/// Activation is level-triggered: holding the button down re-fires once per
/// debounce window. A button that has never fired is due at once, whatever
/// the clock reads. After that, a press exactly one window after the last
/// activation fires (the comparison is `elapsed >= window`).
///
/// # Example
/// ```rust,ignore
/// let start = Button::builder("btn1", "Start", font)
///     .position(Vec2::new(100.0, 200.0))
///     .size(200, 75)
///     .background((34u8, 177, 76))
///     .on_click(|out| out.push("spin"))
///     .menu_entry("Reset", |out| out.push("reset"))
///     .build(&fonts)?;
/// ```
#[derive(Debug)]
pub struct Button {
    id:              ComponentId,
    events:          EventTable,
    text:            String,
    image:           Surface,
    placement:       Placement,
    on_click:        Callback,
    /// Overrides the frame loop's default window when set.
    debounce:        Option<Duration>,
    last_activation: Option<Duration>,
    menu:            Option<ContextMenu>,
    cursor:          CursorStyle,
}

impl Button {
    pub fn builder(id: impl Into<ComponentId>, text: impl Into<String>, font: FontRef) -> ButtonBuilder {
        ButtonBuilder {
            id:           id.into(),
            text:         text.into(),
            font,
            position:     Vec2::zero(),
            size:         (120, 40),
            anchor:       Anchor::TopLeft,
            fg:           Ok(Color::white()),
            bg:           Ok(Color::rgb(64, 64, 64)),
            on_click:     Callback::noop(),
            menu_entries: Vec::new(),
            events:       Vec::new(),
            debounce:     None,
            cursor:       CursorStyle::Pointer,
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Clock reading of the last activation, if any.
    #[inline]
    pub fn last_activation(&self) -> Option<Duration> {
        self.last_activation
    }

    pub fn set_position(&mut self, position: impl Into<Vec2>) {
        self.placement.move_to(position.into());
    }

    fn is_due(&self, now: Duration, default_window: Duration) -> bool {
        let window = self.debounce.unwrap_or(default_window);
        self.last_activation
            .is_none_or(|last| now.saturating_sub(last) >= window)
    }
}

impl Component for Button {
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

    fn refresh(&mut self, ctx: &mut RefreshCtx<'_>) -> Result<(), UiError> {
        self.placement.fit(self.image.size());

        let Some(pos) = ctx.pointer.pos else {
            return Ok(());
        };

        if ctx.pointer.primary
            && self.placement.rect().contains(pos)
            && self.is_due(ctx.now, ctx.debounce)
        {
            log::trace!("button `{}` activated at {:?}", self.id, ctx.now);
            self.last_activation = Some(ctx.now);
            self.on_click.call(ctx.commands);
        }
        Ok(())
    }

    fn cursor_hint(&self) -> Option<CursorStyle> {
        Some(self.cursor)
    }

    fn context_menu(&self) -> Option<&ContextMenu> {
        self.menu.as_ref()
    }

    fn context_menu_mut(&mut self) -> Option<&mut ContextMenu> {
        self.menu.as_mut()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ── ButtonBuilder ─────────────────────────────────────────────────────────

/// Builder returned by [`Button::builder`].
pub struct ButtonBuilder {
    id:           ComponentId,
    text:         String,
    font:         FontRef,
    position:     Vec2,
    size:         (u32, u32),
    anchor:       Anchor,
    fg:           Result<Color, ColorError>,
    bg:           Result<Color, ColorError>,
    on_click:     Callback,
    menu_entries: Vec<(String, Callback)>,
    events:       Vec<(String, Callback)>,
    debounce:     Option<Duration>,
    cursor:       CursorStyle,
}

impl ButtonBuilder {
    pub fn position(mut self, position: impl Into<Vec2>) -> Self {
        self.position = position.into();
        self
    }

    /// Fixed size in pixels; text is centered and clipped to it.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
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
        self.bg = color.into_color();
        self
    }

    /// Callback fired on each activation.
    pub fn on_click(mut self, f: impl FnMut(&mut Commands) + 'static) -> Self {
        self.on_click = Callback::new(f);
        self
    }

    /// Appends a context-menu row.
    pub fn menu_entry(mut self, label: impl Into<String>, f: impl FnMut(&mut Commands) + 'static) -> Self {
        self.menu_entries.push((label.into(), Callback::new(f)));
        self
    }

    /// Binds `f` to the event `name` (e.g. `"ondoubleclick"`).
    pub fn event(mut self, name: impl Into<String>, f: impl FnMut(&mut Commands) + 'static) -> Self {
        self.events.push((name.into(), Callback::new(f)));
        self
    }

    pub fn debounce(mut self, window: Duration) -> Self {
        self.debounce = Some(window);
        self
    }

    pub fn cursor(mut self, cursor: CursorStyle) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn build(self, rasterizer: &dyn TextRasterizer) -> Result<Button, UiError> {
        let fg = self.fg?;
        let bg = self.bg?;

        let (w, h) = self.size;
        let mut image = Surface::filled(w, h, bg);
        let label = rasterizer.render_text(&self.text, self.font, fg, None);
        let x = (w as i64 - label.width() as i64) / 2;
        let y = (h as i64 - label.height() as i64) / 2;
        image.blit(&label, x as i32, y as i32);

        let menu = (!self.menu_entries.is_empty()).then(|| {
            ContextMenu::build(
                self.menu_entries,
                rasterizer,
                self.font,
                ContextMenu::DEFAULT_FG,
                ContextMenu::DEFAULT_BG,
            )
        });

        let placement = Placement::new(self.position, self.anchor, image.size());

        Ok(Button {
            id: self.id,
            events: EventTable::new(self.events),
            text: self.text,
            image,
            placement,
            on_click: self.on_click,
            debounce: self.debounce,
            last_activation: None,
            menu,
            cursor: self.cursor,
        })
    }
}
