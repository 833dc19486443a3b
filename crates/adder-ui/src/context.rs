use std::time::Duration;

use adder_engine::coords::{Rect, Vec2};
use adder_engine::input::PointerState;
use adder_engine::paint::Color;
use adder_engine::surface::{Surface, SurfaceLoader, SurfaceSource};
use adder_engine::time::{Clock, MonotonicClock};

use crate::component::{Component, ComponentId, CursorStyle, RefreshCtx};
use crate::error::UiError;
use crate::event::{Command, Commands, ONCLICK, ONDOUBLECLICK};
use crate::registry::Registry;
use crate::widgets::button::DEFAULT_DEBOUNCE;

// ── Configuration ─────────────────────────────────────────────────────────

/// What the frame loop paints before any component.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Color(Color),
    /// Drawn at the top-left over black; not scaled.
    Image(Surface),
}

impl Background {
    /// Loads `source` scaled to `width` x `height`.
    ///
    /// A color source yields `Background::Color`.
    pub fn load(
        source: SurfaceSource,
        loader: &SurfaceLoader,
        width: u32,
        height: u32,
    ) -> Result<Self, UiError> {
        match source {
            SurfaceSource::Color(c) => Ok(Background::Color(c)),
            other => Ok(Background::Image(loader.load_fitted(other, width, height)?)),
        }
    }

    fn paint(&self, target: &mut Surface) {
        match self {
            Background::Color(c) => target.fill(*c),
            Background::Image(img) => {
                target.fill(Color::black());
                target.blit(img, 0, 0);
            }
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Background::Color(Color::black())
    }
}

/// What to do when a component's refresh fails.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ErrorPolicy {
    /// Stop the frame and return the error.
    #[default]
    Abort,
    /// Log the error, leave the component out of this frame and carry on.
    SkipComponent,
}

#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Activation spacing for buttons that do not set their own.
    pub debounce:     Duration,
    /// Maximum gap between two presses on the same component that counts as
    /// a double click.
    pub double_click: Duration,
    pub error_policy: ErrorPolicy,
    pub background:   Background,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            debounce:     DEFAULT_DEBOUNCE,
            double_click: Duration::from_millis(500),
            error_policy: ErrorPolicy::Abort,
            background:   Background::default(),
        }
    }
}

// ── FrameOutcome ──────────────────────────────────────────────────────────

/// A context menu visible in the frame just produced.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenMenu {
    pub owner:  ComponentId,
    /// Pointer position when the secondary button went down.
    pub origin: Vec2,
    pub bounds: Rect,
}

/// Interaction summary of one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameOutcome {
    pub hovered: Option<ComponentId>,
    pub cursor:  CursorStyle,
    pub menu:    Option<OpenMenu>,
    /// Components left out of this frame under `ErrorPolicy::SkipComponent`.
    pub skipped: Vec<ComponentId>,
}

// ── UiContext ─────────────────────────────────────────────────────────────

/// Owns the registry, background and interaction state of one UI.
///
/// Nothing here is global; several contexts can live side by side.
pub struct UiContext {
    registry:      Registry,
    config:        UiConfig,
    clock:         Box<dyn Clock>,
    commands:      Commands,
    primary_down:  bool,
    /// Component and time of the last primary press edge, for double clicks.
    last_press:    Option<(ComponentId, Duration)>,
    /// Owner and origin of the context menu held open by the secondary button.
    open_menu:     Option<(ComponentId, Vec2)>,
    exit_requested: bool,
}

impl UiContext {
    pub fn new(config: UiConfig, clock: impl Clock + 'static) -> Self {
        Self {
            registry: Registry::new(),
            config,
            clock: Box::new(clock),
            commands: Commands::default(),
            primary_down: false,
            last_press: None,
            open_menu: None,
            exit_requested: false,
        }
    }

    // ── Registry ──────────────────────────────────────────────────────────

    pub fn register<C: Component>(&mut self, component: C) -> Result<usize, UiError> {
        self.registry.register(Box::new(component))
    }

    pub fn register_boxed(&mut self, component: Box<dyn Component>) -> Result<usize, UiError> {
        self.registry.register(component)
    }

    pub fn deregister(&mut self, id: &str) -> Result<Box<dyn Component>, UiError> {
        self.registry.deregister(id)
    }

    #[inline]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[inline]
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub fn get_as<T: Component>(&self, id: &str) -> Option<&T> {
        self.registry.get_as(id)
    }

    pub fn get_as_mut<T: Component>(&mut self, id: &str) -> Option<&mut T> {
        self.registry.get_as_mut(id)
    }

    // ── Events and commands ───────────────────────────────────────────────

    /// Runs handler `name` of component `id` outside the frame loop.
    pub fn fire_event(&mut self, id: &str, name: &str) -> Result<(), UiError> {
        self.registry.lookup_event(id, name)?.call(&mut self.commands);
        Ok(())
    }

    /// Runs row `index` of the context menu owned by `id`.
    ///
    /// Returns `false` if `id` has no menu or the row does not exist.
    pub fn activate_menu_entry(&mut self, id: &str, index: usize) -> Result<bool, UiError> {
        let component = self
            .registry
            .get_mut(id)
            .ok_or_else(|| UiError::NotRegistered { id: ComponentId::new(id) })?;
        Ok(match component.context_menu_mut() {
            Some(menu) => menu.activate(index, &mut self.commands),
            None => false,
        })
    }

    /// Commands pushed by callbacks since the last call.
    pub fn take_commands(&mut self) -> Vec<Command> {
        self.commands.drain()
    }

    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    #[inline]
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    // ── Configuration ─────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn set_background(&mut self, background: Background) {
        self.config.background = background;
    }

    pub fn set_error_policy(&mut self, policy: ErrorPolicy) {
        self.config.error_policy = policy;
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    // ── Frame loop ────────────────────────────────────────────────────────

    /// Produces one frame into `target` for the given pointer snapshot.
    ///
    /// Paints the background, refreshes and composites every component in
    /// registry order, then resolves hover (first match wins), the cursor,
    /// the context menu and click events.
    pub fn run_frame(
        &mut self,
        target: &mut Surface,
        pointer: PointerState,
    ) -> Result<FrameOutcome, UiError> {
        let now = self.clock.now();
        let mut outcome = FrameOutcome::default();

        self.config.background.paint(target);

        let mut skipped = vec![false; self.registry.len()];
        for (index, component) in self.registry.iter_mut().enumerate() {
            let mut ctx = RefreshCtx {
                pointer,
                now,
                debounce: self.config.debounce,
                commands: &mut self.commands,
            };
            if let Err(e) = component.refresh(&mut ctx) {
                match self.config.error_policy {
                    ErrorPolicy::Abort => return Err(e),
                    ErrorPolicy::SkipComponent => {
                        log::warn!("skipping `{}` this frame: {e}", component.id());
                        skipped[index] = true;
                        outcome.skipped.push(component.id().clone());
                        continue;
                    }
                }
            }
            let (x, y) = component.rect().pixel_origin();
            target.blit(component.image(), x, y);
        }

        let hover = pointer.pos.and_then(|p| {
            self.registry
                .iter()
                .enumerate()
                .find(|(i, c)| !skipped[*i] && c.rect().contains(p))
                .map(|(i, _)| i)
        });

        let pressed = pointer.primary && !self.primary_down;
        self.primary_down = pointer.primary;

        let hovered_id = hover
            .and_then(|index| self.registry.iter().nth(index))
            .map(|c| c.id().clone());
        outcome.menu = self.update_menu(target, pointer, hovered_id.as_ref());

        let Some(index) = hover else {
            outcome.cursor = CursorStyle::Default;
            return Ok(outcome);
        };

        let Some(target_component) = self.registry.at_mut(index) else {
            return Ok(outcome);
        };
        let id = target_component.id().clone();

        outcome.cursor = target_component.cursor_hint().unwrap_or_default();

        if pressed {
            let double = self.last_press.as_ref().is_some_and(|(last_id, at)| {
                *last_id == id && now.saturating_sub(*at) <= self.config.double_click
            });

            target_component.events_mut().fire(ONCLICK, &mut self.commands);
            if double {
                log::trace!("double click on `{id}`");
                target_component.events_mut().fire(ONDOUBLECLICK, &mut self.commands);
                self.last_press = None;
            } else {
                self.last_press = Some((id.clone(), now));
            }
        }

        outcome.hovered = Some(id);
        Ok(outcome)
    }

    /// Opens, draws or closes the context menu for this frame.
    ///
    /// The menu opens where the secondary button went down over a component
    /// with entries, and stays at that origin while the button is held.
    /// Releasing it over an entry runs that entry.
    fn update_menu(
        &mut self,
        target: &mut Surface,
        pointer: PointerState,
        hovered: Option<&ComponentId>,
    ) -> Option<OpenMenu> {
        if !pointer.secondary {
            if let (Some((owner, origin)), Some(p)) = (self.open_menu.take(), pointer.pos) {
                let commands = &mut self.commands;
                let menu = self
                    .registry
                    .get_mut(owner.as_str())
                    .and_then(|c| c.context_menu_mut());
                if let Some(menu) = menu {
                    if let Some(index) = menu.entry_at(origin, p) {
                        menu.activate(index, commands);
                    }
                }
            }
            return None;
        }

        if self.open_menu.is_none() {
            if let (Some(id), Some(p)) = (hovered, pointer.pos) {
                let has_entries = self
                    .registry
                    .get(id.as_str())
                    .and_then(|c| c.context_menu())
                    .is_some_and(|m| !m.is_empty());
                if has_entries {
                    log::debug!("context menu of `{id}` open at {p:?}");
                    self.open_menu = Some((id.clone(), p));
                }
            }
        }

        let (owner, origin) = self.open_menu.clone()?;
        let Some(menu) = self.registry.get(owner.as_str()).and_then(|c| c.context_menu()) else {
            self.open_menu = None;
            return None;
        };
        let bounds = menu.draw(target, origin);
        Some(OpenMenu { owner, origin, bounds })
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new(UiConfig::default(), MonotonicClock::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    use adder_engine::coords::Anchor;
    use adder_engine::text::BlockFont;
    use adder_engine::time::ManualClock;

    use crate::event::EventTable;
    use crate::widgets::button::Button;
    use crate::widgets::label::Label;

    /// Component whose refresh always fails.
    struct Broken {
        id:     ComponentId,
        events: EventTable,
        image:  Surface,
    }

    impl Broken {
        fn new(id: &str) -> Self {
            Self { id: id.into(), events: EventTable::default(), image: Surface::filled(10, 10, Color::white()) }
        }
    }

    impl Component for Broken {
        fn id(&self) -> &ComponentId { &self.id }
        fn image(&self) -> &Surface { &self.image }
        fn rect(&self) -> Rect { Rect::new(0.0, 0.0, 10.0, 10.0) }
        fn anchor(&self) -> Anchor { Anchor::TopLeft }
        fn events(&self) -> &EventTable { &self.events }
        fn events_mut(&mut self) -> &mut EventTable { &mut self.events }
        fn refresh(&mut self, _ctx: &mut RefreshCtx<'_>) -> Result<(), UiError> {
            Err(UiError::UnsupportedSource("broken".into()))
        }
        fn as_any(&self) -> &dyn Any { self }
        fn as_any_mut(&mut self) -> &mut dyn Any { self }
    }

    fn context() -> (UiContext, ManualClock) {
        let clock = ManualClock::new();
        (UiContext::new(UiConfig::default(), clock.clone()), clock)
    }

    fn button(id: &str, x: f32) -> Button {
        Button::builder(id, "b", BlockFont::font(10.0))
            .position(Vec2::new(x, 0.0))
            .size(50, 50)
            .background(Color::rgb(0, 0, 255))
            .event(ONCLICK, {
                let id = id.to_string();
                move |out| out.push(format!("{id}:click"))
            })
            .event(ONDOUBLECLICK, {
                let id = id.to_string();
                move |out| out.push(format!("{id}:double"))
            })
            .build(&BlockFont)
            .unwrap()
    }

    fn names(ui: &mut UiContext) -> Vec<String> {
        ui.take_commands().iter().map(|c| c.name().to_string()).collect()
    }

    // ── compositing ───────────────────────────────────────────────────────

    #[test]
    fn background_then_components_in_order() {
        let (mut ui, _) = context();
        ui.set_background(Background::Color(Color::rgb(9, 9, 9)));
        ui.register(button("a", 0.0)).unwrap();
        let label = Label::builder("l", "x", BlockFont::font(10.0))
            .position(Vec2::new(25.0, 25.0))
            .background(Color::rgb(255, 0, 0))
            .build(&BlockFont)
            .unwrap();
        ui.register(label).unwrap();

        let mut frame = Surface::new(100, 100);
        ui.run_frame(&mut frame, PointerState::default()).unwrap();

        assert_eq!(frame.pixel(99, 99), Some(Color::rgb(9, 9, 9)));
        assert_eq!(frame.pixel(1, 1), Some(Color::rgb(0, 0, 255)));
        // The label was registered later, so it paints over the button.
        assert_eq!(frame.pixel(25, 25), Some(Color::rgb(255, 0, 0)));
    }

    #[test]
    fn image_background_is_drawn_over_black() {
        let (mut ui, _) = context();
        ui.set_background(Background::Image(Surface::filled(2, 2, Color::white())));
        let mut frame = Surface::new(4, 4);
        ui.run_frame(&mut frame, PointerState::default()).unwrap();
        assert_eq!(frame.pixel(1, 1), Some(Color::white()));
        assert_eq!(frame.pixel(3, 3), Some(Color::black()));
    }

    #[test]
    fn color_source_loads_as_color_background() {
        let bg = Background::load(
            SurfaceSource::parse("#102030").unwrap(),
            &SurfaceLoader::new(),
            10,
            10,
        )
        .unwrap();
        assert_eq!(bg, Background::Color(Color::rgb(16, 32, 48)));
    }

    // ── hover and cursor ──────────────────────────────────────────────────

    #[test]
    fn hover_resolves_to_first_registered() {
        let (mut ui, _) = context();
        ui.register(button("a", 0.0)).unwrap();
        ui.register(button("b", 25.0)).unwrap();

        let mut frame = Surface::new(100, 100);
        let out = ui.run_frame(&mut frame, PointerState::at(Vec2::new(30.0, 10.0))).unwrap();
        assert_eq!(out.hovered, Some(ComponentId::new("a")));
        assert_eq!(out.cursor, CursorStyle::Pointer);

        let out = ui.run_frame(&mut frame, PointerState::at(Vec2::new(60.0, 10.0))).unwrap();
        assert_eq!(out.hovered, Some(ComponentId::new("b")));
    }

    #[test]
    fn no_hover_forces_default_cursor() {
        let (mut ui, _) = context();
        ui.register(button("a", 0.0)).unwrap();
        let mut frame = Surface::new(100, 100);
        let out = ui.run_frame(&mut frame, PointerState::at(Vec2::new(90.0, 90.0))).unwrap();
        assert_eq!(out.hovered, None);
        assert_eq!(out.cursor, CursorStyle::Default);

        let out = ui.run_frame(&mut frame, PointerState::default()).unwrap();
        assert_eq!(out.cursor, CursorStyle::Default);
    }

    #[test]
    fn labels_hover_with_default_cursor() {
        let (mut ui, _) = context();
        let label = Label::builder("l", "xx", BlockFont::font(10.0)).build(&BlockFont).unwrap();
        ui.register(label).unwrap();
        let mut frame = Surface::new(100, 100);
        let out = ui.run_frame(&mut frame, PointerState::at(Vec2::new(1.0, 1.0))).unwrap();
        assert_eq!(out.hovered, Some(ComponentId::new("l")));
        assert_eq!(out.cursor, CursorStyle::Default);
    }

    // ── context menu ──────────────────────────────────────────────────────

    #[test]
    fn secondary_button_opens_menu_at_pointer() {
        let (mut ui, _) = context();
        let b = Button::builder("m", "m", BlockFont::font(10.0))
            .size(50, 50)
            .menu_entry("Reset", |out| out.push("reset"))
            .build(&BlockFont)
            .unwrap();
        ui.register(b).unwrap();

        let mut frame = Surface::new(200, 200);
        let out = ui
            .run_frame(&mut frame, PointerState::at(Vec2::new(20.0, 30.0)))
            .unwrap();
        assert!(out.menu.is_none());

        let out = ui
            .run_frame(&mut frame, PointerState::at(Vec2::new(20.0, 30.0)).with_secondary(true))
            .unwrap();
        let menu = out.menu.unwrap();
        assert_eq!(menu.owner, "m");
        assert_eq!(menu.origin, Vec2::new(20.0, 30.0));
        assert_eq!(frame.pixel(20, 30), Some(crate::context_menu::ContextMenu::DEFAULT_BG));

        assert!(ui.activate_menu_entry("m", 0).unwrap());
        assert_eq!(names(&mut ui), ["reset"]);
    }

    fn menu_button() -> Button {
        Button::builder("m", "m", BlockFont::font(10.0))
            .size(50, 50)
            .menu_entry("Reset", |out| out.push("reset"))
            .menu_entry("Quit", |out| out.push("quit"))
            .build(&BlockFont)
            .unwrap()
    }

    #[test]
    fn releasing_secondary_over_entry_runs_it() {
        let (mut ui, _) = context();
        ui.register(menu_button()).unwrap();
        let mut frame = Surface::new(200, 200);

        ui.run_frame(&mut frame, PointerState::at(Vec2::new(20.0, 30.0)).with_secondary(true))
            .unwrap();

        // Second row spans y 48..66; the menu stays where it opened.
        let over_quit = PointerState::at(Vec2::new(25.0, 52.0));
        let out = ui.run_frame(&mut frame, over_quit.with_secondary(true)).unwrap();
        assert_eq!(out.menu.unwrap().origin, Vec2::new(20.0, 30.0));
        assert!(names(&mut ui).is_empty());

        let out = ui.run_frame(&mut frame, over_quit).unwrap();
        assert!(out.menu.is_none());
        assert_eq!(names(&mut ui), ["quit"]);
    }

    #[test]
    fn releasing_secondary_off_menu_just_closes_it() {
        let (mut ui, _) = context();
        ui.register(menu_button()).unwrap();
        let mut frame = Surface::new(200, 200);

        ui.run_frame(&mut frame, PointerState::at(Vec2::new(20.0, 30.0)).with_secondary(true))
            .unwrap();
        let out = ui.run_frame(&mut frame, PointerState::at(Vec2::new(150.0, 150.0))).unwrap();
        assert!(out.menu.is_none());
        assert!(names(&mut ui).is_empty());

        let out = ui.run_frame(&mut frame, PointerState::at(Vec2::new(25.0, 35.0))).unwrap();
        assert!(out.menu.is_none());
        assert!(names(&mut ui).is_empty());
    }

    #[test]
    fn menu_closes_when_owner_is_deregistered() {
        let (mut ui, _) = context();
        ui.register(menu_button()).unwrap();
        let mut frame = Surface::new(200, 200);
        let held = PointerState::at(Vec2::new(20.0, 30.0)).with_secondary(true);

        assert!(ui.run_frame(&mut frame, held).unwrap().menu.is_some());
        ui.deregister("m").unwrap();
        assert!(ui.run_frame(&mut frame, held).unwrap().menu.is_none());
        ui.run_frame(&mut frame, PointerState::at(Vec2::new(25.0, 35.0))).unwrap();
        assert!(names(&mut ui).is_empty());
    }

    #[test]
    fn no_menu_without_entries() {
        let (mut ui, _) = context();
        ui.register(button("a", 0.0)).unwrap();
        let mut frame = Surface::new(100, 100);
        let out = ui
            .run_frame(&mut frame, PointerState::at(Vec2::new(10.0, 10.0)).with_secondary(true))
            .unwrap();
        assert!(out.menu.is_none());
        assert!(!ui.activate_menu_entry("a", 0).unwrap());
    }

    // ── click events ──────────────────────────────────────────────────────

    #[test]
    fn onclick_fires_on_press_edge_only() {
        let (mut ui, clock) = context();
        ui.register(button("a", 0.0)).unwrap();
        let mut frame = Surface::new(100, 100);
        let held = PointerState::at(Vec2::new(10.0, 10.0)).with_primary(true);

        ui.run_frame(&mut frame, held).unwrap();
        clock.set_millis(1000);
        ui.run_frame(&mut frame, held).unwrap();
        assert_eq!(names(&mut ui), ["a:click"]);
    }

    #[test]
    fn second_press_within_window_is_a_double_click() {
        let (mut ui, clock) = context();
        ui.register(button("a", 0.0)).unwrap();
        let mut frame = Surface::new(100, 100);
        let up = PointerState::at(Vec2::new(10.0, 10.0));
        let down = up.with_primary(true);

        ui.run_frame(&mut frame, down).unwrap();
        clock.set_millis(100);
        ui.run_frame(&mut frame, up).unwrap();
        clock.set_millis(300);
        ui.run_frame(&mut frame, down).unwrap();
        assert_eq!(names(&mut ui), ["a:click", "a:click", "a:double"]);

        // Too slow: two single clicks.
        clock.set_millis(400);
        ui.run_frame(&mut frame, up).unwrap();
        clock.set_millis(500);
        ui.run_frame(&mut frame, down).unwrap();
        clock.set_millis(600);
        ui.run_frame(&mut frame, up).unwrap();
        clock.set_millis(1200);
        ui.run_frame(&mut frame, down).unwrap();
        assert_eq!(names(&mut ui), ["a:click", "a:click"]);
    }

    #[test]
    fn presses_on_different_components_are_not_double_clicks() {
        let (mut ui, clock) = context();
        ui.register(button("a", 0.0)).unwrap();
        ui.register(button("b", 50.0)).unwrap();
        let mut frame = Surface::new(100, 100);

        ui.run_frame(&mut frame, PointerState::at(Vec2::new(10.0, 10.0)).with_primary(true)).unwrap();
        clock.set_millis(50);
        ui.run_frame(&mut frame, PointerState::at(Vec2::new(60.0, 10.0))).unwrap();
        clock.set_millis(100);
        ui.run_frame(&mut frame, PointerState::at(Vec2::new(60.0, 10.0)).with_primary(true)).unwrap();
        assert_eq!(names(&mut ui), ["a:click", "b:click"]);
    }

    #[test]
    fn fire_event_reports_unknown_names() {
        let (mut ui, _) = context();
        ui.register(button("a", 0.0)).unwrap();
        ui.fire_event("a", ONDOUBLECLICK).unwrap();
        assert_eq!(names(&mut ui), ["a:double"]);
        assert!(matches!(ui.fire_event("a", "onpaste"), Err(UiError::UnknownEvent { .. })));
    }

    // ── error policy ──────────────────────────────────────────────────────

    #[test]
    fn refresh_errors_abort_by_default() {
        let (mut ui, _) = context();
        ui.register(Broken::new("x")).unwrap();
        let mut frame = Surface::new(20, 20);
        assert!(matches!(
            ui.run_frame(&mut frame, PointerState::default()),
            Err(UiError::UnsupportedSource(_))
        ));
    }

    #[test]
    fn skip_policy_leaves_failing_component_out() {
        let (mut ui, _) = context();
        ui.set_error_policy(ErrorPolicy::SkipComponent);
        ui.register(Broken::new("x")).unwrap();
        let label = Label::builder("l", "x", BlockFont::font(10.0))
            .position(Vec2::new(10.0, 10.0))
            .background(Color::rgb(255, 0, 0))
            .build(&BlockFont)
            .unwrap();
        ui.register(label).unwrap();

        let mut frame = Surface::new(20, 20);
        let out = ui.run_frame(&mut frame, PointerState::at(Vec2::new(5.0, 5.0))).unwrap();
        assert_eq!(out.skipped, [ComponentId::new("x")]);
        assert_eq!(out.hovered, None);
        // Broken was never composited; the label was.
        assert_eq!(frame.pixel(5, 5), Some(Color::black()));
        assert_eq!(frame.pixel(10, 10), Some(Color::rgb(255, 0, 0)));
    }

    #[test]
    fn exit_flag_round_trips() {
        let (mut ui, _) = context();
        assert!(!ui.exit_requested());
        ui.request_exit();
        assert!(ui.exit_requested());
    }
}
