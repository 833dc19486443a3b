use std::collections::HashMap;

use anyhow::Context as _;
use winit::dpi::LogicalSize;

use adder_engine::core::{App as EngineApp, AppControl, FrameCtx};
use adder_engine::input::{InputFrame, InputState};
use adder_engine::surface::Surface;
use adder_engine::text::{BlockFont, FontId, FontRef, FontSystem, TextRasterizer};
use adder_engine::time::MonotonicClock;
use adder_engine::window::{Runtime, RuntimeConfig};

use crate::component::CursorStyle;
use crate::context::{UiConfig, UiContext};
use crate::error::UiError;

type CommandHandler = Box<dyn FnMut(&mut UiContext, &Fonts)>;

// ── Fonts ─────────────────────────────────────────────────────────────────

/// Text rasterizer handed to the setup closure of [`Application::run`].
///
/// Falls back to [`BlockFont`] when no font was registered or the bytes did
/// not load, so an app always has something to render text with.
pub struct Fonts {
    system:  FontSystem,
    default: Option<FontId>,
}

impl Fonts {
    fn load(bytes: Option<&[u8]>) -> Self {
        let mut system = FontSystem::new();
        let default = match bytes {
            Some(b) if !b.is_empty() => match system.load_font(b) {
                Ok(id) => Some(id),
                Err(e) => {
                    log::warn!("{e}; falling back to block glyphs");
                    None
                }
            },
            _ => {
                log::warn!("no font registered; falling back to block glyphs");
                None
            }
        };
        Self { system, default }
    }

    /// The default font at `size` pixels.
    pub fn sized(&self, size: f32) -> FontRef {
        match self.default {
            Some(id) => FontRef::new(id, size),
            None => BlockFont::font(size),
        }
    }

    pub fn rasterizer(&self) -> &dyn TextRasterizer {
        match self.default {
            Some(_) => &self.system,
            None => &BlockFont,
        }
    }
}

// ── Application ───────────────────────────────────────────────────────────

/// Window-backed run loop around a [`UiContext`].
///
/// Callbacks push named commands; handlers registered with
/// [`on_command`](Self::on_command) run after each frame with mutable access
/// to the context and the loaded fonts.
///
/// ```rust,ignore
/// Application::new()
///     .title("adder")
///     .size(640.0, 480.0)
///     .font(load_font())
///     .on_command("quit", |ui, _| ui.request_exit())
///     .run(|ui, fonts| {
///         let quit = Button::builder("quit", "Quit", fonts.sized(30.0))
///             .on_click(|out| out.push("quit"))
///             .build(fonts.rasterizer())?;
///         ui.register(quit)?;
///         Ok(())
///     })
/// ```
pub struct Application {
    title:    String,
    width:    f64,
    height:   f64,
    fps:      u32,
    font:     Option<Vec<u8>>,
    config:   UiConfig,
    handlers: HashMap<String, CommandHandler>,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title:    "adder".to_string(),
            width:    640.0,
            height:   480.0,
            fps:      60,
            font:     None,
            config:   UiConfig::default(),
            handlers: HashMap::new(),
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Frame rate cap; `0` redraws continuously.
    pub fn fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// TTF/OTF bytes of the default font.
    pub fn font(mut self, data: Vec<u8>) -> Self {
        self.font = Some(data);
        self
    }

    pub fn config(mut self, config: UiConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a handler for commands named `name`.
    pub fn on_command(
        mut self,
        name: impl Into<String>,
        f: impl FnMut(&mut UiContext, &Fonts) + 'static,
    ) -> Self {
        self.handlers.insert(name.into(), Box::new(f));
        self
    }

    /// Builds the UI with `setup`, then runs the event loop until the window
    /// closes or a handler calls [`UiContext::request_exit`].
    pub fn run<F>(self, setup: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut UiContext, &Fonts) -> Result<(), UiError>,
    {
        let fonts = Fonts::load(self.font.as_deref());
        let mut ui = UiContext::new(self.config, MonotonicClock::new());
        setup(&mut ui, &fonts).context("UI setup failed")?;

        log::info!("starting with {} components", ui.registry().len());

        let config = RuntimeConfig {
            title:        self.title,
            initial_size: LogicalSize::new(self.width, self.height),
            target_fps:   self.fps,
        };
        let state = UiAppState { ui, fonts, handlers: self.handlers, failure: None };
        Runtime::run(config, state)
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── UiAppState ────────────────────────────────────────────────────────────

/// Implements `adder_engine::core::App`; user code never sees it.
struct UiAppState {
    ui:       UiContext,
    fonts:    Fonts,
    handlers: HashMap<String, CommandHandler>,
    failure:  Option<UiError>,
}

impl UiAppState {
    fn dispatch_commands(&mut self) {
        for command in self.ui.take_commands() {
            match self.handlers.get_mut(command.name()) {
                Some(handler) => handler(&mut self.ui, &self.fonts),
                None => log::debug!("no handler for command `{}`", command.name()),
            }
        }
    }

    /// Runs one UI frame into `frame` and returns whether to keep going,
    /// along with the cursor to show.
    fn step(
        &mut self,
        frame: &mut Surface,
        input: &InputState,
        input_frame: &InputFrame,
    ) -> (AppControl, CursorStyle) {
        if input_frame.close_requested {
            log::info!("close requested");
            return (AppControl::Exit, CursorStyle::Default);
        }

        let cursor = match self.ui.run_frame(frame, input.pointer()) {
            Ok(outcome) => outcome.cursor,
            Err(e) => {
                log::error!("frame aborted: {e}");
                self.failure = Some(e);
                return (AppControl::Exit, CursorStyle::Default);
            }
        };

        self.dispatch_commands();

        if self.ui.exit_requested() {
            (AppControl::Exit, cursor)
        } else {
            (AppControl::Continue, cursor)
        }
    }
}

impl EngineApp for UiAppState {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        let (control, cursor) = self.step(ctx.frame, ctx.input, ctx.input_frame);
        ctx.window.set_cursor(cursor.into());
        control
    }

    fn take_error(&mut self) -> Option<anyhow::Error> {
        self.failure.take().map(anyhow::Error::from)
    }
}
