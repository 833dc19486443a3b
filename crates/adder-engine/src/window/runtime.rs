use anyhow::{Context, Result};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::Presenter;
use crate::input::platform::winit::translate_window_event;
use crate::input::{InputFrame, InputState};
use crate::surface::Surface;
use crate::time::FrameClock;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Frames per second; `0` redraws continuously.
    pub target_fps: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "adder".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            target_fps: 60,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    pub fn run<A>(initial: RuntimeConfig, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(initial, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take().or_else(|| state.app.take_error()) {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

struct WindowEntry {
    window: Rc<Window>,
    presenter: Presenter,
    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,
    frame: Surface,
}

impl WindowEntry {
    /// Reallocates the frame surface when the presenter size changed.
    fn sync_frame_size(&mut self) {
        let (w, h) = self.presenter.size();
        if self.frame.width() != w || self.frame.height() != h {
            self.frame = Surface::new(w, h);
        }
    }
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    initial: RuntimeConfig,
    app: A,

    windows: HashMap<WindowId, WindowEntry>,
    exit_requested: bool,
    failure: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(initial: RuntimeConfig, app: A) -> Self {
        Self {
            initial,
            app,
            windows: HashMap::new(),
            exit_requested: false,
            failure: None,
        }
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{error:#}");
        self.failure.get_or_insert(error);
        self.request_exit();
        event_loop.exit();
    }

    fn create_window_entry(
        &mut self,
        event_loop: &ActiveEventLoop,
        config: RuntimeConfig,
    ) -> Result<WindowId> {
        let attrs = Window::default_attributes()
            .with_title(config.title)
            .with_inner_size(config.initial_size);

        let window = Rc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let id = window.id();
        let presenter = Presenter::new(window.clone())?;
        let (w, h) = presenter.size();

        log::info!("window {id:?} created at {w}x{h}");

        self.windows.insert(
            id,
            WindowEntry {
                window,
                presenter,
                input_state: InputState::default(),
                input_frame: InputFrame::default(),
                clock: FrameClock::new().with_target_fps(config.target_fps),
                frame: Surface::new(w, h),
            },
        );
        Ok(id)
    }

    /// Runs one frame for `window_id`: app callback, then present.
    fn redraw(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId) {
        let Some(entry) = self.windows.get_mut(&window_id) else {
            return;
        };

        entry.sync_frame_size();
        entry.clock.tick();

        let control = {
            let mut ctx = FrameCtx {
                window: WindowCtx {
                    window: &entry.window,
                },
                frame: &mut entry.frame,
                input: &entry.input_state,
                input_frame: &entry.input_frame,
            };
            self.app.on_frame(&mut ctx)
        };

        // Per-frame deltas are consumed by exactly one frame.
        entry.input_frame.clear();

        if let Err(e) = entry.presenter.present(&entry.frame) {
            self.fail(event_loop, e);
            return;
        }

        if control == AppControl::Exit {
            log::debug!("window {window_id:?} asked to exit");
            self.request_exit();
            event_loop.exit();
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if !self.windows.is_empty() {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop, self.initial.clone()) {
            self.fail(event_loop, e.context("failed to create initial window"));
            return;
        }

        for entry in self.windows.values() {
            entry.window.request_redraw();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let now = Instant::now();
        let mut wake: Option<Instant> = None;

        for entry in self.windows.values() {
            if entry.clock.is_due(now) {
                entry.window.request_redraw();
            } else if let Some(deadline) = entry.clock.next_deadline() {
                wake = Some(wake.map_or(deadline, |w| w.min(deadline)));
            }
        }

        event_loop.set_control_flow(match wake {
            Some(deadline) => ControlFlow::WaitUntil(deadline),
            None => ControlFlow::Wait,
        });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(entry) = self.windows.get_mut(&window_id) else {
            return;
        };

        if let Some(ev) = translate_window_event(&entry.input_state, &event) {
            entry.input_state.apply_event(&mut entry.input_frame, ev);
        }

        match &event {
            // The app sees the request in its next frame and decides.
            WindowEvent::CloseRequested => entry.window.request_redraw(),

            WindowEvent::Resized(size) => {
                let (w, h) = (size.width, size.height);
                if let Some(entry) = self.windows.get_mut(&window_id) {
                    if let Err(e) = entry.presenter.resize(w, h) {
                        self.fail(event_loop, e);
                        return;
                    }
                    entry.window.request_redraw();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.windows.get_mut(&window_id) {
                    let size = entry.window.inner_size();
                    if let Err(e) = entry.presenter.resize(size.width, size.height) {
                        self.fail(event_loop, e);
                        return;
                    }
                    entry.window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop, window_id),

            _ => {}
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }
}
