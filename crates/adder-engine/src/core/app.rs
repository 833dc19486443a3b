use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called once per tick per window. The runtime presents `ctx.frame`
    /// after this returns.
    ///
    /// A close request is only reported through `ctx.input_frame`; the
    /// window stays open until this returns `AppControl::Exit`.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;

    /// Error that made the app return `AppControl::Exit`, if any.
    ///
    /// Queried once after the event loop stops; `Runtime::run` returns it.
    fn take_error(&mut self) -> Option<anyhow::Error> {
        None
    }
}
