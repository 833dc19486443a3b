use winit::window::{CursorIcon, Window};

use crate::input::{InputFrame, InputState};
use crate::surface::Surface;

/// Per-window handles.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Sets the mouse cursor shape for this window.
    ///
    /// Call each frame to keep the cursor updated.
    pub fn set_cursor(&self, cursor: CursorIcon) {
        self.window.set_cursor(cursor);
    }
}

/// Per-frame context passed to `core::App::on_frame`.
pub struct FrameCtx<'a> {
    pub window:      WindowCtx<'a>,
    /// Target surface, sized to the window. Presented after `on_frame` returns.
    pub frame:       &'a mut Surface,
    pub input:       &'a InputState,
    pub input_frame: &'a InputFrame,
}
