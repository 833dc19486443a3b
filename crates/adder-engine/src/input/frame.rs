/// Per-frame input deltas.
///
/// `InputState` provides the current state (held buttons, pointer position).
/// `InputFrame` carries what only lasts until the next frame is drawn.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// A close request arrived since the last frame.
    pub close_requested: bool,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.close_requested = false;
    }
}
