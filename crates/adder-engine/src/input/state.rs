use std::collections::HashSet;

use crate::coords::Vec2;

use super::frame::InputFrame;
use super::types::{InputEvent, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent};

/// Pointer snapshot polled once per tick by the UI frame loop.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PointerState {
    /// `None` while the pointer is outside the window.
    pub pos: Option<Vec2>,
    /// Primary (left) button held.
    pub primary: bool,
    /// Secondary (right) button held.
    pub secondary: bool,
}

impl PointerState {
    /// Pointer at `pos` with no buttons held.
    pub fn at(pos: impl Into<Vec2>) -> Self {
        Self { pos: Some(pos.into()), primary: false, secondary: false }
    }

    pub fn with_primary(mut self, held: bool) -> Self {
        self.primary = held;
        self
    }

    pub fn with_secondary(mut self, held: bool) -> Self {
        self.secondary = held;
        self
    }
}

/// Current input state for a single window.
///
/// Holds "is down" information and current pointer position.
/// Close requests are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Pointer position in physical pixels.
    pub pointer_pos: Option<(f32, f32)>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state. Close requests go to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(false) => {
                // Avoid stuck buttons when focus changes mid-press.
                self.buttons_down.clear();
            }

            InputEvent::Focused(true) => {}

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y }) => {
                self.pointer_pos = Some((*x, *y));

                match state {
                    MouseButtonState::Pressed => {
                        self.buttons_down.insert(*button);
                    }
                    MouseButtonState::Released => {
                        self.buttons_down.remove(button);
                    }
                }
            }

            InputEvent::CloseRequested => {
                frame.close_requested = true;
            }
        }
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }

    /// Snapshot consumed by the UI frame loop.
    pub fn pointer(&self) -> PointerState {
        PointerState {
            pos: self.pointer_pos.map(Vec2::from),
            primary: self.button_down(MouseButton::Left),
            secondary: self.button_down(MouseButton::Right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(button: MouseButton, state: MouseButtonState) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent { button, state, x: 150.0, y: 225.0 })
    }

    #[test]
    fn button_press_and_release_update_pointer() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(MouseButton::Left, MouseButtonState::Pressed));
        assert_eq!(
            state.pointer(),
            PointerState::at(Vec2::new(150.0, 225.0)).with_primary(true)
        );
        assert!(!frame.close_requested);

        state.apply_event(&mut frame, press(MouseButton::Left, MouseButtonState::Released));
        assert!(!state.pointer().primary);
    }

    #[test]
    fn repeated_press_keeps_button_held() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, press(MouseButton::Right, MouseButtonState::Pressed));
        state.apply_event(&mut frame, press(MouseButton::Right, MouseButtonState::Pressed));
        assert!(state.pointer().secondary);
        state.apply_event(&mut frame, press(MouseButton::Right, MouseButtonState::Released));
        assert!(!state.pointer().secondary);
    }

    #[test]
    fn focus_loss_releases_buttons_and_leave_clears_pointer() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, press(MouseButton::Left, MouseButtonState::Pressed));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(state.pointer(), PointerState::default());
    }

    #[test]
    fn close_request_is_flagged_for_the_frame() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, InputEvent::CloseRequested);
        assert!(frame.close_requested);
        frame.clear();
        assert!(!frame.close_requested);
    }
}
