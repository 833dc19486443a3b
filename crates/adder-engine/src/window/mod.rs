//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and windows, and wires them to the software
//! presenter.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
pub use winit::window::CursorIcon;
