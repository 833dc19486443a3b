//! Adder engine crate.
//!
//! Platform runtime, software compositing and text rasterization used by the
//! retained-mode UI layer in `adder-ui`.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod surface;
pub mod text;
