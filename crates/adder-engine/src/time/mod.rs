//! Time subsystem.
//!
//! - [`Clock`] is the monotonic timestamp source consumed by the UI layer
//!   (button debounce, double-click detection).
//! - [`FrameClock`] paces redraws for the runtime.

mod clock;
mod frame_clock;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use frame_clock::FrameClock;
