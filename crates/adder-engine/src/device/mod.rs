//! Presentation of software frames.
//!
//! This module is responsible for:
//! - creating the softbuffer context/surface for a window
//! - keeping the buffer size in sync with the window
//! - copying composited frames into the window buffer

mod presenter;

pub use presenter::Presenter;
