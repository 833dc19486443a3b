//! Color model shared between surfaces, text rasterization and UI.
//!
//! Colors are straight-alpha sRGB bytes. Untrusted channel values (user input,
//! parsed strings, float triples) go through [`IntoColor`], which validates
//! them before any drawable is produced.

pub mod color;

pub use color::{Color, ColorError, IntoColor};
