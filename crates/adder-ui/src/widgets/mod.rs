//! Built-in components.

pub mod button;
pub mod label;
