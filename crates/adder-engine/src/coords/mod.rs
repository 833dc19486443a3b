//! Coordinate and geometry types shared by surfaces, components and input.
//!
//! Canonical CPU space:
//! - Logical pixels (one logical pixel = one surface pixel)
//! - Origin top-left
//! - +X right, +Y down

mod anchor;
mod rect;
mod vec2;

pub use anchor::Anchor;
pub use rect::Rect;
pub use vec2::Vec2;
