use thiserror::Error;

use adder_engine::paint::ColorError;
use adder_engine::surface::SurfaceError;
use adder_engine::text::FontLoadError;

use crate::component::ComponentId;

/// Errors raised by the component layer.
///
/// All of them are precondition violations detected synchronously at the
/// call that caused them; nothing is retried.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("invalid color: {0}")]
    InvalidColor(#[from] ColorError),

    #[error("unsupported image source: {0}")]
    UnsupportedSource(String),

    #[error("image source failed: {0}")]
    Surface(#[source] SurfaceError),

    #[error("component `{id}` is already registered at index {index}")]
    DuplicateRegistration { id: ComponentId, index: usize },

    #[error("component `{id}` is not registered")]
    NotRegistered { id: ComponentId },

    #[error("component `{id}` has no event `{name}`")]
    UnknownEvent { id: ComponentId, name: String },

    #[error("font: {0}")]
    Font(#[from] FontLoadError),
}

impl From<SurfaceError> for UiError {
    fn from(e: SurfaceError) -> Self {
        match e {
            SurfaceError::Unsupported(what) => UiError::UnsupportedSource(what),
            SurfaceError::ColorRange(c) => UiError::InvalidColor(c),
            other => UiError::Surface(other),
        }
    }
}
