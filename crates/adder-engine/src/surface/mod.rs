//! Software surfaces.
//!
//! A [`Surface`] is an owned RGBA bitmap. Components hold one as their image,
//! the frame loop composites them onto a target surface, and the runtime
//! presents the target through softbuffer.
//!
//! [`SurfaceLoader`] is the surface provider: it turns colors, image files,
//! raw bytes and (through an injected [`Fetch`] implementation) network
//! references into surfaces.

mod bitmap;
mod source;

pub use bitmap::Surface;
pub use source::{Fetch, SurfaceError, SurfaceLoader, SurfaceSource};
