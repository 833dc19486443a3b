//! Adder UI: retained components on top of `adder-engine`.
//!
//! Components (labels, buttons, or your own [`Component`] impls) are built
//! once, registered with a [`UiContext`], and then refreshed, composited and
//! hit-tested every frame by [`UiContext::run_frame`].
//!
//! # Quick start
//!
//! ```rust,ignore
//! use adder_ui::prelude::*;
//!
//! Application::new()
//!     .title("adder")
//!     .on_command("quit", |ui, _| ui.request_exit())
//!     .run(|ui, fonts| {
//!         let quit = Button::builder("quit", "Quit", fonts.sized(30.0))
//!             .position(Vec2::new(320.0, 200.0))
//!             .size(200, 75)
//!             .on_click(|out| out.push("quit"))
//!             .build(fonts.rasterizer())?;
//!         ui.register(quit)?;
//!         Ok(())
//!     })
//! ```
//!
//! # Headless frames
//!
//! [`UiContext`] does not need a window: give it a [`ManualClock`] and render
//! into any [`Surface`] with a [`BlockFont`]. The integration tests do exactly
//! that.
//!
//! [`ManualClock`]: adder_engine::time::ManualClock
//! [`Surface`]: adder_engine::surface::Surface
//! [`BlockFont`]: adder_engine::text::BlockFont

pub mod app;
pub mod component;
pub mod context;
pub mod context_menu;
pub mod error;
pub mod event;
pub mod registry;
pub mod widgets;

pub use app::{Application, Fonts};
pub use component::{Component, ComponentId, CursorStyle, Placement, RefreshCtx};
pub use context::{Background, ErrorPolicy, FrameOutcome, OpenMenu, UiConfig, UiContext};
pub use error::UiError;

/// Everything needed to build and extend a UI.
pub mod prelude {
    pub use crate::app::{Application, Fonts};
    pub use crate::component::{Component, ComponentId, CursorStyle, Placement, RefreshCtx};
    pub use crate::context::{Background, ErrorPolicy, FrameOutcome, UiConfig, UiContext};
    pub use crate::context_menu::ContextMenu;
    pub use crate::error::UiError;
    pub use crate::event::{Callback, Command, Commands, EventTable, ONCLICK, ONDOUBLECLICK};
    pub use crate::registry::Registry;
    pub use crate::widgets::button::Button;
    pub use crate::widgets::label::Label;

    // Engine primitives everyone needs.
    pub use adder_engine::coords::{Anchor, Rect, Vec2};
    pub use adder_engine::paint::{Color, IntoColor};
    pub use adder_engine::surface::{Surface, SurfaceLoader, SurfaceSource};
    pub use adder_engine::text::{BlockFont, FontRef, TextRasterizer};
}
