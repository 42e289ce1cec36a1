//! Text rendering of topodiff results.
//!
//! A diff result is rendered as an indented tree. Every key, value and
//! bracket is styled after the diff state of the entity it belongs to:
//! green for added, red for deleted, yellow for changed; kept is unstyled.
//!
//! # Key Types
//!
//! - [`render`] / [`render_networks`] -- annotated document to [`StyledText`]
//! - [`StyledText`] -- spans with markup, ANSI and plain outputs
//! - [`ViewConfig`] / [`ColorMode`] -- indentation and color options

pub mod config;
pub mod render;
pub mod styled;

pub use config::{ColorMode, ViewConfig};
pub use render::{render, render_networks};
pub use styled::{Span, StyledText};
