//! Application shell composition.
//!
//! This module provides:
//!
//! - [`RootShell`]: The top-level composition point for the document
//! - [`Metadata`]: Page title, description, and language
//! - [`FontConfig`]: A configured font family with its CSS custom property
//! - [`Renderable`]: Opaque content subtrees accepted by the shell

mod fonts;
mod metadata;
mod root;

pub use fonts::{FontConfig, FontError};
pub use metadata::Metadata;
pub use root::{Renderable, RootShell, RootShellBuilder, GLOBAL_STYLESHEET, MAP_STYLESHEET};
