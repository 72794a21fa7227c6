//! Application shell rendering for SightSignal.
//!
//! This crate renders the top-level HTML document of the SightSignal map
//! application and owns the theme state the rest of the UI consumes:
//!
//! - [`RootShell`]: composes document metadata, font resources, and
//!   stylesheets around an opaque content subtree
//! - [`ThemeProvider`]: holds the active [`ThemePreference`] and broadcasts
//!   changes synchronously to subscribers
//! - [`Metadata`] and [`FontConfig`]: the document-level configuration
//!
//! # Example
//!
//! ```rust
//! use sightsignal_shell::{RootShell, ThemePreference};
//!
//! let shell = RootShell::builder()
//!     .default_theme(ThemePreference::Dark)
//!     .build()
//!     .unwrap();
//!
//! let handle = shell.theme();
//! let page = shell.render("<main>map goes here</main>").unwrap();
//!
//! assert!(page.contains("<title>SightSignal</title>"));
//! assert!(page.contains(r#"data-theme="dark""#));
//! assert_eq!(handle.current(), ThemePreference::Dark);
//! ```

pub mod error;
mod render;
pub mod shell;
pub mod theme;

pub use error::ShellError;
pub use shell::{
    FontConfig, FontError, Metadata, Renderable, RootShell, RootShellBuilder, GLOBAL_STYLESHEET,
    MAP_STYLESHEET,
};
pub use theme::{
    set_mode_detector, ColorMode, SubscriberId, ThemeError, ThemeHandle, ThemePreference,
    ThemeProvider,
};

/// Renders a page with the default SightSignal shell configuration.
///
/// Convenience for static rendering; build a [`RootShell`] explicitly when
/// the theme needs to change over the shell's lifetime.
///
/// # Errors
///
/// Returns a [`ShellError`] if the document template fails to render.
pub fn render_page<R: Renderable>(children: R) -> Result<String, ShellError> {
    RootShell::builder().build()?.render(children)
}
