//! Theme state for the application shell.
//!
//! This module provides:
//!
//! - [`ThemePreference`]: The enumerated theme value (light/dark/system)
//! - [`ThemeProvider`]: Owner of the active preference with subscriber broadcast
//! - [`ThemeHandle`]: Cheap clone handed to descendants for read/mutate access
//! - [`ColorMode`]: Light or dark resolved color mode
//!
//! The provider is owned by the root shell and propagates changes
//! synchronously to every subscriber, in registration order.

mod adaptive;
mod preference;
mod provider;

pub use adaptive::{set_mode_detector, ColorMode};
pub use preference::{ThemeError, ThemePreference};
pub use provider::{SubscriberId, ThemeHandle, ThemeProvider};
