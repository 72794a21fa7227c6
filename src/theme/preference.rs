//! The enumerated theme preference.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::adaptive::{detect_mode, ColorMode};

/// The user's theme preference.
///
/// `Light` and `Dark` force a color mode; `System` defers to the operating
/// system setting. Preferences round-trip through their lowercase string
/// form, which is also how they appear in configuration and in the
/// `data-theme` attribute of the rendered document.
///
/// # Example
///
/// ```rust
/// use sightsignal_shell::ThemePreference;
///
/// let pref: ThemePreference = "dark".parse().unwrap();
/// assert_eq!(pref, ThemePreference::Dark);
/// assert_eq!(pref.as_str(), "dark");
///
/// assert!("solarized".parse::<ThemePreference>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the operating system color mode.
    System,
}

impl ThemePreference {
    /// All accepted preference values.
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
    ];

    /// Returns the canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    /// Resolves the preference to a concrete color mode.
    ///
    /// `Light` and `Dark` resolve to themselves; `System` asks the mode
    /// detector (the OS setting, unless overridden via
    /// [`set_mode_detector`](super::set_mode_detector)).
    pub fn resolve(self) -> ColorMode {
        match self {
            ThemePreference::Light => ColorMode::Light,
            ThemePreference::Dark => ColorMode::Dark,
            ThemePreference::System => detect_mode(),
        }
    }

    /// The value of the document's `data-theme` attribute.
    ///
    /// Forced modes set the attribute; `System` returns `None` so the
    /// attribute is omitted and a CSS media query decides.
    pub fn document_attribute(self) -> Option<&'static str> {
        match self {
            ThemePreference::Light => Some("light"),
            ThemePreference::Dark => Some("dark"),
            ThemePreference::System => None,
        }
    }
}

impl Default for ThemePreference {
    fn default() -> Self {
        ThemePreference::System
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            other => Err(ThemeError::UnknownTheme {
                name: other.to_string(),
            }),
        }
    }
}

/// Error returned when a theme name fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// The name is not one of the accepted preference values.
    #[error("unknown theme \"{name}\" (expected one of: light, dark, system)")]
    UnknownTheme { name: String },
}
