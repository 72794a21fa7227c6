//! Document-level metadata.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Title and description for the SightSignal application.
pub const DEFAULT_TITLE: &str = "SightSignal";
pub const DEFAULT_DESCRIPTION: &str =
    "Map-first signals for local sightings, events, and hazards.";

/// Page-level metadata rendered into the document head.
///
/// # Example
///
/// ```rust
/// use sightsignal_shell::Metadata;
///
/// let meta = Metadata::new("SightSignal", "Map-first signals.").lang("en");
/// assert_eq!(meta.title(), "SightSignal");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    title: String,
    description: String,
    lang: String,
}

impl Metadata {
    /// Creates metadata with the given title and description.
    ///
    /// The document language defaults to `"en"`.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            lang: "en".to_string(),
        }
    }

    /// Sets the document language, returning updated metadata for chaining.
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// The page title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The page description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The document language code.
    pub fn language(&self) -> &str {
        &self.lang
    }

    /// Returns the description truncated to a maximum display width.
    ///
    /// Useful for search and social previews, which cut descriptions off
    /// around 155 columns. Width is measured in terminal/display columns so
    /// wide (CJK) characters count double. Truncation appends an ellipsis.
    pub fn description_preview(&self, max_width: usize) -> String {
        if self.description.width() <= max_width {
            return self.description.clone();
        }
        let limit = max_width.saturating_sub(1);
        let mut preview = String::new();
        let mut used = 0;
        for c in self.description.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > limit {
                break;
            }
            preview.push(c);
            used += w;
        }
        preview.push('…');
        preview
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, DEFAULT_DESCRIPTION)
    }
}
