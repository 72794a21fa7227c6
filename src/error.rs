//! Crate error type.

use crate::shell::FontError;
use crate::theme::ThemeError;

/// Error returned by shell construction and rendering.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// A configured font failed validation.
    #[error("invalid font configuration")]
    Font(#[from] FontError),
    /// A theme name failed validation.
    #[error("invalid theme configuration")]
    Theme(#[from] ThemeError),
    /// The document template failed to compile or render.
    #[error("failed to render document")]
    Template(#[from] minijinja::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_error_conversion_keeps_source() {
        use std::error::Error;

        let err = ShellError::from(FontError::EmptyFamily);
        assert!(err.source().is_some());
        assert_eq!(
            err.source().unwrap().to_string(),
            "font family name is empty"
        );
    }

    #[test]
    fn test_theme_error_conversion() {
        let err = ShellError::from(ThemeError::UnknownTheme {
            name: "sepia".to_string(),
        });
        assert!(matches!(err, ShellError::Theme(_)));
    }
}
