//! Font family configuration.

/// A font family loaded by the shell.
///
/// Each configured family contributes a hosted-stylesheet link and a CSS
/// custom property to the rendered document. Configuration uses a fluent
/// builder:
///
/// ```rust
/// use sightsignal_shell::FontConfig;
///
/// let font = FontConfig::new("Space Grotesk", "--font-body")
///     .fallback("sans-serif")
///     .subset("latin")
///     .weights([400, 500, 600, 700]);
///
/// assert_eq!(
///     font.stylesheet_href(),
///     "https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600;700&display=swap"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontConfig {
    family: String,
    variable: String,
    fallback: Option<String>,
    subsets: Vec<String>,
    weights: Vec<u16>,
}

impl FontConfig {
    /// Creates a font configuration for a family and its CSS custom property.
    pub fn new(family: impl Into<String>, variable: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            variable: variable.into(),
            fallback: None,
            subsets: Vec::new(),
            weights: Vec::new(),
        }
    }

    /// The display font of the original application.
    pub fn display_default() -> Self {
        Self::new("Cormorant Garamond", "--font-display")
            .fallback("serif")
            .subset("latin")
            .weights([400, 500, 600, 700])
    }

    /// The body font of the original application.
    pub fn body_default() -> Self {
        Self::new("Space Grotesk", "--font-body")
            .fallback("sans-serif")
            .subset("latin")
            .weights([400, 500, 600, 700])
    }

    /// Adds a generic fallback family for the CSS declaration.
    pub fn fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Adds a character subset, returning the updated config for chaining.
    pub fn subset(mut self, subset: impl Into<String>) -> Self {
        self.subsets.push(subset.into());
        self
    }

    /// Adds a single font weight.
    pub fn weight(mut self, weight: u16) -> Self {
        self.weights.push(weight);
        self
    }

    /// Adds several font weights at once.
    pub fn weights(mut self, weights: impl IntoIterator<Item = u16>) -> Self {
        self.weights.extend(weights);
        self
    }

    /// The font family name.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// The CSS custom property the family is bound to.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// The configured character subsets.
    pub fn subsets(&self) -> &[String] {
        &self.subsets
    }

    /// Checks that the configuration can produce valid CSS.
    ///
    /// # Errors
    ///
    /// Returns a [`FontError`] if the family name is empty, the variable is
    /// not a custom property (`--` prefix), no weight is configured, or a
    /// weight falls outside `1..=1000`.
    pub fn validate(&self) -> Result<(), FontError> {
        if self.family.trim().is_empty() {
            return Err(FontError::EmptyFamily);
        }
        if !self.variable.starts_with("--") {
            return Err(FontError::InvalidVariable {
                family: self.family.clone(),
                variable: self.variable.clone(),
            });
        }
        if self.weights.is_empty() {
            return Err(FontError::NoWeights {
                family: self.family.clone(),
            });
        }
        if let Some(&weight) = self.weights.iter().find(|w| !(1..=1000).contains(*w)) {
            return Err(FontError::InvalidWeight {
                family: self.family.clone(),
                weight,
            });
        }
        Ok(())
    }

    /// The hosted-stylesheet URL for this family.
    ///
    /// Weights are emitted ascending and deduplicated; spaces in the family
    /// name are encoded as `+`, matching the CSS2 font API.
    pub fn stylesheet_href(&self) -> String {
        let family = self.family.replace(' ', "+");
        let mut weights = self.weights.clone();
        weights.sort_unstable();
        weights.dedup();
        if weights.is_empty() {
            return format!("https://fonts.googleapis.com/css2?family={family}&display=swap");
        }
        let weights = weights
            .iter()
            .map(u16::to_string)
            .collect::<Vec<_>>()
            .join(";");
        format!("https://fonts.googleapis.com/css2?family={family}:wght@{weights}&display=swap")
    }

    /// The CSS custom-property declaration for this family.
    pub fn declaration(&self) -> String {
        match &self.fallback {
            Some(fallback) => format!("{}: '{}', {};", self.variable, self.family, fallback),
            None => format!("{}: '{}';", self.variable, self.family),
        }
    }
}

/// Error returned when a font configuration fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FontError {
    /// The family name is empty or whitespace.
    #[error("font family name is empty")]
    EmptyFamily,
    /// The CSS variable is not a custom property.
    #[error("CSS variable \"{variable}\" for font \"{family}\" must start with \"--\"")]
    InvalidVariable { family: String, variable: String },
    /// No weights were configured.
    #[error("font \"{family}\" has no weights configured")]
    NoWeights { family: String },
    /// A weight is outside the valid CSS range.
    #[error("font \"{family}\" has invalid weight {weight} (expected 1..=1000)")]
    InvalidWeight { family: String, weight: u16 },
}
