//! Root shell composition.

use tracing::debug;

use super::fonts::FontConfig;
use super::metadata::Metadata;
use crate::error::ShellError;
use crate::render::{document_environment, DocumentData, DOCUMENT_TEMPLATE_NAME};
use crate::theme::{ThemeHandle, ThemePreference, ThemeProvider};

/// Stylesheet for the map rendering engine.
pub const MAP_STYLESHEET: &str = "/assets/maplibre-gl.css";
/// Global application stylesheet.
pub const GLOBAL_STYLESHEET: &str = "/assets/globals.css";

/// An opaque content subtree accepted by [`RootShell::render`].
///
/// The shell treats children as already-rendered markup and injects them
/// into the document body verbatim. Implemented for string types; wrap
/// other renderers by producing their markup first.
pub trait Renderable {
    /// Produces the markup for this subtree.
    fn render_html(&self) -> String;
}

impl Renderable for &str {
    fn render_html(&self) -> String {
        (*self).to_string()
    }
}

impl Renderable for String {
    fn render_html(&self) -> String {
        self.clone()
    }
}

/// The top-level composition point of the application.
///
/// A `RootShell` owns the page metadata, the configured fonts and
/// stylesheets, and the [`ThemeProvider`] that wraps the content tree.
/// Construction goes through [`RootShell::builder`]; every configured font
/// is validated and the document template compiled once at build time.
///
/// # Example
///
/// ```rust
/// use sightsignal_shell::{RootShell, ThemePreference};
///
/// let shell = RootShell::builder()
///     .default_theme(ThemePreference::Dark)
///     .build()
///     .unwrap();
///
/// let page = shell.render("<main>map goes here</main>").unwrap();
/// assert!(page.contains("<title>SightSignal</title>"));
/// assert!(page.contains(r#"data-theme="dark""#));
/// ```
pub struct RootShell {
    metadata: Metadata,
    fonts: Vec<FontConfig>,
    stylesheets: Vec<String>,
    body_classes: Vec<String>,
    provider: ThemeProvider,
    env: minijinja::Environment<'static>,
}

impl RootShell {
    /// Creates a builder seeded with the SightSignal defaults.
    pub fn builder() -> RootShellBuilder {
        RootShellBuilder::new()
    }

    /// The page metadata.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// A handle to the theme provider for descendant consumers.
    pub fn theme(&self) -> ThemeHandle {
        self.provider.handle()
    }

    /// Renders the complete document around the given children.
    ///
    /// The document reflects the provider's preference at the time of the
    /// call; render again after a theme change to pick up the new value.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Template`] if the template fails to render.
    pub fn render<R: Renderable>(&self, children: R) -> Result<String, ShellError> {
        let data = DocumentData::new(
            &self.metadata,
            &self.fonts,
            &self.stylesheets,
            &self.body_classes,
            self.provider.current(),
            children.render_html(),
        );
        debug!(
            title = self.metadata.title(),
            theme = self.provider.current().as_str(),
            "rendering shell document"
        );
        let template = self.env.get_template(DOCUMENT_TEMPLATE_NAME)?;
        Ok(template.render(&data)?)
    }
}

impl std::fmt::Debug for RootShell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RootShell")
            .field("metadata", &self.metadata)
            .field("fonts", &self.fonts)
            .field("theme", &self.provider.current())
            .finish()
    }
}

/// Builder for [`RootShell`].
///
/// Starts from the original application's configuration: SightSignal
/// metadata, display and body fonts, map and global stylesheets, an
/// `antialiased` body, and the `System` theme preference.
#[derive(Debug, Clone)]
pub struct RootShellBuilder {
    metadata: Metadata,
    fonts: Vec<FontConfig>,
    stylesheets: Vec<String>,
    body_classes: Vec<String>,
    default_theme: ThemePreference,
    default_theme_name: Option<String>,
}

impl RootShellBuilder {
    fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            fonts: vec![FontConfig::display_default(), FontConfig::body_default()],
            stylesheets: vec![MAP_STYLESHEET.to_string(), GLOBAL_STYLESHEET.to_string()],
            body_classes: vec!["antialiased".to_string()],
            default_theme: ThemePreference::default(),
            default_theme_name: None,
        }
    }

    /// Replaces the page metadata.
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Replaces the configured fonts.
    pub fn fonts(mut self, fonts: impl IntoIterator<Item = FontConfig>) -> Self {
        self.fonts = fonts.into_iter().collect();
        self
    }

    /// Adds a font family.
    pub fn font(mut self, font: FontConfig) -> Self {
        self.fonts.push(font);
        self
    }

    /// Replaces the stylesheet links.
    pub fn stylesheets(mut self, hrefs: impl IntoIterator<Item = String>) -> Self {
        self.stylesheets = hrefs.into_iter().collect();
        self
    }

    /// Adds a stylesheet link.
    pub fn stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheets.push(href.into());
        self
    }

    /// Adds a body class.
    pub fn body_class(mut self, class: impl Into<String>) -> Self {
        self.body_classes.push(class.into());
        self
    }

    /// Sets the initial theme preference.
    pub fn default_theme(mut self, preference: ThemePreference) -> Self {
        self.default_theme = preference;
        self.default_theme_name = None;
        self
    }

    /// Sets the initial theme preference by name (e.g. from configuration).
    ///
    /// The name is validated at [`build`](Self::build) time.
    pub fn default_theme_name(mut self, name: impl Into<String>) -> Self {
        self.default_theme_name = Some(name.into());
        self
    }

    /// Validates the configuration and builds the shell.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Font`] if a configured font fails validation,
    /// [`ShellError::Theme`] if a named default theme does not parse, or
    /// [`ShellError::Template`] if the document template fails to compile.
    pub fn build(self) -> Result<RootShell, ShellError> {
        for font in &self.fonts {
            font.validate()?;
        }
        let default_theme = match &self.default_theme_name {
            Some(name) => name.parse::<ThemePreference>()?,
            None => self.default_theme,
        };
        let env = document_environment()?;
        debug!(
            title = self.metadata.title(),
            theme = default_theme.as_str(),
            "shell built"
        );
        Ok(RootShell {
            metadata: self.metadata,
            fonts: self.fonts,
            stylesheets: self.stylesheets,
            body_classes: self.body_classes,
            provider: ThemeProvider::new(default_theme),
            env,
        })
    }
}

impl Default for RootShellBuilder {
    fn default() -> Self {
        Self::new()
    }
}
