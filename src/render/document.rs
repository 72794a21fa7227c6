//! The built-in document template and its view model.

use minijinja::Environment;
use serde::Serialize;

use super::filters::register_filters;
use crate::shell::{FontConfig, Metadata};
use crate::theme::ThemePreference;

pub(crate) const DOCUMENT_TEMPLATE_NAME: &str = "document.html";

// The `.html` suffix turns on HTML auto-escaping for every interpolation;
// `children` and the generated font declarations opt out via `safe`.
const DOCUMENT_TEMPLATE: &str = r#"<!doctype html>
<html lang="{{ lang }}"{% if data_theme %} data-theme="{{ data_theme }}"{% endif %}>
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{ title }}</title>
    <meta name="description" content="{{ description }}">
{%- if fonts %}
    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
{%- for font in fonts %}
    <link rel="stylesheet" href="{{ font.href }}">
{%- endfor %}
{%- endif %}
{%- for href in stylesheets %}
    <link rel="stylesheet" href="{{ href }}">
{%- endfor %}
{%- if fonts %}
    <style>
      :root {
{%- for font in fonts %}
        {{ font.declaration | safe }}
{%- endfor %}
      }
    </style>
{%- endif %}
  </head>
  <body class="{{ body_classes | class_list }}">
    {{ children | safe }}
  </body>
</html>
"#;

/// Builds the environment holding the compiled document template.
pub(crate) fn document_environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    register_filters(&mut env);
    env.add_template(DOCUMENT_TEMPLATE_NAME, DOCUMENT_TEMPLATE)?;
    Ok(env)
}

/// Per-font values consumed by the template.
#[derive(Debug, Serialize)]
struct FontAssets {
    href: String,
    declaration: String,
}

/// Everything the document template needs for one render.
#[derive(Debug, Serialize)]
pub(crate) struct DocumentData {
    lang: String,
    title: String,
    description: String,
    data_theme: Option<&'static str>,
    fonts: Vec<FontAssets>,
    stylesheets: Vec<String>,
    body_classes: Vec<String>,
    children: String,
}

impl DocumentData {
    pub(crate) fn new(
        metadata: &Metadata,
        fonts: &[FontConfig],
        stylesheets: &[String],
        body_classes: &[String],
        preference: ThemePreference,
        children: String,
    ) -> Self {
        Self {
            lang: metadata.language().to_string(),
            title: metadata.title().to_string(),
            description: metadata.description().to_string(),
            data_theme: preference.document_attribute(),
            fonts: fonts
                .iter()
                .map(|font| FontAssets {
                    href: font.stylesheet_href(),
                    declaration: font.declaration(),
                })
                .collect(),
            stylesheets: stylesheets.to_vec(),
            body_classes: body_classes.to_vec(),
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(data: &DocumentData) -> String {
        let env = document_environment().unwrap();
        env.get_template(DOCUMENT_TEMPLATE_NAME)
            .unwrap()
            .render(data)
            .unwrap()
    }

    fn sample(preference: ThemePreference) -> DocumentData {
        DocumentData::new(
            &Metadata::default(),
            &[FontConfig::body_default()],
            &["/assets/globals.css".to_string()],
            &["antialiased".to_string()],
            preference,
            "<main>content</main>".to_string(),
        )
    }

    #[test]
    fn test_document_contains_metadata() {
        let html = render(&sample(ThemePreference::System));
        assert!(html.contains("<title>SightSignal</title>"));
        assert!(html.contains(
            r#"<meta name="description" content="Map-first signals for local sightings, events, and hazards.">"#
        ));
        assert!(html.contains(r#"<html lang="en">"#));
    }

    #[test]
    fn test_document_escapes_metadata() {
        let metadata = Metadata::new("Sight & Signal", "Signals <here>");
        let data = DocumentData::new(
            &metadata,
            &[],
            &[],
            &[],
            ThemePreference::System,
            String::new(),
        );
        let html = render(&data);
        assert!(html.contains("<title>Sight &amp; Signal</title>"));
        assert!(html.contains("Signals &lt;here&gt;"));
    }

    #[test]
    fn test_document_children_injected_raw() {
        let html = render(&sample(ThemePreference::System));
        assert!(html.contains("<main>content</main>"));
    }

    #[test]
    fn test_document_theme_attribute() {
        let html = render(&sample(ThemePreference::Dark));
        assert!(html.contains(r#"<html lang="en" data-theme="dark">"#));

        let html = render(&sample(ThemePreference::System));
        assert!(!html.contains("data-theme"));
    }

    #[test]
    fn test_document_font_links_and_declarations() {
        let html = render(&sample(ThemePreference::System));
        assert!(html.contains(r#"<link rel="preconnect" href="https://fonts.googleapis.com">"#));
        assert!(html.contains("family=Space+Grotesk:wght@400;500;600;700"));
        assert!(html.contains("--font-body: 'Space Grotesk', sans-serif;"));
    }

    #[test]
    fn test_document_without_fonts_skips_preconnect() {
        let data = DocumentData::new(
            &Metadata::default(),
            &[],
            &[],
            &[],
            ThemePreference::System,
            String::new(),
        );
        let html = render(&data);
        assert!(!html.contains("preconnect"));
        assert!(!html.contains("<style>"));
    }

    #[test]
    fn test_document_stylesheet_links() {
        let html = render(&sample(ThemePreference::System));
        assert!(html.contains(r#"<link rel="stylesheet" href="/assets/globals.css">"#));
    }

    #[test]
    fn test_document_body_class() {
        let html = render(&sample(ThemePreference::System));
        assert!(html.contains(r#"<body class="antialiased">"#));
    }
}
