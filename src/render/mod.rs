//! Document rendering through minijinja.
//!
//! The shell compiles one built-in template, registered under an `.html`
//! name so the engine's default auto-escaping protects metadata values.
//! Pre-rendered children are the only value injected raw.

mod document;
mod filters;

pub(crate) use document::{document_environment, DocumentData, DOCUMENT_TEMPLATE_NAME};
