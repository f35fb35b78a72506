//! Section content source port

use casewalk_domain::Section;
use thiserror::Error;

/// Errors from loading one section's markdown.
///
/// Recoverable: the affected section renders an inline error while the
/// rest of the session continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Section content file is missing: {path}")]
    Missing { path: String },

    #[error("Failed to read section content {path}: {message}")]
    Io { path: String, message: String },
}

/// Loads raw markdown for a named section.
///
/// Implementations load lazily and cache per section; `clear_cache`
/// backs the explicit cache-clear action.
pub trait ContentSource: Send + Sync {
    fn load_section(&self, section: Section) -> Result<String, ContentError>;

    fn clear_cache(&self);
}
