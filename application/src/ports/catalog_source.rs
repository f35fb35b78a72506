//! Catalog source port

use casewalk_domain::{CatalogIssue, ModulePayload};
use thiserror::Error;

/// Errors from loading the question catalog.
///
/// All variants are fatal for the session: the module never renders
/// over a missing or invalid catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unable to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse catalog JSON {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Catalog failed validation with {} issue(s)", .issues.len())]
    Invalid { issues: Vec<CatalogIssue> },
}

/// Loads the module catalog.
///
/// Implementations read a static catalog once; the payload is immutable
/// for the process lifetime afterward.
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<ModulePayload, CatalogError>;
}
