//! Infrastructure layer for casewalk
//!
//! This crate contains adapters that implement the ports defined in
//! the application layer: file-backed catalog and section content
//! loading, configuration file loading, and secret resolution.

pub mod config;
pub mod content;

// Re-export commonly used types
pub use config::{
    ConfigLoader, EnvSecretSource, FileConfig, FileContentConfig, FileInstructorConfig,
    FileNavigationConfig, FileOutputConfig,
};
pub use content::{FileCatalogSource, FileContentSource};
