//! File-backed content adapters

pub mod catalog;
pub mod sections;

pub use catalog::FileCatalogSource;
pub use sections::FileContentSource;
