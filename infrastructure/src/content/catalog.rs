//! File-backed catalog source
//!
//! Reads the module catalog (`items.json`) once from disk, parses it
//! into the raw payload shape, and runs the domain validation pass.
//! Every failure mode is fatal: missing file, unparseable JSON, or a
//! payload with validation issues.

use casewalk_application::{CatalogError, CatalogSource};
use casewalk_domain::{ModulePayload, RawModulePayload};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Catalog source that reads a JSON file from the local file system.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalogSource {
    fn load(&self) -> Result<ModulePayload, CatalogError> {
        let path = self.path.display().to_string();
        debug!(%path, "reading catalog file");

        let text = fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: path.clone(),
            source,
        })?;

        let raw: RawModulePayload =
            serde_json::from_str(&text).map_err(|source| CatalogError::Parse {
                path: path.clone(),
                source,
            })?;

        let module = raw
            .validate()
            .map_err(|issues| CatalogError::Invalid { issues })?;

        info!(%path, items = module.items.len(), "catalog validated");
        Ok(module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const VALID: &str = r#"{
        "module_id": "anthrax_101",
        "title": "Outbreak Case Study",
        "version": "1.0",
        "items": [
            {"id": "Question_1", "part": "A", "type": "discussion", "prompt": "Why?"}
        ]
    }"#;

    #[test]
    fn test_load_valid_catalog() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");
        fs::write(&path, VALID).unwrap();

        let module = FileCatalogSource::new(&path).load().unwrap();
        assert_eq!(module.module_id, "anthrax_101");
        assert_eq!(module.items.len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let source = FileCatalogSource::new(dir.path().join("absent.json"));
        assert!(matches!(source.load(), Err(CatalogError::Io { .. })));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");
        fs::write(&path, "{not json").unwrap();

        let source = FileCatalogSource::new(&path);
        assert!(matches!(source.load(), Err(CatalogError::Parse { .. })));
    }

    #[test]
    fn test_schema_issues_are_itemized() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");
        fs::write(&path, r#"{"title": "t", "items": [{"id": "Question_1"}]}"#).unwrap();

        match FileCatalogSource::new(&path).load() {
            Err(CatalogError::Invalid { issues }) => {
                // Missing module_id, plus part/type/prompt on item 0.
                assert_eq!(issues.len(), 4);
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }
}
