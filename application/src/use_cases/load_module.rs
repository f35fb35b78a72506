//! Load Module use case
//!
//! Loads and validates the question catalog through the injected
//! catalog source. Any failure here is fatal for the session: the
//! caller displays the itemized issues and stops before rendering.

use crate::ports::catalog_source::{CatalogError, CatalogSource};
use casewalk_domain::ModulePayload;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while loading a module.
#[derive(Error, Debug)]
pub enum LoadModuleError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Use case for loading the module catalog.
pub struct LoadModuleUseCase<S: CatalogSource> {
    source: Arc<S>,
}

impl<S: CatalogSource> LoadModuleUseCase<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    pub fn execute(&self) -> Result<ModulePayload, LoadModuleError> {
        let module = self.source.load()?;
        tracing::info!(
            module_id = %module.module_id,
            items = module.items.len(),
            "module catalog loaded"
        );
        Ok(module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casewalk_domain::RawModulePayload;

    struct StaticCatalog {
        json: &'static str,
    }

    impl CatalogSource for StaticCatalog {
        fn load(&self) -> Result<ModulePayload, CatalogError> {
            let raw: RawModulePayload =
                serde_json::from_str(self.json).map_err(|source| CatalogError::Parse {
                    path: "<static>".to_string(),
                    source,
                })?;
            raw.validate()
                .map_err(|issues| CatalogError::Invalid { issues })
        }
    }

    #[test]
    fn test_execute_valid() {
        let use_case = LoadModuleUseCase::new(Arc::new(StaticCatalog {
            json: r#"{"module_id": "m", "title": "t", "items": []}"#,
        }));
        let module = use_case.execute().unwrap();
        assert_eq!(module.module_id, "m");
    }

    #[test]
    fn test_execute_invalid_is_itemized() {
        let use_case = LoadModuleUseCase::new(Arc::new(StaticCatalog {
            json: r#"{"items": [{"part": "A"}]}"#,
        }));
        let err = use_case.execute().unwrap_err();
        match err {
            LoadModuleError::Catalog(CatalogError::Invalid { issues }) => {
                // module_id + title missing, item 0 missing id/type/prompt.
                assert_eq!(issues.len(), 5);
            }
            other => panic!("expected validation failure, got {other}"),
        }
    }
}
