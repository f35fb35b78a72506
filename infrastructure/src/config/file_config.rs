//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the config file.
//! Every field has a default so partial files merge cleanly.

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Content directory and catalog location
    pub content: FileContentConfig,
    /// Navigation defaults
    pub navigation: FileNavigationConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Instructor gate settings
    pub instructor: FileInstructorConfig,
}

/// `[content]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileContentConfig {
    /// Directory holding part and appendix markdown.
    pub dir: String,
    /// Catalog path; defaults to `<dir>/items.json`.
    pub catalog: Option<String>,
}

impl Default for FileContentConfig {
    fn default() -> Self {
        Self {
            dir: "content".to_string(),
            catalog: None,
        }
    }
}

impl FileContentConfig {
    /// The effective catalog path.
    pub fn catalog_path(&self) -> String {
        self.catalog
            .clone()
            .unwrap_or_else(|| format!("{}/items.json", self.dir))
    }
}

/// `[navigation]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNavigationConfig {
    /// Start in guided mode rather than jump mode.
    pub guided: bool,
    /// Include appendix steps in the guided walk.
    pub include_appendices: bool,
}

impl Default for FileNavigationConfig {
    fn default() -> Self {
        Self {
            guided: true,
            include_appendices: false,
        }
    }
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// `[instructor]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInstructorConfig {
    /// Unlock code for facilitator content. Also sourced from the
    /// `INSTRUCTOR_UNLOCK_CODE` environment variable; absent everywhere
    /// means unlock is disabled.
    pub unlock_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[content]
dir = "modules/anthrax"
catalog = "modules/anthrax/catalog.json"

[navigation]
guided = false
include_appendices = true

[output]
color = false

[instructor]
unlock_code = "epi-2026"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.content.dir, "modules/anthrax");
        assert_eq!(config.content.catalog_path(), "modules/anthrax/catalog.json");
        assert!(!config.navigation.guided);
        assert!(config.navigation.include_appendices);
        assert!(!config.output.color);
        assert_eq!(config.instructor.unlock_code.as_deref(), Some("epi-2026"));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: FileConfig = toml::from_str("[output]\ncolor = false\n").unwrap();
        assert!(!config.output.color);
        // Defaults should apply everywhere else.
        assert_eq!(config.content.dir, "content");
        assert!(config.navigation.guided);
        assert!(config.instructor.unlock_code.is_none());
    }

    #[test]
    fn test_default_catalog_path_follows_dir() {
        let config = FileConfig::default();
        assert_eq!(config.content.catalog_path(), "content/items.json");
    }
}
