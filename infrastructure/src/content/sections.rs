//! File-backed section content source
//!
//! One markdown file per named section under the content directory:
//!
//! ```text
//! content/
//!   parts/part_0.md .. parts/part_d.md
//!   appendices/appendix_1.md .. appendix_3.md
//! ```
//!
//! Sections load lazily and are memoized for the process lifetime (or
//! until the explicit cache-clear action). A missing file is a
//! recoverable, per-section error.

use casewalk_application::{ContentError, ContentSource};
use casewalk_domain::Section;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

/// Content source reading section markdown from the local file system.
pub struct FileContentSource {
    content_dir: PathBuf,
    cache: Mutex<HashMap<Section, String>>,
}

impl FileContentSource {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// The file backing one section.
    pub fn section_path(&self, section: Section) -> PathBuf {
        match section {
            Section::PartZero => self.content_dir.join("parts").join("part_0.md"),
            Section::Part(part) => self
                .content_dir
                .join("parts")
                .join(format!("part_{}.md", part.letter().to_ascii_lowercase())),
            Section::Appendix(n) => self
                .content_dir
                .join("appendices")
                .join(format!("appendix_{n}.md")),
        }
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }
}

impl ContentSource for FileContentSource {
    fn load_section(&self, section: Section) -> Result<String, ContentError> {
        if let Some(text) = self.cache.lock().expect("content cache poisoned").get(&section) {
            debug!(section = %section, "section served from cache");
            return Ok(text.clone());
        }

        let path = self.section_path(section);
        let display_path = path.display().to_string();

        let text = std::fs::read_to_string(&path).map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                warn!(section = %section, path = %display_path, "section content file missing");
                ContentError::Missing { path: display_path.clone() }
            } else {
                ContentError::Io {
                    path: display_path.clone(),
                    message: err.to_string(),
                }
            }
        })?;

        debug!(section = %section, path = %display_path, bytes = text.len(), "section loaded");
        self.cache
            .lock()
            .expect("content cache poisoned")
            .insert(section, text.clone());
        Ok(text)
    }

    fn clear_cache(&self) {
        self.cache.lock().expect("content cache poisoned").clear();
        debug!("section content cache cleared");
    }
}
