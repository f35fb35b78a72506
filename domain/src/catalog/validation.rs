//! Catalog payload validation
//!
//! The catalog file is deserialized into the all-optional raw shapes in
//! this module, then validated into [`ModulePayload`] in one pass that
//! collects **every** issue instead of stopping at the first. A payload
//! with any error-severity issue never becomes a `ModulePayload`.

use super::entities::{ItemType, ModulePayload, Part, QuestionId, QuestionItem};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Severity of a catalog issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

/// Machine-readable catalog issue codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogIssueCode {
    MissingModuleKey { key: String },
    MissingItemKey { index: usize, key: String },
    EmptyItemId { index: usize },
    DuplicateItemId { index: usize, id: String },
    InvalidPart { index: usize, value: String },
}

/// One validation issue found in a catalog payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogIssue {
    pub severity: Severity,
    pub code: CatalogIssueCode,
    pub message: String,
}

impl CatalogIssue {
    fn error(code: CatalogIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }
}

/// Raw catalog payload (exact file structure, all keys optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawModulePayload {
    pub module_id: Option<String>,
    pub title: Option<String>,
    pub version: Option<String>,
    pub items: Option<Vec<RawQuestionItem>>,
}

/// Raw catalog item (exact file structure, all keys optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawQuestionItem {
    pub id: Option<String>,
    pub part: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub prompt: Option<String>,
    pub instructor_mode: Option<serde_json::Value>,
}

impl RawModulePayload {
    /// Validate the raw payload into a [`ModulePayload`].
    ///
    /// Collects all detected issues. Checks, per the catalog contract:
    /// 1. Required module keys: `module_id`, `title`, `items`
    /// 2. Required item keys: `id`, `part`, `type`, `prompt`
    /// 3. Non-empty, unique item ids and a parseable part letter
    ///
    /// Unknown `type` strings are NOT an issue — they fold into the
    /// default free-text widget at render time.
    pub fn validate(self) -> Result<ModulePayload, Vec<CatalogIssue>> {
        let mut issues = Vec::new();

        let module_keys = [
            ("module_id", self.module_id.is_none()),
            ("title", self.title.is_none()),
            ("items", self.items.is_none()),
        ];
        for (key, missing) in module_keys {
            if missing {
                issues.push(CatalogIssue::error(
                    CatalogIssueCode::MissingModuleKey {
                        key: key.to_string(),
                    },
                    format!("catalog is missing required key '{key}'"),
                ));
            }
        }

        let mut seen_ids: HashSet<String> = HashSet::new();
        let mut items = Vec::new();

        for (index, raw) in self.items.iter().flatten().enumerate() {
            let mut item_ok = true;

            for (key, present) in [
                ("id", raw.id.is_some()),
                ("part", raw.part.is_some()),
                ("type", raw.item_type.is_some()),
                ("prompt", raw.prompt.is_some()),
            ] {
                if !present {
                    item_ok = false;
                    issues.push(CatalogIssue::error(
                        CatalogIssueCode::MissingItemKey {
                            index,
                            key: key.to_string(),
                        },
                        format!("item {index} is missing required key '{key}'"),
                    ));
                }
            }

            if let Some(id) = &raw.id {
                if id.trim().is_empty() {
                    item_ok = false;
                    issues.push(CatalogIssue::error(
                        CatalogIssueCode::EmptyItemId { index },
                        format!("item {index} has an empty id"),
                    ));
                } else if !seen_ids.insert(id.clone()) {
                    item_ok = false;
                    issues.push(CatalogIssue::error(
                        CatalogIssueCode::DuplicateItemId {
                            index,
                            id: id.clone(),
                        },
                        format!("item {index} reuses id '{id}'"),
                    ));
                }
            }

            let part = raw.part.as_deref().and_then(Part::parse);
            if let Some(value) = &raw.part
                && part.is_none()
            {
                item_ok = false;
                issues.push(CatalogIssue::error(
                    CatalogIssueCode::InvalidPart {
                        index,
                        value: value.clone(),
                    },
                    format!("item {index} has unknown part '{value}' (expected A-D)"),
                ));
            }

            if item_ok
                && let (Some(id), Some(part), Some(prompt)) = (&raw.id, part, &raw.prompt)
            {
                items.push(QuestionItem {
                    id: QuestionId::new(id.clone()),
                    part,
                    item_type: ItemType::parse(raw.item_type.as_deref().unwrap_or_default()),
                    prompt: prompt.clone(),
                    instructor_notes: raw.instructor_mode.clone(),
                });
            }
        }

        if issues.iter().any(|i| i.severity == Severity::Error) {
            return Err(issues);
        }

        Ok(ModulePayload {
            module_id: self.module_id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            version: self.version,
            items,
        })
    }
}
