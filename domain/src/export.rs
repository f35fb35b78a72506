//! Export snapshot building.
//!
//! A snapshot is a pure read of session state: it never mutates the
//! store and may be rebuilt on every refresh. The timestamp string is
//! supplied by the caller so this module stays clock-free.

use crate::catalog::entities::ModulePayload;
use crate::progress::module_progress;
use crate::response::{AnswerValue, ComputedResult, ResponseStore};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Completion counts included in every export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionSummary {
    pub answered_count: usize,
    pub total_count: usize,
    /// Rounded to one decimal.
    pub percent_complete: f64,
}

/// The downloadable response snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSnapshot {
    pub module_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// ISO-8601 UTC timestamp of the export.
    pub exported_at: String,
    pub navigation_mode: String,
    pub current_section: String,
    /// Every catalog question id, `null` for unanswered.
    pub responses: BTreeMap<String, Option<AnswerValue>>,
    /// Only ids with a computed result present.
    pub computed_results: BTreeMap<String, ComputedResult>,
    pub completion_summary: CompletionSummary,
}

/// Build an export snapshot of the current session.
pub fn build_snapshot(
    module: &ModulePayload,
    store: &ResponseStore,
    navigation_mode: impl Into<String>,
    current_section: impl Into<String>,
    exported_at: impl Into<String>,
) -> ExportSnapshot {
    let mut responses = BTreeMap::new();
    let mut computed_results = BTreeMap::new();

    for id in module.question_ids() {
        let record = store.record(id);
        responses.insert(
            id.as_str().to_string(),
            record.and_then(|r| r.answer.clone()),
        );
        if let Some(computed) = record.and_then(|r| r.computed.clone()) {
            computed_results.insert(id.as_str().to_string(), computed);
        }
    }

    let progress = module_progress(module, store);

    ExportSnapshot {
        module_id: module.module_id.clone(),
        title: module.title.clone(),
        version: module.version.clone(),
        exported_at: exported_at.into(),
        navigation_mode: navigation_mode.into(),
        current_section: current_section.into(),
        responses,
        computed_results,
        completion_summary: CompletionSummary {
            answered_count: progress.answered,
            total_count: progress.total,
            percent_complete: progress.percent_rounded(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entities::{ItemType, Part, QuestionId, QuestionItem};

    fn module() -> ModulePayload {
        ModulePayload {
            module_id: "anthrax_101".to_string(),
            title: "Outbreak Case Study".to_string(),
            version: Some("1.0".to_string()),
            items: ["Question_1", "Question_2"]
                .iter()
                .map(|id| QuestionItem {
                    id: QuestionId::new(*id),
                    part: Part::A,
                    item_type: ItemType::ShortText,
                    prompt: String::new(),
                    instructor_notes: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_snapshot_includes_all_ids_with_nulls() {
        let module = module();
        let mut store = ResponseStore::new();
        store.set_answer(
            &QuestionId::new("Question_1"),
            AnswerValue::Text("hello".to_string()),
        );

        let snapshot = build_snapshot(&module, &store, "guided", "Part A", "2026-08-08T00:00:00Z");

        assert_eq!(snapshot.responses.len(), 2);
        assert_eq!(
            snapshot.responses["Question_1"],
            Some(AnswerValue::Text("hello".to_string()))
        );
        assert_eq!(snapshot.responses["Question_2"], None);
        assert_eq!(snapshot.completion_summary.answered_count, 1);
        assert_eq!(snapshot.completion_summary.total_count, 2);
        assert_eq!(snapshot.completion_summary.percent_complete, 50.0);
    }

    #[test]
    fn test_computed_map_restricted_to_present() {
        let module = module();
        let mut store = ResponseStore::new();
        store.set_computed(
            &QuestionId::new("Question_2"),
            ComputedResult {
                rows: 3,
                columns: vec!["Input".to_string()],
            },
        );

        let snapshot = build_snapshot(&module, &store, "jump", "Part B", "2026-08-08T00:00:00Z");
        assert_eq!(snapshot.computed_results.len(), 1);
        assert!(snapshot.computed_results.contains_key("Question_2"));
    }

    #[test]
    fn test_snapshot_is_a_pure_read() {
        let module = module();
        let store = ResponseStore::new();
        let first = build_snapshot(&module, &store, "guided", "Part 0", "t");
        let second = build_snapshot(&module, &store, "guided", "Part 0", "t");
        assert_eq!(first, second);
    }

    #[test]
    fn test_serialized_shape() {
        let module = module();
        let mut store = ResponseStore::new();
        store.set_answer(
            &QuestionId::new("Question_1"),
            AnswerValue::Text("hello".to_string()),
        );

        let snapshot = build_snapshot(&module, &store, "guided", "Part A", "t");
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["responses"]["Question_1"], "hello");
        assert_eq!(json["responses"]["Question_2"], serde_json::Value::Null);
        assert_eq!(json["completion_summary"]["percent_complete"], 50.0);
    }
}
