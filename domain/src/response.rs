//! Per-question response state.
//!
//! All response state is session-scoped and mutable: a tagged answer
//! value, a manual completion flag, and an optional computed result for
//! tabular items. The store is injected wherever it is needed — never a
//! process global — and is cleared as a whole by the reset action.

use crate::catalog::entities::QuestionId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One row of a tabular answer: column label to cell value.
pub type TableRow = BTreeMap<String, serde_json::Value>;

/// A recorded answer value.
///
/// Tagged variant instead of runtime shape inspection: free text for
/// the text-like widgets, rows for table items, and an escape hatch for
/// structured payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Table(Vec<TableRow>),
    Structured(serde_json::Value),
}

impl AnswerValue {
    /// Whether the value counts as empty for the answered predicate:
    /// blank text, zero rows, or a null/empty structured payload.
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerValue::Text(text) => text.trim().is_empty(),
            AnswerValue::Table(rows) => rows.is_empty(),
            AnswerValue::Structured(value) => match value {
                serde_json::Value::Null => true,
                serde_json::Value::Array(items) => items.is_empty(),
                serde_json::Value::Object(map) => map.is_empty(),
                serde_json::Value::String(s) => s.trim().is_empty(),
                _ => false,
            },
        }
    }
}

/// Computed-result payload for a tabular calculation item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedResult {
    pub rows: usize,
    pub columns: Vec<String>,
}

impl ComputedResult {
    /// Summarize the current rows of a table answer.
    pub fn from_rows(rows: &[TableRow]) -> Self {
        let mut columns: Vec<String> = rows
            .iter()
            .flat_map(|row| row.keys().cloned())
            .collect();
        columns.sort();
        columns.dedup();

        Self {
            rows: rows.len(),
            columns,
        }
    }
}

/// Mutable per-question record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub answer: Option<AnswerValue>,
    pub done: bool,
    pub computed: Option<ComputedResult>,
}

impl ResponseRecord {
    /// The answered predicate: monotone OR of the three slots.
    ///
    /// True when the manual done flag is set, OR the answer value is
    /// non-empty, OR a computed result exists. Never requires all three.
    pub fn is_answered(&self) -> bool {
        self.done
            || self.answer.as_ref().is_some_and(|a| !a.is_empty())
            || self.computed.is_some()
    }
}

/// Session-scoped response storage, keyed by question id.
#[derive(Debug, Clone, Default)]
pub struct ResponseStore {
    records: HashMap<QuestionId, ResponseRecord>,
}

impl ResponseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, id: &QuestionId) -> Option<&ResponseRecord> {
        self.records.get(id)
    }

    fn record_mut(&mut self, id: &QuestionId) -> &mut ResponseRecord {
        self.records.entry(id.clone()).or_default()
    }

    pub fn set_answer(&mut self, id: &QuestionId, answer: AnswerValue) {
        self.record_mut(id).answer = Some(answer);
    }

    /// Append a row to a table answer, converting a missing or
    /// non-table answer into a fresh table first.
    pub fn push_table_row(&mut self, id: &QuestionId, row: TableRow) {
        let record = self.record_mut(id);
        match &mut record.answer {
            Some(AnswerValue::Table(rows)) => rows.push(row),
            _ => record.answer = Some(AnswerValue::Table(vec![row])),
        }
    }

    pub fn set_done(&mut self, id: &QuestionId, done: bool) {
        self.record_mut(id).done = done;
    }

    pub fn set_computed(&mut self, id: &QuestionId, computed: ComputedResult) {
        self.record_mut(id).computed = Some(computed);
    }

    pub fn is_answered(&self, id: &QuestionId) -> bool {
        self.records.get(id).is_some_and(ResponseRecord::is_answered)
    }

    /// Count answered questions among the given ids.
    pub fn answered_count<'a>(&self, ids: impl Iterator<Item = &'a QuestionId>) -> usize {
        ids.filter(|id| self.is_answered(id)).count()
    }

    /// The reset action: drops every record (answers, done flags,
    /// computed results) in one sweep.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn qid(s: &str) -> QuestionId {
        QuestionId::new(s)
    }

    #[test]
    fn test_blank_answer_is_not_answered() {
        let mut store = ResponseStore::new();
        store.set_answer(&qid("Question_1"), AnswerValue::Text("   ".to_string()));
        assert!(!store.is_answered(&qid("Question_1")));
    }

    #[test]
    fn test_done_flag_alone_answers() {
        let mut store = ResponseStore::new();
        store.set_done(&qid("Question_1"), true);
        assert!(store.is_answered(&qid("Question_1")));
    }

    #[test]
    fn test_computed_alone_answers() {
        let mut store = ResponseStore::new();
        store.set_answer(&qid("Question_1"), AnswerValue::Text(String::new()));
        store.set_computed(&qid("Question_1"), ComputedResult::from_rows(&[]));
        assert!(store.is_answered(&qid("Question_1")));
    }

    #[test]
    fn test_unknown_id_is_not_answered() {
        let store = ResponseStore::new();
        assert!(!store.is_answered(&qid("Question_1")));
    }

    #[test]
    fn test_structured_emptiness() {
        assert!(AnswerValue::Structured(json!(null)).is_empty());
        assert!(AnswerValue::Structured(json!([])).is_empty());
        assert!(AnswerValue::Structured(json!({})).is_empty());
        assert!(!AnswerValue::Structured(json!(0)).is_empty());
        assert!(!AnswerValue::Structured(json!({"k": 1})).is_empty());
    }

    #[test]
    fn test_push_table_row_replaces_non_table() {
        let mut store = ResponseStore::new();
        let id = qid("Question_5");
        store.set_answer(&id, AnswerValue::Text("oops".to_string()));

        let mut row = TableRow::new();
        row.insert("Input".to_string(), json!("cattle"));
        store.push_table_row(&id, row.clone());
        store.push_table_row(&id, row);

        match store.record(&id).unwrap().answer.as_ref().unwrap() {
            AnswerValue::Table(rows) => assert_eq!(rows.len(), 2),
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn test_computed_from_rows_unions_columns() {
        let mut row_a = TableRow::new();
        row_a.insert("Input".to_string(), json!("x"));
        let mut row_b = TableRow::new();
        row_b.insert("Value".to_string(), json!(2));
        row_b.insert("Input".to_string(), json!("y"));

        let computed = ComputedResult::from_rows(&[row_a, row_b]);
        assert_eq!(computed.rows, 2);
        assert_eq!(computed.columns, vec!["Input", "Value"]);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut store = ResponseStore::new();
        store.set_done(&qid("Question_1"), true);
        store.set_answer(&qid("Question_2"), AnswerValue::Text("hi".to_string()));
        store.clear();
        assert!(!store.is_answered(&qid("Question_1")));
        assert!(!store.is_answered(&qid("Question_2")));
        assert!(store.record(&qid("Question_2")).is_none());
    }
}
