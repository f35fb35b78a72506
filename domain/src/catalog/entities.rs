//! Catalog entities and value objects
//!
//! # Identifiers
//! - [`QuestionId`] - Canonical `Question_<suffix>` join key
//!
//! # Entities
//! - [`QuestionItem`] - One catalog question with prompt and widget kind
//! - [`ModulePayload`] - The full module catalog, loaded once and immutable

use serde::{Deserialize, Serialize};

/// Canonical identifier of a catalog question.
///
/// The id is the join key between content placeholders and catalog items.
/// Its canonical form is `Question_<suffix>`; see
/// [`crate::placeholder::normalize_token`] for how raw tokens reach it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(String);

impl QuestionId {
    /// Creates a QuestionId from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty id never resolves against a catalog.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: Into<String>> From<T> for QuestionId {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content part a question belongs to.
///
/// Only parts A-D carry questions; Part 0 and the appendices are
/// narrative-only and never count toward progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Part {
    A,
    B,
    C,
    D,
}

impl Part {
    /// All parts in fixed walk order.
    pub fn all() -> [Part; 4] {
        [Part::A, Part::B, Part::C, Part::D]
    }

    /// Parse a part letter, case-insensitively.
    pub fn parse(s: &str) -> Option<Part> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Part::A),
            "B" => Some(Part::B),
            "C" => Some(Part::C),
            "D" => Some(Part::D),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Part::A => 'A',
            Part::B => 'B',
            Part::C => 'C',
            Part::D => 'D',
        }
    }
}

impl std::fmt::Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Widget kind of a catalog question.
///
/// Unrecognized type strings fold into [`ItemType::FreeText`] — the
/// default free-text widget, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    ShortText,
    Discussion,
    Reflection,
    Annotation,
    TimelineEntry,
    TableCalc,
    FreeText,
}

impl ItemType {
    /// Parse a raw type string. Never fails: unknown kinds become the
    /// free-text fallback widget.
    pub fn parse(s: &str) -> ItemType {
        match s.trim() {
            "short_text" => ItemType::ShortText,
            "discussion" => ItemType::Discussion,
            "reflection" => ItemType::Reflection,
            "annotation" => ItemType::Annotation,
            "timeline_entry" => ItemType::TimelineEntry,
            "table_calc" => ItemType::TableCalc,
            _ => ItemType::FreeText,
        }
    }

    /// Whether responses to this item are tabular rows with a compute
    /// action, rather than free text.
    pub fn is_table(&self) -> bool {
        matches!(self, ItemType::TableCalc)
    }
}

/// One question in the module catalog (Entity)
///
/// Loaded once from the catalog file at startup; immutable afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionItem {
    pub id: QuestionId,
    pub part: Part,
    pub item_type: ItemType,
    pub prompt: String,
    /// Opaque facilitator guidance payload, rendered only while the
    /// instructor gate is unlocked and enabled.
    pub instructor_notes: Option<serde_json::Value>,
}

/// The full module catalog (Aggregate Root)
///
/// Identity fields plus the ordered question list. Built through
/// [`crate::catalog::validation`]; an invalid payload never becomes a
/// `ModulePayload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModulePayload {
    pub module_id: String,
    pub title: String,
    pub version: Option<String>,
    pub items: Vec<QuestionItem>,
}

impl ModulePayload {
    /// Look up a question by id.
    pub fn item(&self, id: &QuestionId) -> Option<&QuestionItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Questions belonging to one part, in catalog order.
    pub fn part_items(&self, part: Part) -> impl Iterator<Item = &QuestionItem> {
        self.items.iter().filter(move |item| item.part == part)
    }

    /// All question ids in catalog order.
    pub fn question_ids(&self) -> impl Iterator<Item = &QuestionId> {
        self.items.iter().map(|item| &item.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_parse_case_insensitive() {
        assert_eq!(Part::parse("a"), Some(Part::A));
        assert_eq!(Part::parse(" D "), Some(Part::D));
        assert_eq!(Part::parse("E"), None);
        assert_eq!(Part::parse(""), None);
    }

    #[test]
    fn test_item_type_unknown_folds_to_free_text() {
        assert_eq!(ItemType::parse("table_calc"), ItemType::TableCalc);
        assert_eq!(ItemType::parse("discussion"), ItemType::Discussion);
        assert_eq!(ItemType::parse("sketch_map"), ItemType::FreeText);
        assert_eq!(ItemType::parse(""), ItemType::FreeText);
    }

    #[test]
    fn test_module_lookup() {
        let module = ModulePayload {
            module_id: "m1".to_string(),
            title: "Test".to_string(),
            version: None,
            items: vec![QuestionItem {
                id: QuestionId::new("Question_1"),
                part: Part::A,
                item_type: ItemType::ShortText,
                prompt: "Why?".to_string(),
                instructor_notes: None,
            }],
        };

        assert!(module.item(&QuestionId::new("Question_1")).is_some());
        assert!(module.item(&QuestionId::new("Question_2")).is_none());
        assert_eq!(module.part_items(Part::A).count(), 1);
        assert_eq!(module.part_items(Part::B).count(), 0);
    }
}
