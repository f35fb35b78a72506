//! Progress accounting over the scored question range.
//!
//! Only Parts A-D carry questions, so every catalog item is in the
//! scored range; Part 0 and the appendices never contribute. Per-part
//! progress is the same ratio restricted to one part's question set.

use crate::catalog::entities::{ModulePayload, Part};
use crate::response::ResponseStore;
use serde::{Deserialize, Serialize};

/// Answered/total counts for a question range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub answered: usize,
    pub total: usize,
}

impl ProgressSummary {
    /// Completion percentage. Exactly `0.0` when the range is empty.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.answered as f64 / self.total as f64 * 100.0
        }
    }

    /// Percentage rounded to one decimal, as displayed and exported.
    pub fn percent_rounded(&self) -> f64 {
        (self.percent() * 10.0).round() / 10.0
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.answered == self.total
    }
}

/// Module-wide progress over all catalog questions.
pub fn module_progress(module: &ModulePayload, store: &ResponseStore) -> ProgressSummary {
    ProgressSummary {
        answered: store.answered_count(module.question_ids()),
        total: module.items.len(),
    }
}

/// Progress restricted to one part's question set.
pub fn part_progress(module: &ModulePayload, store: &ResponseStore, part: Part) -> ProgressSummary {
    ProgressSummary {
        answered: store.answered_count(module.part_items(part).map(|item| &item.id)),
        total: module.part_items(part).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entities::{ItemType, QuestionId, QuestionItem};
    use crate::response::AnswerValue;

    fn module_with(parts: &[(&str, Part)]) -> ModulePayload {
        ModulePayload {
            module_id: "m".to_string(),
            title: "t".to_string(),
            version: None,
            items: parts
                .iter()
                .map(|(id, part)| QuestionItem {
                    id: QuestionId::new(*id),
                    part: *part,
                    item_type: ItemType::ShortText,
                    prompt: String::new(),
                    instructor_notes: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_empty_range_is_exactly_zero() {
        let module = module_with(&[]);
        let store = ResponseStore::new();
        assert_eq!(module_progress(&module, &store).percent(), 0.0);
    }

    #[test]
    fn test_two_of_four_is_exactly_fifty() {
        let module = module_with(&[
            ("Question_1", Part::A),
            ("Question_2", Part::A),
            ("Question_3", Part::B),
            ("Question_4", Part::C),
        ]);
        let mut store = ResponseStore::new();
        store.set_answer(
            &QuestionId::new("Question_1"),
            AnswerValue::Text("answer".to_string()),
        );
        store.set_done(&QuestionId::new("Question_3"), true);

        let progress = module_progress(&module, &store);
        assert_eq!(progress.answered, 2);
        assert_eq!(progress.percent(), 50.0);
    }

    #[test]
    fn test_part_scoped_ratio() {
        let module = module_with(&[
            ("Question_1", Part::A),
            ("Question_2", Part::A),
            ("Question_3", Part::B),
        ]);
        let mut store = ResponseStore::new();
        store.set_done(&QuestionId::new("Question_1"), true);

        assert_eq!(part_progress(&module, &store, Part::A).percent(), 50.0);
        assert_eq!(part_progress(&module, &store, Part::B).percent(), 0.0);
        // Part with no questions stays at exactly zero.
        assert_eq!(part_progress(&module, &store, Part::D).percent(), 0.0);
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        let progress = ProgressSummary {
            answered: 1,
            total: 3,
        };
        assert_eq!(progress.percent_rounded(), 33.3);
    }
}
