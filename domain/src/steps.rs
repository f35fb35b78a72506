//! Guided navigation step building.
//!
//! The guided walk visits one question (or content block) at a time.
//! Building the step list is a pure function of the per-part placeholder
//! lists and the appendix toggle, so it can be rebuilt on every refresh
//! without disturbing existing indices.

use crate::catalog::entities::{Part, QuestionId};
use crate::section::Section;
use serde::{Deserialize, Serialize};

/// One step of the guided walk: a section, optionally pinned to a
/// single question rendered at that step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidedStep {
    pub section: Section,
    pub question_id: Option<QuestionId>,
}

impl GuidedStep {
    fn content_only(section: Section) -> Self {
        Self {
            section,
            question_id: None,
        }
    }

    fn question(section: Section, id: QuestionId) -> Self {
        Self {
            section,
            question_id: Some(id),
        }
    }
}

/// Ordered placeholder ids per content part, as extracted from each
/// part's markdown. A part whose markdown is missing simply contributes
/// an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartPlaceholders {
    a: Vec<QuestionId>,
    b: Vec<QuestionId>,
    c: Vec<QuestionId>,
    d: Vec<QuestionId>,
}

impl PartPlaceholders {
    pub fn set(&mut self, part: Part, ids: Vec<QuestionId>) {
        *self.slot(part) = ids;
    }

    pub fn get(&self, part: Part) -> &[QuestionId] {
        match part {
            Part::A => &self.a,
            Part::B => &self.b,
            Part::C => &self.c,
            Part::D => &self.d,
        }
    }

    fn slot(&mut self, part: Part) -> &mut Vec<QuestionId> {
        match part {
            Part::A => &mut self.a,
            Part::B => &mut self.b,
            Part::C => &mut self.c,
            Part::D => &mut self.d,
        }
    }
}

/// Build the linear guided step list.
///
/// - Step 0 is always `(Part 0, None)`.
/// - Each part A-D contributes one step per placeholder in extraction
///   order, or exactly one content-only step when it has none.
/// - With `include_appendices`, one content-only step per appendix is
///   appended in fixed catalog order.
///
/// Pure and deterministic: identical inputs yield list-equal outputs,
/// and toggling the appendix flag only adds or removes tail steps, so a
/// question's step index is stable whenever its step still exists.
pub fn build_guided_steps(parts: &PartPlaceholders, include_appendices: bool) -> Vec<GuidedStep> {
    let mut steps = vec![GuidedStep::content_only(Section::PartZero)];

    for part in Part::all() {
        let ids = parts.get(part);
        if ids.is_empty() {
            steps.push(GuidedStep::content_only(Section::Part(part)));
        } else {
            steps.extend(
                ids.iter()
                    .map(|id| GuidedStep::question(Section::Part(part), id.clone())),
            );
        }
    }

    if include_appendices {
        steps.extend(Section::appendices().into_iter().map(GuidedStep::content_only));
    }

    steps
}

/// First step index carrying the given question id, if its step exists.
pub fn step_for_question(steps: &[GuidedStep], id: &QuestionId) -> Option<usize> {
    steps
        .iter()
        .position(|step| step.question_id.as_ref() == Some(id))
}

/// Clamp a step index to `[0, len-1]`. An empty list clamps to 0.
pub fn clamp_step_index(steps: &[GuidedStep], index: usize) -> usize {
    index.min(steps.len().saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<QuestionId> {
        raw.iter().map(|s| QuestionId::new(*s)).collect()
    }

    fn sample_parts() -> PartPlaceholders {
        let mut parts = PartPlaceholders::default();
        parts.set(Part::A, ids(&["Question_1", "Question_2"]));
        parts.set(Part::C, ids(&["Question_3"]));
        parts
    }

    #[test]
    fn test_step_zero_is_part_zero() {
        let steps = build_guided_steps(&PartPlaceholders::default(), false);
        assert_eq!(steps[0], GuidedStep::content_only(Section::PartZero));
    }

    #[test]
    fn test_empty_parts_yield_single_content_steps() {
        let steps = build_guided_steps(&PartPlaceholders::default(), false);
        // Part 0 + one content-only step per part.
        assert_eq!(steps.len(), 5);
        assert!(steps.iter().all(|s| s.question_id.is_none()));
    }

    #[test]
    fn test_placeholders_expand_in_extraction_order() {
        let steps = build_guided_steps(&sample_parts(), false);
        let labels: Vec<_> = steps
            .iter()
            .map(|s| {
                (
                    s.section.label(),
                    s.question_id.as_ref().map(|id| id.as_str().to_string()),
                )
            })
            .collect();

        assert_eq!(
            labels,
            vec![
                ("Part 0".to_string(), None),
                ("Part A".to_string(), Some("Question_1".to_string())),
                ("Part A".to_string(), Some("Question_2".to_string())),
                ("Part B".to_string(), None),
                ("Part C".to_string(), Some("Question_3".to_string())),
                ("Part D".to_string(), None),
            ]
        );
    }

    #[test]
    fn test_deterministic() {
        let parts = sample_parts();
        assert_eq!(
            build_guided_steps(&parts, true),
            build_guided_steps(&parts, true)
        );
    }

    #[test]
    fn test_appendix_toggle_only_appends_at_tail() {
        let parts = sample_parts();
        let without = build_guided_steps(&parts, false);
        let with = build_guided_steps(&parts, true);

        assert_eq!(&with[..without.len()], &without[..]);
        assert_eq!(with.len(), without.len() + 3);
        assert!(with[without.len()..]
            .iter()
            .all(|s| s.section.is_appendix() && s.question_id.is_none()));
    }

    #[test]
    fn test_step_for_question() {
        let steps = build_guided_steps(&sample_parts(), false);
        assert_eq!(
            step_for_question(&steps, &QuestionId::new("Question_2")),
            Some(2)
        );
        assert_eq!(step_for_question(&steps, &QuestionId::new("Question_9")), None);
    }

    #[test]
    fn test_clamp() {
        let steps = build_guided_steps(&sample_parts(), false);
        assert_eq!(clamp_step_index(&steps, 0), 0);
        assert_eq!(clamp_step_index(&steps, 100), steps.len() - 1);
        assert_eq!(clamp_step_index(&[], 3), 0);
    }

    #[test]
    fn test_duplicate_placeholder_keeps_both_steps() {
        let mut parts = PartPlaceholders::default();
        parts.set(Part::B, ids(&["Question_1", "Question_1"]));
        let steps = build_guided_steps(&parts, false);
        let in_b: Vec<_> = steps
            .iter()
            .filter(|s| s.section == Section::Part(Part::B))
            .collect();
        assert_eq!(in_b.len(), 2);
        // step_for_question resolves to the first occurrence.
        assert_eq!(
            step_for_question(&steps, &QuestionId::new("Question_1")),
            Some(2)
        );
    }
}
