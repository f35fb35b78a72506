//! Domain layer for casewalk
//!
//! This crate contains the core case-study module logic: the question
//! catalog, placeholder resolution, guided navigation, response state,
//! progress accounting, the instructor gate, and export snapshots.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Placeholders
//!
//! Narrative markdown carries `[[token]]` markers. Each token normalizes
//! to a canonical `Question_<suffix>` id that joins the marker to an item
//! in the module catalog.
//!
//! ## Guided / Jump navigation
//!
//! - **Guided**: a linear walk over steps built from the per-part
//!   placeholder order (one question or content block at a time)
//! - **Jump**: free navigation to any section, all questions shown at once

pub mod catalog;
pub mod error;
pub mod export;
pub mod gate;
pub mod placeholder;
pub mod progress;
pub mod response;
pub mod section;
pub mod steps;

// Re-export commonly used types
pub use catalog::{
    entities::{ItemType, ModulePayload, Part, QuestionId, QuestionItem},
    validation::{CatalogIssue, CatalogIssueCode, RawModulePayload, RawQuestionItem, Severity},
};
pub use error::DomainError;
pub use export::{CompletionSummary, ExportSnapshot, build_snapshot};
pub use gate::{GateState, InstructorGate, UnlockAttempt};
pub use placeholder::{Segment, extract_placeholders, normalize_token, segment_text};
pub use progress::{ProgressSummary, module_progress, part_progress};
pub use response::{AnswerValue, ComputedResult, ResponseRecord, ResponseStore, TableRow};
pub use section::Section;
pub use steps::{
    GuidedStep, PartPlaceholders, build_guided_steps, clamp_step_index, step_for_question,
};
