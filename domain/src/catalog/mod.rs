//! Question catalog: entities and payload validation

pub mod entities;
pub mod validation;

pub use entities::{ItemType, ModulePayload, Part, QuestionId, QuestionItem};
pub use validation::{CatalogIssue, CatalogIssueCode, RawModulePayload, RawQuestionItem, Severity};
