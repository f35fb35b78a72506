//! Domain error types

use crate::catalog::entities::QuestionId;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Question not found in catalog: {0}")]
    UnknownQuestion(QuestionId),

    #[error("Question {id} is not a table item and has no rows to compute")]
    NotATable { id: QuestionId },

    #[error("Invalid section name: {0}")]
    InvalidSection(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_question_display() {
        let error = DomainError::UnknownQuestion(QuestionId::new("Question_9"));
        assert_eq!(
            error.to_string(),
            "Question not found in catalog: Question_9"
        );
    }
}
