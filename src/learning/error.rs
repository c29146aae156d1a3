//! Error types for the learning core

use thiserror::Error;

/// Precondition violations raised by the progress and quiz components
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LearningError {
    /// Section id is not part of the pillar's section list
    #[error("Unknown section '{0}'")]
    InvalidSectionId(String),

    /// Option is not listed for the question, or the question index is out of range
    #[error("Invalid selection for question {question}: {option}")]
    InvalidOptionSelection {
        /// Zero-based question index as supplied by the caller
        question: usize,
        /// The rejected option (label or index)
        option: String,
    },

    /// Submission attempted before every question has an answer
    #[error("Cannot submit: {answered} of {total} questions answered")]
    IncompleteAnswers {
        /// Number of questions with a selection
        answered: usize,
        /// Number of questions in the quiz
        total: usize,
    },

    /// Answers are locked until the quiz is reset
    #[error("Quiz already submitted. Reset to try again")]
    AlreadySubmitted,

    /// A quiz question is malformed
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),
}
