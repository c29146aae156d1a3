//! Learning core: section progress, quiz evaluation and reading progress
//!
//! The three components are independent of each other and of any
//! presentation layer. A page composes them for one pillar.

pub mod error;
pub mod ids;
pub mod progress;
pub mod quiz;
pub mod scroll;

// Re-exports
pub use error::LearningError;
pub use ids::SectionId;
pub use progress::{ProgressSummary, ProgressTracker};
pub use quiz::{AnswerSheet, OptionFeedback, QuizEngine, QuizQuestion, QuizResult, QuizState};
pub use scroll::{ScrollState, compute_progress};
