//! Finwise - financial literacy learning core
//!
//! Finwise tracks which sections of a pillar a learner has bookmarked or
//! completed, grades the end-of-pillar quizzes, and turns scroll position into
//! reading progress. A small CLI drives these from the terminal.

pub mod app;
pub mod config;
pub mod curriculum;
pub mod learning;

pub use app::App;
pub use config::Config;
pub use learning::{ProgressTracker, QuizEngine, compute_progress};
