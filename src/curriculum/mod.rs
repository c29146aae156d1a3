//! Static curriculum: pillars, their sections, and their quizzes

pub mod model;
pub mod storage;

// Re-exports
pub use model::{Curriculum, Pillar, SectionRef};
