//! Pillar descriptors
//!
//! A curriculum is an ordered list of pillars (top-level topics such as
//! "Banking" or "Insurance"). Each pillar lists its sections in display order
//! and carries the quiz shown at the end of the page.

use serde::{Deserialize, Serialize};

use crate::learning::{QuizQuestion, SectionId};

/// A section within a pillar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRef {
    /// Key used for bookmark and completion tracking
    pub id: SectionId,
    /// Display title
    pub title: String,
}

impl SectionRef {
    pub fn new(id: impl Into<SectionId>, title: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into() }
    }
}

/// A top-level learning topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pillar {
    /// Numeric identifier, unique within the curriculum
    pub id: u32,
    /// Display title
    pub title: String,
    /// Short summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Sections in display order
    #[serde(default)]
    pub sections: Vec<SectionRef>,
    /// End-of-page quiz
    #[serde(default)]
    pub quiz: Vec<QuizQuestion>,
}

impl Pillar {
    /// Create an empty pillar
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            sections: Vec::new(),
            quiz: Vec::new(),
        }
    }

    /// Total sections, the denominator of "X/Y sections complete"
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Find a section by its id
    pub fn section(&self, id: &str) -> Option<&SectionRef> {
        self.sections.iter().find(|s| s.id.as_str() == id)
    }

    pub fn has_quiz(&self) -> bool {
        !self.quiz.is_empty()
    }
}

/// Ordered pillar descriptors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curriculum {
    /// Pillars in display order
    pub pillars: Vec<Pillar>,
}

impl Curriculum {
    /// Look up a pillar by numeric id
    pub fn pillar(&self, id: u32) -> Option<&Pillar> {
        self.pillars.iter().find(|p| p.id == id)
    }

    /// Total section count across all pillars
    pub fn section_count(&self) -> usize {
        self.pillars.iter().map(Pillar::section_count).sum()
    }
}
