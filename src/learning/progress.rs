//! Section bookmark and completion tracking
//!
//! Bookmarks toggle; completion only ever grows. The two sets are independent
//! and never gate access to any section.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::ids::SectionId;

/// Completed and bookmarked sections for one learning session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressTracker {
    /// Sections marked complete
    #[serde(default)]
    completed: BTreeSet<SectionId>,

    /// Sections currently bookmarked
    #[serde(default)]
    bookmarks: BTreeSet<SectionId>,
}

impl ProgressTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the section to the bookmarks if absent, remove it otherwise
    pub fn toggle_bookmark(&mut self, section: impl Into<SectionId>) {
        let section = section.into();
        if self.bookmarks.remove(&section) {
            tracing::debug!("Removed bookmark {}", section);
        } else {
            tracing::debug!("Bookmarked {}", section);
            self.bookmarks.insert(section);
        }
    }

    /// Mark the section complete. Repeated calls have no further effect.
    pub fn mark_complete(&mut self, section: impl Into<SectionId>) {
        let section = section.into();
        if !self.completed.contains(&section) {
            tracing::debug!("Marked {} complete", section);
            self.completed.insert(section);
        }
    }

    /// True if the section is currently bookmarked
    pub fn is_bookmarked(&self, section: &str) -> bool {
        self.bookmarks.contains(section)
    }

    /// True if the section has been marked complete
    pub fn is_complete(&self, section: &str) -> bool {
        self.completed.contains(section)
    }

    /// Number of completed sections
    pub fn completion_count(&self) -> usize {
        self.completed.len()
    }

    /// Bookmarked sections in sorted order
    pub fn bookmarks(&self) -> impl Iterator<Item = &SectionId> {
        self.bookmarks.iter()
    }

    /// Completed sections in sorted order
    pub fn completed(&self) -> impl Iterator<Item = &SectionId> {
        self.completed.iter()
    }

    /// Observational "X/Y sections complete" ratio against an externally supplied total
    pub fn summary(&self, total_sections: usize) -> ProgressSummary {
        ProgressSummary { completed: self.completion_count(), total: total_sections }
    }
}

/// Completion ratio for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: usize,
}

impl ProgressSummary {
    /// Completion percentage (0-100), 0 when there are no sections
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed.min(self.total) * 100) / self.total) as u8
    }
}

impl fmt::Display for ProgressSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} sections complete", self.completed, self.total)
    }
}
