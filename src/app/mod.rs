//! Application layer: composes curriculum, progress and quizzes for the CLI

pub mod input;
pub mod quiz_session;

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::config::Config;
use crate::config::progress::ProgressStore;
use crate::curriculum::{Curriculum, Pillar};
use crate::learning::{LearningError, ProgressTracker, QuizEngine, QuizResult, ScrollState};

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    /// Pillar descriptors
    curriculum: Curriculum,

    /// Bookmarks and completion per pillar
    progress: ProgressStore,
}

impl App {
    /// Create a new application instance from the user's config
    pub fn new(config: Config) -> Result<Self> {
        let curriculum = Curriculum::load(config.curriculum_path.as_deref())?;
        let progress =
            if config.persist_progress { ProgressStore::load()? } else { ProgressStore::default() };

        tracing::info!("Loaded {} pillars", curriculum.pillars.len());
        Ok(Self::with_parts(config, curriculum, progress))
    }

    /// Assemble an application from already loaded parts
    pub fn with_parts(config: Config, curriculum: Curriculum, progress: ProgressStore) -> Self {
        Self { config, curriculum, progress }
    }

    /// Persist progress if enabled
    pub fn save(&self) -> Result<()> {
        if self.config.persist_progress {
            self.progress.save()?;
            tracing::debug!("Progress saved");
        }
        Ok(())
    }

    /// Look up a pillar by id
    pub fn pillar(&self, id: u32) -> Result<&Pillar> {
        self.curriculum.pillar(id).with_context(|| format!("No pillar with id {}", id))
    }

    /// Tracker for a pillar (empty if nothing recorded yet)
    pub fn tracker(&self, pillar_id: u32) -> ProgressTracker {
        self.progress.tracker(pillar_id).cloned().unwrap_or_default()
    }

    /// Toggle a bookmark. Returns whether the section is now bookmarked.
    pub fn toggle_bookmark(&mut self, pillar_id: u32, section: &str) -> Result<bool> {
        self.ensure_section(pillar_id, section)?;
        let tracker = self.progress.tracker_mut(pillar_id);
        tracker.toggle_bookmark(section);
        Ok(tracker.is_bookmarked(section))
    }

    /// Mark a section complete
    pub fn mark_complete(&mut self, pillar_id: u32, section: &str) -> Result<()> {
        self.ensure_section(pillar_id, section)?;
        self.progress.tracker_mut(pillar_id).mark_complete(section);
        Ok(())
    }

    fn ensure_section(&self, pillar_id: u32, section: &str) -> Result<()> {
        let pillar = self.pillar(pillar_id)?;
        if pillar.section(section).is_none() {
            return Err(LearningError::InvalidSectionId(section.to_string()))
                .with_context(|| format!("Section not found in {}", pillar.title));
        }
        Ok(())
    }

    /// Print every pillar with its completion ratio
    pub fn list_pillars<W: Write>(&self, out: &mut W) -> Result<()> {
        for pillar in &self.curriculum.pillars {
            let summary = self.tracker(pillar.id).summary(pillar.section_count());
            writeln!(out, "{:>3}  {:<28} {}", pillar.id, pillar.title, summary)?;
        }
        Ok(())
    }

    /// Print a pillar's sections with bookmark and completion markers
    pub fn list_sections<W: Write>(&self, pillar_id: u32, out: &mut W) -> Result<()> {
        let pillar = self.pillar(pillar_id)?;
        let tracker = self.tracker(pillar_id);

        writeln!(out, "{}", pillar.title)?;
        if let Some(description) = &pillar.description {
            let wrapped = textwrap::fill(description, self.config.wrap_width.max(20));
            writeln!(out, "{}", wrapped)?;
        }
        writeln!(out)?;

        for section in &pillar.sections {
            let done = if tracker.is_complete(section.id.as_str()) { "\u{2713}" } else { " " };
            let mark = if tracker.is_bookmarked(section.id.as_str()) { "\u{2605}" } else { " " };
            writeln!(out, "  [{}] {} {:<24} {}", done, mark, section.id, section.title)?;
        }

        writeln!(out)?;
        writeln!(out, "{}", tracker.summary(pillar.section_count()))?;
        Ok(())
    }

    /// Run the pillar's quiz interactively
    pub fn run_quiz<R: BufRead, W: Write>(
        &self,
        pillar_id: u32,
        reader: R,
        out: &mut W,
    ) -> Result<Option<QuizResult>> {
        let pillar = self.pillar(pillar_id)?;
        let mut engine = QuizEngine::new(pillar.quiz.clone())
            .with_context(|| format!("{} has no usable quiz", pillar.title))?;

        tracing::info!("Starting quiz for {}", pillar.title);
        let result =
            quiz_session::run(&mut engine, &pillar.title, self.config.wrap_width, reader, out)?;

        if let Some(result) = &result {
            tracing::info!("Quiz for {} finished: {}", pillar.title, result.message());
        }
        Ok(result)
    }

    /// Reading progress for a scroll position, as shown by the page progress bar
    pub fn scroll_progress(&self, scroll_offset: f64, total_scrollable_height: f64) -> f64 {
        ScrollState::new(scroll_offset, total_scrollable_height).progress_percent()
    }
}
