/// Progress persistence — the one shared record of what the player has
/// finished, unlocked, and scored.
///
/// Explicitly constructed and handed to whoever needs it; never a global.
/// Reads fall back to defaults, writes flush synchronously on every
/// mutation, and no I/O failure ever reaches gameplay — the in-memory
/// record stays authoritative for the session.
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use thiserror::Error;

use crate::core::clock::{Clock, SystemClock};
use crate::schema::chapter::ChapterId;
use crate::schema::progress::{GameProgress, StoryProgress};

/// Default save-file name, relative to the host's data directory.
pub const SAVE_FILE_NAME: &str = "nativity-progress.ron";

/// Points awarded for passing one chapter's quiz.
pub const QUIZ_SCORE_AWARD: u32 = 10;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("RON serialization error: {0}")]
    RonSer(#[from] ron::Error),
}

/// Owns the `GameProgress` record and its persistence.
pub struct ProgressStore {
    path: Option<PathBuf>,
    progress: GameProgress,
    clock: Box<dyn Clock>,
}

impl ProgressStore {
    /// Open a store backed by a file, loading any prior progress. Missing
    /// or corrupt data counts as "no progress yet", never as an error.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::open_with_clock(path, Box::new(SystemClock))
    }

    pub fn open_with_clock(path: impl Into<PathBuf>, clock: Box<dyn Clock>) -> Self {
        let path = path.into();
        let progress = Self::load(&path, clock.as_ref());
        Self {
            path: Some(path),
            progress,
            clock,
        }
    }

    /// A store with no backing file. Mutations stay in memory.
    pub fn in_memory() -> Self {
        Self::in_memory_with_clock(Box::new(SystemClock))
    }

    pub fn in_memory_with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            path: None,
            progress: GameProgress::defaults(clock.now()),
            clock,
        }
    }

    fn load(path: &Path, clock: &dyn Clock) -> GameProgress {
        let now = clock.now();
        if !path.exists() {
            return GameProgress::defaults(now);
        }
        match Self::read_file(path) {
            Ok(stored) => GameProgress::merged_over_defaults(stored, now),
            Err(err) => {
                error!("failed to load progress from {}: {err}", path.display());
                GameProgress::defaults(now)
            }
        }
    }

    fn read_file(path: &Path) -> Result<GameProgress, StoreError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(ron::from_str(&contents)?)
    }

    /// Flush the record to disk. Failures are logged and swallowed.
    fn save(&mut self) {
        self.progress.last_played = self.clock.now();
        let Some(path) = &self.path else {
            return;
        };
        if let Err(err) = Self::write_file(path, &self.progress) {
            warn!("failed to save progress to {}: {err}", path.display());
        }
    }

    fn write_file(path: &Path, progress: &GameProgress) -> Result<(), StoreError> {
        let serialized = ron::to_string(progress)?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    pub fn progress(&self) -> &GameProgress {
        &self.progress
    }

    pub fn is_unlocked(&self, id: ChapterId) -> bool {
        self.progress.story(id).map_or(false, |s| s.unlocked)
    }

    pub fn is_completed(&self, id: ChapterId) -> bool {
        self.progress.story(id).map_or(false, |s| s.completed)
    }

    pub fn has_passed_quiz(&self, id: ChapterId) -> bool {
        self.progress.story(id).map_or(false, |s| s.quiz_passed)
    }

    pub fn total_score(&self) -> u32 {
        self.progress.total_score
    }

    pub fn completion_percentage(&self) -> u32 {
        self.progress.completion_percentage()
    }

    /// Mark a chapter's dialogue as finished. Safe to call again; only the
    /// completion stamp refreshes.
    pub fn complete_story(&mut self, id: ChapterId) {
        let now = self.clock.now();
        if let Some(story) = self.progress.story_mut(id) {
            story.completed = true;
            story.completed_at = Some(now);
            self.save();
        }
    }

    /// Record a quiz pass: award points and unlock the canonical successor.
    /// Calling again re-awards the points — replays are worth score.
    pub fn pass_quiz(&mut self, id: ChapterId) {
        if self.progress.story(id).is_none() {
            return;
        }
        if let Some(story) = self.progress.story_mut(id) {
            story.quiz_passed = true;
        }
        self.progress.total_score += QUIZ_SCORE_AWARD;
        if let Some(next) = id.successor() {
            if let Some(story) = self.progress.story_mut(next) {
                story.unlocked = true;
                info!("unlocked {next}");
            }
        }
        self.save();
    }

    /// Wipe everything back to a fresh record.
    pub fn reset_progress(&mut self) {
        self.progress = GameProgress::defaults(self.clock.now());
        self.save();
    }

    /// Unlock every chapter without touching completion or score.
    pub fn unlock_all_stories(&mut self) {
        for id in ChapterId::CANONICAL_ORDER {
            if let Some(story) = self.progress.story_mut(id) {
                story.unlocked = true;
            }
        }
        self.save();
    }

    /// Per-chapter status in canonical order.
    pub fn summary(&self) -> Vec<(ChapterId, StoryProgress)> {
        ChapterId::CANONICAL_ORDER
            .iter()
            .filter_map(|id| self.progress.story(*id).map(|s| (*id, s.clone())))
            .collect()
    }
}
