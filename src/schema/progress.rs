/// Persisted progress records — per-chapter state and the save-file shape.
use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::chapter::ChapterId;

/// Completion state for a single chapter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryProgress {
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub quiz_passed: bool,
    #[serde(default)]
    pub unlocked: bool,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// The whole persisted record: one `StoryProgress` per chapter, the running
/// score, and the last-played stamp. Exactly one exists per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameProgress {
    #[serde(default)]
    pub stories: FxHashMap<ChapterId, StoryProgress>,
    #[serde(default)]
    pub total_score: u32,
    #[serde(default = "unix_epoch")]
    pub last_played: DateTime<Utc>,
}

fn unix_epoch() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

impl GameProgress {
    /// Fresh progress: only the first chapter in canonical order unlocked.
    pub fn defaults(now: DateTime<Utc>) -> Self {
        let mut stories = FxHashMap::default();
        for id in ChapterId::CANONICAL_ORDER {
            stories.insert(
                id,
                StoryProgress {
                    unlocked: id == ChapterId::first(),
                    ..StoryProgress::default()
                },
            );
        }
        Self {
            stories,
            total_score: 0,
            last_played: now,
        }
    }

    /// Merge a stored (possibly partial, possibly older-version) record over
    /// the defaults. Stored story entries win; chapters the stored record
    /// does not know about keep their default state.
    pub fn merged_over_defaults(stored: GameProgress, now: DateTime<Utc>) -> Self {
        let mut merged = Self::defaults(now);
        for (id, story) in stored.stories {
            merged.stories.insert(id, story);
        }
        merged.total_score = stored.total_score;
        merged.last_played = stored.last_played;
        merged
    }

    pub fn story(&self, id: ChapterId) -> Option<&StoryProgress> {
        self.stories.get(&id)
    }

    pub fn story_mut(&mut self, id: ChapterId) -> Option<&mut StoryProgress> {
        self.stories.get_mut(&id)
    }

    /// Percentage of chapters whose dialogue AND quiz are both done,
    /// rounded to the nearest whole number.
    pub fn completion_percentage(&self) -> u32 {
        let total = ChapterId::CANONICAL_ORDER.len() as f64;
        let done = ChapterId::CANONICAL_ORDER
            .iter()
            .filter_map(|id| self.stories.get(id))
            .filter(|s| s.completed && s.quiz_passed)
            .count() as f64;
        (done / total * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 24, 18, 0, 0).unwrap()
    }

    #[test]
    fn defaults_unlock_only_first_chapter() {
        let progress = GameProgress::defaults(now());
        assert!(progress.story(ChapterId::MaryJoseph).unwrap().unlocked);
        for id in &ChapterId::CANONICAL_ORDER[1..] {
            let story = progress.story(*id).unwrap();
            assert!(!story.unlocked, "{id} should start locked");
            assert!(!story.completed);
            assert!(!story.quiz_passed);
        }
        assert_eq!(progress.total_score, 0);
    }

    #[test]
    fn merge_fills_missing_chapters_from_defaults() {
        // A save written before Shepherds/WiseMen existed.
        let mut stored = GameProgress::defaults(now());
        stored.stories.remove(&ChapterId::Shepherds);
        stored.stories.remove(&ChapterId::WiseMen);
        stored.story_mut(ChapterId::Innkeeper).unwrap().unlocked = true;
        stored.total_score = 10;

        let merged = GameProgress::merged_over_defaults(stored, now());
        assert!(merged.story(ChapterId::Innkeeper).unwrap().unlocked);
        assert!(merged.story(ChapterId::Shepherds).is_some());
        assert!(!merged.story(ChapterId::Shepherds).unwrap().unlocked);
        assert_eq!(merged.total_score, 10);
    }

    #[test]
    fn merge_keeps_stored_entries_wholesale() {
        let mut stored = GameProgress::defaults(now());
        let story = stored.story_mut(ChapterId::MaryJoseph).unwrap();
        story.completed = true;
        story.quiz_passed = true;
        story.completed_at = Some(now());

        let merged = GameProgress::merged_over_defaults(stored, now());
        let story = merged.story(ChapterId::MaryJoseph).unwrap();
        assert!(story.completed);
        assert!(story.quiz_passed);
        assert_eq!(story.completed_at, Some(now()));
    }

    #[test]
    fn completion_percentage_counts_fully_done_chapters() {
        let mut progress = GameProgress::defaults(now());
        assert_eq!(progress.completion_percentage(), 0);

        let story = progress.story_mut(ChapterId::MaryJoseph).unwrap();
        story.completed = true;
        story.quiz_passed = true;
        assert_eq!(progress.completion_percentage(), 25);

        // Completed without the quiz does not count.
        progress.story_mut(ChapterId::Innkeeper).unwrap().completed = true;
        assert_eq!(progress.completion_percentage(), 25);
    }

    #[test]
    fn ron_round_trip_field_for_field() {
        let mut progress = GameProgress::defaults(now());
        let story = progress.story_mut(ChapterId::MaryJoseph).unwrap();
        story.completed = true;
        story.completed_at = Some(now());
        progress.total_score = 10;

        let serialized = ron::to_string(&progress).unwrap();
        let back: GameProgress = ron::from_str(&serialized).unwrap();
        assert_eq!(back, progress);
    }

    #[test]
    fn partial_record_deserializes_with_defaults() {
        // A record that only carries the score still parses.
        let back: GameProgress = ron::from_str("(total_score: 30)").unwrap();
        assert_eq!(back.total_score, 30);
        assert!(back.stories.is_empty());
        assert_eq!(back.last_played, DateTime::UNIX_EPOCH);
    }
}
