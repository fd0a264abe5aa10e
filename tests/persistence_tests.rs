/// Persistence integration tests — the save file across sessions.
use chrono::{TimeZone, Utc};

use nativity_engine::core::clock::FixedClock;
use nativity_engine::core::store::{ProgressStore, SAVE_FILE_NAME};
use nativity_engine::schema::chapter::ChapterId;
use nativity_engine::schema::progress::GameProgress;

fn fixed_clock() -> Box<FixedClock> {
    Box::new(FixedClock(
        Utc.with_ymd_and_hms(2024, 12, 24, 18, 0, 0).unwrap(),
    ))
}

#[test]
fn progress_survives_a_full_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(SAVE_FILE_NAME);

    {
        let mut store = ProgressStore::open_with_clock(&path, fixed_clock());
        store.complete_story(ChapterId::MaryJoseph);
        store.pass_quiz(ChapterId::MaryJoseph);
        store.complete_story(ChapterId::Innkeeper);
    }

    let store = ProgressStore::open_with_clock(&path, fixed_clock());
    assert!(store.has_passed_quiz(ChapterId::MaryJoseph));
    assert!(store.is_completed(ChapterId::Innkeeper));
    assert!(!store.has_passed_quiz(ChapterId::Innkeeper));
    assert!(store.is_unlocked(ChapterId::Innkeeper));
    assert!(!store.is_unlocked(ChapterId::Shepherds));
    assert_eq!(store.total_score(), 10);
}

#[test]
fn serialized_record_round_trips_field_for_field() {
    let now = Utc.with_ymd_and_hms(2024, 12, 24, 18, 0, 0).unwrap();
    let mut progress = GameProgress::defaults(now);
    {
        let story = progress.story_mut(ChapterId::MaryJoseph).unwrap();
        story.completed = true;
        story.quiz_passed = true;
        story.completed_at = Some(now);
    }
    progress.story_mut(ChapterId::Innkeeper).unwrap().unlocked = true;
    progress.total_score = 10;

    let serialized = ron::to_string(&progress).unwrap();
    let back: GameProgress = ron::from_str(&serialized).unwrap();
    assert_eq!(back, progress);
}

#[test]
fn repeated_mutations_keep_the_file_loadable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(SAVE_FILE_NAME);

    let mut store = ProgressStore::open_with_clock(&path, fixed_clock());
    for id in ChapterId::CANONICAL_ORDER {
        store.complete_story(id);
        store.pass_quiz(id);
    }
    store.complete_story(ChapterId::MaryJoseph); // replays must not corrupt
    drop(store);

    let store = ProgressStore::open_with_clock(&path, fixed_clock());
    assert_eq!(store.completion_percentage(), 100);
    assert_eq!(store.total_score(), 40);
}

#[test]
fn reset_is_durable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(SAVE_FILE_NAME);

    let mut store = ProgressStore::open_with_clock(&path, fixed_clock());
    store.complete_story(ChapterId::MaryJoseph);
    store.pass_quiz(ChapterId::MaryJoseph);
    store.reset_progress();
    drop(store);

    let store = ProgressStore::open_with_clock(&path, fixed_clock());
    assert!(!store.is_completed(ChapterId::MaryJoseph));
    assert!(!store.is_unlocked(ChapterId::Innkeeper));
    assert_eq!(store.total_score(), 0);
}
