/// Save Inspector — pretty-prints a progress save file.
///
/// Usage: save_inspector [path]
///
/// Defaults to ./nativity-progress.ron when no path is given. The file is
/// opened the same way the game opens it, so a missing or corrupt file
/// shows as fresh progress rather than an error.

use nativity_engine::core::store::{ProgressStore, SAVE_FILE_NAME};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        println!("Save Inspector — pretty-prints a progress save file.");
        println!();
        println!("Usage: save_inspector [path]");
        println!();
        println!("  path  Save file to inspect (default: ./{SAVE_FILE_NAME})");
        return;
    }

    let path = args.get(1).map(String::as_str).unwrap_or(SAVE_FILE_NAME);
    let store = ProgressStore::open(path);

    println!("Save file: {path}");
    println!("Total score: {}", store.total_score());
    println!("Completion:  {}%", store.completion_percentage());
    println!("Last played: {}", store.progress().last_played);
    println!();
    println!("Chapters:");
    for (id, story) in store.summary() {
        let lock = if story.unlocked { "unlocked" } else { "locked" };
        let dialogue = if story.completed { "done" } else { "-" };
        let quiz = if story.quiz_passed { "passed" } else { "-" };
        let stamp = story
            .completed_at
            .map(|t| t.to_string())
            .unwrap_or_else(|| "never".to_string());
        println!(
            "  {:<12} {:<9} dialogue: {:<5} quiz: {:<7} completed at: {}",
            id.to_string(),
            lock,
            dialogue,
            quiz,
            stamp
        );
    }
}
