//! Nativity Engine — a chapter-based interactive narrative engine.
//!
//! Walks a player through short story chapters, each pairing turn-based
//! character dialogue with a comprehension quiz that gates the next
//! chapter. Rendering and input stay behind narrow collaborator traits;
//! the engine owns the progression state machines and the persisted
//! progress record.

pub mod content;
pub mod core;
pub mod schema;
