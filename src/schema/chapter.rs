use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for one playable story chapter.
///
/// The variant order is the canonical unlock order: passing a chapter's
/// quiz unlocks the next variant, and the first variant starts unlocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChapterId {
    MaryJoseph,
    Innkeeper,
    Shepherds,
    WiseMen,
}

impl ChapterId {
    /// All chapters in canonical unlock order.
    pub const CANONICAL_ORDER: [ChapterId; 4] = [
        ChapterId::MaryJoseph,
        ChapterId::Innkeeper,
        ChapterId::Shepherds,
        ChapterId::WiseMen,
    ];

    /// The chapter that is unlocked on a fresh save.
    pub fn first() -> ChapterId {
        Self::CANONICAL_ORDER[0]
    }

    /// The chapter unlocked by passing this one's quiz, if any.
    pub fn successor(self) -> Option<ChapterId> {
        let idx = Self::CANONICAL_ORDER.iter().position(|c| *c == self)?;
        Self::CANONICAL_ORDER.get(idx + 1).copied()
    }

    /// Display title shown in menus and the HUD.
    pub fn title(self) -> &'static str {
        match self {
            Self::MaryJoseph => "Mary & Joseph",
            Self::Innkeeper => "The Innkeeper",
            Self::Shepherds => "The Shepherds",
            Self::WiseMen => "The Wise Men",
        }
    }
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Key into the director's registry. Story chapters carry a `ChapterId`;
/// the main menu is the one scene without a progress record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneId {
    MainMenu,
    Story(ChapterId),
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MainMenu => write!(f, "MainMenu"),
            Self::Story(id) => write!(f, "{}", id),
        }
    }
}
