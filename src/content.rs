//! Built-in chapter content: the nativity scripts and their quiz sets.
//!
//! Hosts can override any chapter by loading a `ChapterContent` RON file
//! instead; these are the defaults the game ships with.

use rustc_hash::FxHashMap;

use crate::schema::chapter::ChapterId;
use crate::schema::content::{ChapterContent, QuizQuestion, QuizSet, SpeakerScript};

/// Content for every chapter, keyed by id.
pub fn builtin() -> FxHashMap<ChapterId, ChapterContent> {
    let mut map = FxHashMap::default();
    for id in ChapterId::CANONICAL_ORDER {
        map.insert(id, builtin_chapter(id));
    }
    map
}

/// The shipped content for one chapter.
pub fn builtin_chapter(id: ChapterId) -> ChapterContent {
    match id {
        ChapterId::MaryJoseph => mary_joseph(),
        ChapterId::Innkeeper => innkeeper(),
        ChapterId::Shepherds => shepherds(),
        ChapterId::WiseMen => wise_men(),
    }
}

fn question(
    prompt: &str,
    options: &[&str],
    correct_option: usize,
    explanation: &str,
) -> QuizQuestion {
    QuizQuestion {
        prompt: prompt.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_option,
        explanation: Some(explanation.to_string()),
    }
}

fn mary_joseph() -> ChapterContent {
    ChapterContent {
        title: ChapterId::MaryJoseph.title().to_string(),
        scripts: vec![
            SpeakerScript::new(
                "Mary",
                &[
                    "I am Mary, chosen to bear God's son.",
                    "An angel appeared to me, bringing news that changed my life forever.",
                    "Though I was afraid, I trusted in the Lord's plan.",
                    "I said, 'I am the Lord's servant. May it be as you have said.'",
                    "The journey to Bethlehem was long and difficult, but I knew this child was special.",
                    "When Jesus was born, my heart was filled with joy and wonder.",
                ],
            ),
            SpeakerScript::new(
                "Joseph",
                &[
                    "I am Joseph, a carpenter from Nazareth.",
                    "When I learned Mary was with child, I was troubled.",
                    "But an angel came to me in a dream, saying 'Do not be afraid to take Mary as your wife.'",
                    "The angel told me the child would save His people from their sins.",
                    "I vowed to protect Mary and the child with all my strength.",
                    "Finding no room at the inn was difficult, but God provided a stable for us.",
                ],
            ),
        ],
        quiz: QuizSet {
            questions: vec![
                question(
                    "Who brought Mary the news that she would bear God's son?",
                    &["An angel", "A shepherd", "King Herod", "The innkeeper"],
                    0,
                    "An angel appeared to Mary with the news that changed her life.",
                ),
                question(
                    "What was Joseph's trade?",
                    &["Fisherman", "Carpenter", "Shepherd", "Innkeeper"],
                    1,
                    "Joseph was a carpenter from Nazareth.",
                ),
            ],
        },
    }
}

fn innkeeper() -> ChapterContent {
    ChapterContent {
        title: ChapterId::Innkeeper.title().to_string(),
        scripts: vec![SpeakerScript::new(
            "Innkeeper",
            &[
                "I am the innkeeper of Bethlehem.",
                "That night, so many travelers came seeking shelter.",
                "The census had brought countless people to register in their ancestral town.",
                "When Mary and Joseph arrived, I had no rooms left.",
                "I could see they were weary, and Mary was heavy with child.",
                "I offered them the stable - it wasn't much, but it was warm and dry.",
                "Little did I know that the King of Kings would be born under my roof that night.",
            ],
        )],
        quiz: QuizSet {
            questions: vec![
                question(
                    "Why was Bethlehem so crowded that night?",
                    &["A festival", "The census", "A market day", "A wedding"],
                    1,
                    "The census brought countless people to register in their ancestral town.",
                ),
                question(
                    "Where did the innkeeper let Mary and Joseph stay?",
                    &["His last room", "The stable", "The rooftop", "A tent"],
                    1,
                    "With no rooms left, he offered them the stable - warm and dry.",
                ),
            ],
        },
    }
}

fn shepherds() -> ChapterContent {
    ChapterContent {
        title: ChapterId::Shepherds.title().to_string(),
        scripts: vec![SpeakerScript::new(
            "Shepherds",
            &[
                "We are shepherds, watching our flocks by night.",
                "The fields were quiet until the sky suddenly filled with light!",
                "An angel appeared and said, 'Do not be afraid. I bring you good news of great joy.'",
                "The angel told us a Savior had been born in Bethlehem - Christ the Lord!",
                "Then a great company of angels appeared, praising God.",
                "We ran to Bethlehem and found the baby, just as the angel said.",
                "We spread the word about this amazing child!",
            ],
        )],
        quiz: QuizSet {
            questions: vec![
                question(
                    "What were the shepherds doing when the angel appeared?",
                    &[
                        "Sleeping in town",
                        "Watching their flocks by night",
                        "Traveling to Jerusalem",
                        "Trading at the market",
                    ],
                    1,
                    "The shepherds were in the fields, watching their flocks by night.",
                ),
                question(
                    "What did the shepherds do after finding the baby?",
                    &[
                        "Kept it a secret",
                        "Spread the word",
                        "Reported to Herod",
                        "Followed the star east",
                    ],
                    1,
                    "They spread the word about the amazing child.",
                ),
            ],
        },
    }
}

fn wise_men() -> ChapterContent {
    ChapterContent {
        title: ChapterId::WiseMen.title().to_string(),
        scripts: vec![SpeakerScript::new(
            "Wise Men",
            &[
                "We are the Magi, wise men from the East.",
                "We studied the stars and saw a new star appear - brighter than all others.",
                "We knew this star signaled the birth of a great king.",
                "We traveled far, following the star to Jerusalem.",
                "King Herod asked us to find the child and report back.",
                "But the star led us to Bethlehem, to a humble place.",
                "We found the child with Mary and bowed down to worship Him.",
                "We presented our gifts: gold, frankincense, and myrrh.",
                "God warned us in a dream not to return to Herod, so we went home another way.",
            ],
        )],
        quiz: QuizSet {
            questions: vec![
                question(
                    "What sign led the wise men toward Bethlehem?",
                    &["A dream", "A new star", "A map", "A messenger"],
                    1,
                    "A new star, brighter than all others, signaled the birth of a great king.",
                ),
                question(
                    "Which gifts did the wise men present?",
                    &[
                        "Gold, frankincense, and myrrh",
                        "Silver and silk",
                        "Bread and wine",
                        "Lambs and doves",
                    ],
                    0,
                    "They presented gold, frankincense, and myrrh.",
                ),
                question(
                    "Why did the wise men go home another way?",
                    &[
                        "They were lost",
                        "God warned them in a dream",
                        "Herod banished them",
                        "The star disappeared",
                    ],
                    1,
                    "God warned them in a dream not to return to Herod.",
                ),
            ],
        },
    }
}
