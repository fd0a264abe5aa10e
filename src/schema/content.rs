/// Chapter content — dialogue scripts and quiz sets, loadable from RON.
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("question {index} has no options")]
    EmptyOptions { index: usize },
    #[error("question {index} marks option {correct} correct but only has {len} options")]
    CorrectOptionOutOfRange {
        index: usize,
        correct: usize,
        len: usize,
    },
    #[error("chapter has no dialogue scripts")]
    NoScripts,
}

/// An ordered dialogue script for one speaker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakerScript {
    pub speaker: String,
    pub lines: Vec<String>,
}

impl SpeakerScript {
    pub fn new(speaker: impl Into<String>, lines: &[&str]) -> Self {
        Self {
            speaker: speaker.into(),
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }
}

/// A single multiple-choice comprehension question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_option: usize,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// The ordered question set gating one chapter. Read-only during play.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuizSet {
    pub questions: Vec<QuizQuestion>,
}

impl QuizSet {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Check that every question is answerable.
    pub fn validate(&self) -> Result<(), ContentError> {
        for (index, q) in self.questions.iter().enumerate() {
            if q.options.is_empty() {
                return Err(ContentError::EmptyOptions { index });
            }
            if q.correct_option >= q.options.len() {
                return Err(ContentError::CorrectOptionOutOfRange {
                    index,
                    correct: q.correct_option,
                    len: q.options.len(),
                });
            }
        }
        Ok(())
    }
}

/// Everything one story chapter needs: a display title, one script per
/// speaker (delivery alternates between them), and the gating quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterContent {
    pub title: String,
    pub scripts: Vec<SpeakerScript>,
    pub quiz: QuizSet,
}

impl ChapterContent {
    /// Load chapter content from a RON file and validate it.
    pub fn load_from_ron(path: &Path) -> Result<ChapterContent, ContentError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse chapter content from a RON string and validate it.
    pub fn parse_ron(input: &str) -> Result<ChapterContent, ContentError> {
        let content: ChapterContent = ron::from_str(input)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.scripts.is_empty() {
            return Err(ContentError::NoScripts);
        }
        self.quiz.validate()
    }

    /// Total line count across all speakers.
    pub fn line_count(&self) -> usize {
        self.scripts.iter().map(|s| s.lines.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_content() -> ChapterContent {
        ChapterContent {
            title: "Test Chapter".to_string(),
            scripts: vec![
                SpeakerScript::new("Alice", &["First line.", "Third line."]),
                SpeakerScript::new("Bob", &["Second line."]),
            ],
            quiz: QuizSet {
                questions: vec![QuizQuestion {
                    prompt: "Who spoke first?".to_string(),
                    options: vec!["Alice".to_string(), "Bob".to_string()],
                    correct_option: 0,
                    explanation: Some("Alice opens the scene.".to_string()),
                }],
            },
        }
    }

    #[test]
    fn validate_accepts_well_formed_content() {
        assert!(make_content().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_options() {
        let mut content = make_content();
        content.quiz.questions[0].options.clear();
        assert!(matches!(
            content.validate(),
            Err(ContentError::EmptyOptions { index: 0 })
        ));
    }

    #[test]
    fn validate_rejects_out_of_range_correct_option() {
        let mut content = make_content();
        content.quiz.questions[0].correct_option = 5;
        assert!(matches!(
            content.validate(),
            Err(ContentError::CorrectOptionOutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn validate_rejects_scriptless_chapter() {
        let mut content = make_content();
        content.scripts.clear();
        assert!(matches!(content.validate(), Err(ContentError::NoScripts)));
    }

    #[test]
    fn line_count_sums_speakers() {
        assert_eq!(make_content().line_count(), 3);
    }

    #[test]
    fn ron_round_trip() {
        let content = make_content();
        let serialized = ron::to_string(&content).unwrap();
        let parsed = ChapterContent::parse_ron(&serialized).unwrap();
        assert_eq!(parsed.title, "Test Chapter");
        assert_eq!(parsed.scripts.len(), 2);
        assert_eq!(parsed.quiz.len(), 1);
    }

    #[test]
    fn parse_ron_rejects_invalid_quiz() {
        let content = ChapterContent {
            quiz: QuizSet {
                questions: vec![QuizQuestion {
                    prompt: "broken".to_string(),
                    options: vec!["only".to_string()],
                    correct_option: 3,
                    explanation: None,
                }],
            },
            ..make_content()
        };
        let serialized = ron::to_string(&content).unwrap();
        assert!(ChapterContent::parse_ron(&serialized).is_err());
    }
}
