/// Quiz control — one question at a time, one answer per question, full-set
/// retry on a miss.
use crate::schema::content::{QuizQuestion, QuizSet};

/// Where the controller is within a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Idle,
    /// Waiting for an answer to the question at this index.
    Presenting(usize),
    /// An answer was evaluated; waiting for `proceed`.
    Answered { question: usize, correct: bool },
}

/// Result of submitting an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The answer was evaluated. The surface should reveal
    /// `correct_option` and lock further input.
    Evaluated { correct: bool, correct_option: usize },
    /// Not currently accepting answers (already answered, or idle).
    Ignored,
}

/// What happens after the feedback beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAdvance {
    /// Present the question at this index next.
    Next(usize),
    /// A miss sends the session back to question 0.
    Restarted,
    /// Every question answered correctly; emitted once per session.
    Passed,
    /// Nothing pending.
    Idle,
}

/// Steps an ordered question set: correct answers advance, an incorrect
/// answer restarts the whole set, and finishing the last question
/// correctly reports a pass exactly once.
#[derive(Debug, Clone)]
pub struct QuizController {
    set: QuizSet,
    phase: QuizPhase,
}

impl QuizController {
    pub fn new(set: QuizSet) -> Self {
        Self {
            set,
            phase: QuizPhase::Idle,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// Start (or restart) the session at question 0. Returns the first
    /// question, or `None` for an empty set.
    pub fn begin(&mut self) -> Option<&QuizQuestion> {
        if self.set.is_empty() {
            self.phase = QuizPhase::Idle;
            return None;
        }
        self.phase = QuizPhase::Presenting(0);
        self.set.questions.first()
    }

    /// The question currently awaiting an answer or feedback.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.phase {
            QuizPhase::Presenting(i) | QuizPhase::Answered { question: i, .. } => {
                self.set.questions.get(i)
            }
            QuizPhase::Idle => None,
        }
    }

    /// Evaluate a selected option. Exactly one answer is accepted per
    /// presented question; anything else is a silent no-op.
    pub fn select(&mut self, option: usize) -> AnswerOutcome {
        let QuizPhase::Presenting(index) = self.phase else {
            return AnswerOutcome::Ignored;
        };
        let Some(question) = self.set.questions.get(index) else {
            return AnswerOutcome::Ignored;
        };
        let correct = option == question.correct_option;
        self.phase = QuizPhase::Answered {
            question: index,
            correct,
        };
        AnswerOutcome::Evaluated {
            correct,
            correct_option: question.correct_option,
        }
    }

    /// Consume the answered latch and move the session along. The caller
    /// invokes this after the feedback beat.
    pub fn proceed(&mut self) -> QuizAdvance {
        let QuizPhase::Answered { question, correct } = self.phase else {
            return QuizAdvance::Idle;
        };
        if !correct {
            self.phase = QuizPhase::Presenting(0);
            return QuizAdvance::Restarted;
        }
        let next = question + 1;
        if next >= self.set.len() {
            self.phase = QuizPhase::Idle;
            QuizAdvance::Passed
        } else {
            self.phase = QuizPhase::Presenting(next);
            QuizAdvance::Next(next)
        }
    }
}
