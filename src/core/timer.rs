/// Scheduled-delay abstraction for cosmetic pacing.
///
/// All "wait a moment, then move on" beats (quiz feedback display, the
/// return-to-menu pause after a chapter completes) run through this
/// countdown so the control flow stays tick-driven and testable.

/// Seconds the quiz feedback (correct/incorrect reveal) stays on screen.
pub const QUIZ_FEEDBACK_SECS: f32 = 3.0;
/// Seconds between finishing a chapter and returning to the menu.
pub const MENU_RETURN_SECS: f32 = 2.0;

/// A one-shot countdown driven by the tick loop. Fires exactly once.
#[derive(Debug, Clone, Copy, Default)]
pub struct PacingTimer {
    remaining: Option<f32>,
}

impl PacingTimer {
    pub fn idle() -> Self {
        Self::default()
    }

    /// Start (or restart) the countdown.
    pub fn start(&mut self, seconds: f32) {
        self.remaining = Some(seconds.max(0.0));
    }

    pub fn is_running(&self) -> bool {
        self.remaining.is_some()
    }

    /// Advance by `dt` seconds. Returns true on the tick the countdown
    /// elapses; subsequent ticks return false until restarted.
    pub fn tick(&mut self, dt: f32) -> bool {
        match self.remaining {
            Some(left) => {
                let left = left - dt;
                if left <= 0.0 {
                    self.remaining = None;
                    true
                } else {
                    self.remaining = Some(left);
                    false
                }
            }
            None => false,
        }
    }

    /// Drop any pending countdown without firing.
    pub fn cancel(&mut self) {
        self.remaining = None;
    }
}
