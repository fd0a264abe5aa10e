/// Input collaborator — edge-triggered advance/cancel signals.
///
/// The engine never polls devices itself; a host integration implements
/// `InputSource` over its own keyboard/pointer handling. Signals are edges,
/// not levels: a held key reports once, on the press transition, and each
/// snapshot is consumed by exactly one tick.

/// The discrete signals one tick may consume. At most one of each per
/// tick; `cancel` always wins when both are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub advance: bool,
    pub cancel: bool,
}

impl InputSnapshot {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn advance() -> Self {
        Self {
            advance: true,
            cancel: false,
        }
    }

    pub fn cancel() -> Self {
        Self {
            advance: false,
            cancel: true,
        }
    }
}

/// Produces one snapshot per tick and resets its edges after the read.
pub trait InputSource {
    fn poll(&mut self) -> InputSnapshot;
}

/// Queue-backed input for tests and scripted demos. Each `poll` pops the
/// front snapshot; an empty queue reports no signals.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    queue: std::collections::VecDeque<InputSnapshot>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: InputSnapshot) {
        self.queue.push_back(snapshot);
    }

    /// Queue `count` advance presses.
    pub fn push_advances(&mut self, count: usize) {
        for _ in 0..count {
            self.push(InputSnapshot::advance());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputSnapshot {
        self.queue.pop_front().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_input_drains_in_order() {
        let mut input = ScriptedInput::new();
        input.push(InputSnapshot::advance());
        input.push(InputSnapshot::cancel());

        assert_eq!(input.poll(), InputSnapshot::advance());
        assert_eq!(input.poll(), InputSnapshot::cancel());
        assert_eq!(input.poll(), InputSnapshot::none());
        assert_eq!(input.poll(), InputSnapshot::none());
    }

    #[test]
    fn push_advances_queues_count() {
        let mut input = ScriptedInput::new();
        input.push_advances(3);
        for _ in 0..3 {
            assert!(input.poll().advance);
        }
        assert!(input.is_empty());
    }
}
