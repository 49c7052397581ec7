//! Keypad event source

use std::collections::VecDeque;

/// Raw key code reported by the keypad scanner
pub type KeyCode = u8;

pub trait KeySource {
    /// Key presses since the last poll, oldest first. May be empty.
    fn poll_events(&mut self) -> Vec<KeyCode>;
}

/// Replays a fixed sequence of poll results, then reports nothing
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeypad {
    batches: VecDeque<Vec<KeyCode>>,
    polls: usize,
}

impl ScriptedKeypad {
    pub fn new<I>(batches: I) -> Self
    where
        I: IntoIterator<Item = Vec<KeyCode>>,
    {
        Self {
            batches: batches.into_iter().collect(),
            polls: 0,
        }
    }

    /// A keypad nobody touches
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn push(&mut self, batch: Vec<KeyCode>) {
        self.batches.push_back(batch);
    }

    pub fn polls(&self) -> usize {
        self.polls
    }

    pub fn is_exhausted(&self) -> bool {
        self.batches.is_empty()
    }
}

impl KeySource for ScriptedKeypad {
    fn poll_events(&mut self) -> Vec<KeyCode> {
        self.polls += 1;
        self.batches.pop_front().unwrap_or_default()
    }
}
