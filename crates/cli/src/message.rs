//! Bounded status log shown at the bottom of every screen.
use std::collections::VecDeque;

/// Severity of a status line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Error,
}

/// One status line.
#[derive(Clone, Debug)]
pub struct MessageEntry {
    pub text: String,
    pub level: MessageLevel,
}

/// Circular buffer of status lines.
///
/// Controller failures land here so the user sees why an action did
/// nothing; the log never blocks or fails.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push_info(&mut self, text: impl Into<String>) {
        self.push(text.into(), MessageLevel::Info);
    }

    pub fn push_error(&mut self, text: impl Into<String>) {
        self.push(text.into(), MessageLevel::Error);
    }

    fn push(&mut self, text: String, level: MessageLevel) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(MessageEntry { text, level });
    }

    /// Most recent entries, newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }
}
