//! Game log shown to players.
//!
//! Bounded ring buffer: once `capacity` entries are stored, each new entry
//! evicts the oldest. Every entry is mirrored to `tracing` at debug level.

use std::collections::VecDeque;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// One line of the game log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub turn_number: u32,
    pub message: String,
    pub timestamp: SystemTime,
}

/// Append-only, bounded game log.
#[derive(Clone, Debug)]
pub struct GameLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl GameLog {
    /// Create an empty log holding at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Append a message.
    pub fn push(&mut self, turn_number: u32, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(turn = turn_number, "{}", message);

        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            turn_number,
            message,
            timestamp: SystemTime::now(),
        });
    }

    /// Entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Owned copy of all entries, oldest first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_read() {
        let mut log = GameLog::new(10);
        log.push(1, "first");
        log.push(2, String::from("second"));

        assert_eq!(log.len(), 2);
        let messages: Vec<_> = log.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
        assert_eq!(log.last().map(|e| e.turn_number), Some(2));
    }

    #[test]
    fn test_evicts_oldest() {
        let mut log = GameLog::new(3);
        for i in 0..5 {
            log.push(i, format!("entry {}", i));
        }

        assert_eq!(log.len(), 3);
        let messages: Vec<_> = log.to_vec().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["entry 2", "entry 3", "entry 4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut log = GameLog::new(0);
        log.push(1, "dropped");
        assert!(log.is_empty());
    }
}
