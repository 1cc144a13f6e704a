//! Gate sequence tracker.
//!
//! Keeps the display string and gates further input once the logical token
//! count reaches capacity. Counting is a character heuristic over the display:
//! every character counts once, minus one per `R` and per `D`, which folds the
//! two-character symbols (`RX`, `RY`, `RZ`, `SD`, `TD`) into one unit. It only
//! holds because every symbol comes from the fixed [`GateToken`] alphabet.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::token::GateToken;

/// Default number of logical tokens before input locks.
pub const DEFAULT_CAPACITY: usize = 10;

/// Input state of the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackerState {
    /// Gate input accepted.
    Open,
    /// Capacity reached; gate input refused until cleared.
    Locked,
}

/// Counts logical gate tokens and locks at capacity.
#[derive(Debug, Clone)]
pub struct GateSequenceTracker {
    display: String,
    state: TrackerState,
    capacity: usize,
}

impl GateSequenceTracker {
    /// Create an open tracker with an empty display.
    pub fn new(capacity: usize) -> Self {
        Self {
            display: String::new(),
            state: TrackerState::Open,
            capacity,
        }
    }

    /// Append a token and return the new logical count.
    ///
    /// Returns `None` without touching the display while locked.
    pub fn record(&mut self, token: GateToken) -> Option<usize> {
        if self.state == TrackerState::Locked {
            debug!(%token, "tracker locked, token refused");
            return None;
        }

        self.display.push_str(token.symbol());
        let count = self.logical_count();
        // `>=`: a multi-symbol append may step past the threshold.
        if count >= self.capacity {
            info!(count, capacity = self.capacity, "gate capacity reached, input locked");
            self.state = TrackerState::Locked;
        }
        Some(count)
    }

    /// Empty the display and reopen input.
    pub fn clear(&mut self) {
        self.display.clear();
        self.state = TrackerState::Open;
    }

    /// Logical token count of the current display.
    pub fn logical_count(&self) -> usize {
        logical_count(&self.display)
    }

    /// The accumulated display string.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_locked(&self) -> bool {
        self.state == TrackerState::Locked
    }
}

impl Default for GateSequenceTracker {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Character count of `display` minus the number of `R` and `D` characters.
pub fn logical_count(display: &str) -> usize {
    let chars = display.chars().count();
    let doubles = display.chars().filter(|c| matches!(c, 'R' | 'D')).count();
    chars - doubles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_count() {
        assert_eq!(logical_count(""), 0);
        assert_eq!(logical_count("HXRZ"), 3);
        assert_eq!(logical_count("SDTDRXRY"), 4);
        assert_eq!(logical_count("XYZSTH"), 6);
    }

    #[test]
    fn test_locks_at_capacity() {
        let mut tracker = GateSequenceTracker::default();
        for i in 1..=9 {
            assert_eq!(tracker.record(GateToken::X), Some(i));
            assert_eq!(tracker.state(), TrackerState::Open);
        }
        assert_eq!(tracker.record(GateToken::H), Some(10));
        assert!(tracker.is_locked());

        assert_eq!(tracker.record(GateToken::T), None);
        assert_eq!(tracker.display(), "XXXXXXXXXH");
    }

    #[test]
    fn test_two_character_tenth_token_counts_once() {
        let mut tracker = GateSequenceTracker::default();
        for _ in 0..9 {
            tracker.record(GateToken::Z);
        }
        assert_eq!(tracker.record(GateToken::Rx), Some(10));
        assert!(tracker.is_locked());
        assert_eq!(tracker.display().len(), 11);
    }

    #[test]
    fn test_clear_reopens() {
        let mut tracker = GateSequenceTracker::new(2);
        tracker.record(GateToken::Sd);
        tracker.record(GateToken::Td);
        assert!(tracker.is_locked());

        tracker.clear();
        assert_eq!(tracker.state(), TrackerState::Open);
        assert_eq!(tracker.display(), "");
        assert_eq!(tracker.record(GateToken::S), Some(1));
    }
}
