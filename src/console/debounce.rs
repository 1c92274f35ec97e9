//! Quiet-period tracking for the search box.

use chrono::{DateTime, TimeDelta, Utc};

/// Fires once no keystroke has arrived for `delay`.
#[derive(Clone, Debug)]
pub struct SearchDebounce {
    delay: TimeDelta,
    deadline: Option<DateTime<Utc>>,
}

impl SearchDebounce {
    pub fn new(delay_ms: u64) -> Self {
        let delay = i64::try_from(delay_ms)
            .ok()
            .and_then(TimeDelta::try_milliseconds)
            .unwrap_or(TimeDelta::MAX);
        Self {
            delay,
            deadline: None,
        }
    }

    /// Restarts the quiet period at `now`.
    pub fn arm(&mut self, now: DateTime<Utc>) {
        self.deadline = now.checked_add_signed(self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Disarms and returns `true` when the deadline has passed at `now`.
    pub fn fire(&mut self, now: DateTime<Utc>) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
