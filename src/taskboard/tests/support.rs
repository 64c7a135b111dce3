//! Shared helpers for taskboard tests.

use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use std::sync::Mutex;

/// Clock whose reading the test advances by hand.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Creates a clock fixed at a mid-January 2025 instant.
    pub fn fixed() -> Self {
        Self {
            now: Mutex::new(DateTime::from_timestamp(1_736_899_200, 0).expect("valid timestamp")),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.lock().expect("clock lock");
        *now += delta;
    }
}

impl Clock for ManualClock {
    fn local(&self) -> DateTime<chrono::Local> {
        self.utc().with_timezone(&chrono::Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock lock")
    }
}
