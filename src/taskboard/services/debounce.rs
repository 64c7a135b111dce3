//! Edit-coalescing policy for the synchronizer.

use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;

/// Coalesces rapid successive edits into one durable write.
///
/// The caller notes each edit and polls [`SyncDebounce::flush_due`] from
/// its timer; a flush becomes due once the window has elapsed since the
/// last edit. The policy only reduces write frequency; it gives no
/// correctness guarantee, and an in-flight sync is never aborted when a
/// newer edit arrives. Two overlapping writes race, with the later
/// response determining final durable state.
#[derive(Debug, Clone)]
pub struct SyncDebounce {
    window: TimeDelta,
    last_edit: Option<DateTime<Utc>>,
    dirty: bool,
}

impl SyncDebounce {
    /// Default quiet window before a flush becomes due.
    pub const DEFAULT_WINDOW_MS: i64 = 750;

    /// Creates a policy with the given quiet window.
    #[must_use]
    pub const fn new(window: TimeDelta) -> Self {
        Self {
            window,
            last_edit: None,
            dirty: false,
        }
    }

    /// Creates a policy with the default window.
    #[must_use]
    pub fn with_default_window() -> Self {
        Self::new(TimeDelta::milliseconds(Self::DEFAULT_WINDOW_MS))
    }

    /// Notes that the form state changed.
    pub fn note_edit(&mut self, clock: &impl Clock) {
        self.last_edit = Some(clock.utc());
        self.dirty = true;
    }

    /// Returns whether unflushed edits are pending.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns `true` once per quiet window when pending edits should be
    /// flushed, and marks them flushed.
    pub fn flush_due(&mut self, clock: &impl Clock) -> bool {
        if !self.dirty {
            return false;
        }
        let due = self
            .last_edit
            .is_some_and(|at| clock.utc() - at >= self.window);
        if due {
            self.dirty = false;
        }
        due
    }
}

impl Default for SyncDebounce {
    fn default() -> Self {
        Self::with_default_window()
    }
}
