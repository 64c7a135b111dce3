//! Edit-coalescing policy tests.

use super::support::ManualClock;
use crate::taskboard::services::SyncDebounce;
use chrono::TimeDelta;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> ManualClock {
    ManualClock::fixed()
}

#[rstest]
fn fresh_policy_has_nothing_to_flush(clock: ManualClock) {
    let mut debounce = SyncDebounce::with_default_window();

    assert!(!debounce.is_dirty());
    assert!(!debounce.flush_due(&clock));
}

#[rstest]
fn flush_is_not_due_inside_the_quiet_window(clock: ManualClock) {
    let mut debounce = SyncDebounce::with_default_window();
    debounce.note_edit(&clock);

    clock.advance(TimeDelta::milliseconds(SyncDebounce::DEFAULT_WINDOW_MS - 1));

    assert!(!debounce.flush_due(&clock));
    assert!(debounce.is_dirty());
}

#[rstest]
fn flush_becomes_due_after_the_quiet_window(clock: ManualClock) {
    let mut debounce = SyncDebounce::with_default_window();
    debounce.note_edit(&clock);

    clock.advance(TimeDelta::milliseconds(SyncDebounce::DEFAULT_WINDOW_MS));

    assert!(debounce.flush_due(&clock));
    assert!(!debounce.is_dirty());
    assert!(!debounce.flush_due(&clock), "a flush fires once per window");
}

#[rstest]
fn a_later_edit_restarts_the_window(clock: ManualClock) {
    let mut debounce = SyncDebounce::new(TimeDelta::milliseconds(500));
    debounce.note_edit(&clock);

    clock.advance(TimeDelta::milliseconds(400));
    debounce.note_edit(&clock);
    clock.advance(TimeDelta::milliseconds(400));

    assert!(!debounce.flush_due(&clock));
    clock.advance(TimeDelta::milliseconds(100));
    assert!(debounce.flush_due(&clock));
}
