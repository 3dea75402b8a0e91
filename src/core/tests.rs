//! Core domain: tests for the timer queue.

use super::{Scheduler, TimerQueue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    A,
    B,
}

// -----------------------------------------------------------------------------
// Single-shot timers
// -----------------------------------------------------------------------------

#[test]
fn test_single_shot_fires_once() {
    let mut timers = TimerQueue::new();
    timers.start(Slot::A, 0.25, false);
    assert!(timers.is_armed(Slot::A));

    assert!(timers.advance(0.1).is_empty());
    assert!(timers.advance(0.1).is_empty());
    assert_eq!(timers.advance(0.1), vec![Slot::A]);

    assert!(!timers.is_armed(Slot::A));
    assert!(timers.advance(1.0).is_empty());
}

#[test]
fn test_restart_rearms_from_full_interval() {
    let mut timers = TimerQueue::new();
    timers.start(Slot::A, 0.25, false);
    timers.advance(0.2);

    timers.start(Slot::A, 0.25, false);
    assert!(timers.advance(0.2).is_empty());
    assert_eq!(timers.armed_count(), 1);
    assert_eq!(timers.advance(0.1), vec![Slot::A]);
}

// -----------------------------------------------------------------------------
// Repeating timers
// -----------------------------------------------------------------------------

#[test]
fn test_repeating_timer_keeps_firing() {
    let mut timers = TimerQueue::new();
    timers.start(Slot::B, 0.25, true);

    let mut fires = 0;
    for _ in 0..10 {
        fires += timers.advance(0.125).len();
    }
    assert_eq!(fires, 5);
    assert!(timers.is_armed(Slot::B));
}

#[test]
fn test_repeating_timer_does_not_burst_on_long_frame() {
    let mut timers = TimerQueue::new();
    timers.start(Slot::B, 0.1, true);

    assert_eq!(timers.advance(1.0), vec![Slot::B]);
    let remaining = timers.remaining(Slot::B).unwrap();
    assert!(remaining > 0.0 && remaining <= 0.1);
}

#[test]
fn test_repeating_timer_keeps_cadence_after_long_frame() {
    let mut timers = TimerQueue::new();
    timers.start(Slot::B, 0.25, true);

    assert_eq!(timers.advance(1.0), vec![Slot::B]);
    assert_eq!(timers.remaining(Slot::B), Some(0.25));

    assert!(timers.advance(0.125).is_empty());
    assert_eq!(timers.advance(0.125), vec![Slot::B]);
}

#[test]
fn test_single_shot_long_frame_fires_once() {
    let mut timers = TimerQueue::new();
    timers.start(Slot::A, 0.25, false);

    assert_eq!(timers.advance(5.0), vec![Slot::A]);
    assert!(!timers.is_armed(Slot::A));
    assert_eq!(timers.remaining(Slot::A), None);
}

// -----------------------------------------------------------------------------
// Clearing
// -----------------------------------------------------------------------------

#[test]
fn test_clear_unarmed_is_noop() {
    let mut timers: TimerQueue<Slot> = TimerQueue::new();
    timers.clear(Slot::A);
    timers.clear(Slot::A);
    assert_eq!(timers.armed_count(), 0);
}

#[test]
fn test_clear_only_touches_its_key() {
    let mut timers = TimerQueue::new();
    timers.start(Slot::A, 0.1, false);
    timers.start(Slot::B, 0.1, true);

    timers.clear(Slot::A);
    assert!(!timers.is_armed(Slot::A));
    assert!(timers.is_armed(Slot::B));
    assert_eq!(timers.advance(0.1), vec![Slot::B]);
}

#[test]
fn test_clear_all() {
    let mut timers = TimerQueue::new();
    timers.start(Slot::A, 0.1, false);
    timers.start(Slot::B, 0.1, true);
    timers.clear_all();

    assert_eq!(timers.armed_count(), 0);
    assert!(timers.advance(1.0).is_empty());
}

#[test]
fn test_fire_order_follows_arming_order() {
    let mut timers = TimerQueue::new();
    timers.start(Slot::B, 0.1, false);
    timers.start(Slot::A, 0.1, false);
    assert_eq!(timers.advance(0.2), vec![Slot::B, Slot::A]);
}
