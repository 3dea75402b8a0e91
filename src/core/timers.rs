//! Core domain: frame-stepped timer service.

use bevy::prelude::*;
use std::fmt::Debug;
use std::time::Duration;

/// Timer service consumed by the traversal and combat domains.
///
/// Keys identify a timer slot; at most one timer is armed per key.
pub trait Scheduler<K> {
    /// Arm `key` to fire after `interval` seconds. Re-arms if already armed.
    fn start(&mut self, key: K, interval: f32, repeating: bool);

    /// Disarm `key`. No-op when nothing is armed.
    fn clear(&mut self, key: K);

    fn is_armed(&self, key: K) -> bool;

    /// Step all armed timers by `dt` and return the keys that fired, in arming order.
    fn advance(&mut self, dt: f32) -> Vec<K>;

    fn clear_all(&mut self);
}

#[derive(Debug, Clone)]
struct ArmedTimer<K> {
    key: K,
    timer: Timer,
}

/// Per-owner timer queue driven from the owner's update.
#[derive(Debug, Clone)]
pub struct TimerQueue<K> {
    timers: Vec<ArmedTimer<K>>,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self { timers: Vec::new() }
    }
}

impl<K: Copy + PartialEq + Debug> TimerQueue<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds until `key` fires, if armed.
    pub fn remaining(&self, key: K) -> Option<f32> {
        self.timers
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.timer.remaining_secs())
    }

    pub fn armed_count(&self) -> usize {
        self.timers.len()
    }
}

impl<K: Copy + PartialEq + Debug> Scheduler<K> for TimerQueue<K> {
    fn start(&mut self, key: K, interval: f32, repeating: bool) {
        let mode = if repeating {
            TimerMode::Repeating
        } else {
            TimerMode::Once
        };
        self.timers.retain(|t| t.key != key);
        self.timers.push(ArmedTimer {
            key,
            timer: Timer::from_seconds(interval.max(f32::EPSILON), mode),
        });
    }

    fn clear(&mut self, key: K) {
        self.timers.retain(|t| t.key != key);
    }

    fn is_armed(&self, key: K) -> bool {
        self.timers.iter().any(|t| t.key == key)
    }

    fn advance(&mut self, dt: f32) -> Vec<K> {
        let delta = Duration::from_secs_f32(dt.max(0.0));
        let mut fired = Vec::new();

        // A repeating timer that wraps several times in one step still reports once.
        for armed in &mut self.timers {
            if armed.timer.tick(delta).just_finished() {
                fired.push(armed.key);
            }
        }

        self.timers
            .retain(|t| t.timer.mode() == TimerMode::Repeating || !t.timer.just_finished());

        fired
    }

    fn clear_all(&mut self) {
        self.timers.clear();
    }
}
