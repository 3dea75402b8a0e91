//! Traversal domain: jump charge accounting.

use bevy::prelude::*;

/// Counts jumps spent since the last landing.
///
/// `num_jumps` is not clamped to `max_jumps`; requests are gated on
/// `num_jumps < max_jumps` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpBudget {
    num_jumps: u32,
    max_jumps: u32,
}

impl Default for JumpBudget {
    fn default() -> Self {
        Self {
            num_jumps: 0,
            max_jumps: 1,
        }
    }
}

impl JumpBudget {
    pub fn new(max_jumps: u32) -> Self {
        Self {
            num_jumps: 0,
            max_jumps,
        }
    }

    pub fn num_jumps(&self) -> u32 {
        self.num_jumps
    }

    pub fn max_jumps(&self) -> u32 {
        self.max_jumps
    }

    pub fn can_jump(&self) -> bool {
        self.num_jumps < self.max_jumps
    }

    pub fn set_max_jumps(&mut self, air_jump_enabled: bool) {
        self.max_jumps = if air_jump_enabled { 2 } else { 1 };
    }

    /// Spend a jump charge if one remains.
    ///
    /// Walking off a ledge counts as having jumped once already, so the first
    /// jump while falling with no prior jump spends two charges.
    pub fn try_jump(&mut self, is_falling: bool) -> bool {
        if !self.can_jump() {
            return false;
        }

        let fell_off_ledge = is_falling && self.num_jumps == 0;
        self.num_jumps += 1;
        if fell_off_ledge {
            self.num_jumps += 1;
        }

        debug!(
            "Jump charge spent: num_jumps={}, max_jumps={}, fell_off_ledge={}",
            self.num_jumps, self.max_jumps, fell_off_ledge
        );
        true
    }

    /// Count a jump off a wall. Always succeeds; callers reset first.
    pub fn consume_wall_jump(&mut self) {
        self.num_jumps += 1;
    }

    pub fn reset(&mut self) {
        self.num_jumps = 0;
    }
}
