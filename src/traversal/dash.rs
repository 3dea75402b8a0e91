//! Traversal domain: dash impulse and friction recovery.

use bevy::prelude::*;

use crate::core::Scheduler;
use crate::traversal::{CharacterBody, TraversalTimer, TraversalTuning, surface::horizontal};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DashPhase {
    #[default]
    Ready,
    /// Friction is suppressed until the cooldown timer fires.
    Recovering,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DashController {
    phase: DashPhase,
}

impl DashController {
    pub fn is_recovering(&self) -> bool {
        self.phase == DashPhase::Recovering
    }

    /// Launch along the current horizontal velocity.
    ///
    /// Returns the launch velocity, or `None` when disabled or still recovering.
    pub fn try_dash(
        &mut self,
        enabled: bool,
        body: &mut impl CharacterBody,
        timers: &mut impl Scheduler<TraversalTimer>,
        tuning: &TraversalTuning,
    ) -> Option<Vec3> {
        if !enabled || self.is_recovering() {
            return None;
        }

        let launch = horizontal(body.velocity()) * tuning.dash_multiplier;
        body.set_ground_friction(0.0);
        body.launch(launch, true, true);

        self.phase = DashPhase::Recovering;
        timers.start(TraversalTimer::DashCooldown, tuning.dash_cooldown, false);

        debug!("Dash: launch={:?}, cooldown={}", launch, tuning.dash_cooldown);
        Some(launch)
    }

    /// Cooldown expiry: restore friction and stop dead.
    ///
    /// Returns false when no dash was recovering.
    pub fn finish(&mut self, body: &mut impl CharacterBody, tuning: &TraversalTuning) -> bool {
        if !self.is_recovering() {
            return false;
        }

        self.phase = DashPhase::Ready;
        body.set_ground_friction(tuning.ground_friction);
        body.stop_horizontal();
        debug!("Dash recovered: friction={}", tuning.ground_friction);
        true
    }

    /// Abort a pending recovery without stopping the body.
    pub fn cancel(
        &mut self,
        body: &mut impl CharacterBody,
        timers: &mut impl Scheduler<TraversalTimer>,
        tuning: &TraversalTuning,
    ) {
        timers.clear(TraversalTimer::DashCooldown);
        if self.is_recovering() {
            self.phase = DashPhase::Ready;
            body.set_ground_friction(tuning.ground_friction);
        }
    }
}
