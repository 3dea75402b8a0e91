//! Traversal domain: wall-run session state machine.
//!
//! Acquisition is polled every frame while airborne; an active run is
//! re-validated on the slower cadence timer.

use bevy::prelude::*;

use crate::core::{ProbeChannel, Scheduler, SurfaceProbe};
use crate::traversal::surface::{WallSide, find_direction_and_side, is_runnable};
use crate::traversal::{CharacterBody, TraversalTimer, TraversalTuning};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WallRunState {
    #[default]
    Idle,
    Running {
        side: WallSide,
        /// Horizontal unit tangent of the wall in the direction of travel.
        direction: Vec3,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallRunEndReason {
    /// The wall ran out, stopped being runnable, or flipped sides.
    FallOffWall,
    /// Voluntary exit: a jump or a dash.
    JumpedOffWall,
    /// The body touched down mid-run.
    Landed,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WallRunSession {
    state: WallRunState,
}

impl WallRunSession {
    pub fn state(&self) -> WallRunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, WallRunState::Running { .. })
    }

    pub fn side(&self) -> Option<WallSide> {
        match self.state {
            WallRunState::Running { side, .. } => Some(side),
            WallRunState::Idle => None,
        }
    }

    pub fn direction(&self) -> Option<Vec3> {
        match self.state {
            WallRunState::Running { direction, .. } => Some(direction),
            WallRunState::Idle => None,
        }
    }

    /// Probe left then right for a runnable wall and start running on the first hit.
    pub fn try_acquire(
        &mut self,
        body: &mut impl CharacterBody,
        probe: &impl SurfaceProbe,
        timers: &mut impl Scheduler<TraversalTimer>,
        tuning: &TraversalTuning,
    ) -> bool {
        if self.is_running() || !body.is_falling() {
            return false;
        }

        let origin = body.location();
        let right = body.right();

        for lateral in [-right, right] {
            let end = origin + lateral * tuning.wall_probe_distance;
            let Some(hit) = probe.cast_ray(origin, end, ProbeChannel::WorldStatic) else {
                continue;
            };
            if !is_runnable(hit.normal, tuning.walkable_floor_angle_deg) {
                continue;
            }

            let (side, direction) = find_direction_and_side(hit.normal, right);
            self.begin(side, direction, body, timers, tuning);
            return true;
        }

        false
    }

    /// Start running from a contact normal delivered by the host.
    pub fn acquire_from_contact(
        &mut self,
        normal: Vec3,
        body: &mut impl CharacterBody,
        timers: &mut impl Scheduler<TraversalTimer>,
        tuning: &TraversalTuning,
    ) -> bool {
        if self.is_running()
            || !body.is_falling()
            || !is_runnable(normal, tuning.walkable_floor_angle_deg)
        {
            return false;
        }

        let (side, direction) = find_direction_and_side(normal, body.right());
        self.begin(side, direction, body, timers, tuning);
        true
    }

    fn begin(
        &mut self,
        side: WallSide,
        direction: Vec3,
        body: &mut impl CharacterBody,
        timers: &mut impl Scheduler<TraversalTimer>,
        tuning: &TraversalTuning,
    ) {
        self.state = WallRunState::Running { side, direction };

        body.set_air_control(tuning.wall_run_air_control);
        body.set_gravity_scale(tuning.wall_run_gravity_scale);
        body.set_plane_constraint(Some(Vec3::Y));
        timers.start(TraversalTimer::WallRunCadence, tuning.wall_run_cadence, true);

        debug!("Wall run started: side={:?}, direction={:?}", side, direction);
    }

    /// Cadence tick: re-probe the wall and either keep running along it or end the run.
    ///
    /// Returns the end reason when this tick ended the run.
    pub fn sustain(
        &mut self,
        body: &mut impl CharacterBody,
        probe: &impl SurfaceProbe,
        timers: &mut impl Scheduler<TraversalTimer>,
        tuning: &TraversalTuning,
    ) -> Option<WallRunEndReason> {
        let WallRunState::Running { side, direction } = self.state else {
            return None;
        };

        let origin = body.location();
        let end = origin + side.toward_wall(direction) * tuning.wall_probe_distance;
        let hit = probe
            .cast_ray(origin, end, ProbeChannel::WorldStatic)
            .filter(|hit| is_runnable(hit.normal, tuning.walkable_floor_angle_deg));

        let Some(hit) = hit else {
            self.end(WallRunEndReason::FallOffWall, body, timers, tuning);
            return Some(WallRunEndReason::FallOffWall);
        };

        let (new_side, new_direction) = find_direction_and_side(hit.normal, body.right());
        if new_side != side {
            self.end(WallRunEndReason::FallOffWall, body, timers, tuning);
            return Some(WallRunEndReason::FallOffWall);
        }

        self.state = WallRunState::Running {
            side,
            direction: new_direction,
        };

        let run = new_direction * body.max_speed();
        let vertical = body.velocity().y;
        body.set_velocity(Vec3::new(run.x, vertical, run.z));
        None
    }

    /// Stop running and restore resting movement values.
    ///
    /// Returns false, touching nothing but the cadence timer, when already idle.
    pub fn end(
        &mut self,
        reason: WallRunEndReason,
        body: &mut impl CharacterBody,
        timers: &mut impl Scheduler<TraversalTimer>,
        tuning: &TraversalTuning,
    ) -> bool {
        timers.clear(TraversalTimer::WallRunCadence);
        if !self.is_running() {
            return false;
        }

        self.state = WallRunState::Idle;
        body.set_air_control(tuning.air_control);
        body.set_gravity_scale(tuning.gravity_scale);
        body.set_plane_constraint(None);

        debug!("Wall run ended: reason={:?}", reason);
        true
    }
}
