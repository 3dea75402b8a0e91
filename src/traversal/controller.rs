//! Traversal domain: per-character orchestration of jumps, dashes and wall-runs.

use bevy::prelude::*;

use crate::core::{Scheduler, SurfaceProbe, TimerQueue};
use crate::traversal::surface::UP;
use crate::traversal::{
    CharacterBody, DashController, JumpBudget, MovementMode, TraversalEvent, TraversalTuning,
    WallRunEndReason, WallRunSession, WallRunState,
};

/// Timer slots owned by one traversal controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalTimer {
    WallRunCadence,
    DashCooldown,
    /// Armed after a voluntary wall exit; no wall is acquired while it runs.
    WallReacquire,
}

/// Traversal ability state for one character.
///
/// The host calls the `on_*` and `request_*` methods with a borrowed body and
/// probe; the controller never holds on to either.
#[derive(Component, Debug)]
pub struct TraversalController<S = TimerQueue<TraversalTimer>> {
    tuning: TraversalTuning,
    jumps: JumpBudget,
    dash: DashController,
    wall_run: WallRunSession,
    timers: S,
    events: Vec<TraversalEvent>,
}

impl TraversalController {
    pub fn new(tuning: TraversalTuning) -> Self {
        Self::with_scheduler(tuning, TimerQueue::new())
    }
}

impl<S: Scheduler<TraversalTimer>> TraversalController<S> {
    pub fn with_scheduler(tuning: TraversalTuning, timers: S) -> Self {
        let mut jumps = JumpBudget::default();
        jumps.set_max_jumps(tuning.air_jump_enabled);

        Self {
            tuning,
            jumps,
            dash: DashController::default(),
            wall_run: WallRunSession::default(),
            timers,
            events: Vec::new(),
        }
    }

    pub fn tuning(&self) -> &TraversalTuning {
        &self.tuning
    }

    /// Swap in new tuning. Takes effect on the next transition; an active run
    /// or dash keeps the values it started with until it ends.
    pub fn set_tuning(&mut self, tuning: TraversalTuning) {
        self.jumps.set_max_jumps(tuning.air_jump_enabled);
        self.tuning = tuning;
    }

    pub fn jumps(&self) -> &JumpBudget {
        &self.jumps
    }

    pub fn dash(&self) -> &DashController {
        &self.dash
    }

    pub fn wall_run(&self) -> &WallRunSession {
        &self.wall_run
    }

    pub fn timers(&self) -> &S {
        &self.timers
    }

    pub fn movement_mode(&self, body: &impl CharacterBody) -> MovementMode {
        if self.wall_run.is_running() {
            MovementMode::WallRunning
        } else if body.is_falling() {
            MovementMode::Airborne
        } else {
            MovementMode::Grounded
        }
    }

    /// Take everything that happened since the last drain.
    pub fn drain_events(&mut self) -> Vec<TraversalEvent> {
        std::mem::take(&mut self.events)
    }

    /// Per-frame update: acquire a wall while airborne, then dispatch expired timers.
    ///
    /// Timers are stepped before acquisition so a run armed this frame starts
    /// its cadence next frame.
    pub fn on_tick(&mut self, dt: f32, body: &mut impl CharacterBody, probe: &impl SurfaceProbe) {
        let fired = self.timers.advance(dt);

        if self.can_acquire()
            && !self.wall_run.is_running()
            && body.is_falling()
            && self
                .wall_run
                .try_acquire(body, probe, &mut self.timers, &self.tuning)
        {
            self.push_wall_run_started();
        }

        for timer in fired {
            match timer {
                TraversalTimer::WallRunCadence => {
                    if let Some(reason) =
                        self.wall_run
                            .sustain(body, probe, &mut self.timers, &self.tuning)
                    {
                        self.events.push(TraversalEvent::WallRunEnded { reason });
                    }
                }
                TraversalTimer::DashCooldown => {
                    if self.dash.finish(body, &self.tuning) {
                        self.events.push(TraversalEvent::DashRecovered);
                    }
                }
                TraversalTimer::WallReacquire => {}
            }
        }
    }

    pub fn on_landed(&mut self, body: &mut impl CharacterBody) {
        self.end_wall_run(WallRunEndReason::Landed, body);
        self.timers.clear(TraversalTimer::WallReacquire);
        self.jumps.reset();
    }

    /// Contact-event path: acquire a run from a delivered surface normal.
    pub fn on_surface_contact(
        &mut self,
        normal: Vec3,
        point: Vec3,
        body: &mut impl CharacterBody,
    ) -> bool {
        if !self.can_acquire() {
            return false;
        }

        let acquired =
            self.wall_run
                .acquire_from_contact(normal, body, &mut self.timers, &self.tuning);
        if acquired {
            debug!("Wall run acquired from contact at {:?}", point);
            self.push_wall_run_started();
        }
        acquired
    }

    /// Jump, or kick off the wall when running along one.
    ///
    /// Jumping off a wall always succeeds and leaves exactly one jump spent.
    pub fn request_jump(&mut self, body: &mut impl CharacterBody) -> bool {
        if let WallRunState::Running { side, direction } = self.wall_run.state() {
            self.end_wall_run(WallRunEndReason::JumpedOffWall, body);
            self.jumps.reset();

            let launch = side.kick_direction(direction) * self.tuning.wall_jump_kick
                + UP * self.tuning.jump_velocity;
            body.launch(launch, false, true);
            self.jumps.consume_wall_jump();

            self.events
                .push(TraversalEvent::JumpedOffWall { launch, side });
            return true;
        }

        if !self.jumps.try_jump(body.is_falling()) {
            return false;
        }

        let launch = UP * self.tuning.jump_velocity;
        body.launch(launch, false, true);
        self.events.push(TraversalEvent::Jumped {
            launch,
            num_jumps: self.jumps.num_jumps(),
        });
        true
    }

    /// Dash along current velocity, leaving any wall-run first.
    pub fn request_dash(&mut self, body: &mut impl CharacterBody) -> bool {
        if !self.tuning.dash_enabled || self.dash.is_recovering() {
            return false;
        }

        self.end_wall_run(WallRunEndReason::JumpedOffWall, body);

        let Some(launch) =
            self.dash
                .try_dash(self.tuning.dash_enabled, body, &mut self.timers, &self.tuning)
        else {
            return false;
        };

        self.events.push(TraversalEvent::DashStarted { launch });
        true
    }

    /// Cancel every pending timer and put the body back at its resting values.
    ///
    /// Must run before the owning character goes away. Safe to repeat.
    pub fn shutdown(&mut self, body: &mut impl CharacterBody) {
        self.wall_run.end(
            WallRunEndReason::FallOffWall,
            body,
            &mut self.timers,
            &self.tuning,
        );
        self.dash.cancel(body, &mut self.timers, &self.tuning);
        self.timers.clear_all();

        body.set_air_control(self.tuning.air_control);
        body.set_gravity_scale(self.tuning.gravity_scale);
        body.set_ground_friction(self.tuning.ground_friction);
        body.set_plane_constraint(None);
    }

    fn can_acquire(&self) -> bool {
        self.tuning.wall_run_enabled && !self.timers.is_armed(TraversalTimer::WallReacquire)
    }

    fn end_wall_run(&mut self, reason: WallRunEndReason, body: &mut impl CharacterBody) {
        if !self
            .wall_run
            .end(reason, body, &mut self.timers, &self.tuning)
        {
            return;
        }

        self.events.push(TraversalEvent::WallRunEnded { reason });

        // Still within probe reach of the wall just left
        if reason == WallRunEndReason::JumpedOffWall && self.tuning.wall_reacquire_delay > 0.0 {
            self.timers.start(
                TraversalTimer::WallReacquire,
                self.tuning.wall_reacquire_delay,
                false,
            );
        }
    }

    fn push_wall_run_started(&mut self) {
        if let WallRunState::Running { side, direction } = self.wall_run.state() {
            self.events
                .push(TraversalEvent::WallRunStarted { side, direction });
        }
    }
}
