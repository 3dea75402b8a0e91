//! Combat domain: routing attack input to the ranged or melee path.

use bevy::prelude::*;

use crate::combat::WeaponTuning;
use crate::core::{ProbeChannel, ProbeHit, Scheduler, SurfaceProbe, TimerQueue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeaponMode {
    #[default]
    Ranged,
    Melee,
}

impl WeaponMode {
    pub fn swapped(self) -> Self {
        match self {
            WeaponMode::Ranged => WeaponMode::Melee,
            WeaponMode::Melee => WeaponMode::Ranged,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackTimer {
    ShotRepeat,
}

/// Where an attack starts and which way it points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aim {
    pub origin: Vec3,
    pub forward: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttackEvent {
    ShotFired {
        origin: Vec3,
        end: Vec3,
        hit: Option<ProbeHit>,
    },
    MeleeSwing {
        hit: Option<ProbeHit>,
    },
}

/// Per-character attack state. Shares nothing with traversal.
#[derive(Component, Debug)]
pub struct AttackRouter<S = TimerQueue<AttackTimer>> {
    tuning: WeaponTuning,
    mode: WeaponMode,
    firing: bool,
    timers: S,
    events: Vec<AttackEvent>,
}

impl AttackRouter {
    pub fn new(tuning: WeaponTuning) -> Self {
        Self::with_scheduler(tuning, TimerQueue::new())
    }
}

impl<S: Scheduler<AttackTimer>> AttackRouter<S> {
    pub fn with_scheduler(tuning: WeaponTuning, timers: S) -> Self {
        Self {
            tuning,
            mode: WeaponMode::default(),
            firing: false,
            timers,
            events: Vec::new(),
        }
    }

    pub fn mode(&self) -> WeaponMode {
        self.mode
    }

    pub fn is_firing(&self) -> bool {
        self.firing
    }

    pub fn timers(&self) -> &S {
        &self.timers
    }

    /// Switch weapon mode, releasing a held trigger first.
    pub fn swap_mode(&mut self) -> WeaponMode {
        self.request_attack_end(self.mode);
        self.mode = self.mode.swapped();
        debug!("Weapon mode: {:?}", self.mode);
        self.mode
    }

    pub fn drain_events(&mut self) -> Vec<AttackEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn request_attack_start(&mut self, mode: WeaponMode, aim: Aim, probe: &impl SurfaceProbe) {
        match mode {
            WeaponMode::Ranged => {
                if self.firing {
                    return;
                }
                self.firing = true;
                self.fire_shot(aim, probe);
                self.timers
                    .start(AttackTimer::ShotRepeat, self.tuning.fire_rate, true);
            }
            WeaponMode::Melee => self.swing(aim, probe),
        }
    }

    pub fn request_attack_end(&mut self, mode: WeaponMode) {
        match mode {
            WeaponMode::Ranged => {
                self.firing = false;
                self.timers.clear(AttackTimer::ShotRepeat);
            }
            WeaponMode::Melee => {}
        }
    }

    pub fn on_tick(&mut self, dt: f32, aim: Aim, probe: &impl SurfaceProbe) {
        for timer in self.timers.advance(dt) {
            match timer {
                AttackTimer::ShotRepeat => {
                    if self.firing {
                        self.fire_shot(aim, probe);
                    }
                }
            }
        }
    }

    /// Release the trigger and cancel the repeat timer. Safe to repeat.
    pub fn shutdown(&mut self) {
        self.firing = false;
        self.timers.clear_all();
    }

    fn fire_shot(&mut self, aim: Aim, probe: &impl SurfaceProbe) {
        let end = aim.origin + aim.forward.normalize_or_zero() * self.tuning.weapon_range;
        let hit = probe.cast_ray(aim.origin, end, ProbeChannel::Visibility);
        debug!("Shot fired: hit={:?}", hit.map(|h| h.point));
        self.events.push(AttackEvent::ShotFired {
            origin: aim.origin,
            end,
            hit,
        });
    }

    fn swing(&mut self, aim: Aim, probe: &impl SurfaceProbe) {
        let end = aim.origin + aim.forward.normalize_or_zero() * self.tuning.melee_range;
        let hit = probe.cast_ray(aim.origin, end, ProbeChannel::Visibility);
        debug!("Melee swing: hit={:?}", hit.map(|h| h.point));
        self.events.push(AttackEvent::MeleeSwing { hit });
    }
}
