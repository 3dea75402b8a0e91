//! Traversal domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Host-settable traversal configuration. Distances are meters, times seconds.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TraversalTuning {
    pub max_speed: f32,
    pub accel: f32,
    pub gravity: f32,
    /// Steepest slope (degrees from up) that still counts as floor.
    pub walkable_floor_angle_deg: f32,
    /// Grants a second jump charge while airborne.
    pub air_jump_enabled: bool,
    pub jump_velocity: f32,
    pub dash_enabled: bool,
    /// Scale applied to flattened velocity when dashing.
    pub dash_multiplier: f32,
    pub dash_cooldown: f32,
    /// Resting ground friction, restored after a dash.
    pub ground_friction: f32,
    pub wall_run_enabled: bool,
    /// Reach of the lateral wall probes.
    pub wall_probe_distance: f32,
    /// Interval between wall re-probes while running.
    pub wall_run_cadence: f32,
    /// Lateral speed pushed away from the wall when jumping off it.
    pub wall_jump_kick: f32,
    /// Seconds after leaving a wall voluntarily before any wall can be acquired again.
    pub wall_reacquire_delay: f32,
    pub air_control: f32,
    pub wall_run_air_control: f32,
    pub gravity_scale: f32,
    pub wall_run_gravity_scale: f32,
}

impl Default for TraversalTuning {
    fn default() -> Self {
        Self {
            max_speed: 6.0,
            accel: 40.0,
            gravity: 9.81,
            walkable_floor_angle_deg: 44.765,
            air_jump_enabled: true,
            jump_velocity: 5.0,
            dash_enabled: true,
            dash_multiplier: 10.0,
            dash_cooldown: 0.25,
            ground_friction: 8.0,
            wall_run_enabled: true,
            wall_probe_distance: 0.75,
            wall_run_cadence: 0.1,
            wall_jump_kick: 2.5,
            wall_reacquire_delay: 0.35,
            air_control: 0.05,
            wall_run_air_control: 1.0,
            gravity_scale: 1.0,
            wall_run_gravity_scale: 0.0,
        }
    }
}

impl TraversalTuning {
    /// Jump charges available before landing.
    pub fn max_jumps(&self) -> u32 {
        if self.air_jump_enabled { 2 } else { 1 }
    }

    /// Apex height of a single jump from rest: h = v² / (2g)
    pub fn single_jump_height(&self) -> f32 {
        self.jump_velocity * self.jump_velocity / (2.0 * self.gravity * self.gravity_scale)
    }

    /// Height reachable by chaining every jump charge at its apex.
    pub fn max_reachable_height(&self) -> f32 {
        self.single_jump_height() * self.max_jumps() as f32
    }
}

#[derive(Resource, Debug, Default)]
pub struct PlayerInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub dash_just_pressed: bool,
    pub fire_just_pressed: bool,
    pub fire_just_released: bool,
    pub swap_weapon_just_pressed: bool,
}
