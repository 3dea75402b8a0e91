//! Traversal domain: [`CharacterBody`] over avian components.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::traversal::{BodyMotion, CharacterBody, MovementState};

/// Borrowed view of one player's physics components for a single update.
pub struct AvianBody<'a> {
    pub transform: &'a Transform,
    pub velocity: &'a mut LinearVelocity,
    pub motion: &'a mut BodyMotion,
    pub state: &'a MovementState,
    pub max_speed: f32,
}

impl CharacterBody for AvianBody<'_> {
    fn velocity(&self) -> Vec3 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity.0 = velocity;
    }

    fn gravity_scale(&self) -> f32 {
        self.motion.gravity_scale
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.motion.gravity_scale = scale;
    }

    fn air_control(&self) -> f32 {
        self.motion.air_control
    }

    fn set_air_control(&mut self, air_control: f32) {
        self.motion.air_control = air_control;
    }

    fn set_plane_constraint(&mut self, normal: Option<Vec3>) {
        self.motion.plane_normal = normal.map(|n| n.normalize_or_zero());
    }

    fn ground_friction(&self) -> f32 {
        self.motion.ground_friction
    }

    fn set_ground_friction(&mut self, friction: f32) {
        self.motion.ground_friction = friction;
    }

    fn is_falling(&self) -> bool {
        !self.state.on_ground
    }

    fn max_speed(&self) -> f32 {
        self.max_speed
    }

    fn location(&self) -> Vec3 {
        self.transform.translation
    }

    fn right(&self) -> Vec3 {
        *self.transform.right()
    }
}
