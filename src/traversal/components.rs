//! Traversal domain: ECS components for the player body.

use bevy::prelude::*;

use crate::traversal::TraversalTuning;

#[derive(Component, Debug)]
pub struct Player;

/// Marker for walkable colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for runnable wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Support state sampled by ground detection each frame.
#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub on_ground: bool,
    /// Set on the airborne to grounded edge, consumed by the traversal driver.
    pub just_landed: bool,
}

/// Movement parameters the traversal controller tunes at runtime.
///
/// Gravity is integrated by hand from `gravity_scale`, the way avian's own
/// `GravityScale` is left at zero on the player.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct BodyMotion {
    pub gravity_scale: f32,
    /// Fraction of ground acceleration available while airborne.
    pub air_control: f32,
    /// Deceleration factor applied on the ground with no input.
    pub ground_friction: f32,
    /// Velocity is projected onto this plane when set.
    pub plane_normal: Option<Vec3>,
}

impl BodyMotion {
    pub fn resting(tuning: &TraversalTuning) -> Self {
        Self {
            gravity_scale: tuning.gravity_scale,
            air_control: tuning.air_control,
            ground_friction: tuning.ground_friction,
            plane_normal: None,
        }
    }
}

impl Default for BodyMotion {
    fn default() -> Self {
        Self::resting(&TraversalTuning::default())
    }
}
