//! Traversal domain: the physics body the controller drives.

use bevy::prelude::*;

/// Movement capabilities the traversal controller reads and mutates on its host.
///
/// Implemented by the avian adapter in [`crate::traversal::AvianBody`] and by
/// scripted bodies in tests.
pub trait CharacterBody {
    fn velocity(&self) -> Vec3;

    fn set_velocity(&mut self, velocity: Vec3);

    fn gravity_scale(&self) -> f32;

    fn set_gravity_scale(&mut self, scale: f32);

    fn air_control(&self) -> f32;

    fn set_air_control(&mut self, air_control: f32);

    /// Restrict movement to the plane with the given normal, or lift the restriction.
    fn set_plane_constraint(&mut self, normal: Option<Vec3>);

    fn ground_friction(&self) -> f32;

    fn set_ground_friction(&mut self, friction: f32);

    /// True while the body is unsupported (jumping or falling).
    fn is_falling(&self) -> bool;

    /// Apply an instantaneous velocity change.
    ///
    /// Each override flag replaces that part of the velocity instead of adding to it.
    fn launch(&mut self, velocity: Vec3, override_horizontal: bool, override_vertical: bool) {
        let current = self.velocity();
        let x = if override_horizontal {
            velocity.x
        } else {
            current.x + velocity.x
        };
        let z = if override_horizontal {
            velocity.z
        } else {
            current.z + velocity.z
        };
        let y = if override_vertical {
            velocity.y
        } else {
            current.y + velocity.y
        };
        self.set_velocity(Vec3::new(x, y, z));
    }

    /// Zero horizontal velocity, keeping vertical motion.
    fn stop_horizontal(&mut self) {
        let current = self.velocity();
        self.set_velocity(Vec3::new(0.0, current.y, 0.0));
    }

    fn max_speed(&self) -> f32;

    fn location(&self) -> Vec3;

    fn right(&self) -> Vec3;
}

/// Derived movement mode; grounded/airborne come from the body, wall-running from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementMode {
    Grounded,
    Airborne,
    WallRunning,
}
