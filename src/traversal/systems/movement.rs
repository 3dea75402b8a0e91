//! Traversal domain: locomotion integration for the player body.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::traversal::{BodyMotion, MovementState, Player, PlayerInput, TraversalController};

pub(crate) fn apply_horizontal_movement(
    time: Res<Time>,
    input: Res<PlayerInput>,
    mut query: Query<
        (
            &Transform,
            &MovementState,
            &BodyMotion,
            &TraversalController,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (transform, state, motion, controller, mut velocity) in &mut query {
        // Dash owns the velocity until it recovers
        if controller.dash().is_recovering() {
            continue;
        }
        let tuning = controller.tuning();

        let wish = *transform.right() * input.axis.x + *transform.forward() * input.axis.y;
        let wish = Vec3::new(wish.x, 0.0, wish.z).normalize_or_zero();
        let planar = Vec2::new(velocity.x, velocity.z);

        let planar = if wish != Vec3::ZERO {
            let control = if state.on_ground { 1.0 } else { motion.air_control };
            let target = Vec2::new(wish.x, wish.z) * tuning.max_speed;
            let step = tuning.accel * control * dt;
            let delta = target - planar;
            if delta.length() <= step {
                target
            } else {
                planar + delta.normalize() * step
            }
        } else if state.on_ground {
            // Friction braking
            planar * (1.0 - (motion.ground_friction * dt).min(1.0))
        } else {
            planar
        };

        velocity.x = planar.x;
        velocity.z = planar.y;
    }
}

pub(crate) fn apply_gravity(
    time: Res<Time>,
    mut query: Query<
        (
            &MovementState,
            &BodyMotion,
            &TraversalController,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (state, motion, controller, mut velocity) in &mut query {
        if state.on_ground {
            velocity.y = velocity.y.max(0.0);
            continue;
        }

        velocity.y -= controller.tuning().gravity * motion.gravity_scale * dt;
    }
}

pub(crate) fn constrain_to_plane(
    mut query: Query<(&BodyMotion, &mut LinearVelocity), With<Player>>,
) {
    for (motion, mut velocity) in &mut query {
        let Some(normal) = motion.plane_normal else {
            continue;
        };

        let v = velocity.0;
        velocity.0 = v - normal * v.dot(normal);
    }
}
