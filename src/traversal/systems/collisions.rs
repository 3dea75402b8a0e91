//! Traversal domain: ground detection and wall contact delivery.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::GameLayer;
use crate::traversal::bootstrap::PLAYER_HALF_HEIGHT;
use crate::traversal::{MovementState, Player, SurfaceContact, Wall};

/// Extra reach below the feet that still counts as standing.
const GROUND_PROBE_MARGIN: f32 = 0.1;

/// Rising faster than this never counts as grounded, so a jump clears the floor.
const LIFT_OFF_SPEED: f32 = 0.1;

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            Entity,
            &Transform,
            &Collider,
            &LinearVelocity,
            &mut MovementState,
        ),
        With<Player>,
    >,
) {
    // Filter to only hit Ground layer entities (not walls, sensors, etc.)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (entity, transform, collider, velocity, mut state) in &mut query {
        let was_on_ground = state.on_ground;

        let half_height = match collider.shape_scaled().as_capsule() {
            Some(c) => c.half_height() + c.radius,
            None => PLAYER_HALF_HEIGHT,
        };

        let hit = spatial_query.cast_ray(
            transform.translation,
            Dir3::NEG_Y,
            half_height + GROUND_PROBE_MARGIN,
            true,
            &ground_filter.clone().with_excluded_entities([entity]),
        );

        state.on_ground = hit.is_some() && velocity.y <= LIFT_OFF_SPEED;

        if state.on_ground && !was_on_ground {
            state.just_landed = true;
            debug!("Landed: entity={:?}", entity);
        } else if !state.on_ground && was_on_ground {
            debug!("Left ground: entity={:?}", entity);
        }
    }
}

/// Turn new player/wall contacts into [`SurfaceContact`] messages.
pub(crate) fn forward_wall_contacts(
    mut collision_events: MessageReader<CollisionStart>,
    mut contacts: MessageWriter<SurfaceContact>,
    collisions: Collisions,
    players: Query<&Transform, With<Player>>,
    walls: Query<(), With<Wall>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, wall_entity) in pairs {
            let Ok(transform) = players.get(player_entity) else {
                continue;
            };
            if walls.get(wall_entity).is_err() {
                continue;
            }
            let Some(pair) = collisions.get(player_entity, wall_entity) else {
                continue;
            };
            let Some(manifold) = pair.manifolds.first() else {
                continue;
            };

            // Manifold normals point from the first collider to the second;
            // flip so the normal faces away from the wall.
            let normal = if pair.collider1 == player_entity {
                -manifold.normal
            } else {
                manifold.normal
            };

            contacts.write(SurfaceContact {
                entity: player_entity,
                normal,
                point: transform.translation,
            });
        }
    }
}
