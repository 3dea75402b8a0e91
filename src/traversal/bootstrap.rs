//! Traversal domain: player bootstrap from the loaded tuning.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::core::GameLayer;
use crate::traversal::{BodyMotion, MovementState, Player, TraversalController, TraversalTuning};

pub(crate) const PLAYER_RADIUS: f32 = 0.4;
/// Distance from the capsule center to its bottom.
pub(crate) const PLAYER_HALF_HEIGHT: f32 = 0.9;

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<TraversalTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    info!(
        "Spawning player: max_jumps={}, dash={}, wall_run={}, reach={:.2}m",
        tuning.max_jumps(),
        tuning.dash_enabled,
        tuning.wall_run_enabled,
        tuning.max_reachable_height()
    );

    commands
        .spawn((
            // Identity & Traversal
            (
                Player,
                MovementState::default(),
                BodyMotion::resting(&tuning),
                TraversalController::new(tuning.clone()),
            ),
            Transform::from_xyz(0.0, 2.0, 0.0),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::capsule(PLAYER_RADIUS, 2.0 * (PLAYER_HALF_HEIGHT - PLAYER_RADIUS)),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(0.0), // Gravity is integrated from BodyMotion instead
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(
                    GameLayer::Player,
                    [GameLayer::Default, GameLayer::Ground, GameLayer::Wall],
                ),
            ),
        ))
        .with_children(|parent| {
            parent.spawn((Camera3d::default(), Transform::from_xyz(0.0, 0.6, 0.0)));
        });
}
