//! Traversal domain: debug-only test level and probe gizmos.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::core::GameLayer;
use crate::traversal::{Ground, Player, TraversalController, Wall};

pub(crate) fn spawn_test_room(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    commands.spawn((
        DirectionalLight::default(),
        Transform::from_xyz(4.0, 10.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Ground
    let ground_size = Vec3::new(60.0, 1.0, 60.0);
    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Cuboid::from_size(ground_size))),
        MeshMaterial3d(materials.add(ground_color)),
        Transform::from_xyz(0.0, -0.5, 0.0),
        RigidBody::Static,
        Collider::cuboid(ground_size.x, ground_size.y, ground_size.z),
        ground_layers,
    ));

    // Long parallel walls forming a corridor to run along
    let wall_size = Vec3::new(1.0, 8.0, 40.0);
    for x in [-4.0, 4.0] {
        commands.spawn((
            Wall,
            Mesh3d(meshes.add(Cuboid::from_size(wall_size))),
            MeshMaterial3d(materials.add(wall_color)),
            Transform::from_xyz(x, 4.0, -20.0),
            RigidBody::Static,
            Collider::cuboid(wall_size.x, wall_size.y, wall_size.z),
            wall_layers,
        ));
    }

    // Short pillar for wall-run exits
    let pillar_size = Vec3::new(1.0, 6.0, 4.0);
    commands.spawn((
        Wall,
        Mesh3d(meshes.add(Cuboid::from_size(pillar_size))),
        MeshMaterial3d(materials.add(wall_color)),
        Transform::from_xyz(-10.0, 3.0, 5.0),
        RigidBody::Static,
        Collider::cuboid(pillar_size.x, pillar_size.y, pillar_size.z),
        wall_layers,
    ));
}

pub(crate) fn draw_probe_gizmos(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &TraversalController), With<Player>>,
) {
    for (transform, controller) in &query {
        let origin = transform.translation;
        let reach = controller.tuning().wall_probe_distance;

        match (controller.wall_run().side(), controller.wall_run().direction()) {
            (Some(side), Some(direction)) => {
                gizmos.line(
                    origin,
                    origin + side.toward_wall(direction) * reach,
                    Color::srgb(0.2, 0.9, 0.3),
                );
                gizmos.line(origin, origin + direction, Color::srgb(0.9, 0.9, 0.2));
            }
            _ => {
                let right = *transform.right() * reach;
                gizmos.line(origin - right, origin + right, Color::WHITE);
            }
        }
    }
}
