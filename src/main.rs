use avian3d::prelude::*;
use bevy::prelude::*;
use sun_traversal::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Sun".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((ContentPlugin::default(), TraversalPlugin, CombatPlugin))
        .run();
}
