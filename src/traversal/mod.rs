//! Traversal domain: jumps, dashes and wall-running for the player character.
//!
//! The state machine in [`TraversalController`] is engine-agnostic: it talks to
//! its host only through [`CharacterBody`], [`crate::core::SurfaceProbe`] and
//! its own timer queue. The systems in this module adapt it to avian bodies.

mod avian;
mod body;
pub(crate) mod bootstrap;
mod components;
mod controller;
mod dash;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod jump;
mod resources;
pub mod surface;
mod systems;
mod wall_run;

pub use avian::AvianBody;
pub use body::{CharacterBody, MovementMode};
pub use components::{BodyMotion, Ground, MovementState, Player, Wall};
pub use controller::{TraversalController, TraversalTimer};
pub use dash::DashController;
pub use events::{SurfaceContact, TraversalEvent, TraversalMessage};
pub use jump::JumpBudget;
pub use resources::{PlayerInput, TraversalTuning};
pub use surface::WallSide;
pub use wall_run::{WallRunEndReason, WallRunSession, WallRunState};

pub(crate) use systems::read_input;

use bevy::prelude::*;

use crate::traversal::bootstrap::spawn_player;
use crate::traversal::systems::{
    apply_gravity, apply_horizontal_movement, constrain_to_plane, detect_ground,
    drive_traversal, forward_wall_contacts, sync_tuning,
};

pub struct TraversalPlugin;

impl Plugin for TraversalPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TraversalTuning>()
            .init_resource::<PlayerInput>()
            .add_message::<TraversalMessage>()
            .add_message::<SurfaceContact>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (
                    read_input,
                    sync_tuning,
                    detect_ground,
                    forward_wall_contacts,
                    drive_traversal,
                    apply_horizontal_movement,
                    apply_gravity,
                    constrain_to_plane,
                )
                    .chain(),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room)
            .add_systems(Update, dev::draw_probe_gizmos);
    }
}
