//! Combat domain: ranged and melee attack routing.

mod attacks;
mod events;
mod resources;
mod systems;

pub use attacks::{Aim, AttackEvent, AttackRouter, AttackTimer, WeaponMode};
pub use events::AttackMessage;
pub use resources::WeaponTuning;

use bevy::prelude::*;

use crate::combat::systems::{arm_players, drive_attacks};
use crate::traversal::read_input;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WeaponTuning>()
            .add_message::<AttackMessage>()
            .add_systems(Update, (arm_players, drive_attacks).chain().after(read_input));
    }
}
