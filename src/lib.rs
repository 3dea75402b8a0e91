//! First-person traversal abilities: double jump, dash and wall-running,
//! driven by a frame-stepped state machine over an avian 3D body.

pub mod combat;
pub mod content;
pub mod core;
pub mod traversal;

pub mod prelude {
    pub use crate::combat::{AttackMessage, CombatPlugin, WeaponMode, WeaponTuning};
    pub use crate::content::ContentPlugin;
    pub use crate::traversal::{
        MovementMode, Player, TraversalController, TraversalMessage, TraversalPlugin,
        TraversalTuning, WallRunEndReason, WallSide,
    };
}
