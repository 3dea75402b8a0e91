//! Core domain: physics layers for collision filtering.

use avian3d::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable surfaces (floors, platforms)
    Ground,
    /// Surfaces the character can run along
    Wall,
    /// Player character
    Player,
    /// Triggers - never block movement or sight
    Sensor,
}
