//! Combat domain: weapon tuning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WeaponTuning {
    /// Seconds between shots while the trigger is held.
    pub fire_rate: f32,
    /// Hitscan reach of a ranged shot.
    pub weapon_range: f32,
    /// Reach of a melee swing.
    pub melee_range: f32,
    /// Eye offset above the body origin where shots start.
    pub eye_height: f32,
}

impl Default for WeaponTuning {
    fn default() -> Self {
        Self {
            fire_rate: 0.25,
            weapon_range: 200.0,
            melee_range: 1.5,
            eye_height: 0.6,
        }
    }
}
