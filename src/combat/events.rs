//! Combat domain: attack notifications.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::combat::AttackEvent;

/// Fired for every [`AttackEvent`] drained from a player's router
#[derive(Debug, Clone)]
pub struct AttackMessage {
    pub entity: Entity,
    pub event: AttackEvent,
}

impl Message for AttackMessage {}
