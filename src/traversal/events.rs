//! Traversal domain: state-change notifications and host contact delivery.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::traversal::{WallRunEndReason, WallSide};

/// Something the controller did that sound/animation collaborators may react to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TraversalEvent {
    Jumped {
        launch: Vec3,
        num_jumps: u32,
    },
    JumpedOffWall {
        launch: Vec3,
        side: WallSide,
    },
    WallRunStarted {
        side: WallSide,
        direction: Vec3,
    },
    WallRunEnded {
        reason: WallRunEndReason,
    },
    DashStarted {
        launch: Vec3,
    },
    DashRecovered,
}

/// Fired for every [`TraversalEvent`] drained from a player's controller
#[derive(Debug, Clone)]
pub struct TraversalMessage {
    pub entity: Entity,
    pub event: TraversalEvent,
}

impl Message for TraversalMessage {}

/// A contact between a character and a surface, delivered to its controller
#[derive(Debug, Clone)]
pub struct SurfaceContact {
    pub entity: Entity,
    pub normal: Vec3,
    pub point: Vec3,
}

impl Message for SurfaceContact {}
