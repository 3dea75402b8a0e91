//! Traversal domain: forwards frame ticks, landings, contacts and requests to each controller.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::AvianProbe;
use crate::traversal::{
    AvianBody, BodyMotion, MovementState, Player, PlayerInput, SurfaceContact,
    TraversalController, TraversalMessage, TraversalTuning,
};

/// Push edits of the tuning resource into every controller.
pub(crate) fn sync_tuning(
    tuning: Res<TraversalTuning>,
    mut controllers: Query<&mut TraversalController>,
) {
    if !tuning.is_changed() {
        return;
    }

    for mut controller in &mut controllers {
        if controller.tuning() != &*tuning {
            controller.set_tuning(tuning.clone());
        }
    }
}

pub(crate) fn drive_traversal(
    time: Res<Time>,
    input: Res<PlayerInput>,
    spatial_query: SpatialQuery,
    mut contacts: MessageReader<SurfaceContact>,
    mut messages: MessageWriter<TraversalMessage>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &mut LinearVelocity,
            &mut BodyMotion,
            &mut MovementState,
            &mut TraversalController,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let contacts: Vec<SurfaceContact> = contacts.read().cloned().collect();

    for (entity, transform, mut velocity, mut motion, mut state, mut controller) in &mut query {
        let just_landed = std::mem::take(&mut state.just_landed);
        let max_speed = controller.tuning().max_speed;
        let probe = AvianProbe::new(&spatial_query, entity);
        let mut body = AvianBody {
            transform,
            velocity: &mut *velocity,
            motion: &mut *motion,
            state: &*state,
            max_speed,
        };

        if just_landed {
            controller.on_landed(&mut body);
        }

        for contact in contacts.iter().filter(|c| c.entity == entity) {
            controller.on_surface_contact(contact.normal, contact.point, &mut body);
        }

        controller.on_tick(dt, &mut body, &probe);

        if input.jump_just_pressed {
            controller.request_jump(&mut body);
        }
        if input.dash_just_pressed {
            controller.request_dash(&mut body);
        }

        for event in controller.drain_events() {
            messages.write(TraversalMessage { entity, event });
        }
    }
}
