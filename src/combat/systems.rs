//! Combat domain: forwards trigger input to each attack router.

use avian3d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::{AttackMessage, AttackRouter, Aim, WeaponTuning};
use crate::core::AvianProbe;
use crate::traversal::{Player, PlayerInput};

/// Give every new player an attack router built from the current weapon tuning.
pub(crate) fn arm_players(
    mut commands: Commands,
    tuning: Res<WeaponTuning>,
    players: Query<Entity, (With<Player>, Without<AttackRouter>)>,
) {
    for entity in &players {
        debug!("Arming player: entity={:?}", entity);
        commands
            .entity(entity)
            .insert(AttackRouter::new(tuning.clone()));
    }
}

pub(crate) fn drive_attacks(
    time: Res<Time>,
    input: Res<PlayerInput>,
    tuning: Res<WeaponTuning>,
    spatial_query: SpatialQuery,
    mut messages: MessageWriter<AttackMessage>,
    mut query: Query<(Entity, &Transform, &mut AttackRouter), With<Player>>,
) {
    let dt = time.delta_secs();

    for (entity, transform, mut router) in &mut query {
        let probe = AvianProbe::new(&spatial_query, entity);
        let aim = Aim {
            origin: transform.translation + Vec3::Y * tuning.eye_height,
            forward: *transform.forward(),
        };

        if input.swap_weapon_just_pressed {
            router.swap_mode();
        }

        let mode = router.mode();
        if input.fire_just_pressed {
            router.request_attack_start(mode, aim, &probe);
        }
        if input.fire_just_released {
            router.request_attack_end(mode);
        }

        router.on_tick(dt, aim, &probe);

        for event in router.drain_events() {
            messages.write(AttackMessage { entity, event });
        }
    }
}
