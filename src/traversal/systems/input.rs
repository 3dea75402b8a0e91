//! Traversal domain: input sampling for locomotion and attacks.

use bevy::prelude::*;

use crate::traversal::PlayerInput;

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut input: ResMut<PlayerInput>,
) {
    // Strafe axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Forward axis
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y);
    input.jump_just_pressed = keyboard.just_pressed(KeyCode::Space);
    input.dash_just_pressed = keyboard.just_pressed(KeyCode::ShiftLeft);
    input.fire_just_pressed = mouse.just_pressed(MouseButton::Left);
    input.fire_just_released = mouse.just_released(MouseButton::Left);
    input.swap_weapon_just_pressed = keyboard.just_pressed(KeyCode::KeyQ);
}
