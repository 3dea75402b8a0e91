//! Traversal domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod drive;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{detect_ground, forward_wall_contacts};
pub(crate) use drive::{drive_traversal, sync_tuning};
pub(crate) use input::read_input;
pub(crate) use movement::{apply_gravity, apply_horizontal_movement, constrain_to_plane};
