//! Traversal domain: wall classification from contact normals.

use bevy::prelude::*;

/// World up axis.
pub const UP: Vec3 = Vec3::Y;

/// Normals whose vertical component falls below this are ceiling-like and never runnable.
pub const OVERHANG_LIMIT: f32 = -0.05;

/// Which way the wall normal faces relative to the character's right vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallSide {
    #[default]
    Left,
    Right,
}

impl WallSide {
    /// Vertical bias paired with this side when building the run direction.
    pub fn bias(self) -> Vec3 {
        match self {
            WallSide::Left => -UP,
            WallSide::Right => UP,
        }
    }

    /// Horizontal direction leading away from the wall while running along `run_direction`.
    pub fn kick_direction(self, run_direction: Vec3) -> Vec3 {
        horizontal(run_direction.cross(self.bias())).normalize_or_zero()
    }

    /// Horizontal direction from the character toward the wall.
    pub fn toward_wall(self, run_direction: Vec3) -> Vec3 {
        horizontal(self.bias().cross(run_direction)).normalize_or_zero()
    }
}

/// Drop the vertical component.
pub fn horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Angle in degrees between a surface normal and the up axis.
///
/// A flat floor is 0, a vertical wall 90.
pub fn wall_angle_deg(normal: Vec3) -> f32 {
    normal
        .normalize_or_zero()
        .dot(UP)
        .clamp(-1.0, 1.0)
        .acos()
        .to_degrees()
}

/// Whether a surface is steep enough to run along.
///
/// Overhangs below [`OVERHANG_LIMIT`] are rejected outright. Anything else is a
/// wall when it is at least as steep as the walkable floor angle; the boundary
/// itself counts as a wall.
pub fn is_runnable(normal: Vec3, walkable_floor_angle_deg: f32) -> bool {
    let normal = normal.normalize_or_zero();
    if normal == Vec3::ZERO || normal.y < OVERHANG_LIMIT {
        return false;
    }

    wall_angle_deg(normal) >= walkable_floor_angle_deg
}

/// Classify the side and compute the run direction for a wall contact.
///
/// The returned direction is a horizontal unit tangent of the wall, so it is
/// always orthogonal to `wall_normal`.
pub fn find_direction_and_side(wall_normal: Vec3, actor_right: Vec3) -> (WallSide, Vec3) {
    let facing =
        Vec2::new(wall_normal.x, wall_normal.z).dot(Vec2::new(actor_right.x, actor_right.z));
    let side = if facing > 0.0 {
        WallSide::Right
    } else {
        WallSide::Left
    };

    let direction = side.bias().cross(wall_normal).normalize_or_zero();
    (side, direction)
}
