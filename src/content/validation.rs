//! Validation for tuning values that would break the traversal state machine.

use super::loader::TuningFile;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub value: f32,
    pub reason: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{} = {} {}",
            self.section, self.field, self.value, self.reason
        )
    }
}

impl std::error::Error for ValidationError {}

/// Helper macro for checking a value against a predicate
macro_rules! check {
    ($errors:expr, $section:expr, $owner:expr, $field:ident, $ok:expr, $reason:expr) => {
        let value = $owner.$field;
        if !$ok(value) {
            $errors.push(ValidationError {
                section: $section,
                field: stringify!($field),
                value,
                reason: $reason,
            });
        }
    };
}

fn positive(v: f32) -> bool {
    v > 0.0
}

fn non_negative(v: f32) -> bool {
    v >= 0.0
}

fn angle(v: f32) -> bool {
    (0.0..=90.0).contains(&v)
}

/// Validate every tuning value.
/// Returns a list of validation errors, empty if the file is usable.
pub fn validate_tuning(tuning: &TuningFile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let t = &tuning.traversal;
    check!(errors, "traversal", t, max_speed, positive, "must be positive");
    check!(errors, "traversal", t, accel, positive, "must be positive");
    check!(errors, "traversal", t, gravity, non_negative, "must not be negative");
    check!(
        errors,
        "traversal",
        t,
        walkable_floor_angle_deg,
        angle,
        "must be between 0 and 90 degrees"
    );
    check!(errors, "traversal", t, jump_velocity, non_negative, "must not be negative");
    check!(errors, "traversal", t, dash_multiplier, non_negative, "must not be negative");
    check!(errors, "traversal", t, dash_cooldown, positive, "must be positive");
    check!(errors, "traversal", t, ground_friction, non_negative, "must not be negative");
    check!(errors, "traversal", t, wall_probe_distance, positive, "must be positive");
    check!(errors, "traversal", t, wall_run_cadence, positive, "must be positive");
    check!(errors, "traversal", t, wall_jump_kick, non_negative, "must not be negative");
    check!(
        errors,
        "traversal",
        t,
        wall_reacquire_delay,
        non_negative,
        "must not be negative"
    );
    check!(errors, "traversal", t, air_control, non_negative, "must not be negative");
    check!(errors, "traversal", t, wall_run_air_control, non_negative, "must not be negative");
    check!(errors, "traversal", t, gravity_scale, non_negative, "must not be negative");
    check!(
        errors,
        "traversal",
        t,
        wall_run_gravity_scale,
        non_negative,
        "must not be negative"
    );

    let w = &tuning.weapon;
    check!(errors, "weapon", w, fire_rate, positive, "must be positive");
    check!(errors, "weapon", w, weapon_range, positive, "must be positive");
    check!(errors, "weapon", w, melee_range, positive, "must be positive");

    errors
}
