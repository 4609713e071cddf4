use crate::wheel_layout::{round_for_render, segment_angle, Label};

/// Full revolutions every spin makes before settling.
pub const MIN_REVOLUTIONS: u32 = 8;

/// Upper bound on configured revolutions. Keeps the absolute rotation small
/// enough that three-decimal landing angles stay exact.
pub const MAX_REVOLUTIONS: u32 = 100;

/// Computes the next absolute rotation (degrees) for a spin landing on `target`.
///
/// The result is always at least `min_revolutions` full turns past `current`,
/// and its remainder modulo 360 is the target segment's angle. The target angle
/// comes from the integer segment index, never from a previously rounded angle,
/// so repeated spins do not drift.
pub fn next_rotation(current: f64, target: Label, min_revolutions: u32) -> f64 {
    let target_angle = segment_angle(target.segment_index());
    let current_pos = current.rem_euclid(360.0);

    let mut delta = target_angle - current_pos;
    if delta < 0.0 {
        delta += 360.0;
    }

    current + f64::from(min_revolutions) * 360.0 + delta
}

/// Where the wheel rests for a given absolute rotation, rounded to 3 decimals
/// and folded into `[0, 360)`.
pub fn landing_angle(rotation: f64) -> f64 {
    let angle = round_for_render(rotation.rem_euclid(360.0));
    if angle >= 360.0 {
        angle - 360.0
    } else {
        angle
    }
}

/// True when `rotation` leaves the pointer on `label`'s segment.
pub fn lands_on(rotation: f64, label: Label) -> bool {
    let expected = round_for_render(segment_angle(label.segment_index()));
    let expected = if expected >= 360.0 { expected - 360.0 } else { expected };
    landing_angle(rotation) == expected
}
