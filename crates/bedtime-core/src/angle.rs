//! Conversions between raw angles, canonical `[0, 360)` angles and minutes of the day.
//!
//! All angles are in degrees unless a name says otherwise. Canonical 0° is the
//! 3 o'clock position and angles grow counter-clockwise on screen.

use std::f64::consts::PI;

pub const FULL_TURN: f64 = 360.0;
pub const MINUTES_PER_DAY: f64 = 1440.0;
pub const MINUTES_PER_DEGREE: f64 = MINUTES_PER_DAY / FULL_TURN;

/// Maps any real angle onto `[0, 360)`. Negative inputs wrap, so `-10` becomes `350`.
pub fn normalize(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_TURN);
    // rem_euclid rounds up to exactly 360 for tiny negative inputs
    if wrapped >= FULL_TURN { 0.0 } else { wrapped }
}

/// Shortest signed rotation from `from` to `to`, in `(-180, 180]`.
///
/// Uses the angle between the two unit direction vectors rather than a plain
/// subtraction, so crossing 0° gives `+2` for `359 -> 1` instead of `-358`.
pub fn signed_delta(from: f64, to: f64) -> f64 {
    signed_delta_rad(from.to_radians(), to.to_radians()).to_degrees()
}

/// Radian form of [`signed_delta`], for callers holding raw `atan2` output.
pub fn signed_delta_rad(from: f64, to: f64) -> f64 {
    let (from_sin, from_cos) = from.sin_cos();
    let (to_sin, to_cos) = to.sin_cos();
    let cross = from_cos * to_sin - from_sin * to_cos;
    let dot = from_cos * to_cos + from_sin * to_sin;
    let delta = cross.atan2(dot);
    // opposite directions can come back as -PI from rounding in `cross`
    if delta <= -PI + f64::EPSILON { PI } else { delta }
}

/// Linear map from a canonical angle to minutes since midnight (1° = 4 minutes).
pub fn angle_to_minutes(angle: f64) -> f64 {
    angle * MINUTES_PER_DEGREE
}

/// Truncates to whole minutes. The result is never greater than the input.
pub fn snap_to_granularity(minutes: f64) -> f64 {
    minutes.floor()
}

#[cfg(test)]
pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_wraps_into_canonical_range() {
        let cases = vec![
            (0.0, 0.0),
            (-10.0, 350.0),
            (360.0, 0.0),
            (720.5, 0.5),
            (-720.0, 0.0),
            (179.0, 179.0),
            (-180.0, 180.0),
        ];

        for (raw, expected) in cases {
            assert_close(normalize(raw), expected);
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in [-1e-20, -1e9, -359.999, -0.5, 0.0, 42.0, 359.999, 1e9, 12345.678] {
            let once = normalize(raw);
            assert!((0.0..FULL_TURN).contains(&once), "{raw} -> {once}");
            assert_eq!(normalize(once), once);
        }
    }

    #[test]
    fn test_signed_delta_crosses_zero_the_short_way() {
        assert_close(signed_delta(350.0, 10.0), 20.0);
        assert_close(signed_delta(10.0, 350.0), -20.0);
        assert_close(signed_delta(359.0, 1.0), 2.0);
        assert_close(signed_delta(90.0, 45.0), -45.0);
        assert_close(signed_delta(30.0, 30.0), 0.0);
    }

    #[test]
    fn test_signed_delta_half_turn_is_positive() {
        assert_close(signed_delta(180.0, 0.0), 180.0);
        assert_close(signed_delta(0.0, 180.0), 180.0);
        assert_close(signed_delta(270.0, 90.0), 180.0);
        assert_close(signed_delta_rad(0.0, -PI), PI);
    }

    #[test]
    fn test_signed_delta_accepts_raw_atan2_angles() {
        // atan2 output lives in (-180, 180]
        assert_close(signed_delta(170.0, -170.0), 20.0);
        assert_close(signed_delta(350.0, -10.0), 0.0);
    }

    #[test]
    fn test_minutes_and_snapping() {
        assert_close(angle_to_minutes(0.0), 0.0);
        assert_close(angle_to_minutes(180.0), 720.0);
        assert_close(angle_to_minutes(90.25), 361.0);
        assert_close(snap_to_granularity(361.9), 361.0);
        assert_close(snap_to_granularity(0.2), 0.0);
        assert_close(snap_to_granularity(720.0), 720.0);
    }
}
