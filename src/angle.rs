//! Bearing arithmetic that is aware of the wrap-around at 2π

use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Normalize an angle in radians into `[0, 2π)`
pub fn normalize(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly 2π
    if normalized >= TAU { 0.0 } else { normalized }
}

/// Unsigned minimal separation of two bearings in radians
///
/// Handles the wrap at 2π, e.g. the delta between `0.05` and `2π - 0.05`
/// is `0.1`. Inputs may be any real radian value; the result is always
/// within `[0, π]`.
pub fn angular_delta(a: f64, b: f64) -> f64 {
    // identity for inputs less than 2π apart
    let diff = (a - b).abs().rem_euclid(TAU);
    (TAU - diff).min(diff)
}

/// Bearing that bisects the smaller angle between `a` and `b`
///
/// Both inputs are normalized into `[0, 2π)` first. When the smaller arc
/// crosses north, detected by one bearing lying in the north-west quadrant
/// and the other in the north-east quadrant, the bisector is taken on the
/// far side of the seam.
pub fn bisect(a: f64, b: f64) -> f64 {
    let a = normalize(a);
    let b = normalize(b);

    let phi = angular_delta(a, b) / 2.0;

    let lo = a.min(b);
    let hi = a.max(b);

    if hi > 3.0 * PI / 2.0 && lo < FRAC_PI_2 {
        log::trace!("bisecting across north: lo={lo}, hi={hi}, phi={phi}");
        if hi + phi < TAU {
            hi + phi
        } else {
            normalize(lo - phi)
        }
    } else {
        hi - phi
    }
}
