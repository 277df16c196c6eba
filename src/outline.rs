//! Outlines of turnpoint cylinders and goal shapes
//!
//! These produce plain point sequences that a renderer can serialize into
//! polygons or line strings. Rings are closed: the first point is repeated
//! at the end.

use crate::sphere::{bearing, destination};
use crate::types::GeoPoint;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Default number of segments used for a full circle
pub const CIRCLE_OUTLINE_STEPS: usize = 80;

/// Number of segments used for a goal half circle
pub const HALF_CIRCLE_STEPS: usize = 40;

/// Closed ring of `steps + 1` points on the circle of `radius` meters
/// around `center`
///
/// The ring starts one step clockwise of north and returns to it after a
/// full turn. Returns an empty ring for `steps == 0`.
pub fn circle(center: GeoPoint, radius: f64, steps: usize) -> Vec<GeoPoint> {
    if steps == 0 {
        return Vec::new();
    }

    let phi_step = TAU / steps as f64;
    (1..=steps + 1)
        .map(|n| destination(center, radius, n as f64 * phi_step))
        .collect()
}

/// End points of the goal line through `goal`
///
/// The line is `2 * radius` long and perpendicular to the last leg
/// arriving from `previous`. The first point is to the right of the
/// direction of travel.
pub fn goal_line(previous: GeoPoint, goal: GeoPoint, radius: f64) -> [GeoPoint; 2] {
    let approach = bearing(previous, goal);
    [
        destination(goal, radius, approach + FRAC_PI_2),
        destination(goal, radius, approach - FRAC_PI_2),
    ]
}

/// Closed ring outlining the half of the goal cylinder beyond the goal line
///
/// Starts at the right end of the goal line, sweeps counterclockwise
/// through the far side of the cylinder to the left end and closes back
/// at the start.
pub fn goal_half_circle(previous: GeoPoint, goal: GeoPoint, radius: f64) -> Vec<GeoPoint> {
    let [circle_start, _] = goal_line(previous, goal, radius);
    let start_bearing = bearing(goal, circle_start);
    let phi_step = PI / HALF_CIRCLE_STEPS as f64;

    let mut ring = (0..=HALF_CIRCLE_STEPS)
        .map(|n| destination(goal, radius, start_bearing - n as f64 * phi_step))
        .collect::<Vec<_>>();
    ring.push(circle_start);
    ring
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::angular_delta;
    use crate::sphere::distance;
    use approx::assert_abs_diff_eq;

    const STANSERHORN: GeoPoint = GeoPoint::new(46.928876, 8.339587);
    const BUOCHSERHORN: GeoPoint = GeoPoint::new(46.945041, 8.427873);

    #[test]
    fn circle_is_closed() {
        let ring = circle(STANSERHORN, 1000.0, CIRCLE_OUTLINE_STEPS);
        assert_eq!(ring.len(), CIRCLE_OUTLINE_STEPS + 1);

        let first = ring[0];
        let last = ring[ring.len() - 1];
        assert!(distance(first, last) < 1e-6);
    }

    #[test]
    fn circle_points_lie_on_radius() {
        for point in circle(STANSERHORN, 1000.0, 24) {
            assert_abs_diff_eq!(distance(STANSERHORN, point), 1000.0, epsilon = 0.01);
        }
    }

    #[test]
    fn circle_starts_one_step_east_of_north() {
        let ring = circle(STANSERHORN, 1000.0, 4);
        assert_abs_diff_eq!(bearing(STANSERHORN, ring[0]), FRAC_PI_2, epsilon = 1e-6);
        assert_abs_diff_eq!(bearing(STANSERHORN, ring[1]), PI, epsilon = 1e-6);
    }

    #[test]
    fn circle_without_steps_is_empty() {
        assert!(circle(STANSERHORN, 1000.0, 0).is_empty());
    }

    #[test]
    fn goal_line_is_perpendicular_to_last_leg() {
        let [right, left] = goal_line(STANSERHORN, BUOCHSERHORN, 400.0);
        let approach = bearing(STANSERHORN, BUOCHSERHORN);

        assert_abs_diff_eq!(distance(BUOCHSERHORN, right), 400.0, epsilon = 0.01);
        assert_abs_diff_eq!(distance(BUOCHSERHORN, left), 400.0, epsilon = 0.01);
        assert_abs_diff_eq!(distance(right, left), 800.0, epsilon = 0.1);

        let to_right = angular_delta(bearing(BUOCHSERHORN, right), approach);
        assert_abs_diff_eq!(to_right, FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn goal_half_circle_shape() {
        let ring = goal_half_circle(STANSERHORN, BUOCHSERHORN, 400.0);
        let [right, left] = goal_line(STANSERHORN, BUOCHSERHORN, 400.0);

        assert_eq!(ring.len(), HALF_CIRCLE_STEPS + 2);
        assert!(distance(ring[0], right) < 1e-6);
        assert!(distance(ring[HALF_CIRCLE_STEPS], left) < 0.01);
        assert_eq!(ring[HALF_CIRCLE_STEPS + 1], right);

        // the middle of the sweep points along the direction of travel
        let approach = bearing(STANSERHORN, BUOCHSERHORN);
        let middle = bearing(BUOCHSERHORN, ring[HALF_CIRCLE_STEPS / 2]);
        assert_abs_diff_eq!(angular_delta(middle, approach), 0.0, epsilon = 1e-6);
    }
}
