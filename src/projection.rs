//! Point-to-line projection and line/circle intersection
//!
//! Both operate on the infinite great circle through two points and use a
//! planar right-triangle approximation on top of spherical bearings and
//! distances. This is accurate enough for the tens of kilometres between
//! turnpoints of a task, but it is not an exact cross-track solution.

use crate::angle::angular_delta;
use crate::error::{Error, Result};
use crate::sphere::{bearing, destination, distance};
use crate::types::GeoPoint;

/// Closest point on a line and the distance to it
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projection {
    /// Foot of the perpendicular on the line
    pub foot: GeoPoint,
    /// Distance in meters from the projected point to `foot`
    pub distance: f64,
}

/// Project `point` onto the line through `line_start` and `line_end`
///
/// The foot is found by walking the adjacent side of the right triangle
/// `line_start`, `point`, foot along the line bearing from `line_start`.
pub fn project_point_onto_line(
    point: GeoPoint,
    line_start: GeoPoint,
    line_end: GeoPoint,
) -> Projection {
    let start_to_point = distance(line_start, point);
    let line_bearing = bearing(line_start, line_end);
    let point_bearing = bearing(line_start, point);
    let phi = angular_delta(point_bearing, line_bearing);

    let adjacent = (start_to_point * phi.cos()).abs();
    let foot = destination(line_start, adjacent, line_bearing);

    Projection {
        foot,
        distance: distance(point, foot),
    }
}

/// Point where the line through `line_start` and `line_end` enters the
/// circle of `radius` meters whose center projects onto `foot` at
/// `perpendicular_distance`
///
/// The entry point is measured from `foot` back towards `line_start`, so it
/// is the point the line crosses first when travelling from `line_start`.
///
/// Fails with [`Error::NoIntersection`] unless `perpendicular_distance` is
/// strictly smaller than `radius`.
pub fn line_circle_entry(
    line_start: GeoPoint,
    line_end: GeoPoint,
    foot: GeoPoint,
    perpendicular_distance: f64,
    radius: f64,
) -> Result<GeoPoint> {
    if perpendicular_distance >= radius {
        return Err(Error::NoIntersection {
            distance: perpendicular_distance,
            radius,
        });
    }

    let half_chord = (radius.powi(2) - perpendicular_distance.powi(2)).sqrt();
    Ok(destination(foot, half_chord, bearing(line_end, line_start)))
}
