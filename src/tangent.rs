use crate::angle::bisect;
use crate::sphere::{bearing, destination};
use crate::types::GeoPoint;

/// Point on the cylinder of `radius` meters around `corner` where a route
/// from `start` over `corner` to `end` should touch it
///
/// The point lies on the bisector of the angle between the legs towards
/// `start` and towards `end`, so swapping `start` and `end` yields the same
/// point.
pub fn tangential_point(start: GeoPoint, corner: GeoPoint, end: GeoPoint, radius: f64) -> GeoPoint {
    let start_bearing = bearing(corner, start);
    let end_bearing = bearing(corner, end);

    destination(corner, radius, bisect(start_bearing, end_bearing))
}
