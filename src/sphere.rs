//! Great-circle primitives on a spherical earth

use crate::angle::normalize;
use crate::types::GeoPoint;

/// Mean earth radius in meters
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Great-circle distance in meters between two points
///
/// Uses the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
pub fn distance(start: GeoPoint, end: GeoPoint) -> f64 {
    let start_lat = start.lat_rad();
    let end_lat = end.lat_rad();
    let delta_lat = end_lat - start_lat;
    let delta_lon = end.lon_rad() - start.lon_rad();

    let a = (delta_lat / 2.0).sin().powi(2)
        + start_lat.cos() * end_lat.cos() * (delta_lon / 2.0).sin().powi(2);
    // rounding pushes `a` just above 1 for antipodal points
    let a = a.clamp(0.0, 1.0);

    let angular_distance = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS * angular_distance
}

/// Initial great-circle bearing from `start` towards `end`
///
/// Returns radians clockwise from true north in `[0, 2π)`.
pub fn bearing(start: GeoPoint, end: GeoPoint) -> f64 {
    let start_lat = start.lat_rad();
    let end_lat = end.lat_rad();
    let delta_lon = end.lon_rad() - start.lon_rad();

    let y = delta_lon.sin() * end_lat.cos();
    let x = start_lat.cos() * end_lat.sin() - start_lat.sin() * end_lat.cos() * delta_lon.cos();

    normalize(y.atan2(x))
}

/// Point reached by travelling `distance` meters from `start` along the
/// great circle with initial `bearing` (radians)
///
/// The returned longitude is wrapped into `[-180, 180)`.
pub fn destination(start: GeoPoint, distance: f64, bearing: f64) -> GeoPoint {
    let start_lat = start.lat_rad();
    let start_lon = start.lon_rad();
    let angular_distance = distance / EARTH_RADIUS;

    let end_lat = (start_lat.sin() * angular_distance.cos()
        + start_lat.cos() * angular_distance.sin() * bearing.cos())
    .asin();

    let end_lon = start_lon
        + (bearing.sin() * angular_distance.sin() * start_lat.cos())
            .atan2(angular_distance.cos() - start_lat.sin() * end_lat.sin());

    let end_lon = (end_lon.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;

    GeoPoint::new(end_lat.to_degrees(), end_lon)
}
