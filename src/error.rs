use crate::GeoPoint;

/// Errors returned by the geometry functions
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Line does not intersect circle (distance {distance} m >= radius {radius} m)")]
    NoIntersection { distance: f64, radius: f64 },

    #[error("Coordinate out of range: {point:?}")]
    InvalidCoordinate { point: GeoPoint },

    #[error("Invalid turnpoint radius: {radius}")]
    InvalidRadius { radius: f64 },

    #[error("Route needs at least {expected} turnpoints, got {actual}")]
    TooFewPoints { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
