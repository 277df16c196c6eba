use crate::error::{Error, Result};
use crate::types::GeoPoint;

/// A named waypoint surrounded by a cylinder of the given radius
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTurnpoint"))]
pub struct Turnpoint {
    pub name: String,
    /// Center of the cylinder
    pub point: GeoPoint,
    /// Cylinder radius in meters
    pub radius: f64,
}

impl Turnpoint {
    /// Create a turnpoint
    ///
    /// Fails if the center lies outside the canonical coordinate range or if
    /// the radius is negative or not finite.
    pub fn new(name: impl Into<String>, point: GeoPoint, radius: f64) -> Result<Self> {
        if !point.is_valid() {
            return Err(Error::InvalidCoordinate { point });
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(Error::InvalidRadius { radius });
        }

        Ok(Self {
            name: name.into(),
            point,
            radius,
        })
    }
}

/// Unvalidated turnpoint as it appears in serialized form
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTurnpoint {
    name: String,
    point: GeoPoint,
    radius: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTurnpoint> for Turnpoint {
    type Error = Error;

    fn try_from(raw: RawTurnpoint) -> Result<Self> {
        Turnpoint::new(raw.name, raw.point, raw.radius)
    }
}
