use crate::error::{Error, Result};

/// A geographic point on the earth sphere
///
/// Coordinates are signed decimal degrees. Values are not validated on
/// construction; use [`GeoPoint::try_new`] when the input comes from an
/// untrusted source.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Latitude in degrees (-90..90, north positive)
    pub latitude: f64,
    /// Longitude in degrees (-180..180, east positive)
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Create a point, rejecting coordinates outside the canonical range
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        let point = Self::new(latitude, longitude);
        if !point.is_valid() {
            return Err(Error::InvalidCoordinate { point });
        }
        Ok(point)
    }

    /// Check that both coordinates are finite and within the canonical range
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Latitude in radians
    pub fn lat_rad(&self) -> f64 {
        self.latitude.to_radians()
    }

    /// Longitude in radians
    pub fn lon_rad(&self) -> f64 {
        self.longitude.to_radians()
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};
    use insta::assert_compact_debug_snapshot;

    #[test]
    fn try_new_accepts_canonical_range() {
        assert_ok!(GeoPoint::try_new(46.928876, 8.339587));
        assert_ok!(GeoPoint::try_new(-90.0, -180.0));
        assert_ok!(GeoPoint::try_new(90.0, 180.0));
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert_err!(GeoPoint::try_new(90.5, 0.0));
        assert_err!(GeoPoint::try_new(0.0, -181.0));
        assert_err!(GeoPoint::try_new(f64::NAN, 0.0));
        assert_err!(GeoPoint::try_new(0.0, f64::INFINITY));
    }

    #[test]
    fn try_new_error_carries_point() {
        let err = GeoPoint::try_new(120.0, 8.0).unwrap_err();
        assert_compact_debug_snapshot!(err, @"InvalidCoordinate { point: GeoPoint { latitude: 120.0, longitude: 8.0 } }");
    }

    #[test]
    fn radians() {
        let point = GeoPoint::new(45.0, -90.0);
        assert!((point.lat_rad() - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
        assert!((point.lon_rad() + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn from_tuple() {
        let point = GeoPoint::from((46.5, 8.25));
        assert_eq!(point, GeoPoint::new(46.5, 8.25));
    }
}
