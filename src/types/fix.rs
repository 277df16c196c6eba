use crate::types::GeoPoint;

/// A single recorded position of a flight track
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fix {
    /// Recording time in seconds, e.g. seconds since the Unix epoch
    pub time: i64,
    pub point: GeoPoint,
    /// `true` for a 3D fix, `false` when the recorder flagged it as invalid
    pub valid: bool,
    /// Pressure altitude in meters
    pub baro_altitude: i32,
    /// GNSS altitude in meters
    pub gps_altitude: i32,
}

impl Fix {
    /// Create a valid fix without altitude information
    pub const fn new(time: i64, point: GeoPoint) -> Self {
        Self {
            time,
            point,
            valid: true,
            baro_altitude: 0,
            gps_altitude: 0,
        }
    }

    pub const fn with_altitudes(mut self, baro_altitude: i32, gps_altitude: i32) -> Self {
        self.baro_altitude = baro_altitude;
        self.gps_altitude = gps_altitude;
        self
    }

    pub const fn invalid(mut self) -> Self {
        self.valid = false;
        self
    }
}
