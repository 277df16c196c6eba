use crate::sphere::distance;
use crate::types::Fix;
use std::time::Duration;

/// Summary of a recorded flight track
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackStats {
    /// Track length in meters, see [`track_length`]
    pub length: f64,
    pub min_gps_altitude: i32,
    pub max_gps_altitude: i32,
    pub min_baro_altitude: i32,
    pub max_baro_altitude: i32,
    /// Time between the first and the last fix
    pub duration: Duration,
}

/// Length in meters of a recorded flight track
///
/// Only legs between two consecutive valid fixes are counted. A single
/// invalid fix therefore drops both legs touching it.
pub fn track_length(fixes: &[Fix]) -> f64 {
    fixes
        .windows(2)
        .filter(|leg| leg[0].valid && leg[1].valid)
        .map(|leg| distance(leg[0].point, leg[1].point))
        .sum()
}

/// Length, altitude extremes and duration of a recorded flight track
///
/// Altitude extremes include invalid fixes, since the recorder still
/// measured them. The duration is zero if the last fix is not later than
/// the first. Returns `None` for an empty track.
pub fn analyze(fixes: &[Fix]) -> Option<TrackStats> {
    let (first, last) = (fixes.first()?, fixes.last()?);

    let mut stats = TrackStats {
        length: track_length(fixes),
        min_gps_altitude: first.gps_altitude,
        max_gps_altitude: first.gps_altitude,
        min_baro_altitude: first.baro_altitude,
        max_baro_altitude: first.baro_altitude,
        duration: Duration::from_secs(u64::try_from(last.time - first.time).unwrap_or(0)),
    };

    for fix in &fixes[1..] {
        stats.min_gps_altitude = stats.min_gps_altitude.min(fix.gps_altitude);
        stats.max_gps_altitude = stats.max_gps_altitude.max(fix.gps_altitude);
        stats.min_baro_altitude = stats.min_baro_altitude.min(fix.baro_altitude);
        stats.max_baro_altitude = stats.max_baro_altitude.max(fix.baro_altitude);
    }

    log::debug!("analyzed {} fixes: {stats:?}", fixes.len());

    Some(stats)
}
