#![doc = include_str!("../README.md")]

pub use crate::angle::{angular_delta, bisect, normalize};
pub use crate::error::{Error, Result};
pub use crate::projection::{Projection, line_circle_entry, project_point_onto_line};
pub use crate::route::Route;
pub use crate::sphere::{EARTH_RADIUS, bearing, destination, distance};
pub use crate::tangent::tangential_point;
pub use crate::track::{TrackStats, track_length};
pub use crate::types::*;

pub mod angle;
mod error;
pub mod outline;
pub mod projection;
mod route;
pub mod sphere;
mod tangent;
pub mod track;
mod types;
