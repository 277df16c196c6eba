use crate::error::{Error, Result};
use crate::sphere::distance;
use crate::tangent::tangential_point;
use crate::types::{GeoPoint, Turnpoint};

/// An ordered sequence of turnpoints forming a competition task
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRoute"))]
pub struct Route {
    pub name: String,
    turnpoints: Vec<Turnpoint>,
}

impl Route {
    /// Create a route from at least two turnpoints
    pub fn new(name: impl Into<String>, turnpoints: Vec<Turnpoint>) -> Result<Self> {
        if turnpoints.len() < 2 {
            return Err(Error::TooFewPoints {
                expected: 2,
                actual: turnpoints.len(),
            });
        }

        Ok(Self {
            name: name.into(),
            turnpoints,
        })
    }

    pub fn turnpoints(&self) -> &[Turnpoint] {
        &self.turnpoints
    }

    /// Points the route passes through
    ///
    /// The first and last turnpoints contribute their centers. Every inner
    /// turnpoint contributes the tangential point on its cylinder, computed
    /// from the centers of its neighbours.
    pub fn optimized_points(&self) -> Vec<GeoPoint> {
        let Some(last) = self.turnpoints.len().checked_sub(1) else {
            return Vec::new();
        };

        let points = self
            .turnpoints
            .iter()
            .enumerate()
            .map(|(i, tp)| {
                if i == 0 || i == last {
                    tp.point
                } else {
                    let prev = &self.turnpoints[i - 1];
                    let next = &self.turnpoints[i + 1];
                    tangential_point(prev.point, tp.point, next.point, tp.radius)
                }
            })
            .collect::<Vec<_>>();

        log::debug!(
            "computed {} optimized points for route {:?}",
            points.len(),
            self.name
        );

        points
    }

    /// Length in meters of the line through [`Route::optimized_points`]
    pub fn optimized_distance(&self) -> f64 {
        self.optimized_points()
            .windows(2)
            .map(|leg| distance(leg[0], leg[1]))
            .sum()
    }
}

/// Unvalidated route as it appears in serialized form
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRoute {
    name: String,
    turnpoints: Vec<Turnpoint>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRoute> for Route {
    type Error = Error;

    fn try_from(raw: RawRoute) -> Result<Self> {
        Route::new(raw.name, raw.turnpoints)
    }
}
