use geo::{Distance, Euclidean};
use serde::{Deserialize, Serialize};

use crate::define_index_newtype;

define_index_newtype!(LocationIdx, Location);

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A point to visit. `x` doubles as longitude and `y` as latitude when the
/// problem uses the spherical metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    point: geo::Point,
    label: Option<String>,
}

impl Location {
    pub fn from_cartesian(x: f64, y: f64) -> Self {
        Self {
            point: geo::Point::new(x, y),
            label: None,
        }
    }

    pub fn from_lat_lon(lat: f64, lon: f64) -> Self {
        Self {
            point: geo::Point::new(lon, lat),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn x(&self) -> f64 {
        self.point.x()
    }

    pub fn y(&self) -> f64 {
        self.point.y()
    }

    pub fn lon(&self) -> f64 {
        self.point.x()
    }

    pub fn lat(&self) -> f64 {
        self.point.y()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Rounds both coordinates to the nearest multiple of `step`.
    /// A non-positive step leaves the location untouched.
    pub fn snapped(&self, step: f64) -> Self {
        if step <= 0.0 {
            return self.clone();
        }

        Self {
            point: geo::Point::new(
                (self.x() / step).round() * step,
                (self.y() / step).round() * step,
            ),
            label: self.label.clone(),
        }
    }

    pub fn euclidean_distance(&self, to: &Location) -> f64 {
        Euclidean.distance(self.point, to.point)
    }

    /// Great-circle distance in meters.
    pub fn haversine_distance(&self, to: &Location) -> f64 {
        let phi1 = self.lat().to_radians();
        let phi2 = to.lat().to_radians();
        let delta_phi = (to.lat() - self.lat()).to_radians();
        let delta_lambda = (to.lon() - self.lon()).to_radians();

        // Rounding can push `a` just past 1.0 for near antipodal points.
        let a = ((delta_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2))
        .clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_METERS * c
    }
}
