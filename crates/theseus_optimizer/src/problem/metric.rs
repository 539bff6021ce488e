use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::location::Location;

/// How coordinates are interpreted and how far apart two locations are.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Euclidean distance on `(x, y)`, unitless.
    #[default]
    Planar,
    /// Haversine distance on `(lon, lat)` in degrees, in meters.
    Spherical,
}

impl Metric {
    pub fn distance(&self, from: &Location, to: &Location) -> f64 {
        match self {
            Metric::Planar => from.euclidean_distance(to),
            Metric::Spherical => from.haversine_distance(to),
        }
    }

    pub fn format_distance(&self, distance: f64) -> String {
        match self {
            Metric::Spherical if distance >= 1000.0 => format!("{:.2} km", distance / 1000.0),
            Metric::Spherical => format!("{distance:.1} m"),
            Metric::Planar => format!("{distance:.3}"),
        }
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Planar => write!(f, "Planar"),
            Self::Spherical => write!(f, "Spherical"),
        }
    }
}
