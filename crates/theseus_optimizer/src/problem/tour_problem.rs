use tracing::warn;

use super::{
    distance_matrix::{Distance, DistanceMatrix},
    location::{Location, LocationIdx},
    metric::Metric,
};

/// The locations of one solve together with the metric they are measured in.
///
/// Owned by a single solve; building a new problem replaces the locations
/// wholesale rather than mutating them.
#[derive(Debug, Clone)]
pub struct TourProblem {
    locations: Vec<Location>,
    distances: DistanceMatrix,
}

impl TourProblem {
    pub fn new(locations: Vec<Location>, metric: Metric) -> Self {
        let distances = DistanceMatrix::from_locations(&locations, metric);

        TourProblem {
            locations,
            distances,
        }
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn metric(&self) -> Metric {
        self.distances.metric()
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn location(&self, index: LocationIdx) -> &Location {
        &self.locations[index]
    }

    pub fn location_ids(&self) -> impl Iterator<Item = LocationIdx> {
        (0..self.locations.len()).map(LocationIdx::new)
    }

    /// The label of a location, `P<index>` when none was supplied.
    pub fn label(&self, index: LocationIdx) -> String {
        match self.location(index).label() {
            Some(label) => label.to_owned(),
            None => format!("P{index}"),
        }
    }

    #[inline(always)]
    pub fn distance(&self, from: LocationIdx, to: LocationIdx) -> Distance {
        self.distances.distance(from, to)
    }

    /// Clamps a requested start into `[0, len - 1]`.
    pub fn clamp_location(&self, index: usize) -> LocationIdx {
        let last = self.locations.len().saturating_sub(1);
        if index > last {
            warn!(index, last, "Start location out of range, clamping");
        }

        LocationIdx::new(index.min(last))
    }
}

#[derive(Default)]
pub struct TourProblemBuilder {
    locations: Option<Vec<Location>>,
    metric: Option<Metric>,
    grid_snap: Option<f64>,
}

impl TourProblemBuilder {
    pub fn set_metric(&mut self, metric: Metric) -> &mut TourProblemBuilder {
        self.metric = Some(metric);
        self
    }

    pub fn set_locations(&mut self, locations: Vec<Location>) -> &mut TourProblemBuilder {
        self.locations = Some(locations);
        self
    }

    pub fn add_location(&mut self, location: Location) -> &mut TourProblemBuilder {
        if let Some(locations) = &mut self.locations {
            locations.push(location);
        } else {
            self.locations = Some(vec![location]);
        }

        self
    }

    /// Snaps every location to a grid of the given step before building.
    pub fn set_grid_snap(&mut self, step: f64) -> &mut TourProblemBuilder {
        self.grid_snap = Some(step);
        self
    }

    pub fn build(self) -> TourProblem {
        let mut locations = self.locations.unwrap_or_default();

        if let Some(step) = self.grid_snap {
            locations = locations
                .iter()
                .map(|location| location.snapped(step))
                .collect();
        }

        TourProblem::new(locations, self.metric.unwrap_or_default())
    }
}
