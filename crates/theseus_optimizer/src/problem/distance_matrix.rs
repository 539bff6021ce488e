use super::{
    location::{Location, LocationIdx},
    metric::Metric,
};

pub type Distance = f64;

/// Precomputed pairwise distances under a single metric.
///
/// Stored flat: the distance from `from` to `to` lives at
/// `from * num_locations + to`. Both triangles are filled from the same
/// computation so lookups are exactly symmetric.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    distances: Vec<Distance>,
    num_locations: usize,
    metric: Metric,
}

impl DistanceMatrix {
    pub fn from_locations(locations: &[Location], metric: Metric) -> Self {
        let num_locations = locations.len();
        let mut distances: Vec<Distance> = vec![0.0; num_locations * num_locations];

        for (i, from) in locations.iter().enumerate() {
            for (j, to) in locations.iter().enumerate().skip(i + 1) {
                let distance = metric.distance(from, to);
                distances[i * num_locations + j] = distance;
                distances[j * num_locations + i] = distance;
            }
        }

        DistanceMatrix {
            distances,
            num_locations,
            metric,
        }
    }

    #[inline(always)]
    fn index(&self, from: LocationIdx, to: LocationIdx) -> usize {
        from.get() * self.num_locations + to.get()
    }

    #[inline(always)]
    pub fn distance(&self, from: LocationIdx, to: LocationIdx) -> Distance {
        self.distances[self.index(from, to)]
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn num_locations(&self) -> usize {
        self.num_locations
    }
}

#[cfg(test)]
mod tests {
    use super::DistanceMatrix;
    use crate::{
        problem::{location::LocationIdx, metric::Metric},
        test_utils,
    };

    #[test]
    fn test_matrix_matches_metric() {
        let locations = test_utils::create_location_grid(3, 3);
        let matrix = DistanceMatrix::from_locations(&locations, Metric::Planar);

        assert_eq!(matrix.num_locations(), 9);
        for i in 0..9 {
            for j in 0..9 {
                let expected = Metric::Planar.distance(&locations[i], &locations[j]);
                let actual = matrix.distance(LocationIdx::new(i), LocationIdx::new(j));
                assert!((expected - actual).abs() < 1e-12);
                assert_eq!(actual, matrix.distance(LocationIdx::new(j), LocationIdx::new(i)));
            }
        }
    }

    #[test]
    fn test_coincident_locations_have_zero_distance() {
        let locations = test_utils::create_locations(vec![(1.0, 1.0), (1.0, 1.0), (2.0, 1.0)]);
        let matrix = DistanceMatrix::from_locations(&locations, Metric::Planar);

        assert_eq!(matrix.distance(LocationIdx::new(0), LocationIdx::new(1)), 0.0);
        assert_eq!(matrix.distance(LocationIdx::new(1), LocationIdx::new(2)), 1.0);
    }
}
