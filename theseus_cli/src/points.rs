use rand::{Rng, SeedableRng, rngs::SmallRng};
use theseus_optimizer::problem::location::Location;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PointSource {
    /// Ten European cities given as latitude/longitude.
    Cities,
    Grid { rows: usize, cols: usize },
    Random { count: usize },
}

impl PointSource {
    pub fn is_geographic(&self) -> bool {
        matches!(self, PointSource::Cities)
    }

    pub fn generate(&self, seed: u64) -> Vec<Location> {
        match *self {
            PointSource::Cities => [
                (52.5200, 13.4050, "Berlin"),
                (48.8566, 2.3522, "Paris"),
                (51.5074, -0.1278, "London"),
                (41.9028, 12.4964, "Rome"),
                (40.4168, -3.7038, "Madrid"),
                (50.1109, 8.6821, "Frankfurt"),
                (52.2297, 21.0122, "Warsaw"),
                (59.3293, 18.0686, "Stockholm"),
                (60.1699, 24.9384, "Helsinki"),
                (45.4642, 9.1900, "Milan"),
            ]
            .into_iter()
            .map(|(lat, lon, label)| Location::from_lat_lon(lat, lon).with_label(label))
            .collect(),
            PointSource::Grid { rows, cols } => (0..rows)
                .flat_map(|y| (0..cols).map(move |x| Location::from_cartesian(x as f64, y as f64)))
                .collect(),
            PointSource::Random { count } => {
                let mut rng = SmallRng::seed_from_u64(seed);
                (0..count)
                    .map(|_| {
                        Location::from_cartesian(
                            rng.random_range(0.0..100.0),
                            rng.random_range(0.0..100.0),
                        )
                    })
                    .collect()
            }
        }
    }
}
