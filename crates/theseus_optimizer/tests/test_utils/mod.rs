#![allow(dead_code)]

use theseus_optimizer::{
    problem::{location::Location, metric::Metric, tour_problem::TourProblem},
    solver::tour::Tour,
};

pub fn create_location_grid(rows: usize, cols: usize) -> Vec<Location> {
    (0..rows)
        .flat_map(|y| (0..cols).map(move |x| Location::from_cartesian(x as f64, y as f64)))
        .collect()
}

pub fn create_square() -> Vec<Location> {
    vec![
        Location::from_cartesian(0.0, 0.0),
        Location::from_cartesian(10.0, 0.0),
        Location::from_cartesian(10.0, 10.0),
        Location::from_cartesian(0.0, 10.0),
    ]
}

/// Ten European capitals and large cities, as `(lat, lon)`.
pub fn create_european_cities() -> Vec<Location> {
    [
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
    .collect()
}

pub fn create_planar_problem(locations: Vec<Location>) -> TourProblem {
    TourProblem::new(locations, Metric::Planar)
}

pub fn tour_ids(tour: &Tour) -> Vec<usize> {
    tour.indices().collect()
}
