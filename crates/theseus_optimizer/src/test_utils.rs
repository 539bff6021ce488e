use crate::{
    problem::{
        location::Location,
        metric::Metric,
        tour_problem::{TourProblem, TourProblemBuilder},
    },
    solver::tour::Tour,
};

pub fn create_location_grid(rows: usize, cols: usize) -> Vec<Location> {
    let mut locations = Vec::new();

    for y in 0..rows {
        for x in 0..cols {
            let location = Location::from_cartesian(x as f64, y as f64);
            locations.push(location);
        }
    }

    locations
}

pub fn create_locations(locations: Vec<(f64, f64)>) -> Vec<Location> {
    locations
        .iter()
        .map(|&(x, y)| Location::from_cartesian(x, y))
        .collect()
}

pub fn create_test_problem(locations: Vec<Location>) -> TourProblem {
    let mut builder = TourProblemBuilder::default();
    builder.set_locations(locations).set_metric(Metric::Planar);
    builder.build()
}

/// The 10x10 square: (0,0), (10,0), (10,10), (0,10).
pub fn create_square_problem() -> TourProblem {
    create_test_problem(create_locations(vec![
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 10.0),
        (0.0, 10.0),
    ]))
}

pub fn create_tour(indices: Vec<usize>) -> Tour {
    Tour::from(indices)
}

pub fn tour_ids(tour: &Tour) -> Vec<usize> {
    tour.indices().collect()
}
