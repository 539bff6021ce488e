pub mod distance_matrix;
pub mod location;
pub mod metric;
pub mod tour_problem;
