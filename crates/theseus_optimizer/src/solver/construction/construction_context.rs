use rand::RngCore;

use crate::{
    problem::{location::LocationIdx, tour_problem::TourProblem},
    solver::tour::Tour,
};

pub struct ConstructionContext<'a> {
    pub problem: &'a TourProblem,
    /// Already clamped into the problem's range.
    pub start: LocationIdx,
    pub rng: &'a mut dyn RngCore,
}

/// Builds an initial tour covering every location exactly once.
pub trait ConstructTour {
    fn construct_tour(&self, context: ConstructionContext) -> Tour;
}
