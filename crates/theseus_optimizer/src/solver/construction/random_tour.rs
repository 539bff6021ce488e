use crate::{
    problem::location::LocationIdx, solver::tour::Tour, utils::linear_congruential::unit_sample,
};

use super::construction_context::{ConstructTour, ConstructionContext};

/// Uniform random permutation via Fisher-Yates, walking from the last
/// position down and drawing `j = floor(sample * (i + 1))`.
///
/// Reproducible when the context rng is a seeded
/// [`LinearCongruential`](crate::utils::linear_congruential::LinearCongruential).
pub struct RandomTour;

impl ConstructTour for RandomTour {
    fn construct_tour(&self, context: ConstructionContext) -> Tour {
        let mut locations: Vec<LocationIdx> = context.problem.location_ids().collect();

        for i in (1..locations.len()).rev() {
            let j = (unit_sample(context.rng) * (i + 1) as f64).floor() as usize;
            locations.swap(i, j.min(i));
        }

        Tour::new(locations)
    }
}
