use serde::{Deserialize, Serialize};

use crate::problem::metric::Metric;

use super::construction::construction_strategy::ConstructionStrategy;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Improvement {
    None,
    #[default]
    TwoOpt,
}

/// Configuration of one solve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverParams {
    pub metric: Metric,
    pub algorithm: ConstructionStrategy,

    /// Location placed first in the tour. Out-of-range values are clamped.
    pub fixed_start: Option<usize>,
    /// Count the edge from the last location back to the first.
    pub roundtrip: bool,
    /// Seeds the random construction, otherwise the thread rng is used.
    pub seed: Option<u32>,

    pub improvement: Improvement,

    /// Snaps locations to a grid of this step before solving.
    pub grid_snap: Option<f64>,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            metric: Metric::Planar,
            algorithm: ConstructionStrategy::NearestNeighbor,
            fixed_start: None,
            roundtrip: false,
            seed: None,
            improvement: Improvement::TwoOpt,
            grid_snap: None,
        }
    }
}
