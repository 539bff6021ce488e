use jiff::SignedDuration;
use serde::Serialize;

use super::{ls::two_opt_search::SearchSummary, tour::Tour};

/// Result of a solve.
#[derive(Clone, Debug, Serialize)]
pub struct TourSolution {
    pub tour: Tour,
    /// Recomputed from `tour`, includes the closing edge when `roundtrip`.
    pub total_length: f64,
    pub roundtrip: bool,
    /// Human readable name of the method, e.g. `Nearest Neighbor + 2-Opt`.
    pub method: String,
    pub elapsed: SignedDuration,
    /// Present when local search ran.
    pub search: Option<SearchSummary>,
}

impl TourSolution {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}
