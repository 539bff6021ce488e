use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    problem::tour_problem::TourProblem,
    solver::{
        ls::two_opt::{TwoOptPass, two_opt_once},
        tour::Tour,
    },
    utils::cancellation::CancellationFlag,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum SearchState {
    /// Looking for an improving move.
    Scanning,
    /// Converged or cancelled.
    Idle,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum SearchOutcome {
    Converged,
    Cancelled,
}

/// Emitted every time a pass replaces the tour.
#[derive(Clone, Debug, Serialize)]
pub struct ImprovementEvent {
    pub tour: Tour,
    pub gain: f64,
    pub iteration: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub enum StepResult {
    Improved { gain: f64 },
    Idle,
}

/// Terminal report of a continuous run.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct SearchSummary {
    pub outcome: SearchOutcome,
    /// Passes started, including the final one that found nothing.
    pub iterations: usize,
    pub improvements: usize,
    pub total_gain: f64,
}

/// Repeated 2-opt passes over a single tour.
///
/// Continuous mode is nothing more than [`TwoOptSearch::step`] called until
/// the search turns [`SearchState::Idle`] or the cancellation flag is seen
/// before a pass starts.
pub struct TwoOptSearch<'a> {
    problem: &'a TourProblem,
    tour: Tour,
    state: SearchState,
    iterations: usize,
    improvements: usize,
    total_gain: f64,
    cancelled: bool,
}

impl<'a> TwoOptSearch<'a> {
    pub fn new(problem: &'a TourProblem, tour: Tour) -> Self {
        TwoOptSearch {
            problem,
            tour,
            state: SearchState::Scanning,
            iterations: 0,
            improvements: 0,
            total_gain: 0.0,
            cancelled: false,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    pub fn into_tour(self) -> Tour {
        self.tour
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Single-step mode: runs at most one pass.
    pub fn step(&mut self) -> StepResult {
        if self.state == SearchState::Idle {
            return StepResult::Idle;
        }

        // need at least 4 locations for two non-adjacent edges
        if self.tour.len() < 4 {
            self.state = SearchState::Idle;
            return StepResult::Idle;
        }

        self.iterations += 1;

        match two_opt_once(self.problem, &self.tour) {
            TwoOptPass::Improved { tour, gain } => {
                self.tour = tour;
                self.improvements += 1;
                self.total_gain += gain;

                debug!(iteration = self.iterations, gain, "2-opt pass improved tour");
                StepResult::Improved { gain }
            }
            TwoOptPass::NoImprovement => {
                self.state = SearchState::Idle;
                StepResult::Idle
            }
        }
    }

    /// Continuous mode without a scheduler: loops in place until idle.
    #[instrument(skip_all, level = "debug")]
    pub fn run_blocking<F>(
        &mut self,
        cancellation: &CancellationFlag,
        mut on_improvement: F,
    ) -> SearchSummary
    where
        F: FnMut(&ImprovementEvent),
    {
        while let Some(event) = self.next_improvement(cancellation) {
            on_improvement(&event);
        }

        self.summary()
    }

    /// Continuous mode: yields back to the runtime after every accepted
    /// pass so the host can observe progress and request cancellation.
    #[instrument(skip_all, level = "debug")]
    pub async fn run<F>(
        &mut self,
        cancellation: &CancellationFlag,
        mut on_improvement: F,
    ) -> SearchSummary
    where
        F: FnMut(&ImprovementEvent),
    {
        while let Some(event) = self.next_improvement(cancellation) {
            on_improvement(&event);
            tokio::task::yield_now().await;
        }

        self.summary()
    }

    fn next_improvement(&mut self, cancellation: &CancellationFlag) -> Option<ImprovementEvent> {
        if cancellation.is_cancelled() {
            self.state = SearchState::Idle;
            self.cancelled = true;
            return None;
        }

        match self.step() {
            StepResult::Improved { gain } => Some(ImprovementEvent {
                tour: self.tour.clone(),
                gain,
                iteration: self.iterations,
            }),
            StepResult::Idle => None,
        }
    }

    fn summary(&self) -> SearchSummary {
        let outcome = if self.cancelled {
            SearchOutcome::Cancelled
        } else {
            SearchOutcome::Converged
        };

        debug!(
            ?outcome,
            iterations = self.iterations,
            improvements = self.improvements,
            total_gain = self.total_gain,
            "2-opt search finished"
        );

        SearchSummary {
            outcome,
            iterations: self.iterations,
            improvements: self.improvements,
            total_gain: self.total_gain,
        }
    }
}
