use std::sync::Arc;

use jiff::Timestamp;
use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    error::SolveError,
    problem::{
        location::Location,
        tour_problem::{TourProblem, TourProblemBuilder},
    },
    solver::{
        construction::construction_context::{ConstructTour, ConstructionContext},
        ls::two_opt_search::{ImprovementEvent, SearchOutcome, SearchSummary, TwoOptSearch},
    },
    timer_debug,
    utils::{cancellation::CancellationFlag, linear_congruential::LinearCongruential},
};

use super::{
    solution::TourSolution,
    solver_params::{Improvement, SolverParams},
    tour::Tour,
};

type ImprovementHandler = Arc<Mutex<dyn FnMut(&ImprovementEvent) + Send + Sync + 'static>>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum SolverStatus {
    Pending,
    Running,
    Completed,
    Cancelled,
    Failed,
}

impl SolverStatus {
    pub fn is_finished(self) -> bool {
        matches!(
            self,
            SolverStatus::Completed | SolverStatus::Cancelled | SolverStatus::Failed
        )
    }
}

/// Construct-then-improve pipeline over one set of locations.
///
/// Every solver owns its problem, tour and rng, so several can run side by
/// side without sharing state.
pub struct Solver {
    problem: TourProblem,
    params: SolverParams,
    status: RwLock<SolverStatus>,
    cancellation: CancellationFlag,
    on_improvement_handler: Option<ImprovementHandler>,
    current_tour: RwLock<Option<Tour>>,
    solution: RwLock<Option<TourSolution>>,
}

impl Solver {
    pub fn new(locations: Vec<Location>, params: SolverParams) -> Self {
        let mut builder = TourProblemBuilder::default();
        builder.set_locations(locations).set_metric(params.metric);
        if let Some(step) = params.grid_snap {
            builder.set_grid_snap(step);
        }

        Solver {
            problem: builder.build(),
            params,
            status: RwLock::new(SolverStatus::Pending),
            cancellation: CancellationFlag::new(),
            on_improvement_handler: None,
            current_tour: RwLock::new(None),
            solution: RwLock::new(None),
        }
    }

    pub fn on_improvement<F>(&mut self, callback: F)
    where
        F: FnMut(&ImprovementEvent) + Send + Sync + 'static,
    {
        self.on_improvement_handler = Some(Arc::new(Mutex::new(callback)));
    }

    pub fn problem(&self) -> &TourProblem {
        &self.problem
    }

    /// Handle the host can use to stop the search between two passes.
    pub fn cancellation(&self) -> CancellationFlag {
        self.cancellation.clone()
    }

    pub fn stop(&self) {
        self.cancellation.cancel();
    }

    pub fn status(&self) -> SolverStatus {
        *self.status.read()
    }

    /// The latest tour, updated after construction and every improvement.
    pub fn current_tour(&self) -> Option<Tour> {
        self.current_tour.read().clone()
    }

    pub fn solution(&self) -> Option<TourSolution> {
        self.solution.read().clone()
    }

    /// Solves on the current async runtime, yielding between 2-opt passes.
    pub async fn solve(&self) -> Result<TourSolution, SolveError> {
        let started_at = Timestamp::now();
        let tour = self.construct()?;

        let (tour, summary) = match self.params.improvement {
            Improvement::TwoOpt => {
                let mut search = TwoOptSearch::new(&self.problem, tour);
                let summary = search
                    .run(&self.cancellation, |event| self.handle_improvement(event))
                    .await;
                (search.into_tour(), Some(summary))
            }
            Improvement::None => (tour, None),
        };

        Ok(self.complete(tour, summary, started_at))
    }

    /// Same pipeline as [`Solver::solve`] for hosts without a runtime.
    pub fn solve_blocking(&self) -> Result<TourSolution, SolveError> {
        let started_at = Timestamp::now();
        let tour = self.construct()?;

        let (tour, summary) = match self.params.improvement {
            Improvement::TwoOpt => {
                let mut search = TwoOptSearch::new(&self.problem, tour);
                let summary =
                    search.run_blocking(&self.cancellation, |event| self.handle_improvement(event));
                (search.into_tour(), Some(summary))
            }
            Improvement::None => (tour, None),
        };

        Ok(self.complete(tour, summary, started_at))
    }

    #[instrument(skip_all, level = "debug")]
    fn construct(&self) -> Result<Tour, SolveError> {
        let problem = &self.problem;
        if problem.len() < 2 {
            *self.status.write() = SolverStatus::Failed;
            return Err(SolveError::InsufficientPoints {
                found: problem.len(),
            });
        }

        *self.status.write() = SolverStatus::Running;
        info!(
            locations = problem.len(),
            algorithm = %self.params.algorithm,
            metric = %problem.metric(),
            "Starting solve"
        );

        let start = problem.clamp_location(self.params.fixed_start.unwrap_or(0));
        let algorithm = self.params.algorithm;

        let mut tour = timer_debug!(
            "Construction",
            match self.params.seed {
                Some(seed) => algorithm.construct_tour(ConstructionContext {
                    problem,
                    start,
                    rng: &mut LinearCongruential::new(seed),
                }),
                None => algorithm.construct_tour(ConstructionContext {
                    problem,
                    start,
                    rng: &mut rand::rng(),
                }),
            }
        );

        if self.params.fixed_start.is_some() {
            tour.rotate_to_start(start);
        }

        *self.current_tour.write() = Some(tour.clone());

        Ok(tour)
    }

    fn handle_improvement(&self, event: &ImprovementEvent) {
        *self.current_tour.write() = Some(event.tour.clone());

        if let Some(callback) = &self.on_improvement_handler {
            callback.lock()(event);
        }
    }

    fn complete(
        &self,
        tour: Tour,
        summary: Option<SearchSummary>,
        started_at: Timestamp,
    ) -> TourSolution {
        let method = match summary {
            Some(summary) if summary.improvements > 0 => {
                format!("{} + 2-Opt", self.params.algorithm)
            }
            _ => self.params.algorithm.to_string(),
        };

        let solution = TourSolution {
            total_length: tour.length(&self.problem, self.params.roundtrip),
            roundtrip: self.params.roundtrip,
            tour,
            method,
            elapsed: Timestamp::now().duration_since(started_at),
            search: summary,
        };

        info!(
            method = %solution.method,
            length = %self.problem.metric().format_distance(solution.total_length),
            elapsed_ms = solution.elapsed_ms(),
            "Solve finished"
        );

        let cancelled = summary.is_some_and(|summary| summary.outcome == SearchOutcome::Cancelled);
        *self.status.write() = if cancelled {
            SolverStatus::Cancelled
        } else {
            SolverStatus::Completed
        };
        *self.current_tour.write() = Some(solution.tour.clone());
        *self.solution.write() = Some(solution.clone());

        solution
    }
}

/// Blocking one-shot solve of `locations` with `params`.
pub fn solve(locations: Vec<Location>, params: SolverParams) -> Result<TourSolution, SolveError> {
    Solver::new(locations, params).solve_blocking()
}
