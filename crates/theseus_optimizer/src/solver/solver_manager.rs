use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use tracing::warn;
use uuid::Uuid;

use crate::problem::location::Location;

use super::{
    solution::TourSolution,
    solver::{Solver, SolverStatus},
    solver_params::SolverParams,
};

/// Runs independent solves in the background, addressed by job id.
#[derive(Default)]
pub struct SolverManager {
    solvers: RwLock<HashMap<Uuid, Arc<Solver>>>,
}

impl SolverManager {
    pub async fn solve(&self, locations: Vec<Location>, params: SolverParams) -> Uuid {
        let job_id = Uuid::new_v4();
        let solver = Arc::new(Solver::new(locations, params));
        self.solvers
            .write()
            .await
            .insert(job_id, Arc::clone(&solver));

        tokio::spawn(async move {
            if let Err(error) = solver.solve().await {
                warn!(%job_id, %error, "Solve failed");
            }
        });

        job_id
    }

    pub async fn get_status(&self, job_id: &Uuid) -> Option<SolverStatus> {
        self.solvers
            .read()
            .await
            .get(job_id)
            .map(|solver| solver.status())
    }

    /// Requests cancellation. The job stays registered so its `Cancelled`
    /// status and best tour remain readable until it is removed.
    pub async fn stop(&self, job_id: &Uuid) -> bool {
        match self.solvers.read().await.get(job_id) {
            Some(solver) => {
                solver.stop();
                true
            }
            None => false,
        }
    }

    /// Unregisters a job, cancelling it if it is still running, and returns
    /// its solution if one was produced.
    pub async fn remove(&self, job_id: &Uuid) -> Option<TourSolution> {
        let solver = self.solvers.write().await.remove(job_id)?;
        solver.stop();
        solver.solution()
    }

    /// Drops every job that is no longer pending or running.
    pub async fn remove_finished(&self) -> usize {
        let mut solvers = self.solvers.write().await;
        let before = solvers.len();
        solvers.retain(|_, solver| !solver.status().is_finished());
        before - solvers.len()
    }

    pub async fn get_solution(&self, job_id: &Uuid) -> Option<TourSolution> {
        self.solvers
            .read()
            .await
            .get(job_id)
            .and_then(|solver| solver.solution())
    }
}
