use std::{fs::File, io::BufReader, path::PathBuf, time::Duration};

use clap::{Args, ValueEnum};
use comfy_table::Table;
use indicatif::{ProgressBar, ProgressStyle};
use theseus_optimizer::{
    problem::metric::Metric,
    solver::{
        construction::construction_strategy::ConstructionStrategy,
        solution::TourSolution,
        solver::Solver,
        solver_params::{Improvement, SolverParams},
    },
};
use tracing::info;

use crate::{parsers, points::PointSource};

#[derive(Clone, Copy, ValueEnum)]
enum MetricArg {
    Planar,
    Spherical,
}

impl From<MetricArg> for Metric {
    fn from(value: MetricArg) -> Self {
        match value {
            MetricArg::Planar => Metric::Planar,
            MetricArg::Spherical => Metric::Spherical,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Nearest,
    Insertion,
    Random,
}

impl From<AlgorithmArg> for ConstructionStrategy {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Nearest => ConstructionStrategy::NearestNeighbor,
            AlgorithmArg::Insertion => ConstructionStrategy::CheapestInsertion,
            AlgorithmArg::Random => ConstructionStrategy::Random,
        }
    }
}

#[derive(Args)]
pub struct SolveArgs {
    /// Points to visit: cities, grid:<rows>x<cols> or random:<count>
    #[arg(short, long, value_parser = parsers::parse_point_source, default_value = "cities")]
    points: PointSource,

    /// Seed for random:<count> point generation
    #[arg(long, default_value_t = 1)]
    points_seed: u64,

    /// JSON solver configuration, flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum)]
    metric: Option<MetricArg>,

    #[arg(short, long, value_enum)]
    algorithm: Option<AlgorithmArg>,

    /// Index of the point the tour must start at
    #[arg(short, long)]
    start: Option<usize>,

    /// Count the edge back to the first point
    #[arg(short, long)]
    roundtrip: bool,

    /// Seed for the random construction
    #[arg(long)]
    seed: Option<u32>,

    /// Skip the 2-opt improvement
    #[arg(long)]
    no_improve: bool,

    /// Snap points to a grid of this step
    #[arg(long)]
    grid_snap: Option<f64>,

    /// Stop improving after this long (e.g., "500ms", "5s", "PT1M")
    #[arg(short, long, value_parser = parsers::parse_duration)]
    timeout: Option<jiff::SignedDuration>,
}

impl SolveArgs {
    fn solver_params(&self) -> Result<SolverParams, anyhow::Error> {
        let mut params = match &self.config {
            Some(path) => serde_json::from_reader(BufReader::new(File::open(path)?))?,
            None => SolverParams {
                metric: if self.points.is_geographic() {
                    Metric::Spherical
                } else {
                    Metric::Planar
                },
                ..SolverParams::default()
            },
        };

        if let Some(metric) = self.metric {
            params.metric = metric.into();
        }
        if let Some(algorithm) = self.algorithm {
            params.algorithm = algorithm.into();
        }
        if self.start.is_some() {
            params.fixed_start = self.start;
        }
        if self.roundtrip {
            params.roundtrip = true;
        }
        if self.seed.is_some() {
            params.seed = self.seed;
        }
        if self.no_improve {
            params.improvement = Improvement::None;
        }
        if self.grid_snap.is_some() {
            params.grid_snap = self.grid_snap;
        }

        Ok(params)
    }
}

pub async fn run(args: SolveArgs) -> anyhow::Result<()> {
    let params = args.solver_params()?;
    let locations = args.points.generate(args.points_seed);
    info!(
        "Solving {} points ({}, {})",
        locations.len(),
        params.metric,
        params.algorithm
    );

    let mut solver = Solver::new(locations, params);

    let bar = ProgressBar::new_spinner();
    bar.enable_steady_tick(Duration::from_millis(100));
    bar.set_style(ProgressStyle::default_spinner().template("{spinner} [{elapsed}] {msg}")?);

    let metric = solver.problem().metric();
    let progress = bar.clone();
    solver.on_improvement(move |event| {
        progress.set_message(format!(
            "2-opt pass {}: -{}",
            event.iteration,
            metric.format_distance(event.gain)
        ));
    });

    if let Some(timeout) = args.timeout {
        let cancellation = solver.cancellation();
        let timeout = timeout.unsigned_abs();
        tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            cancellation.cancel();
        });
    }

    let solution = solver.solve().await;
    bar.finish_and_clear();
    let solution = solution?;

    println!("{}", route_table(&solver, &solution));
    info!(
        "Finished: method = {}, length = {}, time = {:.2} ms",
        solution.method,
        metric.format_distance(solution.total_length),
        solution.elapsed_ms(),
    );

    Ok(())
}

fn route_table(solver: &Solver, solution: &TourSolution) -> Table {
    let problem = solver.problem();
    let metric = problem.metric();

    let mut table = Table::new();
    table.set_header(match metric {
        Metric::Planar => vec!["#", "Label", "x", "y", "Leg"],
        Metric::Spherical => vec!["#", "Label", "lat", "lon", "Leg"],
    });

    let mut previous = None;
    for (position, &location_id) in solution.tour.iter().enumerate() {
        let location = problem.location(location_id);
        let (a, b) = match metric {
            Metric::Planar => (location.x(), location.y()),
            Metric::Spherical => (location.lat(), location.lon()),
        };
        let leg = previous
            .map(|from| metric.format_distance(problem.distance(from, location_id)))
            .unwrap_or_default();

        table.add_row(vec![
            position.to_string(),
            problem.label(location_id),
            format!("{a:.5}"),
            format!("{b:.5}"),
            leg,
        ]);
        previous = Some(location_id);
    }

    if let (true, Some(first), Some(last)) = (
        solution.roundtrip,
        solution.tour.first(),
        solution.tour.last(),
    ) {
        table.add_row(vec![
            String::from("↩"),
            problem.label(first),
            String::new(),
            String::new(),
            metric.format_distance(problem.distance(last, first)),
        ]);
    }

    table
}
