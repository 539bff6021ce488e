use fixedbitset::FixedBitSet;

use crate::{problem::location::LocationIdx, solver::tour::Tour};

use super::construction_context::{ConstructTour, ConstructionContext};

/// Grows a cycle from two seed locations by repeatedly inserting the
/// (location, position) pair with the smallest detour
/// `d(a, v) + d(v, b) - d(a, b)`.
///
/// The cycle is closed while evaluating detours but the returned tour is
/// left open. Remaining locations and positions are scanned in index order
/// with a strict comparison, so the first cheapest pair wins.
pub struct CheapestInsertion;

struct InsertionCandidate {
    location: LocationIdx,
    position: usize,
    cost: f64,
}

impl ConstructTour for CheapestInsertion {
    fn construct_tour(&self, context: ConstructionContext) -> Tour {
        let problem = context.problem;
        let n = problem.len();
        if n < 2 {
            return Tour::new(problem.location_ids().collect());
        }

        let start = context.start;
        let second = LocationIdx::new(if start.get() == 0 { 1 } else { 0 });

        let mut remaining = FixedBitSet::with_capacity(n);
        remaining.insert_range(..);
        remaining.set(start.get(), false);
        remaining.set(second.get(), false);

        let mut tour = Tour::new(Vec::with_capacity(n));
        tour.push(start);
        tour.push(second);

        while !remaining.is_clear() {
            let mut best: Option<InsertionCandidate> = None;

            for location in remaining.ones().map(LocationIdx::new) {
                for position in 0..tour.len() {
                    let a = tour[position];
                    let b = tour[(position + 1) % tour.len()];

                    let cost = problem.distance(a, location) + problem.distance(location, b)
                        - problem.distance(a, b);

                    if best.as_ref().is_none_or(|best| cost < best.cost) {
                        best = Some(InsertionCandidate {
                            location,
                            position: position + 1,
                            cost,
                        });
                    }
                }
            }

            let Some(best) = best else {
                break;
            };

            tour.insert(best.position, best.location);
            remaining.set(best.location.get(), false);
        }

        tour
    }
}
