use fixedbitset::FixedBitSet;

use crate::{problem::location::LocationIdx, solver::tour::Tour};

use super::construction_context::{ConstructTour, ConstructionContext};

/// Greedy walk: from the current end of the tour, go to the closest
/// unvisited location. Candidates are scanned in index order and only a
/// strictly shorter distance replaces the incumbent, so ties go to the
/// lowest index.
pub struct NearestNeighbor;

impl ConstructTour for NearestNeighbor {
    fn construct_tour(&self, context: ConstructionContext) -> Tour {
        let problem = context.problem;
        let n = problem.len();
        if n == 0 {
            return Tour::default();
        }

        let mut visited = FixedBitSet::with_capacity(n);
        let mut tour = Tour::new(Vec::with_capacity(n));

        let mut current = context.start;
        visited.insert(current.get());
        tour.push(current);

        for _ in 1..n {
            let mut best: Option<LocationIdx> = None;
            let mut best_distance = f64::INFINITY;

            for candidate in visited.zeroes().map(LocationIdx::new) {
                let distance = problem.distance(current, candidate);
                if distance < best_distance {
                    best_distance = distance;
                    best = Some(candidate);
                }
            }

            let Some(next) = best else {
                break;
            };

            visited.insert(next.get());
            tour.push(next);
            current = next;
        }

        tour
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};

    use super::NearestNeighbor;
    use crate::{
        problem::location::{Location, LocationIdx},
        solver::construction::construction_context::{ConstructTour, ConstructionContext},
        test_utils::{self, tour_ids},
    };

    #[test]
    fn test_square_from_zero() {
        let problem = test_utils::create_square_problem();
        let mut rng = SmallRng::seed_from_u64(0);

        let tour = NearestNeighbor.construct_tour(ConstructionContext {
            problem: &problem,
            start: LocationIdx::new(0),
            rng: &mut rng,
        });

        assert_eq!(tour_ids(&tour), vec![0, 1, 2, 3]);
        assert_eq!(tour.length(&problem, false), 30.0);
        assert_eq!(tour.length(&problem, true), 40.0);
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        // 1 and 3 are both at distance 10 from 0
        let problem = test_utils::create_square_problem();
        let mut rng = SmallRng::seed_from_u64(0);

        let tour = NearestNeighbor.construct_tour(ConstructionContext {
            problem: &problem,
            start: LocationIdx::new(2),
            rng: &mut rng,
        });

        assert_eq!(tour_ids(&tour), vec![2, 1, 0, 3]);
    }

    #[test]
    fn test_coincident_locations() {
        let problem = test_utils::create_test_problem(test_utils::create_locations(vec![
            (5.0, 5.0),
            (5.0, 5.0),
        ]));
        let mut rng = SmallRng::seed_from_u64(0);

        let tour = NearestNeighbor.construct_tour(ConstructionContext {
            problem: &problem,
            start: LocationIdx::new(0),
            rng: &mut rng,
        });

        assert_eq!(tour_ids(&tour), vec![0, 1]);
        assert_eq!(tour.length(&problem, true), 0.0);
    }

    #[test]
    fn test_all_coincident_is_permutation() {
        let problem = test_utils::create_test_problem(vec![Location::from_cartesian(1.0, 1.0); 7]);
        let mut rng = SmallRng::seed_from_u64(0);

        let tour = NearestNeighbor.construct_tour(ConstructionContext {
            problem: &problem,
            start: LocationIdx::new(3),
            rng: &mut rng,
        });

        assert_eq!(tour_ids(&tour), vec![3, 0, 1, 2, 4, 5, 6]);
        assert!(tour.is_permutation(7));
    }

    #[test]
    fn test_single_location() {
        let problem =
            test_utils::create_test_problem(test_utils::create_locations(vec![(1.0, 2.0)]));
        let mut rng = SmallRng::seed_from_u64(0);

        let tour = NearestNeighbor.construct_tour(ConstructionContext {
            problem: &problem,
            start: LocationIdx::new(0),
            rng: &mut rng,
        });

        assert_eq!(tour_ids(&tour), vec![0]);
    }

    #[test]
    fn test_deterministic() {
        let problem = test_utils::create_test_problem(test_utils::create_location_grid(5, 6));
        let mut rng = SmallRng::seed_from_u64(0);

        let mut construct = || {
            NearestNeighbor.construct_tour(ConstructionContext {
                problem: &problem,
                start: LocationIdx::new(13),
                rng: &mut rng,
            })
        };

        let first = construct();
        let second = construct();

        assert_eq!(first, second);
        assert!(first.is_permutation(30));
    }
}
