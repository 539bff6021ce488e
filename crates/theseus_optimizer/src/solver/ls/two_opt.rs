use crate::{problem::tour_problem::TourProblem, solver::tour::Tour};

/// Smallest gain for a move to count as an improvement.
pub const MIN_GAIN: f64 = 1e-12;

/// **Open-path 2-Opt**
///
/// For edge positions `i < k`, reverses the locations between them.
///
/// ```text
/// BEFORE:
///    ... [i] --x--> [i+1] -> ... -> [k-1] --x--> [k] ...
///         ^           ^               ^           ^
///         A           B               C           D
///
/// AFTER (Sequence Reversed):
///    ... [i] -----> [k-1] -> ... -> [i+1] -----> [k] ...
///         ^           ^               ^           ^
///         A           C               B           D
///
/// Edges Removed: (A->B), (C->D)
/// Edges Added:   (A->C), (B->D)
/// ```
///
/// The closing edge of a roundtrip is never part of the evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoOptMove {
    i: usize,
    k: usize,
    gain: f64,
}

impl TwoOptMove {
    pub fn new(problem: &TourProblem, tour: &Tour, i: usize, k: usize) -> Self {
        if i + 2 > k || k >= tour.len() {
            panic!("TwoOpt: requires i + 2 <= k < tour length")
        }

        let (a, b, c, d) = (tour[i], tour[i + 1], tour[k - 1], tour[k]);

        let current_cost = problem.distance(a, b) + problem.distance(c, d);
        let new_cost = problem.distance(a, c) + problem.distance(b, d);

        TwoOptMove {
            i,
            k,
            gain: current_cost - new_cost,
        }
    }

    /// Calls `consumer` for every pair `0 <= i < n - 2`, `i + 2 <= k < n`.
    pub fn generate_moves<C>(problem: &TourProblem, tour: &Tour, mut consumer: C)
    where
        C: FnMut(Self),
    {
        let n = tour.len();

        for i in 0..n.saturating_sub(2) {
            for k in (i + 2)..n {
                consumer(TwoOptMove::new(problem, tour, i, k))
            }
        }
    }

    pub fn gain(&self) -> f64 {
        self.gain
    }

    /// The tour with positions `i + 1 ..= k - 1` reversed.
    pub fn apply(&self, tour: &Tour) -> Tour {
        tour.with_reversed_segment(self.i + 1, self.k - 1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TwoOptPass {
    Improved { tour: Tour, gain: f64 },
    NoImprovement,
}

impl TwoOptPass {
    pub fn is_improved(&self) -> bool {
        matches!(self, TwoOptPass::Improved { .. })
    }
}

/// Best-improvement pass: evaluates every move and applies the one with the
/// largest gain. A later move must beat the incumbent by more than
/// [`MIN_GAIN`], so near-ties keep the first one found.
pub fn two_opt_once(problem: &TourProblem, tour: &Tour) -> TwoOptPass {
    let mut best: Option<TwoOptMove> = None;
    let mut best_gain = 0.0;

    TwoOptMove::generate_moves(problem, tour, |op| {
        if op.gain() > best_gain + MIN_GAIN {
            best_gain = op.gain();
            best = Some(op);
        }
    });

    match best {
        Some(op) => TwoOptPass::Improved {
            tour: op.apply(tour),
            gain: op.gain(),
        },
        None => TwoOptPass::NoImprovement,
    }
}

#[cfg(test)]
mod tests {
    use super::{TwoOptMove, TwoOptPass, two_opt_once};
    use crate::test_utils::{self, create_tour, tour_ids};

    #[test]
    fn test_two_opt_move() {
        let problem = test_utils::create_test_problem(test_utils::create_location_grid(1, 10));
        let tour = create_tour(vec![0, 1, 2, 3, 4, 5]);

        let op = TwoOptMove::new(&problem, &tour, 0, 5);

        // removes (0,1) and (4,5), adds (0,4) and (1,5)
        assert_eq!(op.gain(), -6.0);
        assert_eq!(tour_ids(&op.apply(&tour)), vec![0, 4, 3, 2, 1, 5]);
        assert_eq!(
            op.apply(&tour).open_length(&problem),
            tour.open_length(&problem) - op.gain()
        );
    }

    #[test]
    fn test_adjacent_edges_have_no_gain() {
        let problem = test_utils::create_square_problem();
        let tour = create_tour(vec![0, 2, 1, 3]);

        let op = TwoOptMove::new(&problem, &tour, 1, 3);
        assert_eq!(op.gain(), 0.0);
        assert_eq!(op.apply(&tour), tour);
    }

    #[test]
    fn test_generate_moves_count() {
        let problem = test_utils::create_test_problem(test_utils::create_location_grid(1, 6));
        let tour = create_tour(vec![0, 1, 2, 3, 4, 5]);

        let mut count = 0;
        TwoOptMove::generate_moves(&problem, &tour, |_| count += 1);

        // sum over i in 0..4 of (6 - (i + 2))
        assert_eq!(count, 4 + 3 + 2 + 1);
    }

    #[test]
    fn test_uncrosses_square() {
        let problem = test_utils::create_square_problem();
        let tour = create_tour(vec![0, 2, 1, 3]);
        let crossing_length = tour.open_length(&problem);

        let TwoOptPass::Improved { tour: improved, gain } = two_opt_once(&problem, &tour) else {
            panic!("expected an improving move");
        };

        assert_eq!(tour_ids(&improved), vec![0, 1, 2, 3]);
        assert!((gain - (crossing_length - 30.0)).abs() < 1e-9);
        assert!((improved.open_length(&problem) - 30.0).abs() < 1e-9);
        assert_eq!(tour_ids(&tour), vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_converged_tour() {
        let problem = test_utils::create_square_problem();
        let tour = create_tour(vec![0, 1, 2, 3]);

        assert_eq!(two_opt_once(&problem, &tour), TwoOptPass::NoImprovement);
        assert_eq!(two_opt_once(&problem, &tour), TwoOptPass::NoImprovement);
    }

    #[test]
    fn test_small_tours() {
        let problem = test_utils::create_square_problem();

        for tour in [create_tour(vec![]), create_tour(vec![2]), create_tour(vec![3, 1])] {
            assert!(!two_opt_once(&problem, &tour).is_improved());
        }
    }

    #[test]
    fn test_picks_best_move() {
        let problem = test_utils::create_test_problem(test_utils::create_location_grid(1, 8));
        let tour = create_tour(vec![0, 6, 5, 4, 3, 2, 1, 7]);

        let TwoOptPass::Improved { tour: improved, gain } = two_opt_once(&problem, &tour) else {
            panic!("expected an improving move");
        };

        // reversing 6..=1 is the single best move
        assert_eq!(tour_ids(&improved), vec![0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(gain, 10.0);
    }
}
