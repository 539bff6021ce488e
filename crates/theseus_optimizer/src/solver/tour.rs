use fixedbitset::FixedBitSet;
use serde::Serialize;

use crate::problem::{location::LocationIdx, tour_problem::TourProblem};

/// An ordered visit of every location exactly once.
///
/// The sequence is always open: a roundtrip is expressed by passing
/// `roundtrip = true` to [`Tour::length`], never by repeating the first
/// location at the end.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Tour {
    locations: Vec<LocationIdx>,
}

impl Tour {
    pub fn new(locations: Vec<LocationIdx>) -> Self {
        Tour { locations }
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn as_slice(&self) -> &[LocationIdx] {
        &self.locations
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LocationIdx> {
        self.locations.iter()
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> {
        self.locations.iter().map(LocationIdx::get)
    }

    pub fn first(&self) -> Option<LocationIdx> {
        self.locations.first().copied()
    }

    pub fn last(&self) -> Option<LocationIdx> {
        self.locations.last().copied()
    }

    pub fn position(&self, location: LocationIdx) -> Option<usize> {
        self.locations.iter().position(|&id| id == location)
    }

    /// Sum of the distances between consecutive locations.
    pub fn open_length(&self, problem: &TourProblem) -> f64 {
        self.locations
            .windows(2)
            .map(|pair| problem.distance(pair[0], pair[1]))
            .sum()
    }

    /// Tour length, including the closing edge back to the first location
    /// when `roundtrip` is set.
    pub fn length(&self, problem: &TourProblem, roundtrip: bool) -> f64 {
        let open = self.open_length(problem);

        match (roundtrip, self.first(), self.last()) {
            (true, Some(first), Some(last)) if self.len() >= 2 => {
                open + problem.distance(last, first)
            }
            _ => open,
        }
    }

    /// Cyclic rotation placing `start` at position 0, keeping the relative
    /// order of the others. No-op when `start` is not part of the tour.
    pub fn rotate_to_start(&mut self, start: LocationIdx) {
        if let Some(position) = self.position(start) {
            self.locations.rotate_left(position);
        }
    }

    /// A new tour with the positions `from..=to` reversed.
    pub fn with_reversed_segment(&self, from: usize, to: usize) -> Tour {
        let mut locations = self.locations.clone();
        if from < to {
            locations[from..=to].reverse();
        }

        Tour { locations }
    }

    pub(crate) fn insert(&mut self, position: usize, location: LocationIdx) {
        self.locations.insert(position, location);
    }

    pub(crate) fn push(&mut self, location: LocationIdx) {
        self.locations.push(location);
    }

    /// Whether this is a permutation of `0..num_locations`.
    pub fn is_permutation(&self, num_locations: usize) -> bool {
        if self.locations.len() != num_locations {
            return false;
        }

        let mut seen = FixedBitSet::with_capacity(num_locations);
        for location in &self.locations {
            let index = location.get();
            if index >= num_locations || seen.put(index) {
                return false;
            }
        }

        true
    }
}

impl From<Vec<usize>> for Tour {
    fn from(indices: Vec<usize>) -> Self {
        Tour::new(indices.into_iter().map(LocationIdx::new).collect())
    }
}

impl std::ops::Index<usize> for Tour {
    type Output = LocationIdx;

    fn index(&self, position: usize) -> &Self::Output {
        &self.locations[position]
    }
}
