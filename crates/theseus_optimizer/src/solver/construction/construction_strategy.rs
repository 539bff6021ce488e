use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::solver::tour::Tour;

use super::{
    cheapest_insertion::CheapestInsertion,
    construction_context::{ConstructTour, ConstructionContext},
    nearest_neighbor::NearestNeighbor,
    random_tour::RandomTour,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructionStrategy {
    #[default]
    NearestNeighbor,
    CheapestInsertion,
    Random,
}

impl ConstructionStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NearestNeighbor => "Nearest Neighbor",
            Self::CheapestInsertion => "Cheapest Insertion",
            Self::Random => "Random",
        }
    }
}

impl Display for ConstructionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl ConstructTour for ConstructionStrategy {
    #[instrument(skip_all, fields(strategy = %self), level = "debug")]
    fn construct_tour(&self, context: ConstructionContext) -> Tour {
        match self {
            ConstructionStrategy::NearestNeighbor => NearestNeighbor.construct_tour(context),
            ConstructionStrategy::CheapestInsertion => CheapestInsertion.construct_tour(context),
            ConstructionStrategy::Random => RandomTour.construct_tour(context),
        }
    }
}
