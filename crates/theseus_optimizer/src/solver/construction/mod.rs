pub mod cheapest_insertion;
pub mod construction_context;
pub mod construction_strategy;
pub mod nearest_neighbor;
pub mod random_tour;
