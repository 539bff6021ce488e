pub mod construction;
pub mod ls;
pub mod solution;
pub mod solver;
pub mod solver_manager;
pub mod solver_params;
pub mod tour;
