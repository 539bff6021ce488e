use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("At least 2 locations are required to build a tour, got {found}")]
    InsufficientPoints { found: usize },
}
