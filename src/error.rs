//! Configuration errors.

use thiserror::Error;

/// Reasons a [`GaConfig`](crate::ga::GaConfig) is rejected before a run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("board_size must be at least 1")]
    EmptyBoard,

    #[error("population_size must be at least 1")]
    EmptyPopulation,

    #[error("generations must be at least 1")]
    NoGenerations,

    #[error("{name} must be within [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    /// The population-wide fitness sum could exceed `u64`.
    #[error("fitness weights too large for board of {cells} cells and population of {population}")]
    FitnessOverflow { cells: usize, population: usize },
}
