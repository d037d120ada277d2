//! Genetic algorithm for king/knight piece placement.
//!
//! An individual is a bit per board cell. Fitness rewards placed pieces and
//! penalises pairs of pieces that attack each other as a king or a knight.
//! Each generation is produced by roulette-wheel selection, random-pair
//! single-point crossover and per-bit mutation.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Run parameters (board size, population, weights, rates, seed)
//! - [`Individual`]: Immutable candidate placement with cached scores
//! - [`FitnessEvaluator`]: Collision counting and scoring
//! - [`Population`]: One generation
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best individuals and per-generation statistics
//!
//! # Operators
//!
//! - [`selection`]: Fitness-proportionate sampling with replacement
//! - [`crossover`]: Fisher–Yates pairing and single-point crossover
//! - [`mutation`]: Independent bit flips
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod crossover;
mod fitness;
mod individual;
pub mod mutation;
mod population;
mod runner;
pub mod selection;

pub use config::GaConfig;
pub use fitness::{Evaluation, FitnessEvaluator};
pub use individual::Individual;
pub use population::Population;
pub use runner::{GaResult, GaRunner, GenerationStats};
