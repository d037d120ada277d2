//! Genetic-algorithm search for dense, non-attacking piece placements.
//!
//! Pieces are placed on an `N × N` board. Two pieces attack each other when
//! they are a king move or a knight move apart. The search maximises the
//! number of placed pieces while minimising attacking pairs; it is a
//! stochastic optimiser, not an exact solver.
//!
//! - [`board`]: Cell indexing and the attack relation
//! - [`ga`]: Individuals, fitness, operators and the evolutionary loop
//! - [`report`]: Text rendering of a finished run
//!
//! # Example
//!
//! ```
//! use placement_ga::ga::{GaConfig, GaRunner};
//! use placement_ga::report::Report;
//!
//! let config = GaConfig::default()
//!     .with_board_size(4)
//!     .with_population_size(30)
//!     .with_generations(20);
//! let result = GaRunner::run(&config).unwrap();
//! println!("{}", Report::new(&result));
//! ```

pub mod board;
pub mod error;
pub mod ga;
pub mod random;
pub mod report;
