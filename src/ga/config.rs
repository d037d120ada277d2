//! GA configuration.
//!
//! [`GaConfig`] holds every parameter of a run. It is fixed for the
//! duration of the run; nothing is tuned adaptively.

use crate::board::Board;
use crate::error::ConfigError;

/// Configuration for the placement GA.
///
/// # Defaults
///
/// ```
/// use placement_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.board_size, 9);
/// assert_eq!(config.population_size, 250);
/// assert_eq!(config.generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use placement_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_board_size(5)
///     .with_population_size(100)
///     .with_mutation_probability(0.01)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Side length of the square board.
    pub board_size: usize,

    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Number of select → crossover → mutate cycles. Always run in full.
    pub generations: usize,

    /// Weight `A` of the collision term: each avoided conflicting pair
    /// contributes `A` to fitness.
    pub collision_weight: u32,

    /// Weight `B` of the placement term: each placed piece contributes `B`.
    pub placement_weight: u32,

    /// Per-bit flip probability applied to every individual (0.0–1.0).
    pub mutation_probability: f64,

    /// Probability that a pair of individuals is recombined (0.0–1.0).
    pub crossover_probability: f64,

    /// Seed of the run's single random generator.
    pub seed: u64,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            board_size: 9,
            population_size: 250,
            generations: 500,
            collision_weight: 10,
            placement_weight: 2,
            mutation_probability: 0.005,
            crossover_probability: 0.1,
            seed: 566,
        }
    }
}

impl GaConfig {
    /// Sets the board side length.
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the collision weight `A`.
    pub fn with_collision_weight(mut self, weight: u32) -> Self {
        self.collision_weight = weight;
        self
    }

    /// Sets the placement weight `B`.
    pub fn with_placement_weight(mut self, weight: u32) -> Self {
        self.placement_weight = weight;
        self
    }

    /// Sets the per-bit mutation probability.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the pairwise crossover probability.
    pub fn with_crossover_probability(mut self, p: f64) -> Self {
        self.crossover_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The board described by `board_size`.
    pub fn board(&self) -> Board {
        Board::new(self.board_size)
    }

    /// Validates the configuration.
    ///
    /// Besides the obvious range checks this guarantees that the largest
    /// possible fitness summed over the whole population fits in a `u64`,
    /// which roulette selection relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        check_probability("mutation_probability", self.mutation_probability)?;
        check_probability("crossover_probability", self.crossover_probability)?;

        let overflow = ConfigError::FitnessOverflow {
            cells: self.board_size.saturating_mul(self.board_size),
            population: self.population_size,
        };
        let cells = (self.board_size as u64)
            .checked_mul(self.board_size as u64)
            .ok_or(overflow.clone())?;
        let pairs = cells.checked_mul(cells - 1).map(|x| x / 2);
        let placement = cells.checked_mul(self.placement_weight as u64);
        let collision = pairs.and_then(|p| p.checked_mul(self.collision_weight as u64));
        placement
            .zip(collision)
            .and_then(|(p, c)| p.checked_add(c))
            .and_then(|max| max.checked_mul(self.population_size as u64))
            .ok_or(overflow)?;
        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidProbability { name, value })
    }
}
