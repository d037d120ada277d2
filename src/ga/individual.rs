//! Candidate placements.

use super::fitness::FitnessEvaluator;
use rand::Rng;

/// One candidate placement: an occupancy bit per board cell, with its
/// collision count and fitness.
///
/// `Individual` is an immutable value. The only way to obtain one is to
/// build it from an occupancy vector, which evaluates it immediately, so the
/// cached scores always describe the bits they are stored with. Operators
/// that change bits construct a new value.
///
/// # Examples
///
/// ```
/// use placement_ga::board::Board;
/// use placement_ga::ga::{FitnessEvaluator, Individual};
///
/// let eval = FitnessEvaluator::new(Board::new(2), 10, 2);
/// let ind = Individual::new(vec![true, false, false, true], &eval);
/// assert_eq!(ind.placed(), 2);
/// assert_eq!(ind.collisions(), 1);
/// assert_eq!(ind.fitness(), 2 * 2 + 10 * (6 - 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    occupancy: Vec<bool>,
    placed: usize,
    collisions: u64,
    fitness: u64,
}

impl Individual {
    /// Builds and evaluates an individual.
    ///
    /// # Panics
    /// Panics if `occupancy` does not cover the evaluator's board.
    pub fn new(occupancy: Vec<bool>, evaluator: &FitnessEvaluator) -> Self {
        let eval = evaluator.evaluate(&occupancy);
        Self {
            occupancy,
            placed: eval.placed,
            collisions: eval.collisions,
            fitness: eval.fitness,
        }
    }

    /// Builds an individual whose every cell is occupied with probability 1/2.
    pub fn random<R: Rng>(evaluator: &FitnessEvaluator, rng: &mut R) -> Self {
        let occupancy = (0..evaluator.board().cells())
            .map(|_| rng.random_bool(0.5))
            .collect();
        Self::new(occupancy, evaluator)
    }

    /// Re-evaluates the occupancy from scratch.
    ///
    /// The result is always equal to `self`; the runner uses it to
    /// re-validate the final population before reporting.
    pub fn reevaluated(&self, evaluator: &FitnessEvaluator) -> Self {
        Self::new(self.occupancy.clone(), evaluator)
    }

    /// Occupancy bits in row-major cell order.
    pub fn occupancy(&self) -> &[bool] {
        &self.occupancy
    }

    /// Consumes the individual, returning its occupancy bits.
    pub fn into_occupancy(self) -> Vec<bool> {
        self.occupancy
    }

    /// Number of placed pieces.
    pub fn placed(&self) -> usize {
        self.placed
    }

    /// Number of attacking pairs among placed pieces.
    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    /// Fitness score; higher is better.
    pub fn fitness(&self) -> u64 {
        self.fitness
    }
}
