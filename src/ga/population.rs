//! Generations of individuals.

use super::fitness::FitnessEvaluator;
use super::individual::Individual;
use rand::Rng;

/// An ordered generation of individuals.
///
/// Order does not affect fitness but determines slot positions during
/// crossover. Operators never modify a population; they build the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    members: Vec<Individual>,
}

impl Population {
    /// Wraps an existing list of individuals.
    pub fn new(members: Vec<Individual>) -> Self {
        Self { members }
    }

    /// Creates `size` independently randomised individuals.
    pub fn random<R: Rng>(size: usize, evaluator: &FitnessEvaluator, rng: &mut R) -> Self {
        let members = (0..size)
            .map(|_| Individual::random(evaluator, rng))
            .collect();
        Self { members }
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the population holds no individuals.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The individuals in slot order.
    pub fn members(&self) -> &[Individual] {
        &self.members
    }

    /// Sum of all fitness values.
    pub fn total_fitness(&self) -> u64 {
        self.members.iter().map(Individual::fitness).sum()
    }

    /// Mean fitness, or `0.0` for an empty population.
    pub fn mean_fitness(&self) -> f64 {
        if self.members.is_empty() {
            return 0.0;
        }
        self.total_fitness() as f64 / self.members.len() as f64
    }

    /// The first individual with maximal fitness.
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn best(&self) -> &Individual {
        let mut iter = self.members.iter();
        let first = iter.next().expect("population must not be empty");
        iter.fold(first, |best, ind| {
            if ind.fitness() > best.fitness() {
                ind
            } else {
                best
            }
        })
    }

    /// Rebuilds every individual from its occupancy bits.
    pub fn reevaluated(&self, evaluator: &FitnessEvaluator) -> Self {
        let members = self
            .members
            .iter()
            .map(|ind| ind.reevaluated(evaluator))
            .collect();
        Self { members }
    }
}

impl From<Vec<Individual>> for Population {
    fn from(members: Vec<Individual>) -> Self {
        Self::new(members)
    }
}
