//! Fitness-proportionate (roulette wheel) selection.
//!
//! Each output slot is filled by sampling an individual with probability
//! `fitness / total_fitness`, with replacement. Fitter placements are
//! therefore copied more often into the next generation.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::individual::Individual;
use super::population::Population;
use log::warn;
use rand::Rng;

/// Builds a population of the same size by roulette-wheel sampling.
///
/// When every individual has zero fitness, the wheel has no area; each slot
/// is then filled by a uniformly random individual instead.
///
/// # Complexity
/// O(n²): n draws with an O(n) scan each.
///
/// # Panics
/// Panics if `population` is empty.
pub fn roulette_select<R: Rng>(population: &Population, rng: &mut R) -> Population {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let members = population.members();
    let total = population.total_fitness();
    if total == 0 {
        warn!(
            "all {} individuals have zero fitness; selecting uniformly",
            members.len()
        );
    }

    let selected = (0..members.len())
        .map(|_| members[spin(members, total, rng)].clone())
        .collect();
    Population::new(selected)
}

/// Picks one index from the wheel.
///
/// `total` must be the fitness sum of `members`.
fn spin<R: Rng>(members: &[Individual], total: u64, rng: &mut R) -> usize {
    if total == 0 {
        return rng.random_range(0..members.len());
    }

    let value = rng.random_range(0..total);
    let mut partial = 0u64;
    for (idx, ind) in members.iter().enumerate() {
        partial += ind.fitness();
        if partial > value {
            return idx;
        }
    }

    unreachable!("roulette value {value} not covered by fitness sum {total}")
}
