//! Single-point crossover over a randomly paired population.
//!
//! # Algorithm
//!
//! 1. Shuffle the slot indices with Fisher–Yates so pairing does not depend
//!    on array position.
//! 2. Walk the shuffled indices two at a time. With probability
//!    `crossover_probability` a pair is recombined: a pivot `p` is drawn from
//!    `0..L` and the two children exchange every bit below `p`. Children
//!    take their parents' slots.
//! 3. With an odd population the final shuffled slot has no partner and is
//!    carried over unchanged.
//!
//! Cells are crossed in row-major order.

use super::fitness::FitnessEvaluator;
use super::individual::Individual;
use super::population::Population;
use rand::Rng;

/// Uniformly random permutation of `0..n`.
///
/// Position `i` is swapped with a uniformly drawn position in `0..=i`,
/// consuming exactly `n` draws.
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    for i in 0..n {
        let with = rng.random_range(0..=i);
        perm.swap(i, with);
    }
    perm
}

/// Recombines two parents by exchanging every bit below `pivot`.
///
/// The first child keeps `first`'s bits from `pivot` on, the second keeps
/// `second`'s. Both children are evaluated on construction.
///
/// # Panics
/// Panics if the parents differ in length or `pivot` exceeds it.
pub fn single_point_crossover(
    first: &Individual,
    second: &Individual,
    pivot: usize,
    evaluator: &FitnessEvaluator,
) -> (Individual, Individual) {
    let a = first.occupancy();
    let b = second.occupancy();
    assert_eq!(a.len(), b.len(), "parents must have equal length");
    assert!(pivot <= a.len(), "pivot {pivot} out of range");

    let mut child1 = a.to_vec();
    let mut child2 = b.to_vec();
    child1[..pivot].copy_from_slice(&b[..pivot]);
    child2[..pivot].copy_from_slice(&a[..pivot]);

    (
        Individual::new(child1, evaluator),
        Individual::new(child2, evaluator),
    )
}

/// Pairs the population at random and recombines each pair with
/// probability `probability`.
///
/// # Panics
/// Panics if `probability` is not within `[0, 1]`.
pub fn crossover_population<R: Rng>(
    population: &Population,
    probability: f64,
    evaluator: &FitnessEvaluator,
    rng: &mut R,
) -> Population {
    assert!(
        (0.0..=1.0).contains(&probability),
        "crossover probability {probability} out of range"
    );
    let cells = evaluator.board().cells();
    let mut next = population.members().to_vec();
    let order = random_permutation(next.len(), rng);

    for pair in order.chunks_exact(2) {
        let (i, j) = (pair[0], pair[1]);
        if rng.random_bool(probability) {
            let pivot = rng.random_range(0..cells);
            let (c1, c2) = single_point_crossover(&next[i], &next[j], pivot, evaluator);
            next[i] = c1;
            next[j] = c2;
        }
    }

    Population::new(next)
}
