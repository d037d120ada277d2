//! Bit-flip mutation.

use super::fitness::FitnessEvaluator;
use super::individual::Individual;
use super::population::Population;
use rand::Rng;

/// Flips each bit of `individual` independently with probability
/// `probability`.
///
/// Draws exactly one number per cell. Returns a re-evaluated individual when
/// anything flipped, otherwise a plain clone.
///
/// # Panics
/// Panics if `probability` is not within `[0, 1]`.
pub fn bit_flip<R: Rng>(
    individual: &Individual,
    probability: f64,
    evaluator: &FitnessEvaluator,
    rng: &mut R,
) -> Individual {
    assert!(
        (0.0..=1.0).contains(&probability),
        "mutation probability {probability} out of range"
    );
    let mut flipped = false;
    let occupancy: Vec<bool> = individual
        .occupancy()
        .iter()
        .map(|&bit| {
            if rng.random_bool(probability) {
                flipped = true;
                !bit
            } else {
                bit
            }
        })
        .collect();

    if flipped {
        Individual::new(occupancy, evaluator)
    } else {
        individual.clone()
    }
}

/// Applies [`bit_flip`] to every individual, in slot order.
///
/// # Panics
/// Panics if `probability` is not within `[0, 1]`.
pub fn mutate_population<R: Rng>(
    population: &Population,
    probability: f64,
    evaluator: &FitnessEvaluator,
    rng: &mut R,
) -> Population {
    population
        .members()
        .iter()
        .map(|ind| bit_flip(ind, probability, evaluator, rng))
        .collect::<Vec<_>>()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::random::create_rng;

    fn evaluator() -> FitnessEvaluator {
        FitnessEvaluator::new(Board::new(4), 10, 2)
    }

    #[test]
    fn test_probability_zero_unchanged() {
        let eval = evaluator();
        let mut rng = create_rng(42);
        let pop = Population::random(20, &eval, &mut rng);
        let next = mutate_population(&pop, 0.0, &eval, &mut rng);
        assert_eq!(next, pop);
    }

    #[test]
    fn test_probability_one_flips_everything() {
        let eval = evaluator();
        let mut rng = create_rng(42);
        let pop = Population::random(10, &eval, &mut rng);
        let next = mutate_population(&pop, 1.0, &eval, &mut rng);
        for (before, after) in pop.members().iter().zip(next.members()) {
            let inverted: Vec<bool> = before.occupancy().iter().map(|b| !b).collect();
            assert_eq!(after.occupancy(), inverted.as_slice());
            assert_eq!(after.placed(), 16 - before.placed());
            assert_eq!(after.fitness(), eval.evaluate(&inverted).fitness);
        }
    }

    #[test]
    fn test_flip_rate_matches_probability() {
        let eval = FitnessEvaluator::new(Board::new(10), 10, 2);
        let mut rng = create_rng(11);
        let ind = Individual::new(vec![false; 100], &eval);

        let trials = 200;
        let flips: usize = (0..trials)
            .map(|_| bit_flip(&ind, 0.1, &eval, &mut rng).placed())
            .sum();
        let rate = flips as f64 / (trials * 100) as f64;
        assert!((0.08..0.12).contains(&rate), "flip rate {rate}");
    }

    #[test]
    #[should_panic(expected = "mutation probability 1.5 out of range")]
    fn test_probability_out_of_range_panics() {
        let eval = evaluator();
        let mut rng = create_rng(42);
        let pop = Population::random(2, &eval, &mut rng);
        mutate_population(&pop, 1.5, &eval, &mut rng);
    }

    #[test]
    fn test_scores_refreshed_after_flip() {
        let eval = evaluator();
        let mut rng = create_rng(3);
        let ind = Individual::new(vec![false; 16], &eval);
        let mutated = bit_flip(&ind, 0.5, &eval, &mut rng);
        assert_eq!(mutated, mutated.reevaluated(&eval));
    }
}
