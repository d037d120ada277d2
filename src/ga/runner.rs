//! GA evolutionary loop execution.
//!
//! [`GaRunner`] drives the whole run:
//! initialization → (selection → crossover → mutation) × generations →
//! re-validation → best-of-population.
//!
//! Every random draw comes from one generator, in this order: initial
//! occupancy bits, then per generation the selection draws, the pairing
//! permutation, the crossover decisions and pivots, and the mutation draws.
//! A fixed seed therefore reproduces a run exactly.

use super::config::GaConfig;
use super::crossover::crossover_population;
use super::fitness::FitnessEvaluator;
use super::individual::Individual;
use super::mutation::mutate_population;
use super::population::Population;
use super::selection::roulette_select;
use crate::board::Board;
use crate::error::ConfigError;
use crate::random::create_rng;
use log::{debug, info};
use rand::Rng;

/// Fitness summary of one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// Generation index; 0 is the initial population.
    pub generation: usize,
    /// Highest fitness in the population.
    pub best_fitness: u64,
    /// Mean fitness of the population.
    pub mean_fitness: f64,
}

impl GenerationStats {
    fn of(generation: usize, population: &Population) -> Self {
        Self {
            generation,
            best_fitness: population.best().fitness(),
            mean_fitness: population.mean_fitness(),
        }
    }
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Board the run searched on.
    pub board: Board,

    /// Best individual of the final population.
    pub best: Individual,

    /// Best individual of the initial random population.
    pub initial_best: Individual,

    /// Number of generations executed.
    pub generations: usize,

    /// Statistics for the initial population and after each generation.
    pub history: Vec<GenerationStats>,
}

/// Executes the placement GA.
///
/// # Usage
///
/// ```
/// use placement_ga::ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::default()
///     .with_board_size(3)
///     .with_population_size(20)
///     .with_generations(10)
///     .with_seed(42);
/// let result = GaRunner::run(&config).unwrap();
/// assert_eq!(result.generations, 10);
/// assert_eq!(result.history.len(), 11);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from `config.seed`.
    ///
    /// Returns an error if the configuration is invalid; no work is done in
    /// that case.
    pub fn run(config: &GaConfig) -> Result<GaResult, ConfigError> {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(config, &mut rng)
    }

    /// Runs the GA drawing from the given generator.
    ///
    /// `config.seed` is ignored; the caller owns the randomness.
    pub fn run_with_rng<R: Rng>(config: &GaConfig, rng: &mut R) -> Result<GaResult, ConfigError> {
        config.validate()?;

        let board = config.board();
        let evaluator = FitnessEvaluator::new(
            board,
            config.collision_weight,
            config.placement_weight,
        );
        info!(
            "starting GA: board {0}x{0}, population {1}, generations {2}",
            board.size(),
            config.population_size,
            config.generations
        );

        // 1. Initialize population
        let mut population = Population::random(config.population_size, &evaluator, rng);
        let initial_best = population.best().clone();

        let mut history = Vec::with_capacity(config.generations + 1);
        history.push(GenerationStats::of(0, &population));

        // 2. Evolutionary loop
        for gen in 1..=config.generations {
            population = Self::step(&population, config, &evaluator, rng);

            let stats = GenerationStats::of(gen, &population);
            debug!(
                "generation {}: best {}, mean {:.1}",
                gen, stats.best_fitness, stats.mean_fitness
            );
            history.push(stats);
        }

        // 3. Re-validate and pick the winner
        let population = population.reevaluated(&evaluator);
        let best = population.best().clone();
        info!(
            "finished GA: best fitness {} (placed {}, collisions {}), initial {}",
            best.fitness(),
            best.placed(),
            best.collisions(),
            initial_best.fitness()
        );

        Ok(GaResult {
            board,
            best,
            initial_best,
            generations: config.generations,
            history,
        })
    }

    /// Produces the next generation: selection, crossover, then mutation.
    pub fn step<R: Rng>(
        population: &Population,
        config: &GaConfig,
        evaluator: &FitnessEvaluator,
        rng: &mut R,
    ) -> Population {
        let selected = roulette_select(population, rng);
        let crossed = crossover_population(
            &selected,
            config.crossover_probability,
            evaluator,
            rng,
        );
        mutate_population(&crossed, config.mutation_probability, evaluator, rng)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> GaConfig {
        GaConfig::default()
            .with_board_size(3)
            .with_population_size(50)
            .with_generations(50)
            .with_collision_weight(10)
            .with_placement_weight(2)
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = small_config().with_population_size(0);
        assert_eq!(
            GaRunner::run(&config).unwrap_err(),
            ConfigError::EmptyPopulation
        );
    }

    #[test]
    fn test_reproducible_with_seed() {
        let config = small_config().with_seed(42);
        let a = GaRunner::run(&config).unwrap();
        let b = GaRunner::run(&config).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.initial_best, b.initial_best);
        assert_eq!(a.history, b.history);
    }

    #[test]
    fn test_run_matches_explicit_rng() {
        let config = small_config().with_seed(7);
        let a = GaRunner::run(&config).unwrap();
        let b = GaRunner::run_with_rng(&config, &mut create_rng(7)).unwrap();
        assert_eq!(a.best, b.best);
    }

    #[test]
    fn test_history_length() {
        let config = small_config().with_generations(30).with_seed(1);
        let result = GaRunner::run(&config).unwrap();
        assert_eq!(result.generations, 30);
        assert_eq!(result.history.len(), 31);
        for (i, stats) in result.history.iter().enumerate() {
            assert_eq!(stats.generation, i);
            assert!(stats.mean_fitness <= stats.best_fitness as f64 + 1e-9);
        }
        assert_eq!(result.history[0].best_fitness, result.initial_best.fitness());
        assert_eq!(
            result.history.last().map(|s| s.best_fitness),
            Some(result.best.fitness())
        );
    }

    #[test]
    fn test_result_scores_are_consistent() {
        let config = small_config().with_seed(3);
        let result = GaRunner::run(&config).unwrap();
        let eval = FitnessEvaluator::new(result.board, 10, 2);
        assert_eq!(result.best, result.best.reevaluated(&eval));
        assert_eq!(result.initial_best, result.initial_best.reevaluated(&eval));
    }

    #[test]
    fn test_step_keeps_population_size() {
        let config = small_config().with_population_size(33);
        let eval = FitnessEvaluator::new(config.board(), 10, 2);
        let mut rng = create_rng(42);
        let pop = Population::random(33, &eval, &mut rng);
        let next = GaRunner::step(&pop, &config, &eval, &mut rng);
        assert_eq!(next.len(), 33);
    }

    #[test]
    fn test_mean_final_best_exceeds_initial_best() {
        let config = small_config();
        let runs = 50u64;

        let (mut initial, mut fin) = (0u64, 0u64);
        for seed in 0..runs {
            let result = GaRunner::run(&config.clone().with_seed(seed)).unwrap();
            initial += result.initial_best.fitness();
            fin += result.best.fitness();
        }
        assert!(
            fin > initial,
            "mean final best {} should exceed mean initial best {}",
            fin as f64 / runs as f64,
            initial as f64 / runs as f64
        );
    }

    #[test]
    fn test_mean_final_fitness_exceeds_initial() {
        // Without elitism the single best individual can be lost, so the
        // liveness check is made on whole-population means across seeds.
        let config = small_config();
        let runs = 10u64;

        let (mut initial, mut fin) = (0.0, 0.0);
        for seed in 0..runs {
            let result = GaRunner::run(&config.clone().with_seed(seed)).unwrap();
            let first = result.history.first().unwrap().mean_fitness;
            let last = result.history.last().unwrap().mean_fitness;
            initial += first;
            fin += last;
        }
        assert!(
            fin > initial,
            "mean final fitness {} should exceed mean initial fitness {}",
            fin / runs as f64,
            initial / runs as f64
        );
    }
}
