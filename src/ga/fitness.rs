//! Fitness evaluation.
//!
//! The score rewards placed pieces and penalises attacking pairs:
//!
//! ```text
//! fitness = B · placed + A · (max_pairs - collisions)
//! ```
//!
//! The `max_pairs - collisions` term is never negative, so with unsigned
//! weights the fitness is always a valid roulette-wheel weight.

use crate::board::Board;

/// Result of evaluating one occupancy vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Number of occupied cells.
    pub placed: usize,
    /// Number of unordered occupied pairs that attack each other.
    pub collisions: u64,
    /// Scalar score; higher is better.
    pub fitness: u64,
}

/// Scores occupancy vectors for a fixed board and weight pair.
///
/// The conflict table of the board is built once on construction.
/// Evaluation still counts every occupied conflicting pair from scratch.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    board: Board,
    collision_weight: u64,
    placement_weight: u64,
    forward: Vec<Vec<usize>>,
}

impl FitnessEvaluator {
    /// Creates an evaluator with collision weight `A` and placement
    /// weight `B`.
    pub fn new(board: Board, collision_weight: u32, placement_weight: u32) -> Self {
        Self {
            board,
            collision_weight: collision_weight as u64,
            placement_weight: placement_weight as u64,
            forward: board.forward_conflicts(),
        }
    }

    /// The board this evaluator scores placements on.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Evaluates an occupancy vector.
    ///
    /// # Panics
    /// Panics if `occupancy.len()` differs from the number of board cells.
    pub fn evaluate(&self, occupancy: &[bool]) -> Evaluation {
        assert_eq!(
            occupancy.len(),
            self.board.cells(),
            "occupancy length must equal the number of board cells"
        );

        let mut placed = 0usize;
        let mut collisions = 0u64;
        for (i, &occupied) in occupancy.iter().enumerate() {
            if !occupied {
                continue;
            }
            placed += 1;
            collisions += self.forward[i]
                .iter()
                .filter(|&&j| occupancy[j])
                .count() as u64;
        }

        Evaluation {
            placed,
            collisions,
            fitness: self.score(placed, collisions),
        }
    }

    /// Combines a placement count and a collision count into a fitness.
    fn score(&self, placed: usize, collisions: u64) -> u64 {
        debug_assert!(collisions <= self.board.max_pairs());
        self.placement_weight * placed as u64
            + self.collision_weight * (self.board.max_pairs() - collisions)
    }
}
