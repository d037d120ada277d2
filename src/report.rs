//! Textual run report.
//!
//! ```text
//! size=9, max_collisions=36
//! placed=4, collisions=0, fitness=368
//! start solution had:
//! placed=2, collisions=1, fitness=354
//!
//! *#*
//! ###
//! *#*
//! ```

use crate::board::Board;
use crate::ga::{GaResult, Individual};
use std::fmt;

/// Renders a placement as one line per board row, `*` for a piece and `#`
/// for an empty cell, each line terminated by `\n`.
pub fn render_grid(individual: &Individual, board: &Board) -> String {
    let size = board.size();
    let mut out = String::with_capacity(board.cells() + size);
    for row in individual.occupancy().chunks(size.max(1)) {
        out.extend(row.iter().map(|&bit| if bit { '*' } else { '#' }));
        out.push('\n');
    }
    out
}

/// Placement count, collision count and fitness of one individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub placed: usize,
    pub collisions: u64,
    pub fitness: u64,
}

impl From<&Individual> for Summary {
    fn from(ind: &Individual) -> Self {
        Self {
            placed: ind.placed(),
            collisions: ind.collisions(),
            fitness: ind.fitness(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "placed={}, collisions={}, fitness={}",
            self.placed, self.collisions, self.fitness
        )
    }
}

/// Final report of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    /// Number of board cells.
    pub cells: usize,
    /// Number of cell pairs, the collision upper bound.
    pub max_collisions: u64,
    /// Best individual of the final population.
    pub best: Summary,
    /// Best individual of the initial population.
    pub initial: Summary,
    /// Grid rendering of the final best individual.
    pub grid: String,
}

impl Report {
    /// Builds the report of a finished run.
    pub fn new(result: &GaResult) -> Self {
        Self {
            cells: result.board.cells(),
            max_collisions: result.board.max_pairs(),
            best: Summary::from(&result.best),
            initial: Summary::from(&result.initial_best),
            grid: render_grid(&result.best, &result.board),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "size={}, max_collisions={}",
            self.cells, self.max_collisions
        )?;
        writeln!(f, "{}", self.best)?;
        writeln!(f, "start solution had:")?;
        writeln!(f, "{}", self.initial)?;
        writeln!(f)?;
        write!(f, "{}", self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{FitnessEvaluator, GaConfig, GaRunner};

    fn corners() -> (Individual, Board) {
        let board = Board::new(3);
        let eval = FitnessEvaluator::new(board, 10, 2);
        let bits = vec![true, false, true, false, false, false, true, false, true];
        (Individual::new(bits, &eval), board)
    }

    #[test]
    fn test_render_grid() {
        let (ind, board) = corners();
        assert_eq!(render_grid(&ind, &board), "*#*\n###\n*#*\n");
    }

    #[test]
    fn test_summary_display() {
        let (ind, _) = corners();
        assert_eq!(
            Summary::from(&ind).to_string(),
            "placed=4, collisions=0, fitness=368"
        );
    }

    #[test]
    fn test_report_layout() {
        let (best, board) = corners();
        let eval = FitnessEvaluator::new(board, 10, 2);
        let initial = Individual::new(
            vec![true, true, false, false, false, false, false, false, false],
            &eval,
        );
        let result = GaResult {
            board,
            best,
            initial_best: initial,
            generations: 1,
            history: Vec::new(),
        };

        let text = Report::new(&result).to_string();
        let expected = "size=9, max_collisions=36\n\
                        placed=4, collisions=0, fitness=368\n\
                        start solution had:\n\
                        placed=2, collisions=1, fitness=354\n\
                        \n\
                        *#*\n\
                        ###\n\
                        *#*\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_report_from_run() {
        let config = GaConfig::default()
            .with_board_size(4)
            .with_population_size(20)
            .with_generations(5)
            .with_seed(1);
        let result = GaRunner::run(&config).unwrap();
        let report = Report::new(&result);

        assert_eq!(report.cells, 16);
        assert_eq!(report.max_collisions, 120);
        assert_eq!(report.best.fitness, result.best.fitness());
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5 + 4);
        assert!(lines[5..].iter().all(|l| l.len() == 4));
    }
}
