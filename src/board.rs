//! Square board geometry.
//!
//! Cells are addressed by a linear row-major index `0..size²`. Two distinct
//! cells attack each other when a king or a knight standing on one could
//! move to the other.

/// An `size × size` board.
///
/// # Examples
///
/// ```
/// use placement_ga::board::Board;
///
/// let board = Board::new(3);
/// assert_eq!(board.cells(), 9);
/// assert_eq!(board.max_pairs(), 36);
/// assert!(board.conflicts(0, 4)); // king diagonal
/// assert!(board.conflicts(0, 5)); // knight jump
/// assert!(!board.conflicts(0, 8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    size: usize,
}

impl Board {
    /// Creates a board with `size` rows and `size` columns.
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (`L = size²`).
    pub fn cells(&self) -> usize {
        self.size * self.size
    }

    /// Number of unordered cell pairs, `L·(L-1)/2`.
    ///
    /// This is the upper bound on the collision count of any placement.
    pub fn max_pairs(&self) -> u64 {
        let l = self.cells() as u64;
        l * l.saturating_sub(1) / 2
    }

    /// Maps a linear index to `(row, col)`.
    pub fn coords(&self, index: usize) -> (usize, usize) {
        debug_assert!(index < self.cells(), "cell {index} out of range");
        (index / self.size, index % self.size)
    }

    /// Returns `true` if pieces on cells `i` and `j` attack each other.
    ///
    /// King adjacency is Chebyshev distance 1; knight adjacency is an
    /// offset of `(1, 2)` or `(2, 1)`. The relation is symmetric and only
    /// defined for `i != j`.
    pub fn conflicts(&self, i: usize, j: usize) -> bool {
        debug_assert_ne!(i, j, "conflicts is undefined for a cell with itself");
        let (r1, c1) = self.coords(i);
        let (r2, c2) = self.coords(j);
        let dr = r1.abs_diff(r2);
        let dc = c1.abs_diff(c2);

        let king = dr.max(dc) <= 1;
        let knight = (dr == 1 && dc == 2) || (dr == 2 && dc == 1);
        king || knight
    }

    /// For every cell `i`, the ascending list of cells `j > i` that
    /// conflict with it.
    ///
    /// Each conflicting unordered pair appears exactly once across the
    /// table, so counting occupied pairs over it gives the same result as
    /// enumerating all `i < j` pairs.
    pub fn forward_conflicts(&self) -> Vec<Vec<usize>> {
        let l = self.cells();
        (0..l)
            .map(|i| ((i + 1)..l).filter(|&j| self.conflicts(i, j)).collect())
            .collect()
    }
}
