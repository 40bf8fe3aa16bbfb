//! The rectangular letter grid shared by the generator and both validators.
//!
//! A grid is a fixed-size, row-major array of cells; each cell is either an
//! uppercase ASCII letter or unfilled (`None`). The generator works on a grid
//! with unfilled cells and mutates it in place during backtracking; the
//! validators treat the grid as read-only.

use serde::{Deserialize, Serialize};

use crate::errors::PuzzleError;

/// Rectangular letter grid. Every row has the same length; dimensions are
/// fixed at creation.
///
/// The serde representation matches the puzzle-file shape: a list of rows,
/// each a list of single-character strings, with `""` for unfilled cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Creates a grid of the given dimensions with every cell unfilled.
    #[must_use]
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self { rows, cols, cells: vec![None; rows * cols] }
    }

    /// Builds a grid from explicit rows of cells, normalizing letters to
    /// uppercase.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::RaggedGrid`] if any row's length differs from
    /// the first row's.
    pub fn from_rows(rows: Vec<Vec<Option<char>>>) -> Result<Self, PuzzleError> {
        let cols = rows.first().map_or(0, Vec::len);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(PuzzleError::RaggedGrid { row: i, len: row.len(), expected: cols });
            }
        }

        let num_rows = rows.len();
        let cells = rows
            .into_iter()
            .flatten()
            .map(|c| c.map(|c| c.to_ascii_uppercase()))
            .collect();

        Ok(Self { rows: num_rows, cols, cells })
    }

    /// Builds a fully-filled grid from rows of letters (no unfilled cells).
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::RaggedGrid`] on ragged input.
    pub fn from_letters(rows: Vec<Vec<char>>) -> Result<Self, PuzzleError> {
        Self::from_rows(rows.into_iter().map(|r| r.into_iter().map(Some).collect()).collect())
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows × cols`).
    #[must_use]
    pub fn size(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns the cell at `(row, col)`, or `None` when unfilled.
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds; callers bounds-check via
    /// signed arithmetic before indexing (see [`crate::placement`]).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        assert!(row < self.rows && col < self.cols, "cell ({row},{col}) out of bounds");
        self.cells[row * self.cols + col]
    }

    /// Writes (or clears, with `None`) the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: Option<char>) {
        assert!(row < self.rows && col < self.cols, "cell ({row},{col}) out of bounds");
        self.cells[row * self.cols + col] = value;
    }

    /// True when no cell is unfilled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Iterator over all cell coordinates in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows).flat_map(move |r| (0..self.cols).map(move |c| (r, c)))
    }

    /// Renders the grid as text, one row per line, cells separated by spaces,
    /// unfilled cells shown as `·`.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        (0..self.rows)
            .map(|r| {
                (0..self.cols)
                    .map(|c| self.get(r, c).map_or("·".to_string(), |ch| ch.to_string()))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<Grid> for Vec<Vec<String>> {
    fn from(grid: Grid) -> Self {
        (0..grid.rows)
            .map(|r| {
                (0..grid.cols)
                    .map(|c| grid.get(r, c).map_or(String::new(), |ch| ch.to_string()))
                    .collect()
            })
            .collect()
    }
}

impl TryFrom<Vec<Vec<String>>> for Grid {
    type Error = PuzzleError;

    /// Parses the puzzle-file representation. Empty strings become unfilled
    /// cells; anything else contributes its first character, uppercased.
    fn try_from(rows: Vec<Vec<String>>) -> Result<Self, Self::Error> {
        Self::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(|cell| cell.chars().next()).collect())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_dimensions() {
        let grid = Grid::empty(3, 5);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 5);
        assert_eq!(grid.size(), 15);
        assert!(!grid.is_full());
        assert_eq!(grid.get(2, 4), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::empty(2, 2);
        grid.set(0, 1, Some('X'));
        assert_eq!(grid.get(0, 1), Some('X'));
        grid.set(0, 1, None);
        assert_eq!(grid.get(0, 1), None);
    }

    #[test]
    fn test_from_letters_normalizes_case() {
        let grid = Grid::from_letters(vec![vec!['a', 'b'], vec!['C', 'd']]).unwrap();
        assert_eq!(grid.get(0, 0), Some('A'));
        assert_eq!(grid.get(1, 1), Some('D'));
        assert!(grid.is_full());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Grid::from_letters(vec![vec!['A', 'B'], vec!['C']]).unwrap_err();
        assert!(matches!(err, PuzzleError::RaggedGrid { row: 1, len: 1, expected: 2 }));
    }

    #[test]
    fn test_positions_row_major() {
        let grid = Grid::empty(2, 3);
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(positions, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_serde_round_trip_with_unfilled_cells() {
        let mut grid = Grid::empty(2, 2);
        grid.set(0, 0, Some('A'));
        grid.set(1, 1, Some('B'));

        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"[["A",""],["","B"]]"#);

        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn test_display_string_marks_unfilled() {
        let mut grid = Grid::empty(1, 3);
        grid.set(0, 0, Some('A'));
        grid.set(0, 2, Some('C'));
        assert_eq!(grid.to_display_string(), "A · C");
    }
}
