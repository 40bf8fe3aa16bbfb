//! Placement enumeration: every way a word can lie along a straight line of
//! cells in a grid.
//!
//! This is the shared primitive under the generator and both validators. The
//! only thing that differs between those callers is how an unfilled cell is
//! treated, captured by [`MatchMode`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// One of the 8 straight-line directions a word can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
    DownRight,
    DownLeft,
    UpRight,
    UpLeft,
}

impl Direction {
    /// All directions, in the fixed enumeration order used everywhere:
    /// right, left, down, up, then the four diagonals.
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::UpRight,
        Direction::UpLeft,
    ];

    /// Unit step `(Δrow, Δcol)` for this direction.
    #[must_use]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
            Direction::UpRight => (-1, 1),
            Direction::UpLeft => (-1, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Up => "up",
            Direction::DownRight => "down-right",
            Direction::DownLeft => "down-left",
            Direction::UpRight => "up-right",
            Direction::UpLeft => "up-left",
        };
        write!(f, "{name}")
    }
}

/// A candidate assignment of a word to a start cell and direction, carrying
/// the full ordered cell path (one cell per letter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Starting cell `(row, col)` of the word's first letter.
    pub start: (usize, usize),
    /// Direction the word runs in.
    pub direction: Direction,
    /// Cell per letter, in word order. `cells[0] == start`.
    pub cells: Vec<(usize, usize)>,
}

impl Placement {
    /// Cell of the word's last letter.
    #[must_use]
    pub fn end(&self) -> (usize, usize) {
        *self.cells.last().unwrap_or(&self.start)
    }
}

/// How the enumerator treats unfilled grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// An unfilled cell matches any letter. Used by the generator, which
    /// writes letters into matched cells afterwards.
    AllowEmpty,
    /// An unfilled cell matches nothing; every cell on the path must already
    /// hold the word's letter. Used by the validators.
    FilledOnly,
}

/// Enumerates every placement of `word` consistent with the current grid
/// contents.
///
/// `word` is matched case-insensitively (letters are uppercased). The output
/// order is deterministic: row-major over start cells, then the fixed
/// direction order of [`Direction::ALL`]. Pure function; the grid is never
/// modified. An empty word has no placements.
#[must_use]
pub fn find_placements(grid: &Grid, word: &str, mode: MatchMode) -> Vec<Placement> {
    let letters: Vec<char> = word.chars().map(|c| c.to_ascii_uppercase()).collect();
    if letters.is_empty() {
        return Vec::new();
    }

    let mut placements = Vec::new();
    for (row, col) in grid.positions() {
        for direction in Direction::ALL {
            if let Some(placement) = try_placement(grid, &letters, row, col, direction, mode) {
                placements.push(placement);
            }
        }
    }
    placements
}

/// Checks a single (start, direction) candidate, returning the placement when
/// every letter fits.
fn try_placement(
    grid: &Grid,
    letters: &[char],
    start_row: usize,
    start_col: usize,
    direction: Direction,
    mode: MatchMode,
) -> Option<Placement> {
    let (d_row, d_col) = direction.delta();
    let mut cells = Vec::with_capacity(letters.len());

    for (i, &letter) in letters.iter().enumerate() {
        let row = start_row as isize + i as isize * d_row;
        let col = start_col as isize + i as isize * d_col;

        if row < 0 || row >= grid.rows() as isize || col < 0 || col >= grid.cols() as isize {
            return None;
        }
        let (row, col) = (row as usize, col as usize);

        match (grid.get(row, col), mode) {
            (Some(c), _) if c == letter => {}
            (None, MatchMode::AllowEmpty) => {}
            _ => return None,
        }

        cells.push((row, col));
    }

    Some(Placement { start: (start_row, start_col), direction, cells })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter_grid(rows: Vec<Vec<char>>) -> Grid {
        Grid::from_letters(rows).unwrap()
    }

    #[test]
    fn test_direction_order_is_fixed() {
        let deltas: Vec<_> = Direction::ALL.iter().map(|d| d.delta()).collect();
        assert_eq!(
            deltas,
            vec![(0, 1), (0, -1), (1, 0), (-1, 0), (1, 1), (1, -1), (-1, 1), (-1, -1)]
        );
    }

    #[test]
    fn test_finds_word_in_filled_grid() {
        let grid = letter_grid(vec![vec!['C', 'A', 'T'], vec!['X', 'Y', 'Z']]);
        let placements = find_placements(&grid, "CAT", MatchMode::FilledOnly);

        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].start, (0, 0));
        assert_eq!(placements[0].direction, Direction::Right);
        assert_eq!(placements[0].cells, vec![(0, 0), (0, 1), (0, 2)]);
        assert_eq!(placements[0].end(), (0, 2));
    }

    #[test]
    fn test_finds_reversed_and_diagonal() {
        // "AB" runs left from (0,1) and down-right from (0,0)
        let grid = letter_grid(vec![vec!['A', 'A'], vec!['X', 'B']]);
        let placements = find_placements(&grid, "ab", MatchMode::FilledOnly);

        let dirs: Vec<_> = placements.iter().map(|p| (p.start, p.direction)).collect();
        assert!(dirs.contains(&((0, 0), Direction::DownRight)));
        assert!(dirs.contains(&((0, 1), Direction::Down)));
        assert_eq!(placements.len(), 2);
    }

    #[test]
    fn test_empty_cells_match_only_in_allow_empty_mode() {
        let mut grid = Grid::empty(1, 3);
        grid.set(0, 0, Some('A'));

        assert!(find_placements(&grid, "ABC", MatchMode::FilledOnly).is_empty());

        let placements = find_placements(&grid, "ABC", MatchMode::AllowEmpty);
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].direction, Direction::Right);
    }

    #[test]
    fn test_conflicting_letter_blocks_placement() {
        let mut grid = Grid::empty(1, 3);
        grid.set(0, 1, Some('X'));
        // middle cell holds X, so "ABC" cannot lie across the row
        assert!(find_placements(&grid, "ABC", MatchMode::AllowEmpty).is_empty());
    }

    #[test]
    fn test_word_longer_than_grid_has_no_placements() {
        let grid = Grid::empty(2, 2);
        assert!(find_placements(&grid, "LONG", MatchMode::AllowEmpty).is_empty());
    }

    #[test]
    fn test_empty_word_has_no_placements() {
        let grid = Grid::empty(2, 2);
        assert!(find_placements(&grid, "", MatchMode::AllowEmpty).is_empty());
    }

    #[test]
    fn test_enumeration_order_is_row_major_then_direction() {
        // single letter fits everywhere in every direction
        let grid = letter_grid(vec![vec!['A', 'A']]);
        let placements = find_placements(&grid, "A", MatchMode::FilledOnly);

        assert_eq!(placements.len(), 16);
        assert_eq!(placements[0].start, (0, 0));
        assert_eq!(placements[0].direction, Direction::Right);
        assert_eq!(placements[8].start, (0, 1));
    }
}
