//! Error types for the puzzle engine with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (W001-W007) for documentation lookup:
//!
//! - W001: `LengthMismatch` (Total word length does not equal grid size)
//! - W002: `NoArrangement` (Generator exhausted its search space)
//! - W003: `NoSolution` (Validator found no globally consistent assignment)
//! - W004: `EmptyGrid` (Grid has zero rows or zero columns)
//! - W005: `GridTooSmall` (A word is longer than the larger grid dimension)
//! - W006: `RaggedGrid` (Grid rows have unequal lengths)
//! - W007: `EmptyWord` (Word list contains an empty string)
//!
//! All of these are reported results of pure functions: the core never panics
//! on bad input, and no variant is retryable — the caller fixes the inputs
//! and re-invokes.

/// Error type shared by the generator and validators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    /// The combined length of all words differs from the number of grid
    /// cells. Precondition of the generator and the full validator.
    #[error("Total word length ({total_word_length}) does not equal grid size ({grid_size})")]
    LengthMismatch { total_word_length: usize, grid_size: usize },

    /// The generator's backtracking search ran to exhaustion without placing
    /// every word. A definitive negative result, distinct from the
    /// precondition failures.
    #[error("Cannot create puzzle - no valid arrangement found for given words")]
    NoArrangement,

    /// The full validator's search ran to exhaustion. Deliberately generic:
    /// it does not distinguish "word absent" from "placements mutually
    /// conflict".
    #[error("No valid solution found - some words may not exist in grid or placement conflicts prevent solution")]
    NoSolution,

    /// Grid has zero rows or zero columns.
    #[error("Grid is empty or invalid")]
    EmptyGrid,

    /// The longest word cannot lie along any straight line of the grid.
    #[error("Grid too small: longest word is {longest} letters, but max grid dimension is {max_dim}")]
    GridTooSmall { longest: usize, max_dim: usize },

    /// A grid row's length differs from the first row's.
    #[error("Grid rows have unequal lengths (row {row} has {len} cells, expected {expected})")]
    RaggedGrid { row: usize, len: usize, expected: usize },

    /// The word list contains an empty string.
    #[error("Words must be non-empty")]
    EmptyWord,
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::LengthMismatch { .. } => "W001",
            PuzzleError::NoArrangement => "W002",
            PuzzleError::NoSolution => "W003",
            PuzzleError::EmptyGrid => "W004",
            PuzzleError::GridTooSmall { .. } => "W005",
            PuzzleError::RaggedGrid { .. } => "W006",
            PuzzleError::EmptyWord => "W007",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::LengthMismatch { .. } => {
                Some("Choose dimensions whose rows × cols equals the combined length of all words")
            }
            PuzzleError::NoArrangement => {
                Some("Try different dimensions, reorder the words, or use words with shared letters")
            }
            PuzzleError::GridTooSmall { .. } => {
                Some("Every word must fit along a row, column, or diagonal of the grid")
            }
            PuzzleError::RaggedGrid { .. } => Some("Every grid row must have the same number of cells"),
            PuzzleError::EmptyWord => Some("Remove empty strings from the word list"),
            _ => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        if let Some(help) = self.help() {
            format!("{self} ({})\n{help}", self.code())
        } else {
            format!("{self} ({})", self.code())
        }
    }
}
