//! `puzzle` — the persisted word-search puzzle shape and its file format.
//!
//! A puzzle file is JSON with the shape
//! `{name, description, grid, words, gridSize, totalWordLength}`, where the
//! grid is a list of rows of single-letter strings (`""` for an unfilled
//! cell). This module provides:
//! - `parse_from_str(...)` — parse from an in-memory string.
//! - `load_from_path(...)` — convenience wrapper to read from a file path.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// Target grid dimensions for the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    /// Total number of cells (`rows × cols`).
    #[must_use]
    pub fn size(self) -> usize {
        self.rows * self.cols
    }
}

/// A complete word-search puzzle as stored on disk and produced by the
/// generator: the letter grid plus the normalized (uppercase) word list and
/// its derived sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    pub name: String,
    pub description: String,
    pub grid: Grid,
    pub words: Vec<String>,
    pub grid_size: usize,
    pub total_word_length: usize,
}

/// Errors raised while reading a puzzle file.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleFileError {
    #[error("failed to read puzzle file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse puzzle file: {0}")]
    Json(#[from] serde_json::Error),
}

impl Puzzle {
    /// Parses a puzzle from an in-memory JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleFileError::Json`] on malformed JSON or a ragged grid.
    pub fn parse_from_str(contents: &str) -> Result<Puzzle, PuzzleFileError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Reads and parses a puzzle file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleFileError::Io`] if the file cannot be read, or
    /// [`PuzzleFileError::Json`] if its contents do not parse.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Puzzle, PuzzleFileError> {
        let contents = fs::read_to_string(path)?;
        Self::parse_from_str(&contents)
    }

    /// Serializes the puzzle to pretty-printed JSON in the on-disk shape.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleFileError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, PuzzleFileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
