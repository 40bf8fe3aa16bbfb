//! Full-consistency puzzle validator.
//!
//! Checks that a complete, already-filled grid admits a single globally
//! consistent assignment of one placement per word, with the grid size
//! exactly matching the combined word length. This is the exhaustive-coverage
//! counterpart of the generator: the same backtracking shape, but the grid is
//! read-only, so conflicts are tracked through a set of claimed cell
//! coordinates instead of grid mutation.
//!
//! Worst-case cost is exponential in word count × placements per word; like
//! the generator, this favors correctness over performance and is intended
//! for small puzzles.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::errors::PuzzleError;
use crate::grid::Grid;
use crate::placement::{find_placements, MatchMode, Placement};

/// Result of a full validation run. A report, not an error: invalid puzzles
/// still produce a populated `Validation` with the failure in `errors`.
#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    /// True only when a globally consistent solution was found.
    pub is_valid: bool,
    /// Combined length of all target words.
    pub total_word_length: usize,
    /// Number of grid cells.
    pub grid_size: usize,
    /// Whether the two sizes above agree (precondition for the search).
    pub lengths_match: bool,
    /// On success, the chosen placement for each (uppercased) word.
    pub solution: Option<HashMap<String, Placement>>,
    /// Failures, in the order they were detected.
    pub errors: Vec<PuzzleError>,
}

/// Validates that `grid` yields a globally consistent placement for every
/// word in `words`.
///
/// Words are matched case-insensitively. Pure and deterministic: re-running
/// with the same inputs always produces the same report.
#[must_use]
pub fn validate_puzzle(grid: &Grid, words: &[String]) -> Validation {
    let grid_size = grid.size();
    let total_word_length: usize = words.iter().map(String::len).sum();
    let lengths_match = total_word_length == grid_size;

    let mut result = Validation {
        is_valid: false,
        total_word_length,
        grid_size,
        lengths_match,
        solution: None,
        errors: Vec::new(),
    };

    // Precondition: words must account for every cell, no slack
    if !lengths_match {
        result.errors.push(PuzzleError::LengthMismatch { total_word_length, grid_size });
        return result;
    }

    // Enumerate each word's placements once, up front
    let normalized: Vec<String> = words.iter().map(|w| w.to_ascii_uppercase()).collect();
    let placements: Vec<Vec<Placement>> = normalized
        .iter()
        .map(|word| find_placements(grid, word, MatchMode::FilledOnly))
        .collect();
    debug!(
        "placements per word: {:?}",
        normalized.iter().zip(&placements).map(|(w, p)| (w.as_str(), p.len())).collect::<Vec<_>>()
    );

    let mut claimed: HashSet<(usize, usize)> = HashSet::new();
    let mut solution: HashMap<String, Placement> = HashMap::new();

    if assign_words(&normalized, &placements, 0, &mut claimed, &mut solution) {
        result.is_valid = true;
        result.solution = Some(solution);
    } else {
        // Deliberately generic: does not say which word(s) were at fault
        result.errors.push(PuzzleError::NoSolution);
    }

    result
}

/// Backtracking assignment of `words[word_index..]` to placements that do not
/// overlap any cell claimed by an earlier word.
fn assign_words(
    words: &[String],
    placements: &[Vec<Placement>],
    word_index: usize,
    claimed: &mut HashSet<(usize, usize)>,
    solution: &mut HashMap<String, Placement>,
) -> bool {
    // Base case: all words assigned
    if word_index == words.len() {
        return true;
    }

    let word = &words[word_index];
    for placement in &placements[word_index] {
        if placement.cells.iter().any(|cell| claimed.contains(cell)) {
            continue;
        }

        // Reserve this placement's cells and descend
        for &cell in &placement.cells {
            claimed.insert(cell);
        }
        solution.insert(word.clone(), placement.clone());

        if assign_words(words, placements, word_index + 1, claimed, solution) {
            return true;
        }

        // Dead end: release the reservation
        for cell in &placement.cells {
            claimed.remove(cell);
        }
        solution.remove(word);
    }

    false
}
