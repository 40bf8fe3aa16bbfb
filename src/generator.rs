//! Backtracking word-search puzzle generator.
//!
//! Given a word list and target dimensions whose cell count exactly equals
//! the combined word length, this builds a grid in which every word lies
//! along one of the 8 straight-line directions, then fills any cells the
//! search left unfilled with random uppercase letters.
//!
//! The search is plain depth-first backtracking over the word list in the
//! given order: for each word, enumerate every placement consistent with the
//! partially-filled grid, write its letters (remembering the prior cell
//! values), recurse, and restore on failure. Worst-case cost is exponential
//! in word count × placements per word — acceptable for the small puzzles
//! (≤10 words, ≤100 cells) this is built for, and deliberately not optimized.
//!
//! Note: the random fill may incidentally spell extra occurrences of a
//! target word in the filler cells. That is accepted puzzle-generation
//! latitude, not prevented here — use the partial validator to detect it.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::PuzzleError;
use crate::grid::Grid;
use crate::placement::{find_placements, MatchMode};
use crate::puzzle::{Dimensions, Puzzle};

/// Creates a word search puzzle from the given words and dimensions, using a
/// thread-local RNG for the filler letters.
///
/// Words are matched case-insensitively and appear uppercased in the result.
/// Word order matters: it fixes the order in which placements are attempted,
/// so the same inputs always yield the same letter layout (only the filler
/// letters vary between calls).
///
/// # Errors
///
/// - [`PuzzleError::EmptyWord`] if any word is an empty string.
/// - [`PuzzleError::LengthMismatch`] if the combined word length differs
///   from `rows × cols`.
/// - [`PuzzleError::NoArrangement`] if the search space is exhausted without
///   placing every word — a definitive negative, not a transient failure.
pub fn create_puzzle(words: &[String], dimensions: Dimensions) -> Result<Puzzle, PuzzleError> {
    create_puzzle_with_rng(words, dimensions, &mut rand::thread_rng())
}

/// Like [`create_puzzle`], but with a caller-supplied RNG for the filler
/// letters. Pass a seeded [`StdRng`] for reproducible output.
pub fn create_puzzle_with_rng<R: Rng>(
    words: &[String],
    dimensions: Dimensions,
    rng: &mut R,
) -> Result<Puzzle, PuzzleError> {
    if words.iter().any(String::is_empty) {
        return Err(PuzzleError::EmptyWord);
    }

    let normalized: Vec<String> = words.iter().map(|w| w.to_ascii_uppercase()).collect();
    let total_word_length: usize = normalized.iter().map(String::len).sum();
    let grid_size = dimensions.size();

    if total_word_length != grid_size {
        return Err(PuzzleError::LengthMismatch { total_word_length, grid_size });
    }

    let mut grid = Grid::empty(dimensions.rows, dimensions.cols);
    if !place_words(&mut grid, &normalized, 0) {
        debug!("search exhausted for {} words in {}x{}", normalized.len(), dimensions.rows, dimensions.cols);
        return Err(PuzzleError::NoArrangement);
    }

    fill_empty_cells(&mut grid, rng);

    Ok(Puzzle {
        name: "Generated Puzzle".to_string(),
        description: "Auto-generated word search puzzle".to_string(),
        grid,
        words: normalized,
        grid_size,
        total_word_length,
    })
}

/// Depth-first placement of `words[word_index..]` into the shared grid.
///
/// On success the grid holds every placed word and `true` is returned; on
/// failure the grid is restored to exactly its state at entry.
fn place_words(grid: &mut Grid, words: &[String], word_index: usize) -> bool {
    // Base case: all words placed
    if word_index == words.len() {
        return true;
    }

    let word = &words[word_index];
    let placements = find_placements(grid, word, MatchMode::AllowEmpty);
    debug!("word {word_index} ({word}): {} candidate placements", placements.len());

    for placement in placements {
        // Write the word's letters, remembering prior values for restore
        let prior: Vec<Option<char>> = placement
            .cells
            .iter()
            .map(|&(r, c)| grid.get(r, c))
            .collect();
        for (&(r, c), letter) in placement.cells.iter().zip(word.chars()) {
            grid.set(r, c, Some(letter));
        }

        if place_words(grid, words, word_index + 1) {
            return true;
        }

        // Backtrack: restore prior cell values
        for (&(r, c), &value) in placement.cells.iter().zip(prior.iter()) {
            grid.set(r, c, value);
        }
    }

    false
}

/// Fills every remaining unfilled cell with an independently chosen uniform
/// random uppercase letter.
fn fill_empty_cells<R: Rng>(grid: &mut Grid, rng: &mut R) {
    let positions: Vec<_> = grid.positions().collect();
    for (r, c) in positions {
        if grid.get(r, c).is_none() {
            let letter = (b'A' + rng.gen_range(0..26u8)) as char;
            grid.set(r, c, Some(letter));
        }
    }
}

/// Seeded RNG helper used by tests and the CLI's `--seed` flag.
#[must_use]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
