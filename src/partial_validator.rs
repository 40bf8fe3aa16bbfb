//! Partial (multiplicity) puzzle validator.
//!
//! Checks grids that may be larger than the word list requires and may
//! contain unfilled cells: each target word must be discoverable exactly once.
//! Unlike the full validator, words are checked independently — there is no
//! shared-cell coordination and no joint solution. That makes this a
//! heuristic authoring aid, not a proof that the puzzle is solvable: a word
//! that overlaps others in ways that spell spurious duplicates shows up as a
//! multiplicity greater than one, nothing more.

use log::debug;

use crate::grid::Grid;
use crate::placement::{find_placements, MatchMode};

/// Why a word (or the grid itself) failed the partial validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProblemKind {
    /// Grid has zero rows or zero columns. Grid-scoped; reported before any
    /// word is checked.
    #[error("Grid is empty or invalid")]
    EmptyGrid,

    /// The longest word cannot lie along any straight line of the grid.
    /// Grid-scoped; reported before any word is checked.
    #[error("Grid too small: longest word is {longest} letters, but max grid dimension is {max_dim}")]
    GridTooSmall { longest: usize, max_dim: usize },

    /// The word has no placement in the filled cells of the grid.
    #[error("Word not found in grid")]
    NotFound,

    /// The word has more than one placement; the duplicate count is reported.
    #[error("Word found multiple times ({count})")]
    FoundMultipleTimes { count: usize },
}

/// One reported problem: the offending word (or `"GRID"` for grid-scoped
/// problems), its occurrence count, and the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordProblem {
    pub word: String,
    pub count: usize,
    pub kind: ProblemKind,
}

/// Per-word tallies for the whole run. Grid-scoped problems do not count
/// toward `error_words`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total_words: usize,
    pub valid_words: usize,
    pub error_words: usize,
}

/// Result of a partial validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialValidation {
    /// True only when every word occurs exactly once.
    pub is_valid: bool,
    /// All problems found, in check order.
    pub problems: Vec<WordProblem>,
    pub summary: Summary,
}

/// Sentinel "word" used for grid-scoped problems.
const GRID_SENTINEL: &str = "GRID";

/// Validates that each word in `words` occurs exactly once in `grid`.
///
/// Unfilled cells never match a letter; the grid may be any size as long as
/// the longest word fits along its larger dimension. Words are matched
/// case-insensitively and reported uppercased. Word-level problems are
/// collected per word — one bad word does not stop the remaining checks.
#[must_use]
pub fn validate_partial(grid: &Grid, words: &[String]) -> PartialValidation {
    let mut result = PartialValidation {
        is_valid: true,
        problems: Vec::new(),
        summary: Summary { total_words: words.len(), valid_words: 0, error_words: 0 },
    };

    // Grid-scoped preconditions run before any word-level check
    if grid.rows() == 0 || grid.cols() == 0 {
        result.is_valid = false;
        result.problems.push(WordProblem {
            word: GRID_SENTINEL.to_string(),
            count: 0,
            kind: ProblemKind::EmptyGrid,
        });
        return result;
    }

    let max_dim = grid.rows().max(grid.cols());
    if let Some(longest) = words.iter().map(String::len).max() {
        if longest > max_dim {
            result.is_valid = false;
            result.problems.push(WordProblem {
                word: GRID_SENTINEL.to_string(),
                count: 0,
                kind: ProblemKind::GridTooSmall { longest, max_dim },
            });
            return result;
        }
    }

    for word in words {
        let upper = word.to_ascii_uppercase();
        let count = find_placements(grid, &upper, MatchMode::FilledOnly).len();
        debug!("word {upper}: {count} occurrence(s)");

        match count {
            0 => {
                result.is_valid = false;
                result.summary.error_words += 1;
                result.problems.push(WordProblem {
                    word: upper,
                    count: 0,
                    kind: ProblemKind::NotFound,
                });
            }
            1 => result.summary.valid_words += 1,
            _ => {
                result.is_valid = false;
                result.summary.error_words += 1;
                result.problems.push(WordProblem {
                    word: upper,
                    count,
                    kind: ProblemKind::FoundMultipleTimes { count },
                });
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter_grid(rows: Vec<Vec<char>>) -> Grid {
        Grid::from_letters(rows).unwrap()
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_valid_exact_puzzle() {
        let grid = letter_grid(vec![vec!['A', 'B'], vec!['C', 'D']]);
        let report = validate_partial(&grid, &words(&["AB", "CD"]));

        assert!(report.is_valid);
        assert!(report.problems.is_empty());
        assert_eq!(
            report.summary,
            Summary { total_words: 2, valid_words: 2, error_words: 0 }
        );
    }

    #[test]
    fn test_sparse_grid_with_unfilled_cells() {
        let mut grid = Grid::empty(3, 3);
        grid.set(0, 0, Some('C'));
        grid.set(0, 1, Some('A'));
        grid.set(0, 2, Some('T'));
        let report = validate_partial(&grid, &words(&["CAT"]));

        assert!(report.is_valid);
        assert_eq!(report.summary.valid_words, 1);
    }

    #[test]
    fn test_missing_word_reported_not_fatal() {
        let grid = letter_grid(vec![vec!['A', 'B'], vec!['C', 'D']]);
        let report = validate_partial(&grid, &words(&["AB", "XY"]));

        assert!(!report.is_valid);
        assert_eq!(report.problems.len(), 1);
        assert_eq!(report.problems[0].word, "XY");
        assert_eq!(report.problems[0].count, 0);
        assert_eq!(report.problems[0].kind, ProblemKind::NotFound);
        // the good word was still counted
        assert_eq!(
            report.summary,
            Summary { total_words: 2, valid_words: 1, error_words: 1 }
        );
    }

    #[test]
    fn test_duplicate_word_reports_exact_count() {
        // "AB" runs right from (0,0) and down from (0,0)
        let grid = letter_grid(vec![vec!['A', 'B'], vec!['B', 'X']]);
        let report = validate_partial(&grid, &words(&["AB"]));

        assert!(!report.is_valid);
        assert_eq!(report.problems.len(), 1);
        assert_eq!(report.problems[0].count, 2);
        assert_eq!(report.problems[0].kind, ProblemKind::FoundMultipleTimes { count: 2 });
        assert_eq!(
            report.problems[0].kind.to_string(),
            "Word found multiple times (2)"
        );
    }

    #[test]
    fn test_empty_grid_short_circuits() {
        let grid = Grid::empty(0, 0);
        let report = validate_partial(&grid, &words(&["CAT"]));

        assert!(!report.is_valid);
        assert_eq!(report.problems.len(), 1);
        assert_eq!(report.problems[0].word, "GRID");
        assert_eq!(report.problems[0].kind, ProblemKind::EmptyGrid);
        // grid-scoped problems do not count as word errors
        assert_eq!(report.summary.error_words, 0);
    }

    #[test]
    fn test_word_longer_than_grid_short_circuits() {
        let grid = letter_grid(vec![vec!['A', 'B'], vec!['C', 'D']]);
        let report = validate_partial(&grid, &words(&["LONGEST"]));

        assert!(!report.is_valid);
        assert_eq!(
            report.problems[0].kind,
            ProblemKind::GridTooSmall { longest: 7, max_dim: 2 }
        );
        assert_eq!(
            report.problems[0].kind.to_string(),
            "Grid too small: longest word is 7 letters, but max grid dimension is 2"
        );
    }

    #[test]
    fn test_lowercase_input_normalized() {
        let grid = letter_grid(vec![vec!['A', 'B'], vec!['C', 'D']]);
        let report = validate_partial(&grid, &words(&["ab"]));

        assert!(report.is_valid);
        assert_eq!(report.summary.valid_words, 1);
    }

    #[test]
    fn test_empty_word_list_is_valid() {
        let grid = letter_grid(vec![vec!['A']]);
        let report = validate_partial(&grid, &[]);

        assert!(report.is_valid);
        assert_eq!(report.summary.total_words, 0);
    }

    #[test]
    fn test_words_checked_independently() {
        // "ABA" and "BAB" overlap on every cell of the single row; the
        // partial validator does not care, it only counts occurrences
        let grid = letter_grid(vec![vec!['A', 'B', 'A', 'X']]);
        let report = validate_partial(&grid, &words(&["ABA", "BA"]));

        // ABA occurs twice (right from (0,0), left from (0,2))
        assert!(!report.is_valid);
        let aba = report.problems.iter().find(|p| p.word == "ABA").unwrap();
        assert_eq!(aba.count, 2);
        // BA occurs twice as well: left from (0,1) ... and right from (0,1)
        let ba = report.problems.iter().find(|p| p.word == "BA").unwrap();
        assert_eq!(ba.count, 2);
    }
}
