use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};

use wordhaunt::errors::PuzzleError;
use wordhaunt::generator::{create_puzzle, create_puzzle_with_rng, seeded_rng};
use wordhaunt::grid::Grid;
use wordhaunt::partial_validator::validate_partial;
use wordhaunt::puzzle::{Dimensions, Puzzle};
use wordhaunt::validator::validate_puzzle;

/// Word-search puzzle creator and validators
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a puzzle whose grid exactly fits the given words
    Create {
        /// Grid dimensions (rows, then cols); rows × cols must equal the
        /// total word length
        #[arg(short, long, num_args = 2, value_names = ["ROWS", "COLS"], required = true)]
        dimensions: Vec<usize>,

        /// Words to place in the puzzle
        #[arg(short, long, num_args = 1.., required = true)]
        words: Vec<String>,

        /// Seed for the random filler letters (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Validate a complete puzzle file (exact cell coverage, one consistent
    /// placement per word)
    Validate {
        /// Path to the puzzle JSON file
        puzzle: String,
    },

    /// Validate a possibly sparse grid: each word must occur exactly once
    ValidatePartial {
        /// Grid rows separated by commas; cells either run together
        /// ("ABC,DEF") or space-separated. Use '.' or '_' for unfilled cells.
        #[arg(short, long)]
        grid: String,

        /// Words to find
        #[arg(short, long, num_args = 1.., required = true)]
        words: Vec<String>,
    },
}

/// Entry point of the wordhaunt CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them in a
/// user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("WORDHAUNT_DEBUG").is_ok();
    wordhaunt::log::init_logger(debug_enabled);

    match try_main() {
        Ok(code) => code,
        Err(e) => {
            if let Some(puzzle_err) = e.downcast_ref::<PuzzleError>() {
                eprintln!("Error: {}", puzzle_err.display_detailed());
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Dispatches the chosen subcommand. Invalid puzzles are reported on stdout
/// and surface as a failure exit code rather than an `Err`.
fn try_main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Create { dimensions, words, seed } => {
            let dims = Dimensions { rows: dimensions[0], cols: dimensions[1] };
            run_create(&words, dims, seed)
        }
        Command::Validate { puzzle } => run_validate(&puzzle),
        Command::ValidatePartial { grid, words } => run_validate_partial(&grid, &words),
    }
}

fn run_create(
    words: &[String],
    dims: Dimensions,
    seed: Option<u64>,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    println!("Creating word search puzzle with: {}", words.join(", "));

    let result = match seed {
        Some(seed) => create_puzzle_with_rng(words, dims, &mut seeded_rng(seed)),
        None => create_puzzle(words, dims),
    };

    match result {
        Ok(puzzle) => {
            println!("✅ SUCCESS: Puzzle created!");
            println!();
            print_grid(&puzzle.grid);
            println!();
            println!("Dimensions: {}×{} ({} cells)", dims.rows, dims.cols, puzzle.grid_size);
            println!("Words: {}", puzzle.words.join(", "));
            println!("Total letters: {}", puzzle.total_word_length);
            println!();
            println!("Puzzle as JSON:");
            println!("{}", puzzle.to_json()?);
            Ok(ExitCode::SUCCESS)
        }
        Err(PuzzleError::LengthMismatch { total_word_length, grid_size }) => {
            let err = PuzzleError::LengthMismatch { total_word_length, grid_size };
            println!("❌ FAILED: {err}");
            println!();
            println!("Valid dimensions for these words:");
            println!("• {}", factor_pairs(total_word_length).join(", "));
            Ok(ExitCode::FAILURE)
        }
        Err(err) => {
            println!("❌ FAILED: Could not create puzzle");
            println!("• {}", err.display_detailed());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_validate(path: &str) -> Result<ExitCode, Box<dyn std::error::Error>> {
    println!("Testing puzzle: {path}");

    let puzzle = Puzzle::load_from_path(path)?;
    let t_validate = Instant::now();
    let report = validate_puzzle(&puzzle.grid, &puzzle.words);
    let elapsed = t_validate.elapsed();

    if report.is_valid {
        println!("✅ VALID PUZZLE");
    } else {
        println!("❌ INVALID PUZZLE");
    }
    println!();
    println!("Grid size: {} cells", report.grid_size);
    println!("Total word length: {}", report.total_word_length);
    println!("Lengths match: {}", if report.lengths_match { "✅" } else { "❌" });

    if !report.errors.is_empty() {
        println!();
        println!("Errors:");
        for error in &report.errors {
            println!("• {error}");
        }
    }

    if let Some(solution) = &report.solution {
        println!();
        println!("Solution found: {} words placed", solution.len());
        // show a few placements as examples, in word-list order
        for word in puzzle.words.iter().take(3) {
            let key = word.to_ascii_uppercase();
            if let Some(placement) = solution.get(&key) {
                let (row, col) = placement.start;
                println!("• {key}: ({row},{col}) {}", placement.direction);
            }
        }
    }

    println!();
    println!("Validated in {:.3}s", elapsed.as_secs_f64());

    Ok(if report.is_valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn run_validate_partial(
    grid_spec: &str,
    words: &[String],
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let grid = parse_grid_spec(grid_spec)?;

    println!("Validating partial word search puzzle");
    println!("Words to find: {}", words.join(", "));
    println!("Grid size: {}×{}", grid.rows(), grid.cols());
    println!();
    print_grid(&grid);
    println!();

    let report = validate_partial(&grid, words);

    if report.is_valid {
        println!("✅ VALIDATION PASSED");
    } else {
        println!("❌ VALIDATION FAILED");
        println!();
        println!("Problems found:");
        for problem in &report.problems {
            if problem.word == "GRID" {
                println!("• {}", problem.kind);
            } else {
                println!("• {}: {}", problem.word, problem.kind);
            }
        }
    }

    println!();
    println!("Summary:");
    println!("• Total words: {}", report.summary.total_words);
    println!("• Valid words: {}", report.summary.valid_words);
    println!("• Problem words: {}", report.summary.error_words);

    Ok(if report.is_valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Parses a grid spec like `"ABC,DEF"` or `"A B C,D E F"`. Rows are
/// comma-separated; a row containing spaces is split into tokens, otherwise
/// each character is a cell. `.`, `_` and `·` mark unfilled cells.
fn parse_grid_spec(spec: &str) -> Result<Grid, PuzzleError> {
    let rows: Vec<Vec<Option<char>>> = spec
        .split(',')
        .map(|row| {
            let row = row.trim();
            if row.contains(' ') {
                row.split_whitespace().map(|token| cell_from_char(token.chars().next())).collect()
            } else {
                row.chars().map(|c| cell_from_char(Some(c))).collect()
            }
        })
        .collect();

    Grid::from_rows(rows)
}

fn cell_from_char(c: Option<char>) -> Option<char> {
    match c {
        None | Some('.' | '_' | '·') => None,
        Some(c) => Some(c),
    }
}

/// Prints the grid with row and column indices, `·` for unfilled cells.
fn print_grid(grid: &Grid) {
    let header: Vec<String> = (0..grid.cols()).map(|c| c.to_string()).collect();
    println!("  {}", header.join(" "));
    for (row_index, line) in grid.to_display_string().lines().enumerate() {
        println!("{row_index} {line}");
    }
}

/// Every `rows×cols` factorization of `total`, smallest row count first.
fn factor_pairs(total: usize) -> Vec<String> {
    (1..=total)
        .filter(|rows| total % rows == 0)
        .map(|rows| format!("{rows}×{}", total / rows))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grid_spec_compact() {
        let grid = parse_grid_spec("AB.,C_D").unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(0, 0), Some('A'));
        assert_eq!(grid.get(0, 2), None);
        assert_eq!(grid.get(1, 1), None);
    }

    #[test]
    fn test_parse_grid_spec_space_separated() {
        let grid = parse_grid_spec("A B C, D . F").unwrap();
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(1, 1), None);
        assert_eq!(grid.get(1, 2), Some('F'));
    }

    #[test]
    fn test_parse_grid_spec_ragged_rejected() {
        assert!(matches!(
            parse_grid_spec("AB,CDE"),
            Err(PuzzleError::RaggedGrid { .. })
        ));
    }

    #[test]
    fn test_factor_pairs() {
        assert_eq!(factor_pairs(6), vec!["1×6", "2×3", "3×2", "6×1"]);
    }
}
