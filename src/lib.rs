//! Word-search puzzle engine: a constrained backtracking generator plus two
//! independent validators over the same grid/word-list data model.
//!
//! - [`generator::create_puzzle`] builds a grid that places every word.
//! - [`validator::validate_puzzle`] checks a filled grid for a single
//!   globally consistent placement per word (exact cell coverage).
//! - [`partial_validator::validate_partial`] checks each word independently
//!   for an occurrence count of exactly one (sparse grids allowed).
//!
//! All core functions are pure, synchronous, and reentrant; the backtracking
//! searches are exponential in the worst case and intended for small puzzles.

pub mod errors;
pub mod generator;
pub mod grid;
pub mod log;
pub mod partial_validator;
pub mod placement;
pub mod puzzle;
pub mod validator;
