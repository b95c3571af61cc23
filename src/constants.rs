//! Defaults and symbols shared by the engine, the CLI and the renderer.

// =============================================================================
// Match Defaults
// =============================================================================

/// Default board size (NxN) when none is given on the command line.
pub const DEFAULT_SIZE: usize = 5;

/// Default number of matches played by a series.
pub const DEFAULT_TIMES: usize = 1;

/// Default move cap is `MOVE_CAP_FACTOR * N * N` turns (placements and passes).
///
/// Without a ko rule two automated players can recapture forever, so every
/// match needs an upper bound on its length.
pub const MOVE_CAP_FACTOR: usize = 3;

/// Consecutive passes that end a match.
pub const PASSES_TO_END: usize = 2;

// =============================================================================
// Board Symbols
// =============================================================================

/// Black stone.
pub const SYMBOL_BLACK: char = 'X';

/// White stone.
pub const SYMBOL_WHITE: char = 'O';

/// Empty point.
pub const SYMBOL_EMPTY: char = '.';

// =============================================================================
// Manual Input
// =============================================================================

/// Sentinel typed by a human player to leave the program.
pub const EXIT_COMMAND: &str = "exit";

/// Hint shown on the first prompt and after malformed input.
pub const INPUT_HINT: &str = "Input format: row, column. E.g. 2,3";
