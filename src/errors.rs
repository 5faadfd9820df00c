//! Errors that may be encountered when reading or solving a sudoku.

/// A structure representing an error caused when parsing the sudoku.
///
/// The `Display` messages are the ones reported verbatim to API clients,
/// see the [`api`](crate::api) module.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, thiserror::Error)]
pub enum LineParseError {
    /// The puzzle string was absent or empty.
    #[error("Required field missing")]
    MissingPuzzle,
    /// The puzzle string does not contain exactly 81 cells.
    /// Contains the number of cells supplied.
    #[error("Expected puzzle to be 81 characters long")]
    WrongLength(usize),
    /// Accepted values are the numbers 1..=9 and '.' for empty cells.
    /// Contains the position and value of the offending character.
    #[error("Invalid characters in puzzle")]
    InvalidEntry {
        /// Cell number goes from 0..=80, 0..=8 for the first line, 9..=17 for the 2nd and so on
        cell: u8,
        /// The parsed invalid char
        ch: char,
    },
}

/// Error returned when the exhaustive backtracking search finds no
/// completion of a puzzle.
///
/// The search tries every digit in every empty cell, so this is equivalent
/// to "no solution exists".
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, thiserror::Error)]
#[error("Puzzle cannot be solved")]
pub struct Unsolvable;
