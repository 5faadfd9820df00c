#![warn(missing_docs)]
//! A sudoku validation and solving library
//!
//! ## Overview
//!
//! Puzzles are encoded as 81-character lines with the digits `1`-`9` for
//! clues and `.` for empty cells. The library validates such lines, solves
//! them by backtracking and checks single placements against the row,
//! column and region constraints.
//!
//! ## Example
//!
//! ```
//! use sudoku_solver::Sudoku;
//!
//! let sudoku_line = "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";
//!
//! let sudoku = Sudoku::from_str_line(sudoku_line).unwrap();
//! let solution = sudoku.solve().unwrap();
//! println!("{}", solution.to_str_line());
//! ```
//!
//! The [`api`] module wraps solving and placement checking into the two
//! request/response operations of the original puzzle service.

pub mod api;
mod board;
mod brute_force;
mod consts;
mod errors;
pub mod placement;

pub use crate::board::{positions, Cell, Digit, Sudoku};
pub use crate::errors::{LineParseError, Unsolvable};
