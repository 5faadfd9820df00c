//! Types for cells, digits and other things on a sudoku board
mod digit;
pub mod positions;
mod sudoku;

pub use self::{digit::Digit, positions::Cell, sudoku::Sudoku};
