// Implements a brute force algorithm to fill the empty cells of a sudoku.
//
// The steps are the following:
// 1- Find the first empty cell in linear order
// 2- Try the digits 1 through 9 in that cell
//    If a digit doesn't clash with the row, column and block, enter it
//    and recurse into the next empty cell
//    If the recursion fails, empty the cell again and try the next digit
// 3- If no empty cell remains, the sudoku is completed
// 4- If all digits fail in some cell, the puzzle has no solution
//
// Because cells are filled in linear order and digits tried in ascending
// order, the search always finds the same solution for a given puzzle.

use crate::board::{Digit, Sudoku};
use crate::placement;

/// Attempts to brute force the sudoku and returns true if it works.
pub(crate) fn brute_force(sudoku: &mut Sudoku) -> bool {
    fill_next_cell(sudoku)
}

// Recursive function to brute force the empty cells
fn fill_next_cell(sudoku: &mut Sudoku) -> bool {
    // If no empty cell is left, the sudoku is completed
    let cell = match sudoku.first_empty_cell() {
        Some(cell) => cell,
        None => return true,
    };

    for digit in Digit::all() {
        if placement::fits(sudoku, cell, digit) {
            sudoku.set(cell, digit);
            if fill_next_cell(sudoku) {
                return true;
            }
            sudoku.clear(cell);
        }
    }

    false
}
