use std::fmt;

use crate::board::{Cell, Digit};
use crate::brute_force::brute_force;
use crate::consts::N_CELLS;
use crate::errors::{LineParseError, Unsolvable};
use crate::placement;

/// The main structure exposing all the functionality of the library.
///
/// A `Sudoku` is the 81 cells of a 9x9 grid in reading order, each cell
/// either empty or holding a digit 1-9.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Sudoku([u8; N_CELLS]);

impl Sudoku {
    /// Creates a sudoku from a string in line format.
    ///
    /// The line format is 81 characters long, one per cell in reading
    /// order. Accepted characters are the digits `1`-`9` and `.` for an
    /// empty cell.
    ///
    /// The checks are applied in order and the first failing one is
    /// returned: an empty string reports [`MissingPuzzle`], a string of any
    /// other length than 81 reports [`WrongLength`] even if it also
    /// contains invalid characters, and only an 81 character string can
    /// report [`InvalidEntry`].
    ///
    /// [`MissingPuzzle`]: LineParseError::MissingPuzzle
    /// [`WrongLength`]: LineParseError::WrongLength
    /// [`InvalidEntry`]: LineParseError::InvalidEntry
    pub fn from_str_line(s: &str) -> Result<Sudoku, LineParseError> {
        if s.is_empty() {
            return Err(LineParseError::MissingPuzzle);
        }
        let n_cells = s.chars().count();
        if n_cells != N_CELLS {
            return Err(LineParseError::WrongLength(n_cells));
        }

        let mut grid = [0; N_CELLS];
        for (cell, ch) in s.chars().enumerate() {
            grid[cell] = match ch {
                '.' => 0,
                '1'..='9' => ch as u8 - b'0',
                _ => {
                    return Err(LineParseError::InvalidEntry {
                        cell: cell as u8,
                        ch,
                    })
                }
            };
        }
        Ok(Sudoku(grid))
    }

    /// Returns the line format representation of the sudoku.
    pub fn to_str_line(&self) -> String {
        (0..81)
            .map(Cell::new)
            .map(|cell| match self.get(cell) {
                Some(digit) => digit.to_ascii() as char,
                None => '.',
            })
            .collect()
    }

    /// Returns the digit at `cell`, or `None` if the cell is empty.
    pub fn get(&self, cell: Cell) -> Option<Digit> {
        Digit::new_checked(self.0[cell.as_index()])
    }

    /// Enters `digit` at `cell`, overwriting the previous content.
    pub fn set(&mut self, cell: Cell, digit: Digit) {
        self.0[cell.as_index()] = digit.get();
    }

    /// Empties `cell`.
    pub fn clear(&mut self, cell: Cell) {
        self.0[cell.as_index()] = 0;
    }

    /// Returns the first empty cell in linear order, or `None` if the grid
    /// is completely filled.
    pub(crate) fn first_empty_cell(&self) -> Option<Cell> {
        self.0.iter().position(|&num| num == 0).map(|cell| Cell::new(cell as u8))
    }

    /// Try to find a solution to the sudoku.
    ///
    /// Empty cells are filled in linear order and digits tried in
    /// ascending order, so repeated calls on the same puzzle return the
    /// identical solution even when several exist.
    pub fn solve(&self) -> Result<Sudoku, Unsolvable> {
        let mut solution = *self;
        match brute_force(&mut solution) {
            true => Ok(solution),
            false => Err(Unsolvable),
        }
    }

    /// Check whether the sudoku is solved, i.e. completely filled without
    /// any digit repeated in a row, column or block.
    pub fn is_solved(&self) -> bool {
        (0..81).map(Cell::new).all(|cell| match self.get(cell) {
            Some(digit) => placement::fits(self, cell, digit),
            None => false,
        })
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_line())
    }
}

impl fmt::Debug for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sudoku({})", self.to_str_line())
    }
}
