//! Positions on the sudoku grid and iterators over its units.
use std::fmt;

/// A cell of the sudoku grid, i.e. a position, not the digit it may contain.
///
/// Cells are numbered in reading order: `0..=8` for the first row,
/// `9..=17` for the second and so on.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Cell(u8);

impl Cell {
    /// Constructs a new `Cell` from its linear index.
    ///
    /// # Panic
    /// Panics, if the index is not in the range of `0..=80`.
    pub fn new(cell: u8) -> Self {
        assert!(cell < 81);
        Cell(cell)
    }

    /// Constructs a new `Cell` from row and column indices, each `0..=8`.
    ///
    /// # Panic
    /// Panics, if either index is out of range.
    pub fn from_row_col(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Cell(row * 9 + col)
    }

    /// Parses an alphanumeric coordinate such as `A1` or `h7` into a cell.
    ///
    /// The letter `A`-`I` (case insensitive) selects the row, the digit
    /// `1`-`9` the column. Returns `None` for anything else.
    pub fn from_coordinate(coordinate: &str) -> Option<Self> {
        let mut chars = coordinate.chars();
        let row_ch = chars.next()?;
        let col_ch = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let row = match row_ch.to_ascii_uppercase() {
            ch @ 'A'..='I' => ch as u8 - b'A',
            _ => return None,
        };
        let col = match col_ch {
            ch @ '1'..='9' => ch as u8 - b'1',
            _ => return None,
        };
        Some(Cell(row * 9 + col))
    }

    /// Returns the linear index of the cell for use in slice indexing.
    pub fn as_index(self) -> usize {
        self.0 as usize
    }

    /// Row index from 0..=8, topmost row is 0.
    pub fn row(self) -> u8 {
        self.0 / 9
    }

    /// Column index from 0..=8, leftmost col is 0.
    pub fn col(self) -> u8 {
        self.0 % 9
    }

    /// Block index from 0..=8, numbering from left to right, top to bottom.
    pub fn block(self) -> u8 {
        self.row() / 3 * 3 + self.col() / 3
    }
}

// prints in the `A1` coordinate form
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.row()) as char, self.col() + 1)
    }
}

/// Returns an iterator over the 9 cells of `row`, left to right.
pub fn cells_of_row(row: u8) -> impl Iterator<Item = Cell> {
    (0..9).map(move |col| Cell::from_row_col(row, col))
}

/// Returns an iterator over the 9 cells of `col`, top to bottom.
pub fn cells_of_col(col: u8) -> impl Iterator<Item = Cell> {
    (0..9).map(move |row| Cell::from_row_col(row, col))
}

/// Returns an iterator over the 9 cells of the 3x3 block containing `cell`,
/// in reading order.
pub fn cells_of_block(cell: Cell) -> impl Iterator<Item = Cell> {
    let corner_row = cell.row() / 3 * 3;
    let corner_col = cell.col() / 3 * 3;
    (0..9).map(move |i| Cell::from_row_col(corner_row + i / 3, corner_col + i % 3))
}
