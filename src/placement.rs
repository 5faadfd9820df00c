//! Predicates deciding whether a digit can be placed in a cell without
//! clashing with its row, column or 3x3 block.
//!
//! Each predicate ignores the current content of the target cell itself.
//! Without that exclusion a digit already entered in a cell would always
//! conflict with itself, so the predicates are safe to call both on a
//! board where the cell still holds its original content and on one where
//! it has been cleared.

use std::fmt;

use serde::Serialize;

use crate::board::{positions, Cell, Digit, Sudoku};

/// One of the three constraint units a placement is checked against.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// The 9 cells sharing the target cell's row.
    Row,
    /// The 9 cells sharing the target cell's column.
    Column,
    /// The 9 cells of the 3x3 block containing the target cell.
    Region,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Unit::Row => "row",
            Unit::Column => "column",
            Unit::Region => "region",
        })
    }
}

/// Returns `true` if no cell in the target cell's row other than the
/// target cell itself holds `digit`.
pub fn fits_in_row(sudoku: &Sudoku, cell: Cell, digit: Digit) -> bool {
    unit_is_free(sudoku, positions::cells_of_row(cell.row()), cell, digit)
}

/// Returns `true` if no cell in the target cell's column other than the
/// target cell itself holds `digit`.
pub fn fits_in_column(sudoku: &Sudoku, cell: Cell, digit: Digit) -> bool {
    unit_is_free(sudoku, positions::cells_of_col(cell.col()), cell, digit)
}

/// Returns `true` if no cell in the target cell's 3x3 block other than the
/// target cell itself holds `digit`.
pub fn fits_in_region(sudoku: &Sudoku, cell: Cell, digit: Digit) -> bool {
    unit_is_free(sudoku, positions::cells_of_block(cell), cell, digit)
}

/// Returns `true` if `digit` can be placed at `cell` without conflicting
/// with any of the three units.
pub fn fits(sudoku: &Sudoku, cell: Cell, digit: Digit) -> bool {
    fits_in_row(sudoku, cell, digit)
        && fits_in_column(sudoku, cell, digit)
        && fits_in_region(sudoku, cell, digit)
}

/// Returns every unit in which placing `digit` at `cell` would clash with
/// an existing entry, in row, column, region order.
///
/// An empty result means the placement is valid.
pub fn conflicts(sudoku: &Sudoku, cell: Cell, digit: Digit) -> Vec<Unit> {
    let mut conflicting_units = vec![];
    if !fits_in_row(sudoku, cell, digit) {
        conflicting_units.push(Unit::Row);
    }
    if !fits_in_column(sudoku, cell, digit) {
        conflicting_units.push(Unit::Column);
    }
    if !fits_in_region(sudoku, cell, digit) {
        conflicting_units.push(Unit::Region);
    }
    conflicting_units
}

fn unit_is_free(
    sudoku: &Sudoku,
    unit_cells: impl Iterator<Item = Cell>,
    excluded_cell: Cell,
    digit: Digit,
) -> bool {
    unit_cells
        .filter(|&cell| cell != excluded_cell)
        .all(|cell| sudoku.get(cell) != Some(digit))
}
