#![allow(unused)]

pub(crate) const N_CELLS: usize = 81;
pub(crate) const N_DIGITS: usize = 9;
