//! The per-cell arithmetic shared by every multiplication strategy.
//!
//! Strategies differ only in how they schedule rows. They all compute cells through [`cell`]
//! (usually via [`fill_row`]), which is what makes their results identical.

use crate::bitmatrix::{BitMatrix, Row};

/// Computes cell `(row, col)` of `a * b` over GF(2)
///
/// This is the dot product of row `row` of `a` and column `col` of `b`, with cells read as 0/1,
/// reduced mod 2. `a` and `b` must have the same size.
///
/// # Panics
///
/// Panics if `row` or `col` is out of range, or if `b` is smaller than `a`.
#[inline]
pub fn cell(row: usize, col: usize, a: &BitMatrix, b: &BitMatrix) -> bool {
    let mut sum = 0usize;
    for k in 0..a.size() {
        sum += usize::from(a.bit(row, k)) * usize::from(b.bit(k, col));
    }
    sum % 2 != 0
}

/// Writes row `row` of `a * b` into `out`, one [`cell`] per column in ascending order
///
/// `out` must have one cell per column of the product.
#[inline]
pub fn fill_row(row: usize, out: &mut Row, a: &BitMatrix, b: &BitMatrix) {
    for col in 0..out.len() {
        out.set_bit(col, cell(row, col, a, b));
    }
}
