use crate::error::{Error, Result};
use rand::Rng;
use ref_cast::RefCast;
use std::{fmt, ops::Index};

/// The largest number of rows (and columns) a [`BitMatrix`] may have
pub const MAX_SIZE: usize = 10_000;

/// A square matrix of bits
///
/// The cells are stored in a single flat vector in row-major order, so cell `(row, col)` lives at
/// index `row * size + col`. The size is fixed at construction. Cells are only written through
/// [`BitMatrix::set`] or through the mutable [`Row`] views handed out by [`BitMatrix::rows_mut`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitMatrix {
    /// the number of rows, which is also the number of columns
    size: usize,

    /// `size * size` cells, stored in row-major order
    cells: Vec<bool>,
}

/// A single row of a [`BitMatrix`], represented as a slice of `bool`s.
///
/// Mutable rows obtained from [`BitMatrix::rows_mut`] never overlap, so they can be written from
/// different threads at the same time.
#[derive(RefCast, PartialEq, Eq, Hash, Debug)]
#[repr(transparent)]
pub struct Row([bool]);

impl Row {
    /// Returns the number of cells in the row
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets the cell in column `col`
    ///
    /// # Panics
    ///
    /// Panics if `col` is not less than the row length.
    #[inline]
    pub fn bit(&self, col: usize) -> bool {
        self.0[col]
    }

    /// Sets the cell in column `col` to `b`
    ///
    /// # Panics
    ///
    /// Panics if `col` is not less than the row length.
    #[inline]
    pub fn set_bit(&mut self, col: usize, b: bool) {
        self.0[col] = b;
    }

    /// Returns an iterator over the cells of the row
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    /// Counts the number of cells set to `true`
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.0.iter().filter(|&&b| b).count()
    }
}

/// Checks that `size` is a valid matrix size, i.e. in `[1, MAX_SIZE]`
#[inline]
fn check_size(size: usize) -> Result<()> {
    if size == 0 || size > MAX_SIZE {
        return Err(Error::InvalidSize {
            size,
            max: MAX_SIZE,
        });
    }
    Ok(())
}

impl BitMatrix {
    /// Creates a `size` x `size` matrix with every cell set to `false`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] unless `1 <= size <= MAX_SIZE`.
    pub fn create(size: usize) -> Result<Self> {
        check_size(size)?;
        Ok(BitMatrix {
            size,
            cells: vec![false; size * size],
        })
    }

    /// Alias for [`BitMatrix::create`]
    #[inline]
    pub fn zeros(size: usize) -> Result<Self> {
        Self::create(size)
    }

    /// Builds a matrix from a function `f` that determines the value of each cell
    ///
    /// `f` is called once per cell in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] unless `1 <= size <= MAX_SIZE`.
    pub fn build(size: usize, mut f: impl FnMut(usize, usize) -> bool) -> Result<Self> {
        check_size(size)?;
        let cells = (0..size * size).map(|i| f(i / size, i % size)).collect();
        Ok(BitMatrix { size, cells })
    }

    /// Creates a matrix from a slice of rows
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if there are no rows or too many, and
    /// [`Error::SizeMismatch`] if some row length differs from the number of rows.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self> {
        let size = rows.len();
        check_size(size)?;
        if let Some(row) = rows.iter().find(|row| row.len() != size) {
            return Err(Error::SizeMismatch {
                left: size,
                right: row.len(),
            });
        }
        Self::build(size, |i, j| rows[i][j])
    }

    /// Creates a matrix whose cells are independently `true` with probability 1/2, drawn from `rng`
    ///
    /// Passing a seeded generator makes the result reproducible.
    pub fn random(rng: &mut impl Rng, size: usize) -> Result<Self> {
        Self::build(size, |_, _| rng.random())
    }

    /// Same as [`BitMatrix::random`], using the thread-local generator
    pub fn with_random_data(size: usize) -> Result<Self> {
        Self::random(&mut rand::rng(), size)
    }

    /// Returns the number of rows (equivalently, columns)
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if `other` has the same size. No cells are read.
    #[inline]
    pub fn sizes_match(&self, other: &BitMatrix) -> bool {
        self.size == other.size
    }

    #[inline]
    fn check_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.size || col >= self.size {
            return Err(Error::IndexOutOfRange {
                row,
                col,
                size: self.size,
            });
        }
        Ok(row * self.size + col)
    }

    /// Gets the cell at `(row, col)`
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if either coordinate is not less than the size.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        let i = self.check_index(row, col)?;
        Ok(self.cells[i])
    }

    /// Sets the cell at `(row, col)` to `value`
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if either coordinate is not less than the size.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<()> {
        let i = self.check_index(row, col)?;
        self.cells[i] = value;
        Ok(())
    }

    /// Gets the cell at `(row, col)` without returning an error
    ///
    /// This is the accessor used in inner loops, where the coordinates are known to be in range.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is not less than the size.
    #[inline]
    pub fn bit(&self, row: usize, col: usize) -> bool {
        assert!(
            row < self.size && col < self.size,
            "cell ({}, {}) is out of range for a {}x{} matrix",
            row,
            col,
            self.size,
            self.size
        );
        self.cells[row * self.size + col]
    }

    /// Returns row `row` as a [`Row`]
    ///
    /// # Panics
    ///
    /// Panics if `row` is not less than the size.
    #[inline]
    pub fn row(&self, row: usize) -> &Row {
        Row::ref_cast(&self.cells[row * self.size..(row + 1) * self.size])
    }

    /// Returns an iterator over all rows, top to bottom
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.cells.chunks_exact(self.size).map(|x| Row::ref_cast(x))
    }

    /// Returns an iterator over disjoint mutable views of all rows, top to bottom
    #[inline]
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut Row> {
        self.cells
            .chunks_exact_mut(self.size)
            .map(|x| Row::ref_cast_mut(x))
    }

    /// Counts the number of cells set to `true`
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.rows().map(Row::count_ones).sum()
    }

    /// Returns true if every cell is `false`
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.cells.iter().all(|&b| !b)
    }
}

impl Index<(usize, usize)> for BitMatrix {
    type Output = bool;

    #[inline]
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        if self.bit(index.0, index.1) {
            &true
        } else {
            &false
        }
    }
}

/// Formats the matrix one row per line, with cells written as `1`/`0` and separated by spaces
impl fmt::Display for BitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (j, b) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", if b { 1 } else { 0 })?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
