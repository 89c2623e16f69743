//! Error types for matrix construction, access and multiplication.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("matrix size must be in [1, {max}], got {size}")]
    InvalidSize { size: usize, max: usize },

    #[error("matrix sizes differ: {left} != {right}")]
    SizeMismatch { left: usize, right: usize },

    #[error("cell ({row}, {col}) is out of range for a {size}x{size} matrix")]
    IndexOutOfRange { row: usize, col: usize, size: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
