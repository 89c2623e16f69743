//! Error types for the demo harness.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Matrix(#[from] bitmul::Error),

    #[error("please enter a valid integer: {0}")]
    Parse(#[from] std::num::ParseIntError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    #[error("results of sequential and parallel execution differ in {differing} of {size}x{size} cells")]
    ResultsDiffer { size: usize, differing: usize },
}
