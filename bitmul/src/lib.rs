//! `bitmul` multiplies square boolean matrices over the 2-element finite field. Some features include:
//! - a flat, row-major [`BitMatrix`] with bounds-checked and unchecked cell access
//! - a single shared [`kernel`] computing one output cell as a dot product reduced mod 2
//! - a single-threaded [`SequentialMultiplier`]
//! - a row-partitioned [`ParallelMultiplier`] running on a caller-owned [`rayon::ThreadPool`]
//!
//! Both strategies implement [`Multiply`] and call the same kernel, so for equal inputs they
//! always produce equal results.
//!
//! ```
//! use bitmul::{BitMatrix, Multiply, ParallelMultiplier, SequentialMultiplier};
//!
//! let a = BitMatrix::from_rows(&[vec![true, false], vec![true, true]]).unwrap();
//! let b = BitMatrix::from_rows(&[vec![true, true], vec![false, true]]).unwrap();
//!
//! let pool = rayon::ThreadPoolBuilder::new().num_threads(2).build().unwrap();
//! let seq = SequentialMultiplier.multiply(&a, &b).unwrap();
//! let par = ParallelMultiplier::new(&pool).multiply(&a, &b).unwrap();
//!
//! assert_eq!(seq, par);
//! assert_eq!(seq.to_string(), "1 1\n1 0\n");
//! ```

#![allow(
    clippy::needless_range_loop,
    clippy::uninlined_format_args,
    clippy::bool_assert_comparison,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]
pub mod bitmatrix;
pub mod error;
pub mod kernel;
pub mod multiply;

pub use bitmatrix::{BitMatrix, Row, MAX_SIZE};
pub use error::{Error, Result};
pub use multiply::{parallel::ParallelMultiplier, Multiply, SequentialMultiplier};
