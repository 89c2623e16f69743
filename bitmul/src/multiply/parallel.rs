use crate::{bitmatrix::*, error::Result, kernel};

use super::{check_sizes, Multiply};
use rayon::ThreadPool;

/// Multiplies by distributing rows across a caller-owned [`ThreadPool`]
///
/// One task is spawned per row of the result. Each task receives an exclusive mutable view of its
/// own row, so tasks never write the same cell and no locking is needed. The call blocks until
/// every row task has finished; there is no timeout and no partial result. If a row task panics,
/// the panic is resumed on the calling thread once the remaining tasks are done.
///
/// The pool is only borrowed: building it, sizing it and shutting it down are up to the caller.
#[derive(Clone, Copy, Debug)]
pub struct ParallelMultiplier<'pool> {
    pool: &'pool ThreadPool,
}

impl<'pool> ParallelMultiplier<'pool> {
    pub fn new(pool: &'pool ThreadPool) -> Self {
        ParallelMultiplier { pool }
    }

    /// Returns the number of worker threads in the underlying pool
    #[inline]
    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl Multiply for ParallelMultiplier<'_> {
    fn multiply(&self, a: &BitMatrix, b: &BitMatrix) -> Result<BitMatrix> {
        let size = check_sizes(a, b)?;
        let mut res = BitMatrix::create(size)?;

        // the scope returns only after every spawned row task has completed
        self.pool.scope(|s| {
            for (row, out) in res.rows_mut().enumerate() {
                s.spawn(move |_| kernel::fill_row(row, out, a, b));
            }
        });

        Ok(res)
    }
}
