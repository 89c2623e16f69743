pub mod parallel;

use crate::{
    bitmatrix::BitMatrix,
    error::{Error, Result},
    kernel,
};

/// A strategy for multiplying two equal-size [`BitMatrix`]s over GF(2)
///
/// Implementations never mutate their inputs and return a freshly allocated result. On a size
/// mismatch they fail before allocating or computing anything.
pub trait Multiply {
    fn multiply(&self, a: &BitMatrix, b: &BitMatrix) -> Result<BitMatrix>;
}

/// Returns the common size of `a` and `b`, or [`Error::SizeMismatch`] reporting both sizes
#[inline]
pub(crate) fn check_sizes(a: &BitMatrix, b: &BitMatrix) -> Result<usize> {
    if !a.sizes_match(b) {
        return Err(Error::SizeMismatch {
            left: a.size(),
            right: b.size(),
        });
    }
    Ok(a.size())
}

/// Multiplies on the current thread, filling rows top to bottom and cells left to right
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialMultiplier;

impl Multiply for SequentialMultiplier {
    fn multiply(&self, a: &BitMatrix, b: &BitMatrix) -> Result<BitMatrix> {
        let size = check_sizes(a, b)?;
        let mut res = BitMatrix::create(size)?;

        for (row, out) in res.rows_mut().enumerate() {
            kernel::fill_row(row, out, a, b);
        }

        Ok(res)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn two_by_two() {
        let a = BitMatrix::from_rows(&[vec![true, false], vec![true, true]]).unwrap();
        let b = BitMatrix::from_rows(&[vec![true, true], vec![false, true]]).unwrap();
        let expected = BitMatrix::from_rows(&[vec![true, true], vec![true, false]]).unwrap();
        assert_eq!(SequentialMultiplier.multiply(&a, &b), Ok(expected));
    }

    #[test]
    fn size_mismatch() {
        let a = BitMatrix::create(3).unwrap();
        let b = BitMatrix::create(4).unwrap();
        assert_eq!(
            SequentialMultiplier.multiply(&a, &b),
            Err(Error::SizeMismatch { left: 3, right: 4 })
        );
        assert_eq!(
            SequentialMultiplier.multiply(&b, &a),
            Err(Error::SizeMismatch { left: 4, right: 3 })
        );
    }

    #[test]
    fn zero_matrix() {
        let mut rng = SmallRng::seed_from_u64(1);
        let a = BitMatrix::random(&mut rng, 20).unwrap();
        let z = BitMatrix::zeros(20).unwrap();
        assert!(SequentialMultiplier.multiply(&a, &z).unwrap().is_zero());
        assert!(SequentialMultiplier.multiply(&z, &a).unwrap().is_zero());
    }

    #[test]
    fn identity() {
        let mut rng = SmallRng::seed_from_u64(1);
        let a = BitMatrix::random(&mut rng, 17).unwrap();
        let id = BitMatrix::build(17, |i, j| i == j).unwrap();
        assert_eq!(SequentialMultiplier.multiply(&a, &id).unwrap(), a);
        assert_eq!(SequentialMultiplier.multiply(&id, &a).unwrap(), a);
    }

    #[test]
    fn inputs_unchanged() {
        let mut rng = SmallRng::seed_from_u64(3);
        let a = BitMatrix::random(&mut rng, 12).unwrap();
        let b = BitMatrix::random(&mut rng, 12).unwrap();
        let (a0, b0) = (a.clone(), b.clone());
        SequentialMultiplier.multiply(&a, &b).unwrap();
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn associative() {
        let mut rng = SmallRng::seed_from_u64(4);
        let a = BitMatrix::random(&mut rng, 25).unwrap();
        let b = BitMatrix::random(&mut rng, 25).unwrap();
        let c = BitMatrix::random(&mut rng, 25).unwrap();
        let m = SequentialMultiplier;

        let left = m.multiply(&m.multiply(&a, &b).unwrap(), &c).unwrap();
        let right = m.multiply(&a, &m.multiply(&b, &c).unwrap()).unwrap();
        assert_eq!(left, right);
    }
}
