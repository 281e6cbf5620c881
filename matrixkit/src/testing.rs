/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

//! Random matrix generators for tests.

use rand::Rng;

use crate::Matrix;

/// Return a `nrows x ncols` matrix with cells drawn uniformly from `[-10, 10)`.
pub fn random_matrix<R>(rng: &mut R, nrows: usize, ncols: usize) -> Matrix
where
    R: Rng,
{
    Matrix::from_fn(nrows, ncols, |_, _| rng.random_range(-10.0..10.0))
}

/// Return an `n x n` matrix with a unit diagonal and off-diagonal cells drawn uniformly
/// from `[-spread, spread)`.
///
/// With a small `spread` the result is diagonally dominant, which keeps Gauss-Jordan
/// elimination without pivoting well conditioned.
pub fn near_identity<R>(rng: &mut R, n: usize, spread: f64) -> Matrix
where
    R: Rng,
{
    Matrix::from_fn(n, n, |r, c| {
        if r == c {
            1.0
        } else if spread > 0.0 {
            rng.random_range(-spread..spread)
        } else {
            0.0
        }
    })
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::Cells;

    #[test]
    fn generators_are_seeded() {
        let a = random_matrix(&mut StdRng::seed_from_u64(7), 3, 4);
        let b = random_matrix(&mut StdRng::seed_from_u64(7), 3, 4);
        assert_eq!(a, b);
        assert!(a.as_slice().iter().all(|x| (-10.0..10.0).contains(x)));
    }

    #[test]
    fn near_identity_has_unit_diagonal() {
        let mut rng = StdRng::seed_from_u64(11);
        let m = near_identity(&mut rng, 5, 0.1);
        assert!(m.is_square());
        for r in 1..=5 {
            for c in 1..=5 {
                if r == c {
                    assert_eq!(m[(r, c)], 1.0);
                } else {
                    assert!(m[(r, c)].abs() < 0.1);
                }
            }
        }
        assert_eq!(near_identity(&mut rng, 3, 0.0), Matrix::identity(3));
    }
}
