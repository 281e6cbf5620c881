/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use matrixkit::{Address, Cells, CellsMut, Matrix, MatrixError, MatrixResult};

use crate::determinant;

/// Invert a square matrix or view by Gauss-Jordan elimination.
///
/// Elimination runs on a copy of `a` paired with the identity. Each pivot row is divided
/// through by its diagonal cell and then subtracted, suitably scaled, from every other
/// row. No row exchanges are performed: a zero pivot on an invertible matrix produces
/// non-finite cells in the result and a `warn` event.
///
/// # Errors
///
/// * [`MatrixError::NonSquare`] if `a` is not square.
/// * [`MatrixError::Singular`] if the determinant of `a` is zero.
pub fn inverse<C>(a: &C) -> MatrixResult<Matrix>
where
    C: Cells + ?Sized,
{
    let shape = a.shape();
    if !shape.is_square() {
        return Err(MatrixError::NonSquare {
            operation: "inverse",
            shape,
        });
    }
    if determinant(a)? == 0.0 {
        return Err(MatrixError::Singular);
    }

    let n = shape.nrows;
    let mut left = a.to_matrix();
    let mut right = Matrix::identity(n);

    for r in 1..=n {
        let pivot = left[(r, r)];
        if pivot == 0.0 {
            tracing::warn!(
                row = r,
                "zero pivot in Gauss-Jordan elimination; the inverse will not be finite"
            );
        }

        let pivot_row = Address::row(r);
        left.select_mut(pivot_row)?.divide(pivot);
        right.select_mut(pivot_row)?.divide(pivot);
        let left_pivot = left.select(pivot_row)?.to_matrix();
        let right_pivot = right.select(pivot_row)?.to_matrix();

        for other in (1..=n).filter(|&other| other != r) {
            let factor = left[(other, r)];
            let target = Address::row(other);
            left.select_mut(target)?.try_sub_assign(&left_pivot.scaled(factor))?;
            right.select_mut(target)?.try_sub_assign(&right_pivot.scaled(factor))?;
        }
    }

    Ok(right)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use matrixkit::{testing::near_identity, MatrixErrorKind, Shape};
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;

    use super::*;

    fn assert_near(a: &Matrix, b: &Matrix, epsilon: f64) {
        assert_eq!(a.shape(), b.shape());
        for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
            assert_abs_diff_eq!(x, y, epsilon = epsilon);
        }
    }

    #[test]
    fn diagonal() {
        let a = Matrix::from_rows([[2.0, 0.0], [0.0, 4.0]]).unwrap();
        let inv = inverse(&a).unwrap();
        assert_eq!(inv, Matrix::from_rows([[0.5, 0.0], [0.0, 0.25]]).unwrap());
    }

    #[test]
    fn one_by_one() {
        let inv = inverse(&Matrix::new(4.0, 1, 1)).unwrap();
        assert_eq!(inv, Matrix::new(0.25, 1, 1));
    }

    #[test]
    fn empty() {
        assert_eq!(inverse(&Matrix::empty()).unwrap(), Matrix::empty());
    }

    #[test]
    fn general_two_by_two() {
        let a = Matrix::from_rows([[4.0, 7.0], [2.0, 6.0]]).unwrap();
        let inv = inverse(&a).unwrap();
        let expected = Matrix::from_rows([[0.6, -0.7], [-0.2, 0.4]]).unwrap();
        assert_near(&inv, &expected, 1e-12);
        assert_near(&a.matmul(&inv).unwrap(), &Matrix::identity(2), 1e-12);
    }

    #[test]
    fn input_is_untouched() {
        let a = Matrix::from_rows([[2.0, 1.0], [1.0, 3.0]]).unwrap();
        let copy = a.clone();
        let _ = inverse(&a).unwrap();
        assert_eq!(a, copy);
    }

    #[test]
    fn accepts_views() {
        let a = Matrix::from_rows([[0.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 4.0]]).unwrap();
        let view = a.view(2, 2, 3, 3).unwrap();
        assert_eq!(
            inverse(&view).unwrap(),
            Matrix::from_rows([[0.5, 0.0], [0.0, 0.25]]).unwrap()
        );
    }

    #[test]
    fn singular() {
        let a = Matrix::from_rows([[1.0, 2.0], [2.0, 4.0]]).unwrap();
        let err = inverse(&a).unwrap_err();
        assert_eq!(err, MatrixError::Singular);
        assert_eq!(err.kind(), MatrixErrorKind::Singular);

        assert_eq!(
            inverse(&Matrix::zeros(3, 3)).unwrap_err().kind(),
            MatrixErrorKind::Singular
        );
    }

    #[test]
    fn nonsquare() {
        let err = inverse(&Matrix::zeros(3, 2)).unwrap_err();
        assert_eq!(
            err,
            MatrixError::NonSquare {
                operation: "inverse",
                shape: Shape::new(3, 2)
            }
        );
    }

    // Elimination does not exchange rows, so a zero on the diagonal poisons the result
    // even though the matrix is invertible.
    #[test]
    fn zero_pivot_is_not_finite() {
        let a = Matrix::from_rows([[0.0, 1.0], [1.0, 0.0]]).unwrap();
        let inv = inverse(&a).unwrap();
        assert!(inv.as_slice().iter().any(|x| !x.is_finite()));
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(5)]
    #[case(7)]
    fn product_with_inverse_is_identity(#[case] n: usize) {
        let mut rng = StdRng::seed_from_u64(0x1_0000 + n as u64);
        for _ in 0..3 {
            let a = near_identity(&mut rng, n, 0.2);
            let inv = inverse(&a).unwrap();
            let tolerance = 1e-6 * n as f64;
            assert_near(&a.matmul(&inv).unwrap(), &Matrix::identity(n), tolerance);
            assert_near(&inv.matmul(&a).unwrap(), &Matrix::identity(n), tolerance);
        }
    }
}
