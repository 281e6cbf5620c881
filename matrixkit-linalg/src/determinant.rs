/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use matrixkit::{Cells, MatrixError, MatrixResult};

/// Compute the determinant of a square matrix or view by cofactor expansion along the
/// first row.
///
/// The minor of an interior column is assembled by placing the windows to the left and
/// to the right of that column side by side; minors of the first and last columns are
/// plain windows onto `a`. The empty matrix has determinant 1.
///
/// Runs in `O(n!)` time.
///
/// # Errors
///
/// Returns [`MatrixError::NonSquare`] if `a` is not square.
pub fn determinant<C>(a: &C) -> MatrixResult<f64>
where
    C: Cells + ?Sized,
{
    if !a.is_square() {
        return Err(MatrixError::NonSquare {
            operation: "determinant",
            shape: a.shape(),
        });
    }
    cofactor_expansion(a)
}

fn cofactor_expansion<C>(a: &C) -> MatrixResult<f64>
where
    C: Cells + ?Sized,
{
    let n = a.nrows();
    match n {
        0 => Ok(1.0),
        1 => Ok(a.row(1)[0]),
        2 => {
            let (top, bottom) = (a.row(1), a.row(2));
            Ok(top[0] * bottom[1] - top[1] * bottom[0])
        }
        _ => {
            let mut det = 0.0;
            for (i, &coefficient) in a.row(1).iter().enumerate() {
                let j = i + 1;
                let minor = if j == 1 {
                    cofactor_expansion(&a.view(2, 2, n, n)?)?
                } else if j == n {
                    cofactor_expansion(&a.view(2, 1, n, n - 1)?)?
                } else {
                    let left = a.view(2, 1, n, j - 1)?;
                    let right = a.view(2, j + 1, n, n)?;
                    cofactor_expansion(&left.hstack(&right)?)?
                };
                let sign = if j % 2 == 1 { 1.0 } else { -1.0 };
                det += sign * coefficient * minor;
            }
            Ok(det)
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use matrixkit::{testing::random_matrix, CellsMut, Matrix, MatrixErrorKind, Shape};
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;

    use super::*;

    #[test]
    fn two_by_two() {
        let a = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(determinant(&a).unwrap(), -2.0);
    }

    #[test]
    fn three_by_three() {
        let a = Matrix::from_rows([[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]).unwrap();
        assert_eq!(determinant(&a).unwrap(), -306.0);
    }

    #[test]
    fn small_sizes() {
        assert_eq!(determinant(&Matrix::empty()).unwrap(), 1.0);
        assert_eq!(determinant(&Matrix::new(-4.5, 1, 1)).unwrap(), -4.5);
    }

    #[test]
    fn triangular() {
        let a = Matrix::from_rows([
            [2.0, 1.0, 3.0, 4.0],
            [0.0, 3.0, 1.0, 2.0],
            [0.0, 0.0, 4.0, 1.0],
            [0.0, 0.0, 0.0, 5.0],
        ])
        .unwrap();
        assert_eq!(determinant(&a).unwrap(), 120.0);
        assert_eq!(determinant(&a.transposed()).unwrap(), 120.0);
    }

    #[test]
    fn singular_matrix_has_zero_determinant() {
        let a = Matrix::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 0.0, 1.0]]).unwrap();
        assert_eq!(determinant(&a).unwrap(), 0.0);
    }

    #[test]
    fn accepts_views() {
        let a = Matrix::from_rows([
            [9.0, 9.0, 9.0, 9.0],
            [9.0, 6.0, 1.0, 1.0],
            [9.0, 4.0, -2.0, 5.0],
            [9.0, 2.0, 8.0, 7.0],
        ])
        .unwrap();
        let view = a.view(2, 2, 4, 4).unwrap();
        assert_eq!(determinant(&view).unwrap(), -306.0);
    }

    #[test]
    fn nonsquare() {
        let err = determinant(&Matrix::zeros(2, 3)).unwrap_err();
        assert_eq!(err.kind(), MatrixErrorKind::NonSquare);
        assert_eq!(
            err,
            MatrixError::NonSquare {
                operation: "determinant",
                shape: Shape::new(2, 3)
            }
        );
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(5)]
    #[case(7)]
    fn identity_has_unit_determinant(#[case] n: usize) {
        assert_eq!(determinant(&Matrix::identity(n)).unwrap(), 1.0);
    }

    #[rstest]
    #[case(2)]
    #[case(3)]
    #[case(4)]
    #[case(6)]
    fn transpose_preserves_determinant(#[case] n: usize) {
        let mut rng = StdRng::seed_from_u64(0xde7);
        for _ in 0..4 {
            let a = random_matrix(&mut rng, n, n);
            let det = determinant(&a).unwrap();
            let det_t = determinant(&a.transposed()).unwrap();
            assert_relative_eq!(det, det_t, max_relative = 1e-9, epsilon = 1e-6);
        }
    }

    #[rstest]
    #[case(3, 2.0)]
    #[case(4, -0.5)]
    fn row_scaling_scales_determinant(#[case] n: usize, #[case] k: f64) {
        let mut rng = StdRng::seed_from_u64(0xde8);
        let mut a = random_matrix(&mut rng, n, n);
        let det = determinant(&a).unwrap();

        a.address_mut("R2").unwrap().scale(k);
        assert_relative_eq!(
            determinant(&a).unwrap(),
            k * det,
            max_relative = 1e-9,
            epsilon = 1e-6
        );
    }
}
