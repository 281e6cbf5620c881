/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

//! Least-squares polynomial fitting.
//!
//! For samples `(x_i, y_i)` and a target order `n`, the coefficients `c` minimising
//! `|V c - y|` solve the normal equations `(V^T V) c = V^T y`, where `V` is the
//! Vandermonde matrix of the `x_i`. They are computed here as `(V^T V)^-1 V^T y`.

use std::fmt;

use matrixkit::{format_general, Cells, Matrix, MatrixError, MatrixResult};

use crate::inverse;

/// Build the Vandermonde matrix of `xs` for a polynomial of the given order.
///
/// Row `i` is `(x_i^order, ..., x_i, 1)`, so the result is `xs.len() x (order + 1)`.
///
/// # Errors
///
/// Returns [`MatrixError::OrderTooLarge`] if `order` is not below `i32::MAX`.
pub fn vandermonde(xs: &[f64], order: usize) -> MatrixResult<Matrix> {
    let degree = match i32::try_from(order) {
        Ok(degree) if degree < i32::MAX => degree,
        _ => return Err(MatrixError::OrderTooLarge { order }),
    };
    Ok(Matrix::from_fn(xs.len(), order + 1, |r, c| {
        xs[r - 1].powi(degree + 1 - c as i32)
    }))
}

/// The intermediate matrices of a fit, kept so callers can display them.
#[derive(Debug, Clone, PartialEq)]
pub struct FitSteps {
    /// The Vandermonde matrix `V`.
    pub vandermonde: Matrix,
    /// `V^T`.
    pub transposed: Matrix,
    /// `V^T V`.
    pub normal: Matrix,
    pub polynomial: Polynomial,
}

/// Fit a polynomial of the given order to `points`, keeping the intermediate matrices.
///
/// # Errors
///
/// Returns [`MatrixError::Singular`] if `V^T V` is singular. That is the case when there
/// are no points, or fewer distinct `x` values than `order + 1`. Fewer points than
/// `order + 1` is reported as singular without building `V`. Returns
/// [`MatrixError::OrderTooLarge`] if `order` does not fit an `i32` exponent.
pub fn fit_polynomial_steps(points: &[(f64, f64)], order: usize) -> MatrixResult<FitSteps> {
    if points.len() <= order {
        tracing::debug!(
            points = points.len(),
            order,
            "too few points to determine the polynomial"
        );
        return Err(if order >= i32::MAX as usize {
            MatrixError::OrderTooLarge { order }
        } else {
            MatrixError::Singular
        });
    }

    let xs: Vec<f64> = points.iter().map(|&(x, _)| x).collect();
    let ys = Matrix::column(points.iter().map(|&(_, y)| y).collect::<Vec<_>>());

    let vandermonde = vandermonde(&xs, order)?;
    let transposed = vandermonde.transposed();
    let normal = transposed.matmul(&vandermonde)?;
    let solution = inverse(&normal)?.matmul(&transposed)?.matmul(&ys)?;

    let polynomial = Polynomial::new(solution.into_inner().into_vec());
    tracing::debug!(
        points = points.len(),
        order,
        %polynomial,
        "fitted polynomial"
    );

    Ok(FitSteps {
        vandermonde,
        transposed,
        normal,
        polynomial,
    })
}

/// Fit a polynomial of the given order to `points` by least squares.
///
/// ```
/// use matrixkit_linalg::fit_polynomial;
///
/// let points = [(0.0, 1.0), (1.0, 2.0), (2.0, 5.0), (3.0, 10.0)];
/// let p = fit_polynomial(&points, 2).unwrap();
/// assert!((p.evaluate(4.0) - 17.0).abs() < 1e-6);
/// ```
pub fn fit_polynomial(points: &[(f64, f64)], order: usize) -> MatrixResult<Polynomial> {
    fit_polynomial_steps(points, order).map(|steps| steps.polynomial)
}

/// A real polynomial with its coefficients stored highest power first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Construct a polynomial from coefficients ordered highest power first.
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    /// Return the degree, counting leading zero coefficients.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Return the coefficients, highest power first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Evaluate the polynomial at `x` with Horner's rule.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .fold(0.0, |acc, &coefficient| acc * x + coefficient)
    }
}

impl From<Polynomial> for Vec<f64> {
    fn from(polynomial: Polynomial) -> Self {
        polynomial.coefficients
    }
}

/// Prints as `a x^n + ... + b x + c` with six significant digits per coefficient unless
/// the formatter asks for another precision.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(6);
        let degree = self.degree();

        if self.coefficients.is_empty() {
            return f.write_str("0");
        }

        for (i, &coefficient) in self.coefficients.iter().enumerate() {
            if i == 0 {
                f.write_str(&format_general(coefficient, precision))?;
            } else {
                let sign = if coefficient.is_sign_negative() && coefficient != 0.0 {
                    " - "
                } else {
                    " + "
                };
                f.write_str(sign)?;
                f.write_str(&format_general(coefficient.abs(), precision))?;
            }

            match degree - i {
                0 => {}
                1 => f.write_str("x")?,
                power => write!(f, "x^{power}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use matrixkit::{MatrixErrorKind, Shape};
    use rstest::rstest;

    use super::*;

    #[test]
    fn vandermonde_layout() {
        let v = vandermonde(&[2.0, -1.0, 0.0], 3).unwrap();
        assert_eq!(v.shape(), Shape::new(3, 4));
        assert_eq!(v.row(1), &[8.0, 4.0, 2.0, 1.0]);
        assert_eq!(v.row(2), &[-1.0, 1.0, -1.0, 1.0]);
        assert_eq!(v.row(3), &[0.0, 0.0, 0.0, 1.0]);

        let v = vandermonde(&[5.0], 0).unwrap();
        assert_eq!(v, Matrix::new(1.0, 1, 1));
    }

    #[test]
    fn quadratic_fit() {
        let points = [(0.0, 1.0), (1.0, 2.0), (2.0, 5.0), (3.0, 10.0)];
        let steps = fit_polynomial_steps(&points, 2).unwrap();

        assert_eq!(steps.vandermonde.shape(), Shape::new(4, 3));
        assert_eq!(steps.transposed, steps.vandermonde.transposed());
        assert_eq!(
            steps.normal,
            Matrix::from_rows([[98.0, 36.0, 14.0], [36.0, 14.0, 6.0], [14.0, 6.0, 4.0]])
                .unwrap()
        );

        let p = steps.polynomial;
        assert_eq!(p.degree(), 2);
        for (&got, expected) in p.coefficients().iter().zip([1.0, 0.0, 1.0]) {
            assert_abs_diff_eq!(got, expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn linear_fit_of_noisy_data() {
        // Four points off any single line; the least-squares line is y = 1.8x + 1.3.
        let points = [(0.0, 1.5), (1.0, 2.5), (2.0, 5.5), (3.0, 6.5)];
        let p = fit_polynomial(&points, 1).unwrap();
        assert_abs_diff_eq!(p.coefficients()[0], 1.8, epsilon = 1e-9);
        assert_abs_diff_eq!(p.coefficients()[1], 1.3, epsilon = 1e-9);
    }

    #[test]
    fn constant_fit_is_mean() {
        let points = [(0.0, 1.0), (5.0, 2.0), (9.0, 6.0)];
        let p = fit_polynomial(&points, 0).unwrap();
        assert_eq!(p.degree(), 0);
        assert_abs_diff_eq!(p.coefficients()[0], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn no_points_is_singular() {
        assert_eq!(fit_polynomial(&[], 2).unwrap_err(), MatrixError::Singular);
    }

    #[test]
    fn repeated_x_is_singular() {
        let points = [(1.0, 1.0), (1.0, 2.0), (1.0, 3.0)];
        assert_eq!(fit_polynomial(&points, 2).unwrap_err(), MatrixError::Singular);
    }

    #[test]
    fn fewer_points_than_coefficients_is_singular() {
        let points = [(0.0, 1.0), (1.0, 2.0)];
        assert_eq!(fit_polynomial(&points, 2).unwrap_err(), MatrixError::Singular);
        assert_eq!(fit_polynomial(&points, 1).unwrap().degree(), 1);
    }

    #[rstest]
    #[case(i32::MAX as usize)]
    #[case(usize::MAX)]
    fn huge_orders_are_rejected(#[case] order: usize) {
        let points = [(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)];
        let err = fit_polynomial(&points, order).unwrap_err();
        assert_eq!(err, MatrixError::OrderTooLarge { order });
        assert_eq!(err.kind(), MatrixErrorKind::OutOfRange);

        let err = vandermonde(&[1.0], order).unwrap_err();
        assert_eq!(err, MatrixError::OrderTooLarge { order });
    }

    #[test]
    fn horner() {
        let p = Polynomial::new(vec![2.0, -3.0, 0.5]);
        assert_eq!(p.evaluate(0.0), 0.5);
        assert_eq!(p.evaluate(2.0), 2.5);
        assert_eq!(Polynomial::default().evaluate(3.0), 0.0);
        assert_eq!(Vec::from(p), vec![2.0, -3.0, 0.5]);
    }

    #[rstest]
    #[case(vec![1.0, 0.0, 1.0], "1x^2 + 0x + 1")]
    #[case(vec![2.0, -3.0, 0.5], "2x^2 - 3x + 0.5")]
    #[case(vec![-1.5, 4.0], "-1.5x + 4")]
    #[case(vec![1.0, -0.0, 2.0, 1.0 / 3.0], "1x^3 + 0x^2 + 2x + 0.333333")]
    #[case(vec![7.0], "7")]
    #[case(vec![], "0")]
    fn display(#[case] coefficients: Vec<f64>, #[case] expected: &str) {
        assert_eq!(Polynomial::new(coefficients).to_string(), expected);
    }

    #[test]
    fn display_precision() {
        let p = Polynomial::new(vec![1.0 / 3.0, 2.0]);
        assert_eq!(format!("{p:.3}"), "0.333x + 2");
    }
}
