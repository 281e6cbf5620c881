/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

//! Square-matrix algorithms built on [`matrixkit`].
//!
//! * [`determinant`]: recursive cofactor expansion along the first row.
//! * [`inverse`]: Gauss-Jordan elimination without pivoting.
//! * [`polyfit`]: least-squares polynomial fitting through the normal equations.

#![cfg_attr(
    not(test),
    warn(clippy::panic, clippy::unwrap_used, clippy::expect_used)
)]

mod determinant;
mod inverse;
pub mod polyfit;

pub use determinant::determinant;
pub use inverse::inverse;
pub use polyfit::{fit_polynomial, fit_polynomial_steps, vandermonde, FitSteps, Polynomial};

use matrixkit::{Cells, Matrix, MatrixResult};

/// Method-call access to the square-matrix algorithms for every [`Cells`] implementor.
///
/// ```
/// use matrixkit::Matrix;
/// use matrixkit_linalg::SquareCells;
///
/// let a = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// assert_eq!(a.determinant().unwrap(), -2.0);
/// ```
pub trait SquareCells: Cells {
    /// See [`determinant`].
    fn determinant(&self) -> MatrixResult<f64> {
        determinant(self)
    }

    /// See [`inverse`].
    fn inverse(&self) -> MatrixResult<Matrix> {
        inverse(self)
    }
}

impl<C> SquareCells for C where C: Cells + ?Sized {}
