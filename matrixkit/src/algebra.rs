/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

//! Element-wise arithmetic, products, transposition and concatenation.
//!
//! Every function here accepts any [`Cells`] implementor, so matrices and views mix
//! freely as operands. Results are always freshly allocated [`Matrix`] values.

use std::ops::{Div, Mul, Neg};

use crate::{
    cells::{Cells, CellsMut},
    error::{MatrixError, MatrixResult},
    views::MatrixView,
    Matrix,
};

fn check_same_shape<A, B>(operation: &'static str, a: &A, b: &B) -> MatrixResult<()>
where
    A: Cells + ?Sized,
    B: Cells + ?Sized,
{
    if a.is_same_shape(b) {
        Ok(())
    } else {
        Err(MatrixError::shape_mismatch(operation, a.shape(), b.shape()))
    }
}

fn map<A, F>(a: &A, mut f: F) -> Matrix
where
    A: Cells + ?Sized,
    F: FnMut(f64) -> f64,
{
    let mut data = Vec::with_capacity(a.shape().len());
    for row in a.rows() {
        data.extend(row.iter().map(|&x| f(x)));
    }
    Matrix::from_row_major(data, a.nrows(), a.ncols())
}

fn zip<A, B, F>(operation: &'static str, a: &A, b: &B, mut f: F) -> MatrixResult<Matrix>
where
    A: Cells + ?Sized,
    B: Cells + ?Sized,
    F: FnMut(f64, f64) -> f64,
{
    check_same_shape(operation, a, b)?;
    let mut data = Vec::with_capacity(a.shape().len());
    for (x, y) in a.rows().zip(b.rows()) {
        data.extend(x.iter().zip(y.iter()).map(|(&x, &y)| f(x, y)));
    }
    Ok(Matrix::from_row_major(data, a.nrows(), a.ncols()))
}

/// Return `k * a`.
pub fn scale<A>(a: &A, k: f64) -> Matrix
where
    A: Cells + ?Sized,
{
    map(a, |x| x * k)
}

/// Return `a / k`. Division by zero follows IEEE semantics.
pub fn divide<A>(a: &A, k: f64) -> Matrix
where
    A: Cells + ?Sized,
{
    map(a, |x| x / k)
}

/// Return the element-wise sum `a + b`.
pub fn add<A, B>(a: &A, b: &B) -> MatrixResult<Matrix>
where
    A: Cells + ?Sized,
    B: Cells + ?Sized,
{
    zip("addition", a, b, |x, y| x + y)
}

/// Return the element-wise difference `a - b`.
pub fn sub<A, B>(a: &A, b: &B) -> MatrixResult<Matrix>
where
    A: Cells + ?Sized,
    B: Cells + ?Sized,
{
    zip("subtraction", a, b, |x, y| x - y)
}

/// Return the matrix product `a * b`.
///
/// Requires `a.ncols() == b.nrows()`; the result is `a.nrows() x b.ncols()`.
pub fn matmul<A, B>(a: &A, b: &B) -> MatrixResult<Matrix>
where
    A: Cells + ?Sized,
    B: Cells + ?Sized,
{
    let (m, k, n) = (a.nrows(), a.ncols(), b.ncols());
    if k != b.nrows() {
        return Err(MatrixError::shape_mismatch(
            "multiplication",
            a.shape(),
            b.shape(),
        ));
    }

    let mut c = Matrix::zeros(m, n);
    for i in 1..=m {
        let lhs = a.row(i);
        let out = c.row_mut(i);
        for (j, dst) in out.iter_mut().enumerate() {
            let mut temp = 0.0;
            for (l, &x) in lhs.iter().enumerate() {
                temp += x * b.row(l + 1)[j];
            }
            *dst = temp;
        }
    }
    Ok(c)
}

/// Return the transpose of `a`.
pub fn transpose<A>(a: &A) -> Matrix
where
    A: Cells + ?Sized,
{
    Matrix::from_fn(a.ncols(), a.nrows(), |r, c| a.row(c)[r - 1])
}

/// Stack `b` below `a`. Widths must match.
pub fn vstack<A, B>(a: &A, b: &B) -> MatrixResult<Matrix>
where
    A: Cells + ?Sized,
    B: Cells + ?Sized,
{
    if a.ncols() != b.ncols() {
        return Err(MatrixError::shape_mismatch(
            "vertical concatenation",
            a.shape(),
            b.shape(),
        ));
    }

    let mut data = Vec::with_capacity(a.shape().len() + b.shape().len());
    a.rows().chain(b.rows()).for_each(|row| data.extend_from_slice(row));
    Ok(Matrix::from_row_major(data, a.nrows() + b.nrows(), a.ncols()))
}

/// Place `b` to the right of `a`. Heights must match.
pub fn hstack<A, B>(a: &A, b: &B) -> MatrixResult<Matrix>
where
    A: Cells + ?Sized,
    B: Cells + ?Sized,
{
    if a.nrows() != b.nrows() {
        return Err(MatrixError::shape_mismatch(
            "horizontal concatenation",
            a.shape(),
            b.shape(),
        ));
    }

    let mut data = Vec::with_capacity(a.shape().len() + b.shape().len());
    for (left, right) in a.rows().zip(b.rows()) {
        data.extend_from_slice(left);
        data.extend_from_slice(right);
    }
    Ok(Matrix::from_row_major(data, a.nrows(), a.ncols() + b.ncols()))
}

/// Apply `f(dst, src)` to every pair of cells, writing the result into `dst`.
pub(crate) fn zip_assign<T, C, F>(
    dst: &mut T,
    src: &C,
    operation: &'static str,
    mut f: F,
) -> MatrixResult<()>
where
    T: CellsMut + ?Sized,
    C: Cells + ?Sized,
    F: FnMut(f64, f64) -> f64,
{
    check_same_shape(operation, &*dst, src)?;
    for (r, source) in src.rows().enumerate() {
        dst.row_mut(r + 1)
            .iter_mut()
            .zip(source.iter())
            .for_each(|(d, &s)| *d = f(*d, s));
    }
    Ok(())
}

/// Apply `f` to every cell in place.
pub(crate) fn map_assign<T, F>(dst: &mut T, mut f: F)
where
    T: CellsMut + ?Sized,
    F: FnMut(f64) -> f64,
{
    for r in 1..=dst.nrows() {
        dst.row_mut(r).iter_mut().for_each(|x| *x = f(*x));
    }
}

///////////////
// Operators //
///////////////

macro_rules! scalar_operators {
    ($($type:ty),* $(,)?) => {
        $(
            impl Mul<f64> for $type {
                type Output = Matrix;
                fn mul(self, rhs: f64) -> Matrix {
                    scale(&self.as_view(), rhs)
                }
            }

            impl Mul<$type> for f64 {
                type Output = Matrix;
                fn mul(self, rhs: $type) -> Matrix {
                    scale(&rhs.as_view(), self)
                }
            }

            impl Div<f64> for $type {
                type Output = Matrix;
                fn div(self, rhs: f64) -> Matrix {
                    divide(&self.as_view(), rhs)
                }
            }

            impl Neg for $type {
                type Output = Matrix;
                fn neg(self) -> Matrix {
                    scale(&self.as_view(), -1.0)
                }
            }
        )*
    };
}

scalar_operators!(&Matrix, MatrixView<'_>);

impl Mul<f64> for Matrix {
    type Output = Matrix;
    fn mul(mut self, rhs: f64) -> Matrix {
        self *= rhs;
        self
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;
    fn mul(self, mut rhs: Matrix) -> Matrix {
        rhs *= self;
        rhs
    }
}

impl Div<f64> for Matrix {
    type Output = Matrix;
    fn div(mut self, rhs: f64) -> Matrix {
        self /= rhs;
        self
    }
}

impl Neg for Matrix {
    type Output = Matrix;
    fn neg(mut self) -> Matrix {
        self *= -1.0;
        self
    }
}

///////////
// Tests //
///////////
