/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use std::{
    fmt,
    ops::{DivAssign, Index, IndexMut, MulAssign},
};

use crate::{
    cells::{Cells, CellsMut},
    error::{MatrixError, MatrixResult, Shape},
    views::{MatrixView, MutMatrixView, WindowBase},
};

/// An owned, dense matrix of `f64` stored in row-major order.
///
/// The shape is fixed at construction; it can only change by replacing the whole value.
/// Coordinates are 1-based: `(1, 1)` is the top-left cell and `(nrows, ncols)` the
/// bottom-right one.
///
/// ```
/// use matrixkit::{Cells, Matrix};
///
/// let m = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// assert_eq!(m[(2, 1)], 3.0);
/// assert_eq!(m.transposed()[(1, 2)], 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix {
    data: Box<[f64]>,
    nrows: usize,
    ncols: usize,
}

/// Return the number of cells in a `nrows x ncols` matrix.
///
/// # Panics
///
/// Panics if the count overflows `usize`.
#[allow(clippy::panic)]
fn cell_count(nrows: usize, ncols: usize) -> usize {
    match nrows.checked_mul(ncols) {
        Some(len) => len,
        None => panic!("a {nrows}x{ncols} matrix has more cells than fit in memory"),
    }
}

impl Matrix {
    /// Construct the 0x0 matrix.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Construct a `nrows x ncols` matrix with every cell equal to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `nrows * ncols` overflows `usize`.
    pub fn new(value: f64, nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![value; cell_count(nrows, ncols)].into(),
            nrows,
            ncols,
        }
    }

    /// Construct a `nrows x ncols` matrix of zeros.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::new(0.0, nrows, ncols)
    }

    /// Construct the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |r, c| if r == c { 1.0 } else { 0.0 })
    }

    /// Construct a matrix by evaluating `f(row, col)` for every 1-based cell in memory
    /// order.
    ///
    /// # Panics
    ///
    /// Panics if `nrows * ncols` overflows `usize`.
    pub fn from_fn<F>(nrows: usize, ncols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut data = Vec::with_capacity(cell_count(nrows, ncols));
        for r in 1..=nrows {
            for c in 1..=ncols {
                data.push(f(r, c));
            }
        }
        Self {
            data: data.into(),
            nrows,
            ncols,
        }
    }

    /// Try to construct a matrix over a row-major buffer.
    ///
    /// The buffer length must be exactly `nrows * ncols`.
    pub fn try_from<T>(data: T, nrows: usize, ncols: usize) -> MatrixResult<Self>
    where
        T: Into<Box<[f64]>>,
    {
        let data = data.into();
        if nrows.checked_mul(ncols) != Some(data.len()) {
            return Err(MatrixError::BufferLength {
                len: data.len(),
                shape: Shape::new(nrows, ncols),
            });
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Wrap a buffer whose length is already known to be `nrows * ncols`.
    pub(crate) fn from_row_major(data: Vec<f64>, nrows: usize, ncols: usize) -> Self {
        debug_assert_eq!(data.len(), nrows * ncols);
        Self {
            data: data.into(),
            nrows,
            ncols,
        }
    }

    /// Construct a matrix from a list of rows.
    ///
    /// Every row must have the same length as the first; no rows yields the empty matrix.
    pub fn from_rows<I, R>(rows: I) -> MatrixResult<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[f64]>,
    {
        let mut data = Vec::new();
        let mut nrows = 0;
        let mut ncols = None;
        for row in rows {
            let row = row.as_ref();
            nrows += 1;
            match ncols {
                None => ncols = Some(row.len()),
                Some(expected) if expected != row.len() => {
                    return Err(MatrixError::RaggedRow {
                        row: nrows,
                        expected,
                        found: row.len(),
                    });
                }
                Some(_) => {}
            }
            data.extend_from_slice(row);
        }
        Self::try_from(data, nrows, ncols.unwrap_or(0))
    }

    /// Construct an `n x 1` column vector.
    pub fn column<T>(values: T) -> Self
    where
        T: Into<Box<[f64]>>,
    {
        let data = values.into();
        let nrows = data.len();
        Self {
            data,
            nrows,
            ncols: 1,
        }
    }

    /// Construct a `1 x n` row vector.
    pub fn row_vector<T>(values: T) -> Self
    where
        T: Into<Box<[f64]>>,
    {
        let data = values.into();
        let ncols = data.len();
        Self {
            data,
            nrows: 1,
            ncols,
        }
    }

    /// Return the number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Return the number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Return the cells in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Return the cells in row-major order, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume the matrix, returning the row-major buffer.
    pub fn into_inner(self) -> Box<[f64]> {
        self.data
    }

    /// Return row `row` (1-based).
    ///
    /// # Panics
    ///
    /// Panics if `row == 0` or `row > self.nrows()`.
    pub fn row(&self, row: usize) -> &[f64] {
        assert!(
            row >= 1 && row <= self.nrows,
            "tried to access row {row} of a matrix with {} rows",
            self.nrows
        );
        let start = (row - 1) * self.ncols;
        &self.data[start..start + self.ncols]
    }

    /// Return row `row` (1-based) mutably.
    ///
    /// # Panics
    ///
    /// Panics if `row == 0` or `row > self.nrows()`.
    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        assert!(
            row >= 1 && row <= self.nrows,
            "tried to access row {row} of a matrix with {} rows",
            self.nrows
        );
        let start = (row - 1) * self.ncols;
        &mut self.data[start..start + self.ncols]
    }

    /// Return a read-only view over the whole matrix.
    pub fn as_view(&self) -> MatrixView<'_> {
        WindowBase::from_parts(&*self.data, self.nrows, self.ncols, self.ncols)
    }

    /// Return a mutable view over the whole matrix.
    pub fn as_mut_view(&mut self) -> MutMatrixView<'_> {
        let (nrows, ncols) = (self.nrows, self.ncols);
        WindowBase::from_parts(&mut *self.data, nrows, ncols, ncols)
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row >= 1 && row <= self.nrows,
            "row {row} is out of bounds (max: {})",
            self.nrows
        );
        assert!(
            col >= 1 && col <= self.ncols,
            "col {col} is out of bounds (max: {})",
            self.ncols
        );
        (row - 1) * self.ncols + (col - 1)
    }
}

impl Cells for Matrix {
    fn nrows(&self) -> usize {
        self.nrows
    }

    fn ncols(&self) -> usize {
        self.ncols
    }

    fn row(&self, row: usize) -> &[f64] {
        Matrix::row(self, row)
    }

    fn as_view(&self) -> MatrixView<'_> {
        Matrix::as_view(self)
    }
}

impl CellsMut for Matrix {
    fn row_mut(&mut self, row: usize) -> &mut [f64] {
        Matrix::row_mut(self, row)
    }

    fn as_mut_view(&mut self) -> MutMatrixView<'_> {
        Matrix::as_mut_view(self)
    }
}

impl From<MatrixView<'_>> for Matrix {
    fn from(view: MatrixView<'_>) -> Self {
        view.to_matrix()
    }
}

/// Return the cell at 1-based `(row, col)`.
///
/// # Panics
///
/// Panics if `row` or `col` is zero or past the last row or column.
impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[self.offset(row, col)]
    }
}

/// Return the cell at 1-based `(row, col)` mutably.
///
/// # Panics
///
/// Panics if `row` or `col` is zero or past the last row or column.
impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, rhs: f64) {
        self.data.iter_mut().for_each(|x| *x *= rhs);
    }
}

impl DivAssign<f64> for Matrix {
    fn div_assign(&mut self, rhs: f64) {
        self.data.iter_mut().for_each(|x| *x /= rhs);
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::text::write_cells(f, self)
    }
}

///////////
// Tests //
///////////
