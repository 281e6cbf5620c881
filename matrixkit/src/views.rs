/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

//! Rectangular windows aliasing the storage of a [`Matrix`](crate::Matrix).
//!
//! A window is a row-major strided view: it covers `nrows` rows of `ncols` cells, and
//! consecutive rows are `cstride` cells apart in the underlying buffer (the width of the
//! matrix the window was taken from).
//!
//! ```text
//!             |<------ cstride ------>|
//!                  |<-- ncols -->|
//!                  +-------------+
//!   row r1 ->  a0  | a1  a2  a3  |  a4
//!              b0  | b1  b2  b3  |  b4
//!   row r2 ->  c0  | c1  c2  c3  |  c4
//!                  +-------------+
//!                    ^         ^
//!                    c1        c2
//! ```
//!
//! Taking a window of a window re-expresses the bounds against the underlying matrix, so
//! views never nest.

use std::{
    fmt,
    ops::{DivAssign, Index, IndexMut, MulAssign},
};

use crate::{
    cells::{Cells, CellsMut},
    error::{MatrixError, MatrixResult, Shape},
};

/// Storage behind a window: a shared or an exclusive slice of cells.
///
/// This lets [`WindowBase`] share one implementation between its read-only and mutable
/// flavours while only enabling mutation when the data is mutable.
pub trait DenseData {
    /// Return the underlying cells.
    fn as_slice(&self) -> &[f64];
}

/// A mutable companion to [`DenseData`].
pub trait MutDenseData: DenseData {
    /// Return the underlying cells mutably. Must span the same memory as `as_slice`.
    fn as_mut_slice(&mut self) -> &mut [f64];
}

impl DenseData for &[f64] {
    fn as_slice(&self) -> &[f64] {
        self
    }
}

impl DenseData for &mut [f64] {
    fn as_slice(&self) -> &[f64] {
        self
    }
}

impl MutDenseData for &mut [f64] {
    fn as_mut_slice(&mut self) -> &mut [f64] {
        self
    }
}

/// Return the linear length of the slice underlying a window with the given parameters.
pub fn linear_length(nrows: usize, ncols: usize, cstride: usize) -> usize {
    (nrows.max(1) - 1) * cstride + nrows.min(1) * ncols
}

/// Validate the 1-based inclusive window `(r1, c1)..=(r2, c2)` against `shape`.
pub(crate) fn check_window(
    shape: Shape,
    r1: usize,
    c1: usize,
    r2: usize,
    c2: usize,
) -> MatrixResult<()> {
    let rows_ok = 1 <= r1 && r1 <= r2 && r2 <= shape.nrows;
    let cols_ok = 1 <= c1 && c1 <= c2 && c2 <= shape.ncols;
    if rows_ok && cols_ok {
        Ok(())
    } else {
        Err(MatrixError::WindowOutOfRange {
            r1,
            c1,
            r2,
            c2,
            shape,
        })
    }
}

/// A bounded rectangular window onto a matrix, sharing its storage.
///
/// All coordinates are 1-based: local cell `(1, 1)` is the top-left cell of the window.
/// Use the aliases [`MatrixView`] and [`MutMatrixView`] rather than naming this type
/// directly.
#[derive(Debug, Clone, Copy)]
pub struct WindowBase<T>
where
    T: DenseData,
{
    data: T,
    nrows: usize,
    ncols: usize,
    // The distance between the starts of consecutive rows. Always `>= ncols`.
    cstride: usize,
}

/// A read-only window. Cheap to copy; any number may alias the same matrix.
pub type MatrixView<'a> = WindowBase<&'a [f64]>;

/// A writable window. Writes go straight through to the source matrix, which cannot be
/// accessed any other way while the window is alive.
pub type MutMatrixView<'a> = WindowBase<&'a mut [f64]>;

impl<T> WindowBase<T>
where
    T: DenseData,
{
    /// Assemble a window from audited parts.
    ///
    /// Callers guarantee `data.len() == linear_length(nrows, ncols, cstride)` and
    /// `cstride >= ncols`.
    pub(crate) fn from_parts(data: T, nrows: usize, ncols: usize, cstride: usize) -> Self {
        debug_assert!(cstride >= ncols);
        debug_assert_eq!(
            data.as_slice().len(),
            linear_length(nrows, ncols, cstride)
        );
        Self {
            data,
            nrows,
            ncols,
            cstride,
        }
    }

    /// Return the number of rows in the window.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Return the number of columns in the window.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Return the count of cells between the start of each row in the source.
    pub fn cstride(&self) -> usize {
        self.cstride
    }

    fn start_of(&self, row: usize) -> usize {
        (row - 1) * self.cstride
    }

    /// Return row `row` (1-based) if it exists.
    pub fn get_row(&self, row: usize) -> Option<&[f64]> {
        if row >= 1 && row <= self.nrows {
            let start = self.start_of(row);
            Some(&self.data.as_slice()[start..start + self.ncols])
        } else {
            None
        }
    }

    /// Return row `row` (1-based).
    ///
    /// # Panics
    ///
    /// Panics if `row == 0` or `row > self.nrows()`.
    pub fn row(&self, row: usize) -> &[f64] {
        assert!(
            row >= 1 && row <= self.nrows,
            "tried to access row {row} of a window with {} rows",
            self.nrows
        );
        let start = self.start_of(row);
        &self.data.as_slice()[start..start + self.ncols]
    }

    /// Return row `row` (1-based) as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `row == 0` or `row > self.nrows()`.
    pub fn row_mut(&mut self, row: usize) -> &mut [f64]
    where
        T: MutDenseData,
    {
        assert!(
            row >= 1 && row <= self.nrows,
            "tried to access row {row} of a window with {} rows",
            self.nrows
        );
        let start = self.start_of(row);
        let ncols = self.ncols;
        &mut self.data.as_mut_slice()[start..start + ncols]
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
        self.start_of(row) + col - 1
    }

    /// Return a read-only window over the same cells.
    pub fn as_view(&self) -> MatrixView<'_> {
        WindowBase {
            data: self.data.as_slice(),
            nrows: self.nrows,
            ncols: self.ncols,
            cstride: self.cstride,
        }
    }
}

impl<'a> MatrixView<'a> {
    /// Narrow the window to local rows `r1..=r2` and columns `c1..=c2`.
    ///
    /// The returned view borrows the source matrix directly for `'a`.
    pub fn window(self, r1: usize, c1: usize, r2: usize, c2: usize) -> MatrixResult<Self> {
        check_window(Shape::new(self.nrows, self.ncols), r1, c1, r2, c2)?;
        let (nrows, ncols) = (r2 - r1 + 1, c2 - c1 + 1);
        let start = (r1 - 1) * self.cstride + (c1 - 1);
        let len = linear_length(nrows, ncols, self.cstride);
        let data = self.data;
        Ok(Self::from_parts(
            &data[start..start + len],
            nrows,
            ncols,
            self.cstride,
        ))
    }

    /// Return row `row` (1-based) borrowed for the full lifetime of the source.
    pub fn into_row(self, row: usize) -> Option<&'a [f64]> {
        if row >= 1 && row <= self.nrows {
            let start = (row - 1) * self.cstride;
            let data = self.data;
            Some(&data[start..start + self.ncols])
        } else {
            None
        }
    }
}

impl<'a> MutMatrixView<'a> {
    /// Narrow the window to local rows `r1..=r2` and columns `c1..=c2`, consuming `self`.
    pub fn window_mut(self, r1: usize, c1: usize, r2: usize, c2: usize) -> MatrixResult<Self> {
        check_window(Shape::new(self.nrows, self.ncols), r1, c1, r2, c2)?;
        let (nrows, ncols) = (r2 - r1 + 1, c2 - c1 + 1);
        let start = (r1 - 1) * self.cstride + (c1 - 1);
        let len = linear_length(nrows, ncols, self.cstride);
        let cstride = self.cstride;
        let data = self.data;
        Ok(Self::from_parts(
            &mut data[start..start + len],
            nrows,
            ncols,
            cstride,
        ))
    }

    /// Return a shorter-lived mutable window over the same cells.
    pub fn reborrow_mut(&mut self) -> MutMatrixView<'_> {
        WindowBase {
            data: &mut *self.data,
            nrows: self.nrows,
            ncols: self.ncols,
            cstride: self.cstride,
        }
    }
}

impl<T> Cells for WindowBase<T>
where
    T: DenseData,
{
    fn nrows(&self) -> usize {
        self.nrows
    }

    fn ncols(&self) -> usize {
        self.ncols
    }

    fn row(&self, row: usize) -> &[f64] {
        WindowBase::row(self, row)
    }

    fn as_view(&self) -> MatrixView<'_> {
        WindowBase::as_view(self)
    }
}

impl CellsMut for MutMatrixView<'_> {
    fn row_mut(&mut self, row: usize) -> &mut [f64] {
        WindowBase::row_mut(self, row)
    }

    fn as_mut_view(&mut self) -> MutMatrixView<'_> {
        self.reborrow_mut()
    }
}

/// Return the cell at 1-based `(row, col)` of the window.
///
/// # Panics
///
/// Panics if the cell lies outside the window.
impl<T> Index<(usize, usize)> for WindowBase<T>
where
    T: DenseData,
{
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        let offset = self.offset(row, col);
        &self.data.as_slice()[offset]
    }
}

/// Return the cell at 1-based `(row, col)` of the window mutably.
///
/// # Panics
///
/// Panics if the cell lies outside the window.
impl<T> IndexMut<(usize, usize)> for WindowBase<T>
where
    T: MutDenseData,
{
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(row, col);
        &mut self.data.as_mut_slice()[offset]
    }
}

impl MulAssign<f64> for MutMatrixView<'_> {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale(rhs);
    }
}

impl DivAssign<f64> for MutMatrixView<'_> {
    fn div_assign(&mut self, rhs: f64) {
        self.divide(rhs);
    }
}

impl<T> fmt::Display for WindowBase<T>
where
    T: DenseData,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::text::write_cells(f, self)
    }
}
