/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

//! Read and write capabilities shared by [`Matrix`] and its views.
//!
//! [`Cells`] is the "readable rectangle": anything with a shape and row access can be an
//! operand of the algebra. [`CellsMut`] adds write-back and is implemented only by types
//! that may legitimately mutate cells: an owned [`Matrix`] and a [`MutMatrixView`].

use crate::{
    address::Address,
    algebra,
    error::{MatrixError, MatrixResult, Shape},
    views::{MatrixView, MutMatrixView},
    Matrix,
};

/// A readable rectangle of `f64` cells with 1-based coordinates.
pub trait Cells {
    /// Return the number of rows.
    fn nrows(&self) -> usize;

    /// Return the number of columns.
    fn ncols(&self) -> usize;

    /// Return row `row` (1-based) as a slice of `ncols()` cells.
    ///
    /// # Panics
    ///
    /// Panics if `row == 0` or `row > self.nrows()`.
    fn row(&self, row: usize) -> &[f64];

    /// Return a read-only window covering every cell.
    fn as_view(&self) -> MatrixView<'_>;

    /// Alias for [`Cells::ncols`].
    fn width(&self) -> usize {
        self.ncols()
    }

    /// Alias for [`Cells::nrows`].
    fn height(&self) -> usize {
        self.nrows()
    }

    fn shape(&self) -> Shape {
        Shape::new(self.nrows(), self.ncols())
    }

    fn is_square(&self) -> bool {
        self.shape().is_square()
    }

    /// Return `true` if `other` has the same number of rows and columns.
    fn is_same_shape<C>(&self, other: &C) -> bool
    where
        C: Cells + ?Sized,
    {
        self.shape() == other.shape()
    }

    /// Read the cell at `(row, col)`.
    fn get(&self, row: usize, col: usize) -> MatrixResult<f64> {
        let shape = self.shape();
        if shape.contains(row, col) {
            Ok(self.row(row)[col - 1])
        } else {
            Err(MatrixError::OutOfRange { row, col, shape })
        }
    }

    /// Iterate over the rows from top to bottom.
    fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> {
        (0..self.nrows()).map(move |r| self.row(r + 1))
    }

    /// Copy the cells into a new, independent [`Matrix`].
    fn to_matrix(&self) -> Matrix {
        Matrix::from_fn(self.nrows(), self.ncols(), |r, c| self.row(r)[c - 1])
    }

    /// Return a read-only window over rows `r1..=r2` and columns `c1..=c2`.
    fn view(&self, r1: usize, c1: usize, r2: usize, c2: usize) -> MatrixResult<MatrixView<'_>> {
        self.as_view().window(r1, c1, r2, c2)
    }

    /// Return the row or column named by `address` (`"R3"`, `"C1"`, ...) as a view.
    fn address(&self, address: &str) -> MatrixResult<MatrixView<'_>> {
        self.select(address.parse()?)
    }

    /// Return the row or column named by `address` as a view.
    fn select(&self, address: Address) -> MatrixResult<MatrixView<'_>> {
        let (r1, c1, r2, c2) = address.bounds(self.shape())?;
        self.view(r1, c1, r2, c2)
    }

    /// Return the transpose as a new matrix.
    fn transposed(&self) -> Matrix {
        algebra::transpose(self)
    }

    /// Return a copy with every cell multiplied by `k`.
    fn scaled(&self, k: f64) -> Matrix {
        algebra::scale(self, k)
    }

    /// Return a copy with every cell divided by `k`.
    ///
    /// Division by zero follows IEEE semantics.
    fn divided(&self, k: f64) -> Matrix {
        algebra::divide(self, k)
    }

    /// Return a copy with every cell negated.
    fn negated(&self) -> Matrix {
        algebra::scale(self, -1.0)
    }

    /// Element-wise sum. Shapes must match.
    fn try_add<C>(&self, other: &C) -> MatrixResult<Matrix>
    where
        C: Cells + ?Sized,
    {
        algebra::add(self, other)
    }

    /// Element-wise difference. Shapes must match.
    fn try_sub<C>(&self, other: &C) -> MatrixResult<Matrix>
    where
        C: Cells + ?Sized,
    {
        algebra::sub(self, other)
    }

    /// Matrix product `self * other`. Requires `self.ncols() == other.nrows()`.
    fn matmul<C>(&self, other: &C) -> MatrixResult<Matrix>
    where
        C: Cells + ?Sized,
    {
        algebra::matmul(self, other)
    }

    /// Stack `other` below `self`. Widths must match.
    fn vstack<C>(&self, other: &C) -> MatrixResult<Matrix>
    where
        C: Cells + ?Sized,
    {
        algebra::vstack(self, other)
    }

    /// Place `other` to the right of `self`. Heights must match.
    fn hstack<C>(&self, other: &C) -> MatrixResult<Matrix>
    where
        C: Cells + ?Sized,
    {
        algebra::hstack(self, other)
    }
}

/// A writable rectangle of cells.
///
/// Every provided method validates its arguments before touching any cell.
pub trait CellsMut: Cells {
    /// Return row `row` (1-based) as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `row == 0` or `row > self.nrows()`.
    fn row_mut(&mut self, row: usize) -> &mut [f64];

    /// Return a mutable window covering every cell.
    fn as_mut_view(&mut self) -> MutMatrixView<'_>;

    /// Write `value` into the cell at `(row, col)`.
    fn set(&mut self, row: usize, col: usize, value: f64) -> MatrixResult<()> {
        let shape = self.shape();
        if shape.contains(row, col) {
            self.row_mut(row)[col - 1] = value;
            Ok(())
        } else {
            Err(MatrixError::OutOfRange { row, col, shape })
        }
    }

    /// Return a mutable window over rows `r1..=r2` and columns `c1..=c2`.
    fn view_mut(
        &mut self,
        r1: usize,
        c1: usize,
        r2: usize,
        c2: usize,
    ) -> MatrixResult<MutMatrixView<'_>> {
        self.as_mut_view().window_mut(r1, c1, r2, c2)
    }

    /// Return the row or column named by `address` as a mutable view.
    fn address_mut(&mut self, address: &str) -> MatrixResult<MutMatrixView<'_>> {
        self.select_mut(address.parse()?)
    }

    /// Return the row or column named by `address` as a mutable view.
    fn select_mut(&mut self, address: Address) -> MatrixResult<MutMatrixView<'_>> {
        let (r1, c1, r2, c2) = address.bounds(self.shape())?;
        self.view_mut(r1, c1, r2, c2)
    }

    /// Overlay `sub` so that its `(1, 1)` lands on `(row, col)`.
    ///
    /// Fails without writing anything if any target cell lies outside `self`.
    fn set_at<C>(&mut self, row: usize, col: usize, sub: &C) -> MatrixResult<()>
    where
        C: Cells + ?Sized,
    {
        let shape = self.shape();
        let extent = sub.shape();
        if extent.is_empty() {
            return Ok(());
        }

        if !shape.contains(row, col) {
            return Err(MatrixError::OutOfRange { row, col, shape });
        }
        let (last_row, last_col) = match (
            row.checked_add(extent.nrows - 1),
            col.checked_add(extent.ncols - 1),
        ) {
            (Some(last_row), Some(last_col)) => (last_row, last_col),
            _ => return Err(MatrixError::OutOfRange { row, col, shape }),
        };
        if !shape.contains(last_row, last_col) {
            return Err(MatrixError::OutOfRange {
                row: last_row,
                col: last_col,
                shape,
            });
        }

        for (offset, source) in sub.rows().enumerate() {
            self.row_mut(row + offset)[col - 1..last_col].copy_from_slice(source);
        }
        Ok(())
    }

    /// Copy every cell of `other` into `self`. Shapes must match.
    fn assign<C>(&mut self, other: &C) -> MatrixResult<()>
    where
        C: Cells + ?Sized,
    {
        if !self.is_same_shape(other) {
            return Err(MatrixError::shape_mismatch(
                "assignment",
                self.shape(),
                other.shape(),
            ));
        }
        self.set_at(1, 1, other)
    }

    /// Set every cell to `value`.
    fn fill(&mut self, value: f64) {
        for r in 1..=self.nrows() {
            self.row_mut(r).fill(value);
        }
    }

    /// Element-wise `self += other`. Shapes must match.
    fn try_add_assign<C>(&mut self, other: &C) -> MatrixResult<()>
    where
        C: Cells + ?Sized,
    {
        algebra::zip_assign(self, other, "addition", |a, b| a + b)
    }

    /// Element-wise `self -= other`. Shapes must match.
    fn try_sub_assign<C>(&mut self, other: &C) -> MatrixResult<()>
    where
        C: Cells + ?Sized,
    {
        algebra::zip_assign(self, other, "subtraction", |a, b| a - b)
    }

    /// Multiply every cell by `k` in place.
    fn scale(&mut self, k: f64) {
        algebra::map_assign(self, |x| x * k);
    }

    /// Divide every cell by `k` in place.
    fn divide(&mut self, k: f64) {
        algebra::map_assign(self, |x| x / k);
    }
}
