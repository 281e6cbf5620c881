/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use std::fmt;

use thiserror::Error;

/// Convenience alias for a `Result<T, MatrixError>`.
pub type MatrixResult<T> = Result<T, MatrixError>;

/// The dimensions of a rectangle of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    pub nrows: usize,
    pub ncols: usize,
}

impl Shape {
    pub const fn new(nrows: usize, ncols: usize) -> Self {
        Self { nrows, ncols }
    }

    /// Return `true` if the shape has as many rows as columns.
    pub const fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Return the number of cells covered by the shape.
    pub const fn len(&self) -> usize {
        self.nrows * self.ncols
    }

    /// Return `true` if the shape covers no cells.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return `true` if the 1-based cell `(row, col)` lies inside the shape.
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= 1 && row <= self.nrows && col >= 1 && col <= self.ncols
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.nrows, self.ncols)
    }
}

/// The coarse classification of a [`MatrixError`].
///
/// Several error variants share a kind. For example, both a ragged row in textual input
/// and a pair of incompatible operands are [`MatrixErrorKind::ShapeMismatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixErrorKind {
    /// Non-uniform row widths or disagreeing operand shapes.
    ShapeMismatch,
    /// An index or window outside a matrix.
    OutOfRange,
    /// A square-only operation was applied to a non-square matrix.
    NonSquare,
    /// Inversion of a matrix with zero determinant.
    Singular,
    /// An addressor string not of the form `R<n>` or `C<n>`.
    AddressMalformed,
}

/// Errors raised by matrix construction, access and algebra.
///
/// All checks happen before any cell is written, so an operation that returns an error
/// leaves its operands untouched.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum MatrixError {
    #[error("{operation} requires compatible shapes but got {left} and {right}")]
    ShapeMismatch {
        operation: &'static str,
        left: Shape,
        right: Shape,
    },

    #[error("matrix must have uniform width: row {row} has {found} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("tried to construct a {shape} matrix over a buffer of length {len}")]
    BufferLength { len: usize, shape: Shape },

    #[error("cell ({row}, {col}) is outside a {shape} matrix")]
    OutOfRange { row: usize, col: usize, shape: Shape },

    #[error(
        "window from ({r1}, {c1}) to ({r2}, {c2}) extends outside a {shape} matrix"
    )]
    WindowOutOfRange {
        r1: usize,
        c1: usize,
        r2: usize,
        c2: usize,
        shape: Shape,
    },

    #[error("can't compute {operation} of nonsquare matrix: {shape}")]
    NonSquare {
        operation: &'static str,
        shape: Shape,
    },

    #[error("matrix not invertible: determinant is zero")]
    Singular,

    #[error("address format incorrect: {0:?}")]
    AddressMalformed(String),

    #[error("polynomial order {order} is too large")]
    OrderTooLarge { order: usize },
}

impl MatrixError {
    /// Return the kind of this error.
    pub fn kind(&self) -> MatrixErrorKind {
        match self {
            Self::ShapeMismatch { .. } | Self::RaggedRow { .. } | Self::BufferLength { .. } => {
                MatrixErrorKind::ShapeMismatch
            }
            Self::OutOfRange { .. }
            | Self::WindowOutOfRange { .. }
            | Self::OrderTooLarge { .. } => MatrixErrorKind::OutOfRange,
            Self::NonSquare { .. } => MatrixErrorKind::NonSquare,
            Self::Singular => MatrixErrorKind::Singular,
            Self::AddressMalformed(_) => MatrixErrorKind::AddressMalformed,
        }
    }

    pub(crate) fn shape_mismatch(operation: &'static str, left: Shape, right: Shape) -> Self {
        Self::ShapeMismatch {
            operation,
            left,
            right,
        }
    }
}

/// Errors raised while reading a matrix from text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReadMatrixError {
    #[error("failed to read matrix text")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

impl ReadMatrixError {
    /// Return the [`MatrixErrorKind`] if this error originated from a malformed matrix
    /// rather than from the underlying reader.
    pub fn kind(&self) -> Option<MatrixErrorKind> {
        match self {
            Self::Io(_) => None,
            Self::Matrix(err) => Some(err.kind()),
        }
    }
}
