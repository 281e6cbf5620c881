/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

//! Dense real matrices with 1-based coordinates.
//!
//! * [`Matrix`] owns a row-major buffer of `f64`.
//! * [`MatrixView`] and [`MutMatrixView`] are rectangular windows that alias a matrix.
//! * [`Cells`] and [`CellsMut`] describe what can be read from and written to either,
//!   so the algebra accepts matrices and views interchangeably.

#![cfg_attr(
    not(test),
    warn(clippy::panic, clippy::unwrap_used, clippy::expect_used)
)]

mod address;
pub mod algebra;
mod cells;
mod error;
mod matrix;
mod text;
pub mod views;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use address::Address;
pub use cells::{Cells, CellsMut};
pub use error::{MatrixError, MatrixErrorKind, MatrixResult, ReadMatrixError, Shape};
pub use matrix::Matrix;
pub use text::format_general;
pub use views::{MatrixView, MutMatrixView, WindowBase};
