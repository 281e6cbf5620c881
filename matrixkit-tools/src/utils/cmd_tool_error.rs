/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use matrixkit::{MatrixError, ReadMatrixError};
use thiserror::Error;

/// The error reported by the command-line tools.
///
/// Library errors are flattened into a human-readable message at the boundary.
#[derive(Debug, Error)]
#[error("{details}")]
pub struct CMDToolError {
    pub details: String,
}

impl CMDToolError {
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            details: details.into(),
        }
    }
}

impl From<MatrixError> for CMDToolError {
    fn from(err: MatrixError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<ReadMatrixError> for CMDToolError {
    fn from(err: ReadMatrixError) -> Self {
        match err {
            ReadMatrixError::Io(err) => err.into(),
            err => Self::new(err.to_string()),
        }
    }
}

impl From<std::io::Error> for CMDToolError {
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {err}"))
    }
}

impl From<serde_json::Error> for CMDToolError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("failed to write JSON report: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use matrixkit::Shape;

    use super::*;

    #[test]
    fn conversions_keep_the_message() {
        let err = CMDToolError::from(MatrixError::Singular);
        assert_eq!(err.to_string(), "matrix not invertible: determinant is zero");

        let err = CMDToolError::from(ReadMatrixError::from(MatrixError::RaggedRow {
            row: 2,
            expected: 2,
            found: 3,
        }));
        assert_eq!(
            err.details,
            "matrix must have uniform width: row 2 has 3 entries, expected 2"
        );

        let err = CMDToolError::from(ReadMatrixError::from(std::io::Error::other("closed")));
        assert_eq!(err.details, "I/O error: closed");

        let err = CMDToolError::from(MatrixError::NonSquare {
            operation: "inverse",
            shape: Shape::new(2, 3),
        });
        assert_eq!(err.details, "can't compute inverse of nonsquare matrix: 2x3");
    }
}
