/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

//! Plain-text reading and writing of matrices.
//!
//! The input format is one row per line with whitespace-separated numbers, terminated by
//! a blank line or the end of the stream. The output format is one row per line with
//! tab-separated cells, each printed like C's `%4.3g`.

use std::{
    fmt,
    io::{BufRead, Cursor},
    str::FromStr,
};

use crate::{
    cells::Cells,
    error::{MatrixError, ReadMatrixError},
    Matrix,
};

/// Significant digits used when no precision is requested.
const DEFAULT_PRECISION: usize = 3;

/// Minimum width of a printed cell.
const CELL_WIDTH: usize = 4;

impl Matrix {
    /// Read a matrix from `reader`.
    ///
    /// Each line is a row of whitespace-separated numbers. Parsing of a line stops at the
    /// first character that can't continue a number, so `1.5abc` contributes `1.5` and
    /// ends the row. Reading stops after the first empty (or
    /// whitespace-only) line, or at the end of the stream, so several matrices separated
    /// by blank lines can be read one after another from the same reader.
    ///
    /// ```
    /// use matrixkit::Matrix;
    ///
    /// let mut input = "1 2\n3 4\n\n5 6\n".as_bytes();
    /// let first = Matrix::read_from(&mut input).unwrap();
    /// let second = Matrix::read_from(&mut input).unwrap();
    /// assert_eq!(first, Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]).unwrap());
    /// assert_eq!(second, Matrix::from_rows([[5.0, 6.0]]).unwrap());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ReadMatrixError::Io`] if the reader fails and [`ReadMatrixError::Matrix`]
    /// with a [`MatrixError::RaggedRow`] if a row's length differs from the first row.
    pub fn read_from<R>(reader: &mut R) -> Result<Self, ReadMatrixError>
    where
        R: BufRead + ?Sized,
    {
        let mut data = Vec::new();
        let mut nrows = 0;
        let mut ncols = None;
        let mut line = String::new();

        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            let trimmed = line.trim_end_matches(['\n', '\r']);
            if trimmed.trim().is_empty() {
                break;
            }

            nrows += 1;
            let start = data.len();
            for token in trimmed.split_whitespace() {
                let prefix = numeric_prefix(token);
                if let Ok(value) = prefix.parse::<f64>() {
                    data.push(value);
                }
                if prefix.len() != token.len() || prefix.is_empty() {
                    tracing::debug!(
                        row = nrows,
                        token,
                        "ignoring the rest of a row after a non-numeric token"
                    );
                    break;
                }
            }

            let found = data.len() - start;
            match ncols {
                None => ncols = Some(found),
                Some(expected) if expected != found => {
                    return Err(MatrixError::RaggedRow {
                        row: nrows,
                        expected,
                        found,
                    }
                    .into());
                }
                Some(_) => {}
            }
        }

        Ok(Matrix::try_from(data, nrows, ncols.unwrap_or(0))?)
    }
}

/// Return the longest prefix of `token` that is a decimal number: an optional sign,
/// digits with an optional fraction, and an optional exponent. Returns `""` if `token`
/// does not start with one. Words like `inf` and `nan` are not numbers here.
fn numeric_prefix(token: &str) -> &str {
    let bytes = token.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = match bytes.first() {
        Some(b'+' | b'-') => 1,
        _ => 0,
    };
    let integer_end = digits_from(end);
    let mut mantissa_digits = integer_end - end;
    end = integer_end;
    if bytes.get(end) == Some(&b'.') {
        let fraction_end = digits_from(end + 1);
        mantissa_digits += fraction_end - end - 1;
        end = fraction_end;
    }
    if mantissa_digits == 0 {
        return "";
    }

    if let Some(b'e' | b'E') = bytes.get(end) {
        let mut exponent = end + 1;
        if let Some(b'+' | b'-') = bytes.get(exponent) {
            exponent += 1;
        }
        let exponent_end = digits_from(exponent);
        if exponent_end > exponent {
            end = exponent_end;
        }
    }
    &token[..end]
}

impl FromStr for Matrix {
    type Err = ReadMatrixError;

    /// Parse the first matrix in `s`. See [`Matrix::read_from`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Matrix::read_from(&mut Cursor::new(s))
    }
}

/// Format `value` the way C's `%.{precision}g` does.
///
/// Uses scientific notation when the decimal exponent is below `-4` or at least
/// `precision`, and fixed notation otherwise. Trailing zeros are removed in both forms.
/// A precision of zero is treated as one.
///
/// ```
/// use matrixkit::format_general;
///
/// assert_eq!(format_general(0.5, 3), "0.5");
/// assert_eq!(format_general(1234.0, 3), "1.23e+03");
/// assert_eq!(format_general(100.0, 3), "100");
/// assert_eq!(format_general(0.0001234, 3), "0.000123");
/// ```
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_owned()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Write `cells` one row per line, separating cells with tabs.
///
/// The formatter's precision, if any, overrides the default of three significant digits.
pub(crate) fn write_cells<C>(f: &mut fmt::Formatter<'_>, cells: &C) -> fmt::Result
where
    C: Cells + ?Sized,
{
    let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
    for row in cells.rows() {
        for (i, &x) in row.iter().enumerate() {
            if i != 0 {
                f.write_str("\t")?;
            }
            write!(f, "{:>width$}", format_general(x, precision), width = CELL_WIDTH)?;
        }
        f.write_str("\n")?;
    }
    Ok(())
}
