/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use std::io::{BufRead, Write};

use matrixkit::{Cells, Matrix};
use matrixkit_linalg::fit_polynomial_steps;
use serde::{Deserialize, Serialize};

use crate::utils::{CMDResult, CMDToolError};

pub const DATA_PROMPT: &str =
    "Enter one pair of X and Y values per line, the two separated by a space: ";
pub const BLANK_LINE_PROMPT: &str = "(Enter a blank line when you're done.): ";
pub const ORDER_PROMPT: &str = "To what order polynomial should this data be fitted?";

/// How [`run_polyfit`] reads its order and renders its output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolyfitOptions {
    /// The polynomial order. When `None`, it is read from the input after the data.
    pub order: Option<usize>,
    /// Write a JSON [`FitReport`] instead of the text transcript.
    pub json: bool,
    /// Suppress prompts.
    pub quiet: bool,
}

impl PolyfitOptions {
    fn prompts(&self) -> bool {
        !(self.quiet || self.json)
    }
}

/// The machine-readable result of a fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitReport {
    pub points: Vec<[f64; 2]>,
    pub order: usize,
    /// Coefficients, highest power first.
    pub coefficients: Vec<f64>,
}

/// Read `(x, y)` samples and a polynomial order from `input`, fit the polynomial, and
/// write the transcript (or a JSON report) to `output`.
///
/// Samples are read one pair per line until a blank line or the end of the input. If
/// `options.order` is `None`, the order is taken from the next non-empty line.
pub fn run_polyfit<R, W>(
    input: &mut R,
    output: &mut W,
    options: &PolyfitOptions,
) -> CMDResult<FitReport>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    if options.prompts() {
        writeln!(output, "{DATA_PROMPT}")?;
        writeln!(output, "{BLANK_LINE_PROMPT}")?;
    }

    let data = Matrix::read_from(input)?;
    let points = points_from(&data)?;

    let order = match options.order {
        Some(order) => order,
        None => {
            if options.prompts() {
                writeln!(output, "{ORDER_PROMPT}")?;
            }
            read_order(input)?
        }
    };

    tracing::info!(points = points.len(), order, "fitting polynomial");
    let steps = fit_polynomial_steps(&points, order)?;

    let report = FitReport {
        points: points.iter().map(|&(x, y)| [x, y]).collect(),
        order,
        coefficients: steps.polynomial.coefficients().to_vec(),
    };

    if options.json {
        serde_json::to_writer_pretty(&mut *output, &report)?;
        writeln!(output)?;
    } else {
        writeln!(output)?;
        writeln!(output, "Here is your data: ")?;
        writeln!(output, "{data}")?;
        writeln!(output, "Here is your Vandermonde matrix: ")?;
        writeln!(output, "{}", steps.vandermonde)?;
        writeln!(output, "Here is its transpose: ")?;
        writeln!(output, "{}", steps.transposed)?;
        writeln!(output, "Here is VᵀV: ")?;
        writeln!(output, "{}", steps.normal)?;
        writeln!(output, "Computed coefficients: ")?;
        writeln!(output, "{}", steps.polynomial)?;
    }
    output.flush()?;

    Ok(report)
}

/// Interpret a two-column matrix as `(x, y)` samples.
fn points_from(data: &Matrix) -> CMDResult<Vec<(f64, f64)>> {
    if data.nrows() == 0 {
        return Ok(Vec::new());
    }
    if data.ncols() != 2 {
        return Err(CMDToolError::new(format!(
            "expected an x and a y value per line, got {} values",
            data.ncols()
        )));
    }
    Ok(data.rows().map(|row| (row[0], row[1])).collect())
}

/// Read the polynomial order from the next non-empty line.
fn read_order<R>(input: &mut R) -> CMDResult<usize>
where
    R: BufRead + ?Sized,
{
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(CMDToolError::new(
                "input ended before a polynomial order was given",
            ));
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        return trimmed.parse().map_err(|_| {
            CMDToolError::new(format!("invalid polynomial order: {trimmed:?}"))
        });
    }
}
