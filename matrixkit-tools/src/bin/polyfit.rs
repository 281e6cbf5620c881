/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use std::{
    fs::File,
    io::{self, BufReader},
};

use clap::Parser;
use matrixkit_tools::utils::{init_subscriber, run_polyfit, CMDResult, PolyfitOptions};

/// Command Usage:
///
/// Description:
/// Fits a polynomial of a chosen order to (x, y) samples by least squares, solving the
/// normal equations (VᵀV)⁻¹Vᵀy where V is the Vandermonde matrix of the samples.
///
/// Samples are read one `x y` pair per line until a blank line or the end of the input.
/// Without `--order`, the order is read from the next non-empty line. The transcript
/// prints the data, V, Vᵀ, VᵀV and the fitted coefficients.
///
/// Example Command:
/// printf '0 1\n1 2\n2 5\n3 10\n\n' | cargo run --bin polyfit -- --order 2 --quiet
fn main() -> CMDResult<()> {
    init_subscriber();

    let args = PolyfitArgs::parse();
    let options = PolyfitOptions {
        order: args.order,
        json: args.json,
        quiet: args.quiet,
    };

    let mut output = io::stdout().lock();
    let result = match &args.input {
        Some(path) => File::open(path)
            .map_err(Into::into)
            .and_then(|file| run_polyfit(&mut BufReader::new(file), &mut output, &options)),
        None => run_polyfit(&mut io::stdin().lock(), &mut output, &options),
    };

    match result {
        Ok(report) => {
            tracing::info!(
                order = report.order,
                points = report.points.len(),
                "polynomial fit completed successfully"
            );
            Ok(())
        }
        Err(err) => {
            tracing::error!("Error: {:?}", err);
            Err(err)
        }
    }
}

#[derive(Debug, Parser)]
struct PolyfitArgs {
    /// Order of the polynomial to fit. Read from the input after the samples when absent.
    #[arg(long = "order", short)]
    pub order: Option<usize>,

    /// Read samples from this file instead of standard input
    #[arg(long = "input", short)]
    pub input: Option<String>,

    /// Print a JSON report instead of the text transcript
    #[arg(long = "json")]
    pub json: bool,

    /// Do not print prompts
    #[arg(long = "quiet", short)]
    pub quiet: bool,
}
