//! Text and JSON rendering of a solve.

use std::fmt;
use std::io::Write;

use bisector_solvers::equation::bisection::{IterationRecord, Solution};
use clap::ValueEnum;
use serde::Serialize;

use crate::error::Result;

/// Significant digits for table cells.
const TABLE_DIGITS: usize = 6;

/// Significant digits for the reported root.
const ROOT_DIGITS: usize = 12;

const COLUMN_WIDTH: usize = 14;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Iteration table followed by a summary.
    #[default]
    Table,

    /// A single JSON document.
    Json,
}

/// A solve and the inputs that produced it, as written by `--format json`.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub function: &'a str,
    pub bracket: [f64; 2],
    pub tolerance: f64,
    pub max_iters: usize,
    pub solution: &'a Solution,
}

impl Report<'_> {
    /// Writes the report in the given format.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or serialization fails.
    pub fn write(&self, out: &mut impl Write, format: Format) -> Result<()> {
        match format {
            Format::Table => {
                write_table(out, &self.solution.trace)?;
                writeln!(out)?;
                write_summary(out, self.solution)?;
            }
            Format::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

/// Writes one row per iteration.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_table(out: &mut impl Write, trace: &[IterationRecord]) -> std::io::Result<()> {
    let w = COLUMN_WIDTH;
    writeln!(
        out,
        "{:>5} {:>w$} {:>w$} {:>w$} {:>w$}",
        "iter", "low", "high", "mid", "f(mid)"
    )?;
    for record in trace {
        writeln!(
            out,
            "{:>5} {:>w$} {:>w$} {:>w$} {:>w$}",
            record.iter,
            Sig(record.low, TABLE_DIGITS).to_string(),
            Sig(record.high, TABLE_DIGITS).to_string(),
            Sig(record.mid, TABLE_DIGITS).to_string(),
            Sig(record.f_mid, TABLE_DIGITS).to_string(),
        )?;
    }
    Ok(())
}

/// Writes the root, stop reason, and error bound.
///
/// A stop on a non-finite residual adds a `warning:` line. The solver has
/// already logged the event, so nothing extra goes to stderr.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_summary(out: &mut impl Write, solution: &Solution) -> std::io::Result<()> {
    writeln!(out, "root:        {}", Sig(solution.root, ROOT_DIGITS))?;
    writeln!(
        out,
        "stop reason: {} ({})",
        solution.stop_reason,
        solution.stop_reason.as_str()
    )?;
    writeln!(out, "error bound: {:.3e}", solution.half_width)?;
    writeln!(out, "iterations:  {}", solution.iters())?;
    if solution.is_warning() {
        writeln!(
            out,
            "warning:     stopped early, the root is a best-effort estimate"
        )?;
    }
    Ok(())
}

/// Formats a float with a fixed number of significant digits, like C's `%g`.
///
/// Trailing zeros are dropped. Exponents below -4 or at least the digit
/// count switch to scientific notation with a signed, two-digit exponent.
#[derive(Debug, Clone, Copy)]
pub struct Sig(pub f64, pub usize);

impl fmt::Display for Sig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(value, digits) = *self;
        let digits = digits.max(1);

        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "inf" } else { "-inf" });
        }
        if value == 0.0 {
            return f.write_str(if value.is_sign_negative() { "-0" } else { "0" });
        }

        // Round first so the exponent reflects any carry (9.9999995 -> 1e1).
        let scientific = format!("{value:.prec$e}", prec = digits - 1);
        let Some((mantissa, exponent)) = scientific.split_once('e') else {
            return f.write_str(&scientific);
        };
        let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
        let digits = i32::try_from(digits).map_err(|_| fmt::Error)?;

        if exponent < -4 || exponent >= digits {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{sign}{:02}",
                trim_zeros(mantissa),
                exponent.unsigned_abs()
            )
        } else {
            let precision = usize::try_from(digits - 1 - exponent).map_err(|_| fmt::Error)?;
            let fixed = format!("{value:.precision$}");
            f.write_str(trim_zeros(&fixed))
        }
    }
}

fn trim_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
