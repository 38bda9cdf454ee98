use thiserror::Error;

use super::bracket::BracketError;

/// Errors that stop a bisection solve before the first iteration.
///
/// Once iteration has started every outcome is a [`Solution`], including a
/// non-finite function value at a midpoint.
///
/// [`Solution`]: super::Solution
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error(
        "f(low) or f(high) evaluated to infinity or NaN: f({low}) = {f_low}, f({high}) = {f_high}"
    )]
    NonFiniteEndpoint {
        low: f64,
        high: f64,
        f_low: f64,
        f_high: f64,
    },

    #[error(
        "f(low)*f(high) = {product:.4e} > 0 on [{low}, {high}]: bisection needs opposite signs \
         at the endpoints; this does not prove the interval is root-free, since roots of even \
         multiplicity do not change sign"
    )]
    NoSignChange { low: f64, high: f64, product: f64 },
}
