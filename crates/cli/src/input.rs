//! Validation of user-entered text into solver inputs.

use bisector_expr::{Expression, ParseError};
use bisector_solvers::equation::bisection::{Config, ConfigError};
use thiserror::Error;

/// Raw text for one solve, as entered by the user.
#[derive(Debug, Clone, Copy)]
pub struct RawInput<'a> {
    pub function: &'a str,
    pub low: &'a str,
    pub high: &'a str,
    pub tolerance: &'a str,
    pub max_iters: &'a str,
}

/// Errors for input rejected before the solver runs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("invalid value for {name}: `{value}` (expected a finite number, e.g. -1.5 or 2)")]
    Bound { name: &'static str, value: String },

    #[error("a and b are both {value}: the interval must have non-zero width")]
    ZeroWidth { value: f64 },

    #[error("invalid tolerance `{value}` (expected a small positive number, e.g. 1e-6)")]
    Tolerance { value: String },

    #[error("invalid max iterations `{value}` (expected a positive integer)")]
    MaxIters { value: String },

    #[error("could not parse f(x): {0} (expected an expression such as x^3 - 2*x - 5)")]
    Function(#[from] ParseError),
}

/// Validated inputs for one solve.
///
/// Built fresh from [`RawInput`] for every run and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveInput {
    pub function: Expression,
    pub bracket: [f64; 2],
    pub config: Config,
}

impl SolveInput {
    /// Validates raw text in the order a user reads the form: bounds,
    /// tolerance, iteration limit, then the function.
    ///
    /// # Errors
    ///
    /// Returns the first [`InputError`] found.
    pub fn parse(raw: &RawInput<'_>) -> Result<Self, InputError> {
        let low = parse_bound("a", raw.low)?;
        let high = parse_bound("b", raw.high)?;
        #[allow(clippy::float_cmp)]
        if low == high {
            return Err(InputError::ZeroWidth { value: low });
        }

        let tolerance = raw
            .tolerance
            .trim()
            .parse::<f64>()
            .map_err(|_| InputError::Tolerance {
                value: raw.tolerance.to_owned(),
            })?;
        let max_iters = raw
            .max_iters
            .trim()
            .parse::<usize>()
            .map_err(|_| InputError::MaxIters {
                value: raw.max_iters.to_owned(),
            })?;
        let config = Config::new(max_iters, tolerance).map_err(|err| match err {
            ConfigError::Tolerance => InputError::Tolerance {
                value: raw.tolerance.to_owned(),
            },
            ConfigError::MaxIters => InputError::MaxIters {
                value: raw.max_iters.to_owned(),
            },
        })?;

        let function = Expression::parse(raw.function)?;

        Ok(Self {
            function,
            bracket: [low, high],
            config,
        })
    }
}

fn parse_bound(name: &'static str, text: &str) -> Result<f64, InputError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| InputError::Bound {
            name,
            value: text.to_owned(),
        })
}
