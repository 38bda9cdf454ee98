use bisector_solvers::equation::bisection;
use thiserror::Error;

use crate::input::InputError;

/// Errors that end a CLI run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Solve(#[from] bisection::Error),

    #[error("failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "gui")]
    #[error("failed to open plot window: {0}")]
    Plot(String),

    #[cfg(not(feature = "gui"))]
    #[error("plotting is not available: rebuild with `--features gui`")]
    PlotUnavailable,
}

impl CliError {
    /// Returns a follow-up suggestion for the user, if one applies.
    #[must_use]
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Solve(bisection::Error::NoSignChange { .. }) => Some(
                "try another interval, or check for a root of even multiplicity",
            ),
            Self::Solve(bisection::Error::NonFiniteEndpoint { .. }) => {
                Some("move the interval endpoints away from points where f is undefined")
            }
            _ => None,
        }
    }
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
