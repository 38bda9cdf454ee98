use std::fmt;

use super::{IterationRecord, RESIDUAL_THRESHOLD};

/// Why the bisection loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StopReason {
    /// The residual at a midpoint fell below [`RESIDUAL_THRESHOLD`].
    ConvergedOnValue,

    /// The bracket half-width fell below the configured tolerance.
    ConvergedOnInterval,

    /// Reached the iteration limit without converging.
    MaxIterationsReached,

    /// The function returned infinity or NaN at a midpoint.
    NonFiniteEncountered,
}

impl StopReason {
    /// Returns the snake-case tag for this reason.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ConvergedOnValue => "converged_on_value",
            Self::ConvergedOnInterval => "converged_on_interval",
            Self::MaxIterationsReached => "max_iterations_reached",
            Self::NonFiniteEncountered => "non_finite_encountered",
        }
    }

    /// Returns true for the two converged reasons.
    #[must_use]
    pub fn is_converged(self) -> bool {
        matches!(self, Self::ConvergedOnValue | Self::ConvergedOnInterval)
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConvergedOnValue => write!(f, "|f(m)| < {RESIDUAL_THRESHOLD:e}"),
            Self::ConvergedOnInterval => write!(f, "interval half-width below tolerance"),
            Self::MaxIterationsReached => write!(f, "maximum iterations reached"),
            Self::NonFiniteEncountered => write!(f, "f(m) is not finite"),
        }
    }
}

/// The result of a bisection solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Why the solver stopped.
    pub stop_reason: StopReason,

    /// Approximate root.
    pub root: f64,

    /// Half-width of the final bracket.
    pub half_width: f64,

    /// Every step taken, in order, including the one that stopped the loop.
    pub trace: Vec<IterationRecord>,
}

impl Solution {
    /// Returns the number of bisection steps taken.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.trace.len()
    }

    /// Returns true if the result should be presented as a warning.
    ///
    /// This is the case when a midpoint evaluated to a non-finite value: the
    /// root is a best effort and the trace is partial.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.stop_reason == StopReason::NonFiniteEncountered
    }

    /// Returns the record of the step that ended the solve.
    #[must_use]
    pub fn last(&self) -> Option<&IterationRecord> {
        self.trace.last()
    }
}
