//! Bisection root finding on a sign-change bracket.
//!
//! # Algorithm
//!
//! Bisection keeps a bracket `[low, high]` on which `f` changes sign,
//! evaluates `f` at the midpoint, and replaces whichever endpoint has the same
//! sign as the midpoint. The width halves exactly every step, so reaching a
//! half-width below `tolerance` takes at most [`iterations_for`] steps
//! regardless of `f`.
//!
//! # Stopping
//!
//! Before iterating, `f(low)` and `f(high)` are checked once:
//!
//! - either is non-finite → [`Error::NonFiniteEndpoint`]
//! - `f(low) * f(high) > 0` → [`Error::NoSignChange`]
//!
//! An exact zero at an endpoint is not treated specially; the loop converges
//! onto it. Each step then appends an [`IterationRecord`] to the trace (before
//! any check, so the final step is always recorded) and stops with a
//! [`StopReason`] when:
//!
//! 1. `f(mid)` is non-finite → [`StopReason::NonFiniteEncountered`], root = `mid`
//! 2. `|f(mid)| < RESIDUAL_THRESHOLD` → [`StopReason::ConvergedOnValue`], root = `mid`
//! 3. after shrinking, half-width `< tolerance` →
//!    [`StopReason::ConvergedOnInterval`], root = new midpoint
//! 4. `max_iters` steps done → [`StopReason::MaxIterationsReached`], root = midpoint
//!
//! # Observers
//!
//! The solver passes every [`IterationRecord`] to an [`Observer`] as soon as it
//! is recorded. Observers are passive and cannot stop the loop.

mod bracket;
mod config;
mod error;
mod record;
mod solution;


pub use bracket::BracketError;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use record::IterationRecord;
pub use solution::{Solution, StopReason};

use bisector_core::{Function, Observer};
use tracing::{debug, warn};

use bracket::{Bounds, Bracket, Sign};

/// Absolute residual below which a midpoint is accepted as the root.
///
/// Independent of the configured tolerance, which bounds the bracket width.
pub const RESIDUAL_THRESHOLD: f64 = 1e-12;

/// Finds a root of `function` in `bracket` using bisection.
///
/// The bracket endpoints may be given in either order. The observer receives
/// each [`IterationRecord`] as it is appended to the trace.
///
/// # Errors
///
/// Returns an error if the bracket is non-finite or has zero width, if `f` is
/// non-finite at either endpoint, or if the endpoints do not bracket a sign
/// change. All outcomes after the first iteration are returned as a
/// [`Solution`].
pub fn solve<F, Obs>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    Obs: Observer<IterationRecord>,
{
    let bounds = Bounds::new(bracket)?;
    let [low, high] = bounds.as_array();

    let f_low = function.call(low);
    let f_high = function.call(high);
    if !f_low.is_finite() || !f_high.is_finite() {
        debug!(low, high, f_low, f_high, "non-finite endpoint");
        return Err(Error::NonFiniteEndpoint {
            low,
            high,
            f_low,
            f_high,
        });
    }

    let product = f_low * f_high;
    if product > 0.0 {
        debug!(low, high, product, "no sign change");
        return Err(Error::NoSignChange { low, high, product });
    }

    let mut bracket = Bracket::new(bounds, Sign::of(f_low), Sign::of(f_high));
    let mut trace = Vec::new();

    for iter in 1..=config.max_iters() {
        let [low, high] = bracket.as_array();
        let mid = bracket.midpoint();
        let f_mid = function.call(mid);

        let record = IterationRecord {
            iter,
            low,
            high,
            mid,
            f_mid,
        };
        debug!(iter, low, high, mid, f_mid, "bisection step");
        observer.observe(&record);
        trace.push(record);

        if !f_mid.is_finite() {
            warn!(iter, mid, f_mid, "non-finite residual at midpoint, stopping");
            return Ok(finish(
                StopReason::NonFiniteEncountered,
                mid,
                &bracket,
                trace,
            ));
        }

        if f_mid.abs() < RESIDUAL_THRESHOLD {
            return Ok(finish(StopReason::ConvergedOnValue, mid, &bracket, trace));
        }

        bracket.shrink(mid, Sign::of(f_mid));

        if bracket.half_width() < config.tolerance() {
            let root = bracket.midpoint();
            return Ok(finish(
                StopReason::ConvergedOnInterval,
                root,
                &bracket,
                trace,
            ));
        }
    }

    let root = bracket.midpoint();
    Ok(finish(
        StopReason::MaxIterationsReached,
        root,
        &bracket,
        trace,
    ))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or the endpoints fail the
/// pre-check. See [`solve`].
pub fn solve_unobserved<F>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
{
    solve(function, bracket, config, ())
}

/// Returns the number of steps that bounds the bracket width by `tolerance`.
///
/// This is `ceil(log2(width / tolerance))`, independent of the function.
/// Returns zero if the width is already within tolerance.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn iterations_for(width: f64, tolerance: f64) -> usize {
    let steps = (width.abs() / tolerance).log2().ceil();
    if steps.is_nan() || steps <= 0.0 {
        return 0;
    }
    steps as usize
}

fn finish(
    stop_reason: StopReason,
    root: f64,
    bracket: &Bracket,
    trace: Vec<IterationRecord>,
) -> Solution {
    debug!(
        stop_reason = stop_reason.as_str(),
        root,
        iters = trace.len(),
        "bisection finished"
    );
    Solution {
        stop_reason,
        root,
        half_width: bracket.half_width(),
        trace,
    }
}
