/// A snapshot of one bisection step.
///
/// `low` and `high` are the bracket the step started from, `mid` is its
/// midpoint, and `f_mid` the residual there.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationRecord {
    /// Iteration counter (1-based).
    pub iter: usize,
    pub low: f64,
    pub high: f64,
    pub mid: f64,
    pub f_mid: f64,
}

impl IterationRecord {
    /// Returns the width of the bracket this step started from.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}
