use thiserror::Error;

/// Errors that can occur when validating bracket endpoints.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,
    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,
}

/// Current bracket bounds and the tracked signs of `f` at each end.
///
/// The signs are carried along with the endpoint they belong to and are never
/// recomputed from the function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    low: f64,
    high: f64,
    low_sign: Sign,
    high_sign: Sign,
}

impl Bracket {
    /// Creates a bracket from ordered bounds and the signs of `f` at each end.
    pub(super) fn new(bounds: Bounds, low_sign: Sign, high_sign: Sign) -> Self {
        Self {
            low: bounds.low,
            high: bounds.high,
            low_sign,
            high_sign,
        }
    }

    /// Returns the bracket bounds as `[low, high]`.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.low, self.high]
    }

    /// Returns the midpoint of the bracket.
    ///
    /// Each endpoint is halved before adding so the sum stays finite for
    /// any finite bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * self.low + 0.5 * self.high
    }

    /// Returns half the bracket width, the error bound on the midpoint.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        0.5 * self.high - 0.5 * self.low
    }

    /// Returns the tracked signs of `f` as `[at low, at high]`.
    #[cfg(test)]
    pub(super) fn signs(&self) -> [Sign; 2] {
        [self.low_sign, self.high_sign]
    }

    /// Replaces one endpoint with `mid`, keeping a sign change inside.
    ///
    /// If `f(mid)` has the opposite sign of `f(low)` the root lies in
    /// `[low, mid]` and `high` moves. Otherwise `low` moves.
    ///
    /// A zero at `low` can only be present on entry; the root then sits on
    /// `low` itself, so `high` moves toward it.
    pub(super) fn shrink(&mut self, mid: f64, sign: Sign) {
        if self.low_sign == Sign::Zero || self.low_sign.is_opposite(sign) {
            self.high = mid;
            self.high_sign = sign;
        } else {
            self.low = mid;
            self.low_sign = sign;
        }
    }
}

/// The sign of a function value for bracket logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Value is negative.
    Negative,
    /// Value is exactly zero.
    Zero,
    /// Value is positive.
    Positive,
}

impl Sign {
    /// Returns the sign of a finite value.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Sign::Positive
        } else if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    /// Returns true if the product of two values with these signs is negative.
    #[must_use]
    pub fn is_opposite(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Sign::Negative, Sign::Positive) | (Sign::Positive, Sign::Negative)
        )
    }
}

/// Ordered finite bounds for a bisection bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    low: f64,
    high: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [a, b] = bracket;

        if !a.is_finite() || !b.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if a == b {
            return Err(BracketError::ZeroWidth);
        }

        if a < b {
            Ok(Self { low: a, high: b })
        } else {
            Ok(Self { low: b, high: a })
        }
    }

    /// Returns the bounds as `[low, high]`.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.low, self.high]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn bracket(low: f64, high: f64, low_sign: Sign, high_sign: Sign) -> Bracket {
        Bracket::new(
            Bounds::new([low, high]).expect("valid bounds"),
            low_sign,
            high_sign,
        )
    }

    #[test]
    fn bounds_reorders_bracket() {
        let bounds = Bounds::new([3.0, 1.0]).expect("valid bracket");
        assert_eq!(bounds.as_array(), [1.0, 3.0]);
    }

    #[test]
    fn bounds_rejects_non_finite() {
        assert!(matches!(
            Bounds::new([f64::NAN, 1.0]),
            Err(BracketError::NonFinite)
        ));
        assert!(matches!(
            Bounds::new([0.0, f64::INFINITY]),
            Err(BracketError::NonFinite)
        ));
    }

    #[test]
    fn bounds_rejects_zero_width() {
        assert!(matches!(
            Bounds::new([2.0, 2.0]),
            Err(BracketError::ZeroWidth)
        ));
    }

    #[test]
    fn sign_of_values() {
        assert_eq!(Sign::of(2.0), Sign::Positive);
        assert_eq!(Sign::of(-1e-300), Sign::Negative);
        assert_eq!(Sign::of(0.0), Sign::Zero);
        assert_eq!(Sign::of(-0.0), Sign::Zero);
    }

    #[test]
    fn zero_is_never_opposite() {
        assert!(Sign::Negative.is_opposite(Sign::Positive));
        assert!(Sign::Positive.is_opposite(Sign::Negative));
        assert!(!Sign::Positive.is_opposite(Sign::Positive));
        assert!(!Sign::Zero.is_opposite(Sign::Negative));
        assert!(!Sign::Positive.is_opposite(Sign::Zero));
    }

    #[test]
    fn shrink_moves_the_matching_endpoint() {
        let mut bracket = bracket(0.0, 2.0, Sign::Negative, Sign::Positive);

        bracket.shrink(1.0, Sign::Negative);
        assert_eq!(bracket.as_array(), [1.0, 2.0]);
        assert_eq!(bracket.signs(), [Sign::Negative, Sign::Positive]);

        bracket.shrink(1.5, Sign::Positive);
        assert_eq!(bracket.as_array(), [1.0, 1.5]);
        assert_eq!(bracket.signs(), [Sign::Negative, Sign::Positive]);

        assert_relative_eq!(bracket.midpoint(), 1.25);
        assert_relative_eq!(bracket.half_width(), 0.25);
    }

    #[test]
    fn shrink_moves_high_toward_zero_at_low() {
        let mut bracket = bracket(0.0, 1.0, Sign::Zero, Sign::Positive);

        bracket.shrink(0.5, Sign::Positive);
        assert_eq!(bracket.as_array(), [0.0, 0.5]);
        assert_eq!(bracket.signs(), [Sign::Zero, Sign::Positive]);
    }

    #[test]
    fn shrink_moves_low_away_from_zero_at_high() {
        let mut bracket = bracket(-1.0, 0.0, Sign::Negative, Sign::Zero);

        bracket.shrink(-0.5, Sign::Negative);
        assert_eq!(bracket.as_array(), [-0.5, 0.0]);
        assert_eq!(bracket.signs(), [Sign::Negative, Sign::Zero]);
    }

    #[test]
    fn midpoint_and_half_width_stay_finite_near_max() {
        let full = bracket(-f64::MAX, f64::MAX, Sign::Negative, Sign::Positive);
        assert_eq!(full.midpoint(), 0.0);
        assert_eq!(full.half_width(), f64::MAX);

        let upper = bracket(1.0e308, 1.7e308, Sign::Negative, Sign::Positive);
        assert_relative_eq!(upper.midpoint(), 1.35e308);
        assert_relative_eq!(upper.half_width(), 0.35e308);
    }
}
