use thiserror::Error;

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tolerance: f64,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 50,
            tolerance: 1e-6,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance and iteration limit.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive, or if
    /// `max_iters` is zero.
    pub fn new(max_iters: usize, tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            max_iters,
            tolerance,
        })
    }

    /// Returns the maximum number of bisection steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the half-width below which the bracket counts as converged.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_values() {
        let config = Config::new(20, 1e-8).expect("valid config");
        assert_eq!(config.max_iters(), 20);
        assert_eq!(config.tolerance(), 1e-8);
    }

    #[test]
    fn rejects_bad_tolerance() {
        for tolerance in [0.0, -1e-6, f64::NAN, f64::INFINITY] {
            assert_eq!(Config::new(10, tolerance), Err(ConfigError::Tolerance));
        }
    }

    #[test]
    fn rejects_zero_iterations() {
        assert_eq!(Config::new(0, 1e-6), Err(ConfigError::MaxIters));
    }

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(Config::new(config.max_iters(), config.tolerance()), Ok(config));
    }
}
