use bisector_core::Function;

use crate::Domain;

/// A function sampled over a domain.
///
/// Non-finite samples are dropped. Each run of consecutive finite samples
/// forms its own segment, so a plot never draws a line across a pole or a gap
/// in the function's domain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    segments: Vec<Vec<[f64; 2]>>,
}

impl Curve {
    /// Default number of samples used by plotting front ends.
    pub const DEFAULT_SAMPLES: usize = 500;

    /// Samples `function` at `samples` evenly spaced points of `domain`.
    pub fn sample<F>(function: &F, domain: Domain, samples: usize) -> Self
    where
        F: Function + ?Sized,
    {
        let mut segments = Vec::new();
        let mut current = Vec::new();

        for x in domain.linspace(samples) {
            let y = function.call(x);
            if y.is_finite() {
                current.push([x, y]);
            } else if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }

        Self { segments }
    }

    /// Returns the runs of consecutive finite samples.
    #[must_use]
    pub fn segments(&self) -> &[Vec<[f64; 2]>] {
        &self.segments
    }

    /// Returns every finite sample in order.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> {
        self.segments.iter().flatten().copied()
    }

    /// Returns true if no sample was finite.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the smallest and largest sampled y values.
    #[must_use]
    pub fn y_range(&self) -> Option<[f64; 2]> {
        self.points().fold(None, |range, [_, y]| match range {
            None => Some([y, y]),
            Some([lo, hi]) => Some([lo.min(y), hi.max(y)]),
        })
    }
}
