/// The x-range a curve is sampled over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    start: f64,
    end: f64,
}

impl Domain {
    /// Fraction of the bracket width added on each side by [`Domain::padded`].
    pub const PAD_FRACTION: f64 = 0.1;

    /// Padding used by [`Domain::padded`] when the bracket has zero width.
    pub const ZERO_WIDTH_PAD: f64 = 1.0;

    /// Creates a domain covering `[a, b]` in either order.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Creates a domain around the bracket `[a, b]` padded on each side by
    /// 10 % of its width, or by one unit if the width is zero.
    #[must_use]
    pub fn padded(a: f64, b: f64) -> Self {
        let width = (b - a).abs();
        #[allow(clippy::float_cmp)]
        let pad = if width == 0.0 {
            Self::ZERO_WIDTH_PAD
        } else {
            width * Self::PAD_FRACTION
        };
        let inner = Self::new(a, b);
        Self {
            start: inner.start - pad,
            end: inner.end + pad,
        }
    }

    /// Returns the bounds as `[start, end]`.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.start, self.end]
    }

    /// Returns true if `x` lies within the domain.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        (self.start..=self.end).contains(&x)
    }

    /// Returns `n` evenly spaced points from `start` to `end` inclusive.
    ///
    /// A single point is placed at `start`; zero points yields nothing.
    #[allow(clippy::cast_precision_loss)]
    pub fn linspace(&self, n: usize) -> impl Iterator<Item = f64> {
        let Self { start, end } = *self;
        let step = if n > 1 {
            (end - start) / (n - 1) as f64
        } else {
            0.0
        };
        (0..n).map(move |i| {
            if i + 1 == n && n > 1 {
                end
            } else {
                start + step * i as f64
            }
        })
    }
}
