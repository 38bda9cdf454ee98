use bisector_core::Function;
use bisector_solvers::equation::bisection::{IterationRecord, Solution};

use crate::{Curve, Domain};

/// Everything needed to draw one bisection solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// The function sampled around the bracket.
    pub curve: Curve,

    /// Root estimate to mark with a vertical line.
    pub root: Option<f64>,

    /// Finite `(mid, f(mid))` pairs visited by the solver.
    pub midpoints: Vec<[f64; 2]>,
}

impl Figure {
    /// Creates a figure with only a curve.
    #[must_use]
    pub fn new(curve: Curve) -> Self {
        Self {
            curve,
            root: None,
            midpoints: Vec::new(),
        }
    }

    /// Samples `function` around the bracket `[a, b]` and marks the solution.
    ///
    /// The curve covers [`Domain::padded`] so the bracket endpoints are
    /// visible, with [`Curve::DEFAULT_SAMPLES`] samples.
    pub fn from_solution<F>(function: &F, bracket: [f64; 2], solution: &Solution) -> Self
    where
        F: Function + ?Sized,
    {
        let [a, b] = bracket;
        let curve = Curve::sample(function, Domain::padded(a, b), Curve::DEFAULT_SAMPLES);
        Self::new(curve)
            .with_root(solution.root)
            .with_midpoints(&solution.trace)
    }

    /// Marks the root estimate.
    #[must_use]
    pub fn with_root(mut self, root: f64) -> Self {
        self.root = root.is_finite().then_some(root);
        self
    }

    /// Adds the finite midpoints of a trace.
    #[must_use]
    pub fn with_midpoints(mut self, trace: &[IterationRecord]) -> Self {
        self.midpoints = trace
            .iter()
            .filter(|record| record.f_mid.is_finite())
            .map(|record| [record.mid, record.f_mid])
            .collect();
        self
    }
}
