/// A real-valued function of one real variable.
///
/// Solvers only ever call a `Function`; they never inspect or mutate it.
/// Evaluation is infallible by contract: points outside the function's domain
/// should produce a non-finite value (`NaN` or `±inf`) instead of panicking,
/// which lets the caller decide how to treat them.
///
/// Any `Fn(f64) -> f64` closure or function pointer is a `Function`.
pub trait Function {
    /// Evaluates the function at `x`.
    fn call(&self, x: f64) -> f64;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    fn call(&self, x: f64) -> f64 {
        self(x)
    }
}
