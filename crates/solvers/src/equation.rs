//! Solvers for equations of one real variable, finding `x` with `f(x) = 0`.
//!
//! A [`Function`] maps `x` to a residual `f(x)`. Solvers in this module drive
//! that residual toward zero.
//!
//! # Solvers
//!
//! - [`bisection`]: guaranteed convergence on a sign-change bracket
//!
//! [`Function`]: bisector_core::Function

pub mod bisection;
