//! Numerical solvers for the Bisector workspace.
//!
//! # Modules
//!
//! - [`equation`]: root finding for single-variable equations

pub mod equation;
