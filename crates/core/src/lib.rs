//! Core traits for the Bisector workspace.
//!
//! This crate defines the shared abstractions that the solver, the expression
//! parser, and the presentation crates build on:
//!
//! - [`Function`]: an opaque callable that maps a real number to a real number
//! - [`Observer`]: receives solver events as they happen

mod function;
mod observer;

pub use function::Function;
pub use observer::Observer;
