//! Curve sampling and plotting for bisection results.
//!
//! A [`Figure`] holds everything needed to draw a solve: the function sampled
//! over a [`Domain`] slightly wider than the bracket, the root estimate, and
//! the midpoints the solver visited. Sampling tolerates functions that are
//! undefined or infinite at some points; those samples are dropped and split
//! the curve into separate [segments](Curve::segments).
//!
//! # Features
//!
//! - `gui`: Enables [`show`] for viewing a [`Figure`] in a native egui window.
//!   This feature adds dependencies on `eframe` and `egui_plot`.

mod curve;
mod domain;
mod figure;

#[cfg(feature = "gui")]
mod window;

pub use curve::Curve;
pub use domain::Domain;
pub use figure::Figure;

#[cfg(feature = "gui")]
pub use window::{ShowConfig, show};
