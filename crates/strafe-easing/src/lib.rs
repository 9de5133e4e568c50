//! Easing curve library: a fixed catalog of monotonic curves on `[0, 1]`,
//! each with its exact inverse and its definite integral from zero.
//!
//! The velocity planner reads speed off these curves (forward), finds how
//! far along a curve a given speed sits (inverse), and measures the
//! distance covered while following a curve (integral). Curves are
//! evaluated in `f64` so that steep ease-out tails still invert cleanly.

pub mod curves;
mod profile;

pub use curves::bezier_smoothstep;
pub use profile::{CurveFunctionSet, EasingProfile, UnknownProfileError};
