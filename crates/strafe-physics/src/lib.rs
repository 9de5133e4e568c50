//! Deterministic analytic collision world for the Strafe movement core.
//!
//! [`ObstacleWorld`] holds a ground plane plus vertical pillars and walls and
//! implements [`strafe_movement::SpatialQuery`] exactly, without a physics
//! engine. It backs the demo scenarios and the controller tests.

pub mod sweep;
mod world;

pub use sweep::PlanarHit;
pub use world::{Footprint, GroundPlane, Obstacle, ObstacleWorld};
