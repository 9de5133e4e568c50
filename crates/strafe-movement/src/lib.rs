//! Curve-driven planar movement for a capsule-shaped character.
//!
//! [`VelocityPlanner`] computes each tick's velocity from acceleration and
//! deceleration easing curves with an optional inertia limit.
//! [`steering::try_steer`] bends the movement input around obstacles found
//! through a host-provided [`SpatialQuery`], and [`MovementController`]
//! ties both together with position integration and ground snapping.

pub mod controller;
pub mod curves;
mod error;
pub mod planner;
pub mod query;
mod settings;
pub mod steering;

pub use controller::{MotionState, MovementController, MovementStep};
pub use curves::ScaledCurves;
pub use error::MovementError;
pub use planner::{VelocityPlanner, maximum_velocity_change, next_velocity};
pub use query::{
    CapsuleCast, CapsuleShape, EmptyWorld, LayerMask, QueryHit, Ray, SpatialQuery,
};
pub use settings::{AvoidanceSettings, MovementSettings};
pub use steering::{SteeringOutcome, SteeringQuery, try_steer};
