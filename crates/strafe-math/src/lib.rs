//! Planar geometry helpers for the Strafe movement core.
//!
//! Everything here works on the horizontal plane: a [`glam::Vec3`] is
//! flattened to a [`glam::Vec2`] by taking its `x` and `z` components.

mod line;
mod planar;

pub use line::{line_point_closest_to_origin, line_points_at_distance_from_origin};
pub use planar::{
    flatten, move_towards, rotate, rotate_about_up, signed_angle, to_planar_velocity, unflatten,
};
