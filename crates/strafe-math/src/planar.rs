//! Conversions between 3D world vectors and the horizontal movement plane,
//! plus the small set of planar vector operations the movement core needs.

use glam::{Quat, Vec2, Vec3};

/// Drops the vertical component: `(x, y, z) -> (x, z)`.
#[inline]
pub fn flatten(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Lifts a planar vector back into 3D with zero height: `(x, y) -> (x, 0, y)`.
#[inline]
pub fn unflatten(v: Vec2) -> Vec3 {
    Vec3::new(v.x, 0.0, v.y)
}

/// Zeroes the vertical component of a velocity, keeping it 3D.
#[inline]
pub fn to_planar_velocity(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Moves `current` toward `target` by at most `max_delta`.
///
/// Returns `target` exactly once it is within reach, so repeated calls
/// settle without overshooting. `max_delta` may be `f32::INFINITY`.
pub fn move_towards(current: Vec2, target: Vec2, max_delta: f32) -> Vec2 {
    let delta = target - current;
    let distance = delta.length();
    if distance == 0.0 || (max_delta >= 0.0 && distance <= max_delta) {
        return target;
    }
    current + delta / distance * max_delta
}

/// Signed angle in radians that rotates `from` onto `to`, in `[-PI, PI]`.
///
/// Positive means counter-clockwise in the `(x, y)` plane. Returns `0.0`
/// when either vector has zero length. A result of exactly zero (or PI)
/// is reported as non-negative.
pub fn signed_angle(from: Vec2, to: Vec2) -> f32 {
    let denominator = (from.length_squared() * to.length_squared()).sqrt();
    if denominator < 1e-15 {
        return 0.0;
    }
    let cos = (from.dot(to) / denominator).clamp(-1.0, 1.0);
    let unsigned = cos.acos();
    if from.perp_dot(to) < 0.0 {
        -unsigned
    } else {
        unsigned
    }
}

/// Rotates a planar vector counter-clockwise by `radians`.
#[inline]
pub fn rotate(v: Vec2, radians: f32) -> Vec2 {
    Vec2::from_angle(radians).rotate(v)
}

/// Rotates a world vector about the +Y axis by `radians`.
///
/// Viewed in the `(x, z)` plane this is a clockwise turn: `+Z` rotates
/// toward `+X`.
#[inline]
pub fn rotate_about_up(v: Vec3, radians: f32) -> Vec3 {
    Quat::from_rotation_y(radians) * v
}
