//! Planar sweep and intersection primitives.
//!
//! Every obstacle is a vertical extrusion, so a vertical capsule swept
//! horizontally touches it exactly when the capsule's circular footprint
//! touches the obstacle's footprint. These functions work on those
//! footprints in the `(x, z)` plane.
//!
//! Shapes the moving circle already overlaps at the start are not
//! reported, the same convention physics engines use for shape casts.

use glam::Vec2;

/// Contact found by a planar sweep or ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarHit {
    /// Distance along the (unit) direction before contact.
    pub distance: f32,
    /// Contact point on the obstacle's footprint.
    pub point: Vec2,
    /// Unit footprint normal at the contact, pointing toward the mover.
    pub normal: Vec2,
}

impl PlanarHit {
    /// Keeps whichever of two optional hits is closer.
    pub fn closer(a: Option<PlanarHit>, b: Option<PlanarHit>) -> Option<PlanarHit> {
        match (a, b) {
            (Some(a), Some(b)) => Some(if b.distance < a.distance { b } else { a }),
            (a, None) => a,
            (None, b) => b,
        }
    }
}

/// Sweeps a circle of `radius` from `start` along the unit `direction`
/// against a static circle.
pub fn sweep_circle_circle(
    start: Vec2,
    direction: Vec2,
    radius: f32,
    center: Vec2,
    obstacle_radius: f32,
    max_distance: f32,
) -> Option<PlanarHit> {
    let reach = radius + obstacle_radius;
    let m = start - center;
    let c = m.length_squared() - reach * reach;
    if c < 0.0 {
        return None;
    }
    let b = m.dot(direction);
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let t = -b - discriminant.sqrt();
    if !(0.0..=max_distance).contains(&t) {
        return None;
    }
    let offset = start + direction * t - center;
    let normal = if reach > 0.0 {
        offset / reach
    } else {
        -direction
    };
    Some(PlanarHit {
        distance: t,
        point: center + normal * obstacle_radius,
        normal,
    })
}

/// Sweeps a circle of `radius` from `start` along the unit `direction`
/// against the segment `a..b` (a wall footprint of zero thickness).
pub fn sweep_circle_segment(
    start: Vec2,
    direction: Vec2,
    radius: f32,
    a: Vec2,
    b: Vec2,
    max_distance: f32,
) -> Option<PlanarHit> {
    if distance_to_segment(start, a, b) < radius {
        return None;
    }

    let mut best = None;
    let edge = b - a;
    let face_normal = edge.perp().normalize_or_zero();
    if face_normal != Vec2::ZERO {
        // Only the side facing the mover can be reached first.
        let side = if face_normal.dot(start - a) >= 0.0 {
            face_normal
        } else {
            -face_normal
        };
        if side.dot(direction) < 0.0 {
            let offset = side * radius;
            if let Some((t, u)) = ray_segment(start, direction, a + offset, b + offset)
                && t <= max_distance
            {
                best = Some(PlanarHit {
                    distance: t,
                    point: a + edge * u,
                    normal: side,
                });
            }
        }
    }

    for end in [a, b] {
        let hit = sweep_circle_circle(start, direction, radius, end, 0.0, max_distance);
        best = PlanarHit::closer(best, hit);
    }
    best
}

/// Intersects the ray `origin + direction * t` (`t >= 0`) with the
/// segment `a..b`. Returns `(t, u)` where the hit is at `a + (b - a) * u`.
///
/// `direction` need not be normalized; `t` is in units of its length.
pub fn ray_segment(origin: Vec2, direction: Vec2, a: Vec2, b: Vec2) -> Option<(f32, f32)> {
    let edge = b - a;
    let denominator = direction.perp_dot(edge);
    if denominator.abs() < 1e-9 {
        return None;
    }
    let q = a - origin;
    let t = q.perp_dot(edge) / denominator;
    let u = q.perp_dot(direction) / denominator;
    (t >= 0.0 && (0.0..=1.0).contains(&u)).then_some((t, u))
}

/// Shortest distance from `point` to the segment `a..b`.
pub fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let edge = b - a;
    let length_squared = edge.length_squared();
    if length_squared == 0.0 {
        return point.distance(a);
    }
    let u = ((point - a).dot(edge) / length_squared).clamp(0.0, 1.0);
    point.distance(a + edge * u)
}
