//! Closest-point and distance queries between a 2D line and the origin.

use glam::Vec2;

/// Returns the point on the line through `line_origin` along `line_direction`
/// that lies closest to the origin.
///
/// `line_direction` does not need to be normalized. A zero direction has no
/// line to project onto, so the line origin itself is returned. A direction
/// with `x == 0` describes a vertical line, whose closest point is its
/// x-axis intercept `(line_origin.x, 0)`.
pub fn line_point_closest_to_origin(line_origin: Vec2, line_direction: Vec2) -> Vec2 {
    if line_direction == Vec2::ZERO {
        return line_origin;
    }

    if line_direction.x == 0.0 {
        return Vec2::new(line_origin.x, 0.0);
    }

    // Project the origin onto the line. This is the minimum of
    // |line_origin + t * d|^2, reached at t = -(line_origin . d) / (d . d).
    let t = -line_origin.dot(line_direction) / line_direction.length_squared();
    line_origin + line_direction * t
}

/// Returns the two points on the line that lie exactly `distance` away from
/// the origin, or `None` if the line never gets that far out (or the
/// direction is zero).
///
/// The first point is the one further along the positive x axis; for a
/// vertical line it is the one further along the positive y axis. When the
/// line is tangent to the circle both points coincide.
pub fn line_points_at_distance_from_origin(
    line_origin: Vec2,
    line_direction: Vec2,
    distance: f32,
) -> Option<(Vec2, Vec2)> {
    if line_direction == Vec2::ZERO || distance < 0.0 {
        return None;
    }

    let closest = line_point_closest_to_origin(line_origin, line_direction);
    let half_chord_sq = distance * distance - closest.length_squared();
    if half_chord_sq < 0.0 {
        return None;
    }
    let half_chord = half_chord_sq.sqrt();

    let mut along = line_direction.normalize();
    if along.x < 0.0 || (along.x == 0.0 && along.y < 0.0) {
        along = -along;
    }

    Some((closest + along * half_chord, closest - along * half_chord))
}
