//! What the camera or a muzzle is pointing at.

use glam::Vec3;
use strafe_movement::{LayerMask, QueryHit, Ray, SpatialQuery};

/// How far away the aim point is placed when nothing is hit.
pub const MISS_DISTANCE: f32 = 1000.0;

/// The point along `forward` from `origin` that is being aimed at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimPoint {
    pub point: Vec3,
    /// The surface hit, if the ray found one.
    pub hit: Option<QueryHit>,
}

/// Casts an unbounded ray and returns the first hit on `layers`, or a point
/// [`MISS_DISTANCE`] ahead.
pub fn aim_point<Q: SpatialQuery + ?Sized>(
    world: &Q,
    origin: Vec3,
    forward: Vec3,
    layers: LayerMask,
) -> AimPoint {
    let forward = forward.normalize_or_zero();
    let hit = world.raycast(&Ray {
        origin,
        direction: forward,
        max_distance: f32::INFINITY,
        layers,
    });
    AimPoint {
        point: hit.map_or(origin + forward * MISS_DISTANCE, |h| h.point),
        hit,
    }
}
