//! Spatial query interface the movement core uses to see the world.
//!
//! The controller never owns collision geometry. Hosts implement
//! [`SpatialQuery`] over whatever physics representation they have; the
//! `strafe-physics` crate provides an analytic implementation.

use std::ops::BitOr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Bit set of collision layers used to filter queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Matches nothing.
    pub const NONE: Self = Self(0);
    /// Walkable ground the controller snaps onto.
    pub const GROUND: Self = Self(1 << 0);
    /// Walls, pillars and props that steering avoids.
    pub const OBSTACLE: Self = Self(1 << 1);
    /// Things that can be shot.
    pub const TARGET: Self = Self(1 << 2);
    /// Matches everything.
    pub const ALL: Self = Self(u32::MAX);

    /// True if every bit of `other` is set in `self`.
    #[inline]
    pub fn contains(self, other: LayerMask) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if `self` and `other` share at least one bit.
    #[inline]
    pub fn intersects(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for LayerMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// A vertical capsule collider attached to the controlled entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapsuleShape {
    /// Offset of the capsule's center from the entity position.
    pub center: Vec3,
    /// Radius of the cylinder and end caps.
    pub radius: f32,
    /// Total height.
    pub height: f32,
}

impl Default for CapsuleShape {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            radius: 0.4,
            height: 1.8,
        }
    }
}

impl CapsuleShape {
    /// Upper and lower end points of the capsule placed at `position`.
    pub fn end_points(&self, position: Vec3) -> (Vec3, Vec3) {
        let middle = position + self.center;
        let half = Vec3::Y * (self.height / 2.0);
        (middle + half, middle - half)
    }

    /// Entity position that puts the bottom of the capsule on `ground_point`.
    pub fn position_on_ground(&self, ground_point: Vec3) -> Vec3 {
        ground_point + Vec3::Y * (self.height / 2.0) - self.center
    }
}

/// A capsule swept along `direction` for up to `max_distance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapsuleCast {
    /// Upper end point of the capsule segment.
    pub top: Vec3,
    /// Lower end point of the capsule segment.
    pub bottom: Vec3,
    /// Sweep radius.
    pub radius: f32,
    /// Sweep direction. Implementations normalize it.
    pub direction: Vec3,
    /// Farthest distance to report hits at.
    pub max_distance: f32,
    /// Only colliders on these layers are considered.
    pub layers: LayerMask,
}

/// A ray with a length limit and layer filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Direction. Implementations normalize it.
    pub direction: Vec3,
    /// Farthest distance to report hits at; may be `f32::INFINITY`.
    pub max_distance: f32,
    /// Only colliders on these layers are considered.
    pub layers: LayerMask,
}

impl Ray {
    /// A ray pointing straight down.
    pub fn down(origin: Vec3, max_distance: f32, layers: LayerMask) -> Self {
        Self {
            origin,
            direction: Vec3::NEG_Y,
            max_distance,
            layers,
        }
    }
}

/// The first contact of a cast or ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryHit {
    /// Contact point on the hit surface.
    pub point: Vec3,
    /// Unit surface normal at the contact, pointing out of the surface.
    pub normal: Vec3,
    /// Distance travelled along the query direction before contact.
    pub distance: f32,
}

/// Synchronous collision queries against the host's world.
pub trait SpatialQuery {
    /// Sweeps a capsule and returns the first contact, if any.
    fn capsule_cast(&self, cast: &CapsuleCast) -> Option<QueryHit>;

    /// Casts a ray and returns the first contact, if any.
    fn raycast(&self, ray: &Ray) -> Option<QueryHit>;
}

impl<T: SpatialQuery + ?Sized> SpatialQuery for &T {
    fn capsule_cast(&self, cast: &CapsuleCast) -> Option<QueryHit> {
        (**self).capsule_cast(cast)
    }

    fn raycast(&self, ray: &Ray) -> Option<QueryHit> {
        (**self).raycast(ray)
    }
}

/// A world with nothing in it.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyWorld;

impl SpatialQuery for EmptyWorld {
    fn capsule_cast(&self, _cast: &CapsuleCast) -> Option<QueryHit> {
        None
    }

    fn raycast(&self, _ray: &Ray) -> Option<QueryHit> {
        None
    }
}
