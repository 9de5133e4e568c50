//! A static world of analytic obstacles answering [`SpatialQuery`] calls.

use glam::{Vec2, Vec3};
use strafe_math::{flatten, unflatten};
use strafe_movement::{CapsuleCast, LayerMask, QueryHit, Ray, SpatialQuery};
use tracing::debug;

use crate::sweep::{PlanarHit, ray_segment, sweep_circle_circle, sweep_circle_segment};

/// Footprint of a vertical obstacle in the `(x, z)` plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Footprint {
    /// A vertical cylinder.
    Pillar { center: Vec2, radius: f32 },
    /// A vertical wall of zero thickness between two points.
    Wall { start: Vec2, end: Vec2 },
}

/// One static obstacle: a footprint extruded between two heights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub footprint: Footprint,
    /// Lowest point of the extrusion.
    pub bottom: f32,
    /// Highest point of the extrusion.
    pub top: f32,
    pub layers: LayerMask,
}

impl Obstacle {
    /// A pillar of unbounded height on the obstacle layer.
    pub fn pillar(center: Vec2, radius: f32) -> Self {
        Self {
            footprint: Footprint::Pillar { center, radius },
            bottom: f32::NEG_INFINITY,
            top: f32::INFINITY,
            layers: LayerMask::OBSTACLE,
        }
    }

    /// A wall of unbounded height on the obstacle layer.
    pub fn wall(start: Vec2, end: Vec2) -> Self {
        Self {
            footprint: Footprint::Wall { start, end },
            bottom: f32::NEG_INFINITY,
            top: f32::INFINITY,
            layers: LayerMask::OBSTACLE,
        }
    }

    /// Limits the extrusion to `bottom..=top`.
    pub fn with_extent(mut self, bottom: f32, top: f32) -> Self {
        self.bottom = bottom.min(top);
        self.top = top.max(bottom);
        self
    }

    pub fn on_layers(mut self, layers: LayerMask) -> Self {
        self.layers = layers;
        self
    }

    fn overlaps_height(&self, low: f32, high: f32) -> bool {
        low <= self.top && high >= self.bottom
    }

    fn sweep(&self, start: Vec2, direction: Vec2, radius: f32, max: f32) -> Option<PlanarHit> {
        match self.footprint {
            Footprint::Pillar {
                center,
                radius: pillar_radius,
            } => sweep_circle_circle(start, direction, radius, center, pillar_radius, max),
            Footprint::Wall { start: a, end: b } => {
                sweep_circle_segment(start, direction, radius, a, b, max)
            }
        }
    }

    /// Hit of a 3D ray against the obstacle's sides. `direction` is unit
    /// length, so the returned distance is in world units.
    fn raycast(&self, origin: Vec3, direction: Vec3, max: f32) -> Option<QueryHit> {
        let o = flatten(origin);
        let d = flatten(direction);
        if d.length_squared() < 1e-12 {
            return None;
        }

        let (t, normal) = match self.footprint {
            Footprint::Pillar { center, radius } => {
                let m = o - center;
                let a = d.length_squared();
                let b = m.dot(d);
                let c = m.length_squared() - radius * radius;
                if c < 0.0 {
                    return None;
                }
                let discriminant = b * b - a * c;
                if discriminant < 0.0 {
                    return None;
                }
                let t = (-b - discriminant.sqrt()) / a;
                let normal = (o + d * t - center).normalize_or_zero();
                (t, normal)
            }
            Footprint::Wall { start, end } => {
                let (t, _) = ray_segment(o, d, start, end)?;
                let mut normal = (end - start).perp().normalize_or_zero();
                if normal.dot(d) > 0.0 {
                    normal = -normal;
                }
                (t, normal)
            }
        };

        if t < 0.0 || t > max {
            return None;
        }
        let point = origin + direction * t;
        if point.y < self.bottom || point.y > self.top {
            return None;
        }
        Some(QueryHit {
            point,
            normal: unflatten(normal),
            distance: t,
        })
    }
}

/// Horizontal ground plane, hit only from above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundPlane {
    pub height: f32,
    pub layers: LayerMask,
}

/// A flat level with pillars and walls.
///
/// Capsule casts are treated as horizontal sweeps: the cast direction's
/// vertical component is dropped and the ground plane is not swept
/// against. Raycasts hit the ground plane from above and obstacle sides.
#[derive(Debug, Clone, Default)]
pub struct ObstacleWorld {
    ground: Option<GroundPlane>,
    obstacles: Vec<Obstacle>,
}

impl ObstacleWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a ground plane at `height` on the ground layer.
    pub fn with_ground(mut self, height: f32) -> Self {
        self.ground = Some(GroundPlane {
            height,
            layers: LayerMask::GROUND,
        });
        self
    }

    pub fn with_obstacle(mut self, obstacle: Obstacle) -> Self {
        self.add(obstacle);
        self
    }

    pub fn add(&mut self, obstacle: Obstacle) {
        debug!(footprint = ?obstacle.footprint, layers = obstacle.layers.0, "obstacle added");
        self.obstacles.push(obstacle);
    }

    pub fn ground(&self) -> Option<&GroundPlane> {
        self.ground.as_ref()
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    fn ground_hit(&self, origin: Vec3, direction: Vec3, ray: &Ray) -> Option<QueryHit> {
        let ground = self.ground.filter(|g| ray.layers.intersects(g.layers))?;
        if direction.y >= 0.0 || origin.y < ground.height {
            return None;
        }
        let t = (origin.y - ground.height) / -direction.y;
        (t <= ray.max_distance).then(|| QueryHit {
            point: origin + direction * t,
            normal: Vec3::Y,
            distance: t,
        })
    }
}

impl SpatialQuery for ObstacleWorld {
    fn capsule_cast(&self, cast: &CapsuleCast) -> Option<QueryHit> {
        let direction = flatten(cast.direction).normalize_or_zero();
        if direction == Vec2::ZERO {
            return None;
        }
        let start = flatten(cast.bottom);
        let low = cast.top.y.min(cast.bottom.y) - cast.radius;
        let high = cast.top.y.max(cast.bottom.y) + cast.radius;
        let middle = (cast.top.y + cast.bottom.y) / 2.0;

        let mut best: Option<(PlanarHit, &Obstacle)> = None;
        for obstacle in &self.obstacles {
            if !cast.layers.intersects(obstacle.layers) || !obstacle.overlaps_height(low, high) {
                continue;
            }
            let Some(hit) = obstacle.sweep(start, direction, cast.radius, cast.max_distance) else {
                continue;
            };
            if best.is_none_or(|(b, _)| hit.distance < b.distance) {
                best = Some((hit, obstacle));
            }
        }

        best.map(|(hit, obstacle)| {
            let y = middle.clamp(obstacle.bottom, obstacle.top);
            QueryHit {
                point: Vec3::new(hit.point.x, y, hit.point.y),
                normal: unflatten(hit.normal),
                distance: hit.distance,
            }
        })
    }

    fn raycast(&self, ray: &Ray) -> Option<QueryHit> {
        let direction = ray.direction.normalize_or_zero();
        if direction == Vec3::ZERO {
            return None;
        }

        let mut best = self.ground_hit(ray.origin, direction, ray);
        for obstacle in &self.obstacles {
            if !ray.layers.intersects(obstacle.layers) {
                continue;
            }
            if let Some(hit) = obstacle.raycast(ray.origin, direction, ray.max_distance)
                && best.is_none_or(|b| hit.distance < b.distance)
            {
                best = Some(hit);
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "world_tests.rs"]
mod tests;
