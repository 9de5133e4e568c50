//! Obstacle steering: bends the movement input around obstacles ahead.
//!
//! A capsule is swept along the current velocity for as far as the entity
//! would travel before stopping, plus a look-ahead margin. When it hits
//! something the player is not deliberately walking into, the probe
//! direction is turned away from the obstacle in small steps until a probe
//! comes back clear or the turn exceeds the steering budget.

use std::f32::consts::FRAC_PI_2;

use glam::{Vec2, Vec3};
use strafe_math::{flatten, rotate_about_up, signed_angle};
use tracing::trace;

use crate::query::{CapsuleCast, CapsuleShape, LayerMask, QueryHit, SpatialQuery};
use crate::settings::AvoidanceSettings;

/// Upper bound on probes per tick. The angle budget normally ends the
/// search long before this.
pub const MAX_STEERING_ITERATIONS: usize = 64;

/// Probes are slightly thinner than the collider so obstacles already
/// touching it still register.
pub const PROBE_RADIUS_SCALE: f32 = 0.99;

/// One probe of the steering search. Built per tick, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringQuery {
    /// Entity position the probe starts from.
    pub origin: Vec3,
    /// Collider the probe is shaped after.
    pub capsule: CapsuleShape,
    /// World-space probe direction. Only its planar part matters.
    pub direction: Vec3,
    /// How far to sweep.
    pub distance: f32,
    /// Layers the probe collides with.
    pub layers: LayerMask,
}

impl SteeringQuery {
    /// The capsule cast this probe performs.
    pub fn to_cast(&self) -> CapsuleCast {
        let (top, bottom) = self.capsule.end_points(self.origin);
        CapsuleCast {
            top,
            bottom,
            radius: self.capsule.radius * PROBE_RADIUS_SCALE,
            direction: self.direction,
            max_distance: self.distance,
            layers: self.layers,
        }
    }

    pub fn cast<Q: SpatialQuery + ?Sized>(&self, world: &Q) -> Option<QueryHit> {
        world.capsule_cast(&self.to_cast())
    }
}

/// Result of a steering attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringOutcome {
    /// Whether a clear direction was found.
    pub did_steer: bool,
    /// The adjusted unit input when steering succeeded, otherwise the
    /// original input unchanged.
    pub input: Vec2,
    /// Total turn applied, in radians. Zero when not steering.
    pub deviation: f32,
}

impl SteeringOutcome {
    fn unchanged(input: Vec2) -> Self {
        Self {
            did_steer: false,
            input,
            deviation: 0.0,
        }
    }
}

/// Looks for a movement direction that avoids the obstacle ahead.
///
/// `velocity` is the velocity the planner just produced and
/// `stopping_distance` how far the entity would travel decelerating from
/// it. The search turns consistently toward one side, chosen from the
/// angle between `movement_input` and the obstacle surface, and gives up
/// once the accumulated turn exceeds `settings.allowed_steering_angle`.
pub fn try_steer<Q: SpatialQuery + ?Sized>(
    world: &Q,
    position: Vec3,
    capsule: &CapsuleShape,
    velocity: Vec3,
    movement_input: Vec2,
    settings: &AvoidanceSettings,
    stopping_distance: f32,
) -> SteeringOutcome {
    let planar_velocity = flatten(velocity);
    if planar_velocity == Vec2::ZERO {
        return SteeringOutcome::unchanged(movement_input);
    }

    let mut query = SteeringQuery {
        origin: position,
        capsule: *capsule,
        direction: Vec3::new(planar_velocity.x, 0.0, planar_velocity.y),
        distance: stopping_distance + settings.detection_distance,
        layers: settings.obstacle_layers,
    };

    let Some(first_hit) = query.cast(world) else {
        return SteeringOutcome::unchanged(movement_input);
    };

    let into_surface = -flatten(first_hit.normal);
    let angle_to_wall = signed_angle(movement_input, into_surface);
    if angle_to_wall.abs() <= settings.minimum_surface_angle.to_radians() {
        trace!(
            angle = angle_to_wall.to_degrees(),
            "walking into surface, not steering"
        );
        return SteeringOutcome::unchanged(movement_input);
    }

    let side = angle_to_wall.signum();
    let probe_radius = capsule.radius * PROBE_RADIUS_SCALE;
    let angle_error = settings.allowed_angle_error.to_radians();
    let budget = settings.allowed_steering_angle.to_radians();

    let mut deviation = 0.0;
    let mut hit_point = first_hit.point;

    for _ in 0..MAX_STEERING_ITERATIONS {
        let hit_distance = flatten(position - hit_point).length();
        let clearance = if hit_distance > f32::EPSILON {
            (probe_radius / hit_distance).atan()
        } else {
            FRAC_PI_2
        };
        let step = (clearance + angle_error).abs();

        deviation += step;
        if deviation > budget {
            break;
        }

        query.direction = rotate_about_up(query.direction, side * step);
        query.distance = hit_distance;

        match query.cast(world) {
            None => {
                let input = flatten(query.direction).normalize_or_zero();
                trace!(
                    deviation = f32::to_degrees(deviation),
                    x = input.x,
                    y = input.y,
                    "steering around obstacle"
                );
                return SteeringOutcome {
                    did_steer: true,
                    input,
                    deviation,
                };
            }
            Some(hit) => hit_point = hit.point,
        }
    }

    trace!(
        deviation = f32::to_degrees(deviation),
        "no clear direction within steering budget"
    );
    SteeringOutcome::unchanged(movement_input)
}
