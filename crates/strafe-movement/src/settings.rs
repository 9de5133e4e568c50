//! Tunable movement and obstacle-avoidance parameters.

use serde::{Deserialize, Serialize};
use strafe_easing::EasingProfile;

use crate::error::{MovementError, in_range, non_negative, positive};
use crate::query::LayerMask;

/// Speed curve parameters for one controlled entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementSettings {
    /// Planar speed reached with a full-magnitude movement input (m/s).
    pub top_speed: f32,
    /// Seconds from standing still to `top_speed`.
    pub time_to_reach_top_speed: f32,
    /// Seconds from `top_speed` to standing still.
    pub time_to_stop: f32,
    /// Curve the speed follows while accelerating.
    pub acceleration_profile: EasingProfile,
    /// Curve the speed follows while decelerating.
    pub deceleration_profile: EasingProfile,
    /// How strongly the previous velocity is held on to. `0` disables the
    /// limit; otherwise the velocity may change by at most
    /// `tick_duration / inertia_factor` per tick.
    pub inertia_factor: f32,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            top_speed: 5.0,
            time_to_reach_top_speed: 0.3,
            time_to_stop: 0.2,
            acceleration_profile: EasingProfile::EaseOutQuad,
            deceleration_profile: EasingProfile::EaseInQuad,
            inertia_factor: 0.0,
        }
    }
}

impl MovementSettings {
    /// Rejects values the planner cannot divide by or scale with.
    pub fn validate(&self) -> Result<(), MovementError> {
        positive("top_speed", self.top_speed)?;
        positive("time_to_reach_top_speed", self.time_to_reach_top_speed)?;
        positive("time_to_stop", self.time_to_stop)?;
        non_negative("inertia_factor", self.inertia_factor)?;
        Ok(())
    }
}

/// Obstacle steering parameters. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvoidanceSettings {
    /// Whether the controller steers around obstacles at all.
    pub enabled: bool,
    /// Obstacles are only avoided when the angle between the movement input
    /// and the surface (inverted normal) exceeds this. Smaller angles mean
    /// the player is walking into the surface on purpose.
    pub minimum_surface_angle: f32,
    /// Largest total deviation from the intended direction.
    pub allowed_steering_angle: f32,
    /// Extra angle added to every steering step. Larger values need fewer
    /// probes at the cost of wider detours.
    pub allowed_angle_error: f32,
    /// Look-ahead beyond the stopping distance, in meters.
    pub detection_distance: f32,
    /// Layers the forward probe collides with.
    pub obstacle_layers: LayerMask,
}

impl Default for AvoidanceSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            minimum_surface_angle: 20.0,
            allowed_steering_angle: 60.0,
            allowed_angle_error: 2.0,
            detection_distance: 1.0,
            obstacle_layers: LayerMask::OBSTACLE,
        }
    }
}

impl AvoidanceSettings {
    /// Rejects negative or non-finite angles and distances.
    pub fn validate(&self) -> Result<(), MovementError> {
        in_range("minimum_surface_angle", self.minimum_surface_angle, 0.0, 90.0)?;
        in_range(
            "allowed_steering_angle",
            self.allowed_steering_angle,
            0.0,
            180.0,
        )?;
        non_negative("allowed_angle_error", self.allowed_angle_error)?;
        non_negative("detection_distance", self.detection_distance)?;
        Ok(())
    }
}
