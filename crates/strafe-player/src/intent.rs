//! Turns raw stick input and the aim button into movement intent.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use strafe_math::rotate;
use strafe_movement::{MovementController, MovementError};

/// Top speeds for the two movement modes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerIntent {
    /// Top speed while running (m/s).
    pub run_top_speed: f32,
    /// Top speed while aiming (m/s).
    pub aim_walk_top_speed: f32,
}

impl Default for PlayerIntent {
    fn default() -> Self {
        Self {
            run_top_speed: 5.0,
            aim_walk_top_speed: 2.0,
        }
    }
}

/// Movement input for one tick, ready for the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementIntent {
    /// World-space planar input, length at most one.
    pub input: Vec2,
    pub top_speed: f32,
    pub aiming: bool,
}

impl MovementIntent {
    /// Pushes the top speed into `controller` when it changed.
    pub fn apply_top_speed(&self, controller: &mut MovementController) -> Result<(), MovementError> {
        if controller.planner().settings().top_speed != self.top_speed {
            controller.set_top_speed(self.top_speed)?;
        }
        Ok(())
    }
}

impl PlayerIntent {
    pub fn top_speed(&self, aiming: bool) -> f32 {
        if aiming {
            self.aim_walk_top_speed
        } else {
            self.run_top_speed
        }
    }

    /// Rotates camera-relative `raw_input` into world space.
    ///
    /// `camera_yaw` is the camera pivot's heading in degrees; a yaw of 90
    /// looks down `+x`, so pushing the stick forward then moves along `+x`.
    pub fn resolve(&self, raw_input: Vec2, camera_yaw: f32, aiming: bool) -> MovementIntent {
        MovementIntent {
            input: camera_relative(raw_input, camera_yaw),
            top_speed: self.top_speed(aiming),
            aiming,
        }
    }
}

/// Rotates stick input by the camera heading (degrees), clamping its length to one.
pub fn camera_relative(raw_input: Vec2, camera_yaw: f32) -> Vec2 {
    rotate(raw_input.clamp_length_max(1.0), -camera_yaw.to_radians())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strafe_movement::{
        AvoidanceSettings, CapsuleShape, MovementSettings, VelocityPlanner,
    };

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_forward_follows_camera_heading() {
        assert!(close(camera_relative(Vec2::Y, 0.0), Vec2::Y));
        assert!(close(camera_relative(Vec2::Y, 90.0), Vec2::X));
        assert!(close(camera_relative(Vec2::X, 90.0), Vec2::NEG_Y));
        assert!(close(camera_relative(Vec2::Y, 180.0), Vec2::NEG_Y));
    }

    #[test]
    fn test_input_length_is_clamped() {
        let input = camera_relative(Vec2::new(1.0, 1.0), 30.0);
        assert!((input.length() - 1.0).abs() < 1e-5);
        assert_eq!(camera_relative(Vec2::ZERO, 45.0), Vec2::ZERO);
    }

    #[test]
    fn test_aiming_selects_walk_speed() {
        let intent = PlayerIntent::default();
        assert_eq!(intent.resolve(Vec2::Y, 0.0, false).top_speed, 5.0);
        let aiming = intent.resolve(Vec2::Y, 0.0, true);
        assert_eq!(aiming.top_speed, 2.0);
        assert!(aiming.aiming);
    }

    #[test]
    fn test_apply_top_speed() {
        let planner = VelocityPlanner::new(MovementSettings::default(), 0.02).unwrap();
        let mut controller =
            MovementController::new(planner, AvoidanceSettings::default(), CapsuleShape::default())
                .unwrap();
        let intent = PlayerIntent::default().resolve(Vec2::Y, 0.0, true);
        intent.apply_top_speed(&mut controller).unwrap();
        assert_eq!(controller.planner().settings().top_speed, 2.0);
    }

    #[test]
    fn test_ron_partial() {
        let intent: PlayerIntent = ron::from_str("(aim_walk_top_speed: 1.5)").unwrap();
        assert_eq!(intent.aim_walk_top_speed, 1.5);
        assert_eq!(intent.run_top_speed, 5.0);
    }
}
