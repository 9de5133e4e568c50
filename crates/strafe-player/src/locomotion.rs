//! Animation parameters for the character model: heading, blend-tree
//! speeds, playback rate and the aim layer.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use strafe_math::to_planar_velocity;

/// Pitch, in degrees, of the authored aim-up and aim-down poses.
pub const VERTICAL_AIM_ANGLE: f32 = 60.0;

/// Below this planar speed the model keeps its heading while running.
pub const TURN_SPEED_THRESHOLD: f32 = 0.1;

/// Critically damped spring toward `target`, as used for camera and
/// animation smoothing. `velocity` is the spring's state.
pub fn smooth_damp(current: f32, target: f32, velocity: &mut f32, smooth_time: f32, dt: f32) -> f32 {
    let smooth_time = smooth_time.max(1e-4);
    if dt <= 0.0 {
        return current;
    }
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);
    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    // Never overshoot.
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = 0.0;
    }
    output
}

/// Shortest signed difference `target - current` in degrees, in `-180..=180`.
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let delta = (target - current).rem_euclid(360.0);
    if delta > 180.0 { delta - 360.0 } else { delta }
}

/// [`smooth_damp`] for angles in degrees, turning the short way round.
pub fn smooth_damp_angle(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    let target = current + delta_angle(current, target);
    smooth_damp(current, target, velocity, smooth_time, dt)
}

/// Heading in degrees (`0` faces `+z`, `90` faces `+x`) of a planar direction.
pub fn heading_of(direction: Vec3) -> f32 {
    direction.x.atan2(direction.z).to_degrees().rem_euclid(360.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionSettings {
    /// Ground covered per second by the walk cycle at playback rate one.
    pub walk_animation_speed: f32,
    /// Ground covered per second by the run cycle at playback rate one.
    pub run_animation_speed: f32,
    /// How quickly the model turns toward the aim point while aiming.
    pub walk_turning_speed: f32,
    /// How quickly the model turns toward the movement direction.
    pub run_turning_speed: f32,
    /// Smoothing time for the speed parameters while aiming.
    pub aim_smoothing: f32,
}

impl Default for LocomotionSettings {
    fn default() -> Self {
        Self {
            walk_animation_speed: 1.6,
            run_animation_speed: 5.0,
            walk_turning_speed: 12.0,
            run_turning_speed: 8.0,
            aim_smoothing: 0.1,
        }
    }
}

/// Parameters for the character's animation state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationParams {
    pub is_aiming: bool,
    /// Animation playback speed multiplier.
    pub playback_rate: f32,
    /// Velocity along the model's forward axis over top speed.
    pub forward_speed: f32,
    /// Velocity along the model's right axis over top speed.
    pub sideways_speed: f32,
    /// `-1` fully down to `1` fully up.
    pub aim_height: f32,
    /// Weight of the upper-body aim layer.
    pub aim_layer_weight: f32,
    /// Model heading in degrees.
    pub heading: f32,
}

/// Per-frame inputs to [`LocomotionAnimator::update`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocomotionInput {
    /// Current velocity of the character.
    pub velocity: Vec3,
    /// The movement controller's current top speed.
    pub top_speed: f32,
    pub aiming: bool,
    /// Direction from the model to what the player aims at.
    pub aim_direction: Vec3,
    /// Camera pitch in degrees, positive looking down.
    pub camera_pitch: f32,
}

#[derive(Clone, Debug)]
pub struct LocomotionAnimator {
    pub settings: LocomotionSettings,
    heading: f32,
    angular_velocity: f32,
    forward_speed: f32,
    forward_velocity: f32,
    sideways_speed: f32,
    sideways_velocity: f32,
}

impl LocomotionAnimator {
    pub fn new(settings: LocomotionSettings) -> Self {
        Self {
            settings,
            heading: 0.0,
            angular_velocity: 0.0,
            forward_speed: 0.0,
            forward_velocity: 0.0,
            sideways_speed: 0.0,
            sideways_velocity: 0.0,
        }
    }

    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// Unit vector the model faces.
    pub fn forward(&self) -> Vec3 {
        let h = self.heading.to_radians();
        Vec3::new(h.sin(), 0.0, h.cos())
    }

    /// Unit vector to the model's right.
    pub fn right(&self) -> Vec3 {
        let h = self.heading.to_radians();
        Vec3::new(h.cos(), 0.0, -h.sin())
    }

    pub fn update(&mut self, input: &LocomotionInput, dt: f32) -> AnimationParams {
        let s = self.settings;
        let velocity = to_planar_velocity(input.velocity);

        let (animation_speed, turning_speed) = if input.aiming {
            (s.walk_animation_speed, s.walk_turning_speed)
        } else {
            (s.run_animation_speed, s.run_turning_speed)
        };

        let turn_target = if input.aiming {
            Some(heading_of(to_planar_velocity(input.aim_direction)))
        } else if velocity.length() > TURN_SPEED_THRESHOLD {
            Some(heading_of(velocity))
        } else {
            None
        };
        if let Some(target) = turn_target {
            let next = smooth_damp_angle(
                self.heading,
                target,
                &mut self.angular_velocity,
                1.0 / turning_speed,
                dt,
            );
            self.heading = next.rem_euclid(360.0);
        }

        let mut forward_speed = velocity.dot(self.forward());
        let mut sideways_speed = velocity.dot(self.right());
        self.forward_speed = smooth_damp(
            self.forward_speed,
            forward_speed,
            &mut self.forward_velocity,
            s.aim_smoothing,
            dt,
        );
        self.sideways_speed = smooth_damp(
            self.sideways_speed,
            sideways_speed,
            &mut self.sideways_velocity,
            s.aim_smoothing,
            dt,
        );
        if input.aiming {
            forward_speed = self.forward_speed;
            sideways_speed = self.sideways_speed;
        }

        let top_speed = input.top_speed.max(f32::EPSILON);
        AnimationParams {
            is_aiming: input.aiming,
            playback_rate: input.top_speed / animation_speed,
            forward_speed: forward_speed / top_speed,
            sideways_speed: sideways_speed / top_speed,
            aim_height: -input.camera_pitch / VERTICAL_AIM_ANGLE,
            aim_layer_weight: if input.aiming { 1.0 } else { 0.0 },
            heading: self.heading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(velocity: Vec3, aiming: bool) -> LocomotionInput {
        LocomotionInput {
            velocity,
            top_speed: 5.0,
            aiming,
            aim_direction: Vec3::Z,
            camera_pitch: 0.0,
        }
    }

    #[test]
    fn test_smooth_damp_converges_without_overshoot() {
        let mut velocity = 0.0;
        let mut value = 0.0;
        for _ in 0..200 {
            value = smooth_damp(value, 10.0, &mut velocity, 0.2, 0.01);
            assert!(value <= 10.0);
        }
        assert!((value - 10.0).abs() < 1e-2);
    }

    #[test]
    fn test_delta_angle_wraps() {
        assert_eq!(delta_angle(350.0, 10.0), 20.0);
        assert_eq!(delta_angle(10.0, 350.0), -20.0);
        assert_eq!(delta_angle(0.0, 180.0), 180.0);
        assert_eq!(delta_angle(90.0, 90.0), 0.0);
    }

    #[test]
    fn test_smooth_damp_angle_takes_short_way() {
        let mut velocity = 0.0;
        let next = smooth_damp_angle(350.0, 10.0, &mut velocity, 0.1, 0.02);
        assert!(next > 350.0, "turned the long way: {next}");
        assert!(velocity > 0.0);
    }

    #[test]
    fn test_heading_of() {
        assert!((heading_of(Vec3::Z) - 0.0).abs() < 1e-5);
        assert!((heading_of(Vec3::X) - 90.0).abs() < 1e-5);
        assert!((heading_of(Vec3::NEG_Z) - 180.0).abs() < 1e-5);
        assert!((heading_of(Vec3::NEG_X) - 270.0).abs() < 1e-5);
    }

    #[test]
    fn test_running_turns_toward_velocity() {
        let mut anim = LocomotionAnimator::new(LocomotionSettings::default());
        let mut params = anim.update(&input(Vec3::new(5.0, 0.0, 0.0), false), 0.02);
        for _ in 0..200 {
            params = anim.update(&input(Vec3::new(5.0, 0.0, 0.0), false), 0.02);
        }
        assert!((params.heading - 90.0).abs() < 0.5);
        assert!((params.forward_speed - 1.0).abs() < 1e-2);
        assert!(params.sideways_speed.abs() < 1e-2);
        assert_eq!(params.playback_rate, 1.0);
        assert_eq!(params.aim_layer_weight, 0.0);
    }

    #[test]
    fn test_slow_running_keeps_heading() {
        let mut anim = LocomotionAnimator::new(LocomotionSettings::default());
        let params = anim.update(&input(Vec3::new(0.05, 0.0, 0.0), false), 0.02);
        assert_eq!(params.heading, 0.0);
        // Sideways drift relative to a model facing +z.
        assert!((params.sideways_speed - 0.01).abs() < 1e-5);
    }

    #[test]
    fn test_aiming_faces_aim_direction_and_strafes() {
        let mut anim = LocomotionAnimator::new(LocomotionSettings::default());
        let strafe = LocomotionInput {
            velocity: Vec3::new(2.0, 0.0, 0.0),
            top_speed: 2.0,
            aiming: true,
            aim_direction: Vec3::new(0.0, -0.5, 3.0),
            camera_pitch: -30.0,
        };
        let first = anim.update(&strafe, 0.02);
        assert_eq!(first.aim_layer_weight, 1.0);
        assert!((first.aim_height - 0.5).abs() < 1e-6);
        assert!((first.playback_rate - 2.0 / 1.6).abs() < 1e-5);
        // Smoothed: starts below the raw value.
        assert!(first.sideways_speed > 0.0 && first.sideways_speed < 1.0);

        let mut last = first;
        for _ in 0..100 {
            last = anim.update(&strafe, 0.02);
        }
        assert!(last.heading.abs() < 0.5 || (last.heading - 360.0).abs() < 0.5);
        assert!((last.sideways_speed - 1.0).abs() < 1e-2);
        assert!(last.forward_speed.abs() < 1e-2);
    }

    #[test]
    fn test_axes_are_perpendicular() {
        let mut anim = LocomotionAnimator::new(LocomotionSettings::default());
        anim.heading = 37.0;
        assert!(anim.forward().dot(anim.right()).abs() < 1e-6);
        assert!((anim.forward().cross(anim.right()) - Vec3::Y).length() < 1e-5);
    }
}
