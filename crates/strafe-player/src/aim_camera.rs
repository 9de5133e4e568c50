//! Over-the-shoulder camera: mouse look on a pivot, plus a smooth blend
//! between the running pose and the closer aiming pose.

use glam::{EulerRot, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use strafe_easing::bezier_smoothstep;

/// Camera placement relative to its pivot, with a field of view.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Offset from the pivot in pivot space.
    pub offset: Vec3,
    /// Vertical field of view in degrees.
    pub fov: f32,
}

impl CameraPose {
    /// Interpolates offset and field of view.
    pub fn lerp(&self, other: &CameraPose, t: f32) -> CameraPose {
        CameraPose {
            offset: self.offset.lerp(other.offset, t),
            fov: self.fov + (other.fov - self.fov) * t,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AimCameraSettings {
    /// Degrees of rotation per unit of look input per second while running.
    pub run_sensitivity: f32,
    /// Degrees of rotation per unit of look input per second while aiming.
    pub aim_sensitivity: f32,
    /// Seconds to move between the run and aim poses.
    pub transition_duration: f32,
    pub run_pose: CameraPose,
    pub aim_pose: CameraPose,
}

impl Default for AimCameraSettings {
    fn default() -> Self {
        Self {
            run_sensitivity: 120.0,
            aim_sensitivity: 60.0,
            transition_duration: 0.2,
            run_pose: CameraPose {
                offset: Vec3::new(0.5, 0.3, -3.0),
                fov: 60.0,
            },
            aim_pose: CameraPose {
                offset: Vec3::new(0.6, 0.2, -1.2),
                fov: 40.0,
            },
        }
    }
}

/// Live camera state.
#[derive(Clone, Debug)]
pub struct AimCamera {
    pub settings: AimCameraSettings,
    /// Pivot pitch in degrees, positive looks down, clamped to `-90..=90`.
    pitch: f32,
    /// Pivot yaw in degrees, positive turns toward `+x`.
    yaw: f32,
    /// Linear run-to-aim progress in `0..=1`.
    progress: f32,
}

impl AimCamera {
    pub fn new(settings: AimCameraSettings) -> Self {
        Self {
            settings,
            pitch: 0.0,
            yaw: 0.0,
            progress: 0.0,
        }
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Advances one frame: applies `look_delta` and moves the pose blend
    /// toward aiming or running.
    pub fn update(&mut self, look_delta: Vec2, aiming: bool, dt: f32) {
        self.look(look_delta, aiming, dt);
        self.advance_transition(aiming, dt);
    }

    /// Turns the pivot. Moving the look input up tilts the view up.
    pub fn look(&mut self, look_delta: Vec2, aiming: bool, dt: f32) {
        let sensitivity = if aiming {
            self.settings.aim_sensitivity
        } else {
            self.settings.run_sensitivity
        };
        let delta = look_delta * dt * sensitivity;
        self.pitch = (self.pitch - delta.y).clamp(-90.0, 90.0);
        self.yaw += delta.x;
    }

    fn advance_transition(&mut self, aiming: bool, dt: f32) {
        let duration = self.settings.transition_duration;
        let target = if aiming { 1.0 } else { 0.0 };
        if duration <= 0.0 {
            self.progress = target;
            return;
        }
        let step = dt / duration;
        let delta = if aiming { step } else { -step };
        self.progress = (self.progress + delta).clamp(0.0, 1.0);
    }

    /// Pivot orientation: yaw about `+y`, then pitch about the local `x`.
    pub fn pivot_rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            0.0,
        )
    }

    /// Direction the camera looks in.
    pub fn forward(&self) -> Vec3 {
        self.pivot_rotation() * Vec3::Z
    }

    /// The blended pose for the current transition progress.
    pub fn pose(&self) -> CameraPose {
        let t = bezier_smoothstep(self.progress);
        self.settings.run_pose.lerp(&self.settings.aim_pose, t)
    }

    /// World-space camera position for a pivot at `pivot_position`.
    pub fn world_position(&self, pivot_position: Vec3) -> Vec3 {
        pivot_position + self.pivot_rotation() * self.pose().offset
    }
}
