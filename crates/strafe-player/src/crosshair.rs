//! Crosshair fade and spread.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use strafe_easing::curves::ease_in_circ;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrosshairSettings {
    /// Seconds to fade fully in or out.
    pub appear_duration: f32,
    /// Seconds for the spread to go from steady to fully unsteady.
    pub unsteady_duration: f32,
    /// Arm offset at full unsteadiness, in screen units.
    pub displacement: f32,
    /// Unsteadiness added by each shot.
    pub shot_kick: f32,
}

impl Default for CrosshairSettings {
    fn default() -> Self {
        Self {
            appear_duration: 0.15,
            unsteady_duration: 0.5,
            displacement: 20.0,
            shot_kick: 0.5,
        }
    }
}

/// Crosshair animation state. Visible and tightening while aiming, fading
/// and spreading otherwise.
#[derive(Clone, Debug)]
pub struct Crosshair {
    pub settings: CrosshairSettings,
    appear: f32,
    unsteadiness: f32,
}

impl Crosshair {
    pub fn new(settings: CrosshairSettings) -> Self {
        Self {
            settings,
            appear: 0.0,
            unsteadiness: 0.0,
        }
    }

    pub fn update(&mut self, aiming: bool, dt: f32) {
        self.appear = advance(self.appear, aiming, dt, self.settings.appear_duration);
        self.unsteadiness = advance(
            self.unsteadiness,
            !aiming,
            dt,
            self.settings.unsteady_duration,
        );
    }

    /// Widens the spread after firing.
    pub fn register_shot(&mut self) {
        self.unsteadiness = (self.unsteadiness + self.settings.shot_kick).clamp(0.0, 1.0);
    }

    /// Opacity in `0..=1`.
    pub fn alpha(&self) -> f32 {
        self.appear
    }

    /// Linear unsteadiness in `0..=1`.
    pub fn unsteadiness(&self) -> f32 {
        self.unsteadiness
    }

    /// How far each arm sits from its rest position.
    pub fn arm_offset(&self) -> f32 {
        self.settings.displacement * ease_in_circ(f64::from(self.unsteadiness)) as f32
    }

    /// Offsets of the top, right, bottom and left arms.
    pub fn arm_offsets(&self) -> [Vec2; 4] {
        let d = self.arm_offset();
        [Vec2::Y * d, Vec2::X * d, Vec2::NEG_Y * d, Vec2::NEG_X * d]
    }
}

/// Moves `progress` toward one (`rising`) or zero over `duration` seconds.
fn advance(progress: f32, rising: bool, dt: f32, duration: f32) -> f32 {
    let target = if rising { 1.0 } else { 0.0 };
    if duration <= 0.0 {
        return target;
    }
    let step = dt / duration;
    let delta = if rising { step } else { -step };
    (progress + delta).clamp(0.0, 1.0)
}
