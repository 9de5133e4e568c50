//! Easing curves scaled to real speeds and durations.
//!
//! The raw curves live on the unit square. Here the x axis is stretched to
//! the acceleration or deceleration duration and the y axis to the top
//! speed, and inputs outside the stretched domain are pinned to the
//! boundary values.

use strafe_easing::{CurveFunctionSet, EasingProfile};

use crate::settings::MovementSettings;

/// Acceleration and deceleration curves for one set of movement settings.
///
/// The function tables are cached; [`ScaledCurves::set_acceleration_profile`]
/// and [`ScaledCurves::set_deceleration_profile`] are the only places they
/// are rebuilt.
#[derive(Debug, Clone, Copy)]
pub struct ScaledCurves {
    top_speed: f32,
    time_to_reach_top_speed: f32,
    time_to_stop: f32,
    acceleration_profile: EasingProfile,
    deceleration_profile: EasingProfile,
    acceleration: CurveFunctionSet,
    deceleration: CurveFunctionSet,
}

impl ScaledCurves {
    /// Binds the curves for `settings`. Settings are assumed validated.
    pub fn new(settings: &MovementSettings) -> Self {
        Self {
            top_speed: settings.top_speed,
            time_to_reach_top_speed: settings.time_to_reach_top_speed,
            time_to_stop: settings.time_to_stop,
            acceleration_profile: settings.acceleration_profile,
            deceleration_profile: settings.deceleration_profile,
            acceleration: settings.acceleration_profile.functions(),
            deceleration: settings.deceleration_profile.functions(),
        }
    }

    pub fn top_speed(&self) -> f32 {
        self.top_speed
    }

    pub fn acceleration_profile(&self) -> EasingProfile {
        self.acceleration_profile
    }

    pub fn deceleration_profile(&self) -> EasingProfile {
        self.deceleration_profile
    }

    pub(crate) fn set_top_speed(&mut self, top_speed: f32) {
        self.top_speed = top_speed;
    }

    pub(crate) fn set_durations(&mut self, time_to_reach_top_speed: f32, time_to_stop: f32) {
        self.time_to_reach_top_speed = time_to_reach_top_speed;
        self.time_to_stop = time_to_stop;
    }

    /// Rebinds the acceleration function table.
    pub fn set_acceleration_profile(&mut self, profile: EasingProfile) {
        self.acceleration_profile = profile;
        self.acceleration = profile.functions();
    }

    /// Rebinds the deceleration function table.
    pub fn set_deceleration_profile(&mut self, profile: EasingProfile) {
        self.deceleration_profile = profile;
        self.deceleration = profile.functions();
    }

    /// Speed after accelerating for `time` seconds from a standstill.
    pub fn acceleration(&self, time: f32) -> f32 {
        if time <= 0.0 {
            return 0.0;
        }
        if time >= self.time_to_reach_top_speed {
            return self.top_speed;
        }
        self.top_speed * eval(self.acceleration.forward, time / self.time_to_reach_top_speed)
    }

    /// Seconds of acceleration needed to reach `speed` from a standstill.
    pub fn inverse_acceleration(&self, speed: f32) -> f32 {
        if speed <= 0.0 {
            return 0.0;
        }
        if speed >= self.top_speed {
            return self.time_to_reach_top_speed;
        }
        self.time_to_reach_top_speed * eval(self.acceleration.inverse, speed / self.top_speed)
    }

    /// Speed when `time` seconds remain before coming to a stop.
    pub fn deceleration(&self, time: f32) -> f32 {
        if time <= 0.0 {
            return 0.0;
        }
        if time >= self.time_to_stop {
            return self.top_speed;
        }
        self.top_speed * eval(self.deceleration.forward, time / self.time_to_stop)
    }

    /// Seconds left before stopping when decelerating from `speed`.
    pub fn inverse_deceleration(&self, speed: f32) -> f32 {
        if speed <= 0.0 {
            return 0.0;
        }
        if speed >= self.top_speed {
            return self.time_to_stop;
        }
        self.time_to_stop * eval(self.deceleration.inverse, speed / self.top_speed)
    }

    /// Distance covered while decelerating to a stop from the curve position
    /// `time` seconds before stopping.
    ///
    /// Saturates at the full-curve distance `top_speed * time_to_stop *
    /// integral(1)`, so the result is continuous at the domain boundary.
    pub fn integral_deceleration(&self, time: f32) -> f32 {
        if time <= 0.0 {
            return 0.0;
        }
        let scale = self.top_speed * self.time_to_stop;
        if time >= self.time_to_stop {
            return scale * eval(self.deceleration.integral, 1.0);
        }
        scale * eval(self.deceleration.integral, time / self.time_to_stop)
    }
}

#[inline]
fn eval(f: fn(f64) -> f64, x: f32) -> f32 {
    f(f64::from(x)) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curves() -> ScaledCurves {
        ScaledCurves::new(&MovementSettings {
            top_speed: 4.0,
            time_to_reach_top_speed: 2.0,
            time_to_stop: 0.5,
            acceleration_profile: EasingProfile::EaseInQuad,
            deceleration_profile: EasingProfile::EaseInCubic,
            inertia_factor: 0.0,
        })
    }

    #[test]
    fn test_acceleration_scaling() {
        let c = curves();
        // Halfway through ease-in-quad: 4 * 0.25.
        assert!((c.acceleration(1.0) - 1.0).abs() < 1e-6);
        assert!((c.inverse_acceleration(1.0) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_clamps_outside_domain() {
        let c = curves();
        assert_eq!(c.acceleration(-1.0), 0.0);
        assert_eq!(c.acceleration(2.0), 4.0);
        assert_eq!(c.acceleration(10.0), 4.0);
        assert_eq!(c.inverse_acceleration(0.0), 0.0);
        assert_eq!(c.inverse_acceleration(9.0), 2.0);
        assert_eq!(c.deceleration(0.0), 0.0);
        assert_eq!(c.deceleration(0.7), 4.0);
        assert_eq!(c.inverse_deceleration(-3.0), 0.0);
        assert_eq!(c.inverse_deceleration(4.0), 0.5);
        assert_eq!(c.integral_deceleration(-0.1), 0.0);
    }

    #[test]
    fn test_integral_deceleration_is_continuous_at_boundary() {
        let c = curves();
        // Full cubic stop: 4 * 0.5 * 1/4.
        let full = c.integral_deceleration(0.5);
        assert!((full - 0.5).abs() < 1e-6);
        assert!((c.integral_deceleration(0.4999) - full).abs() < 1e-3);
        assert_eq!(c.integral_deceleration(3.0), full);
    }

    #[test]
    fn test_profile_setters_rebind_functions() {
        let mut c = curves();
        let before = c.acceleration(1.0);
        c.set_acceleration_profile(EasingProfile::EaseOutQuad);
        assert_eq!(c.acceleration_profile(), EasingProfile::EaseOutQuad);
        let after = c.acceleration(1.0);
        assert!((after - 3.0).abs() < 1e-6);
        assert!(after > before);

        c.set_deceleration_profile(EasingProfile::EaseOutSine);
        assert_eq!(c.deceleration_profile(), EasingProfile::EaseOutSine);
        let mid = c.deceleration(0.25);
        assert!((mid - 4.0 * (std::f32::consts::FRAC_PI_4).sin()).abs() < 1e-5);
    }
}
