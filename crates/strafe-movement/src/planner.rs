//! Per-tick velocity planning along acceleration and deceleration curves.
//!
//! The planner moves the current planar velocity toward the target velocity
//! (`input * top_speed`) along a straight line in velocity space. The point
//! on that line closest to zero velocity is the turning point: on the near
//! side the controller is still shedding speed it does not want, past it
//! the controller builds speed toward the target. The distance between the
//! current velocity and the turning point is a speed, which the inverse
//! curves turn into a position on the deceleration or acceleration curve.
//! One tick later on that curve gives the next speed.

use glam::{Vec2, Vec3};
use strafe_easing::EasingProfile;
use strafe_math::{flatten, line_point_closest_to_origin, move_towards, unflatten};
use tracing::{debug, warn};

use crate::curves::ScaledCurves;
use crate::error::{MovementError, non_negative, positive};
use crate::settings::MovementSettings;

/// Velocity planner for one entity: validated settings, the fixed tick
/// duration, the cached curve bindings, and the derived inertia limit.
#[derive(Debug, Clone)]
pub struct VelocityPlanner {
    settings: MovementSettings,
    tick_duration: f32,
    curves: ScaledCurves,
    maximum_velocity_change: f32,
}

impl VelocityPlanner {
    /// Creates a planner after validating `settings` and `tick_duration`.
    pub fn new(settings: MovementSettings, tick_duration: f32) -> Result<Self, MovementError> {
        settings
            .validate()
            .and_then(|()| positive("tick_duration", tick_duration))
            .inspect_err(|e| warn!(error = %e, "rejected movement settings"))?;

        debug!(
            top_speed = settings.top_speed,
            acceleration = %settings.acceleration_profile,
            deceleration = %settings.deceleration_profile,
            inertia = settings.inertia_factor,
            tick_duration,
            "velocity planner configured"
        );

        Ok(Self {
            curves: ScaledCurves::new(&settings),
            maximum_velocity_change: maximum_velocity_change(settings.inertia_factor, tick_duration),
            settings,
            tick_duration,
        })
    }

    pub fn settings(&self) -> &MovementSettings {
        &self.settings
    }

    pub fn tick_duration(&self) -> f32 {
        self.tick_duration
    }

    pub fn curves(&self) -> &ScaledCurves {
        &self.curves
    }

    /// Largest velocity change allowed per tick (`f32::INFINITY` without inertia).
    pub fn maximum_velocity_change(&self) -> f32 {
        self.maximum_velocity_change
    }

    /// Changes the top speed, e.g. when switching between running and aiming.
    pub fn set_top_speed(&mut self, top_speed: f32) -> Result<(), MovementError> {
        positive("top_speed", top_speed)?;
        self.settings.top_speed = top_speed;
        self.curves.set_top_speed(top_speed);
        Ok(())
    }

    /// Changes both curve durations.
    pub fn set_durations(
        &mut self,
        time_to_reach_top_speed: f32,
        time_to_stop: f32,
    ) -> Result<(), MovementError> {
        positive("time_to_reach_top_speed", time_to_reach_top_speed)?;
        positive("time_to_stop", time_to_stop)?;
        self.settings.time_to_reach_top_speed = time_to_reach_top_speed;
        self.settings.time_to_stop = time_to_stop;
        self.curves.set_durations(time_to_reach_top_speed, time_to_stop);
        Ok(())
    }

    /// Selects a new acceleration curve and rebinds its functions.
    pub fn set_acceleration_profile(&mut self, profile: EasingProfile) {
        debug!(%profile, "acceleration profile changed");
        self.settings.acceleration_profile = profile;
        self.curves.set_acceleration_profile(profile);
    }

    /// Selects a new deceleration curve and rebinds its functions.
    pub fn set_deceleration_profile(&mut self, profile: EasingProfile) {
        debug!(%profile, "deceleration profile changed");
        self.settings.deceleration_profile = profile;
        self.curves.set_deceleration_profile(profile);
    }

    /// Changes the inertia factor and recomputes the per-tick limit.
    pub fn set_inertia_factor(&mut self, inertia_factor: f32) -> Result<(), MovementError> {
        non_negative("inertia_factor", inertia_factor)?;
        self.settings.inertia_factor = inertia_factor;
        self.maximum_velocity_change = maximum_velocity_change(inertia_factor, self.tick_duration);
        Ok(())
    }

    /// Changes the tick duration and recomputes the per-tick limit.
    pub fn set_tick_duration(&mut self, tick_duration: f32) -> Result<(), MovementError> {
        positive("tick_duration", tick_duration)?;
        self.tick_duration = tick_duration;
        self.maximum_velocity_change =
            maximum_velocity_change(self.settings.inertia_factor, tick_duration);
        Ok(())
    }

    /// Computes the velocity for the next tick.
    ///
    /// `previous_velocity` is the planar velocity this planner produced last
    /// tick, `current_velocity` the entity's actual velocity (its `y` is
    /// ignored), and `movement_input` the unit (or zero) intent vector. The
    /// result has `y == 0`.
    pub fn next_velocity(
        &self,
        previous_velocity: Vec2,
        current_velocity: Vec3,
        movement_input: Vec2,
    ) -> Vec3 {
        plan_velocity(
            &self.curves,
            self.tick_duration,
            self.maximum_velocity_change,
            previous_velocity,
            current_velocity,
            movement_input,
        )
    }

    /// Distance travelled before standing still if the entity started
    /// decelerating now.
    pub fn stopping_distance(&self, velocity: Vec3) -> f32 {
        let speed = flatten(velocity).length();
        let x = self.curves.inverse_deceleration(speed);
        self.curves.integral_deceleration(x)
    }

    /// Where the entity would come to rest if it started decelerating now.
    pub fn stopping_position(&self, position: Vec3, velocity: Vec3) -> Vec3 {
        let direction = unflatten(flatten(velocity)).normalize_or_zero();
        position + direction * self.stopping_distance(velocity)
    }
}

/// `f32::INFINITY` for no inertia, otherwise `tick_duration / inertia_factor`.
pub fn maximum_velocity_change(inertia_factor: f32, tick_duration: f32) -> f32 {
    if inertia_factor == 0.0 {
        f32::INFINITY
    } else {
        1.0 / inertia_factor * tick_duration
    }
}

/// One-shot form of [`VelocityPlanner::next_velocity`] taking every
/// parameter explicitly. Prefer a long-lived planner, which binds the curve
/// functions once instead of per call.
///
/// Settings are not validated here; non-positive durations or speeds give
/// meaningless results.
#[allow(clippy::too_many_arguments)]
pub fn next_velocity(
    previous_velocity: Vec2,
    current_velocity: Vec3,
    movement_input: Vec2,
    top_speed: f32,
    time_to_reach_top_speed: f32,
    time_to_stop: f32,
    acceleration_profile: EasingProfile,
    deceleration_profile: EasingProfile,
    inertia_factor: f32,
    tick_duration: f32,
) -> Vec3 {
    let curves = ScaledCurves::new(&MovementSettings {
        top_speed,
        time_to_reach_top_speed,
        time_to_stop,
        acceleration_profile,
        deceleration_profile,
        inertia_factor,
    });
    plan_velocity(
        &curves,
        tick_duration,
        maximum_velocity_change(inertia_factor, tick_duration),
        previous_velocity,
        current_velocity,
        movement_input,
    )
}

fn plan_velocity(
    curves: &ScaledCurves,
    tick_duration: f32,
    maximum_velocity_change: f32,
    previous_velocity: Vec2,
    current_velocity: Vec3,
    movement_input: Vec2,
) -> Vec3 {
    let target = movement_input * curves.top_speed();
    let current = flatten(current_velocity);

    // Straight line from the current toward the target velocity. Inertia
    // below can still bend the actual path.
    let direction = (target - current).normalize_or_zero();

    let turning_point = line_point_closest_to_origin(current, direction);
    let to_turning_point = turning_point - current;
    let distance_to_turning_point = to_turning_point.length();

    let planned = if direction.dot(to_turning_point) > 0.0 {
        // The turning point lies ahead: shed speed first.
        let x = curves.inverse_deceleration(distance_to_turning_point) - tick_duration;
        if x < 0.0 {
            // Reached the bottom of the deceleration curve mid-tick; spend the
            // rest of the tick accelerating toward the target.
            let speed = curves.acceleration(-x);
            move_towards(turning_point, target, speed)
        } else {
            let speed = curves.deceleration(x);
            move_towards(turning_point, current, speed)
        }
    } else {
        let x = curves.inverse_acceleration(distance_to_turning_point) + tick_duration;
        let speed = curves.acceleration(x);
        move_towards(turning_point, target, speed)
    };

    unflatten(move_towards(previous_velocity, planned, maximum_velocity_change))
}

#[cfg(test)]
#[path = "planner_tests.rs"]
mod tests;
