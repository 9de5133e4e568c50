//! Scripted movement scenarios.

use glam::{Vec2, Vec3};
use strafe_config::{Config, Scenario};
use strafe_math::{flatten, to_planar_velocity};
use strafe_movement::{LayerMask, MovementError};
use strafe_physics::{Obstacle, ObstacleWorld};
use tracing::{debug, info};

use crate::rig::{Rig, TickInput};

/// Capsule center height when standing on the ground plane.
const START: Vec3 = Vec3::new(0.0, 0.9, 0.0);

/// Speeds within this of a goal count as reached.
const SPEED_TOLERANCE: f32 = 1e-3;

const PILLAR: Vec2 = Vec2::new(0.6, 6.0);
const TARGET: Vec2 = Vec2::new(0.0, 40.0);

/// What a scenario run measured.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScenarioSummary {
    pub scenario: Scenario,
    pub ticks: u32,
    pub final_position: Vec3,
    pub final_speed: f32,
    pub max_speed: f32,
    /// First tick whose speed reached the top speed.
    pub ticks_to_top_speed: Option<u32>,
    /// Ticks from releasing the input until standing still.
    pub ticks_to_stop: Option<u32>,
    pub steered_ticks: u32,
    /// Closest planar distance to the pillar, for the avoidance run.
    pub pillar_clearance: Option<f32>,
    pub shots: u32,
    pub hits: u32,
}

impl ScenarioSummary {
    pub(crate) fn log(&self) {
        info!(
            "{:?}: {} ticks, final position ({:.2}, {:.2}, {:.2}), final speed {:.3}, max speed {:.3}",
            self.scenario,
            self.ticks,
            self.final_position.x,
            self.final_position.y,
            self.final_position.z,
            self.final_speed,
            self.max_speed,
        );
        if let Some(n) = self.ticks_to_top_speed {
            info!("  reached top speed after {n} ticks");
        }
        if let Some(n) = self.ticks_to_stop {
            info!("  stopped {n} ticks after release");
        }
        if self.steered_ticks > 0 {
            info!("  steered on {} ticks", self.steered_ticks);
        }
        if let Some(clearance) = self.pillar_clearance {
            info!("  closest approach to pillar {clearance:.3} m");
        }
        if self.shots > 0 {
            info!("  fired {} shots, {} hit", self.shots, self.hits);
        }
    }
}

fn world_for(scenario: Scenario) -> ObstacleWorld {
    let world = ObstacleWorld::new().with_ground(0.0);
    match scenario {
        Scenario::Avoid => world.with_obstacle(Obstacle::pillar(PILLAR, 0.5)),
        Scenario::Turn => {
            world.with_obstacle(Obstacle::pillar(TARGET, 1.0).on_layers(LayerMask::TARGET))
        }
        _ => world,
    }
}

/// The scripted input for `tick` out of `ticks`.
fn input_for(scenario: Scenario, tick: u32, ticks: u32) -> TickInput {
    let first_half = tick < ticks / 2;
    match scenario {
        Scenario::Stop if !first_half => TickInput::default(),
        // Back-pedal while aiming and firing forward.
        Scenario::Turn if !first_half => TickInput {
            stick: Vec2::NEG_Y,
            aiming: true,
            trigger: true,
            ..Default::default()
        },
        _ => TickInput {
            stick: Vec2::Y,
            ..Default::default()
        },
    }
}

/// Runs `scenario` for `ticks` ticks with the given settings.
pub(crate) fn run(
    scenario: Scenario,
    config: &Config,
    ticks: u32,
) -> Result<ScenarioSummary, MovementError> {
    let world = world_for(scenario);
    let mut rig = Rig::new(config, START)?;
    let top_speed = config.player.run_top_speed;
    let release_tick = ticks / 2;

    let mut summary = ScenarioSummary {
        scenario,
        ticks,
        final_position: START,
        final_speed: 0.0,
        max_speed: 0.0,
        ticks_to_top_speed: None,
        ticks_to_stop: None,
        steered_ticks: 0,
        pillar_clearance: None,
        shots: 0,
        hits: 0,
    };

    for tick in 0..ticks {
        let input = input_for(scenario, tick, ticks);
        let report = rig.tick(&input, &world)?;
        let speed = to_planar_velocity(report.step.velocity).length();

        debug!(
            tick,
            speed,
            x = report.step.position.x,
            z = report.step.position.z,
            steered = report.step.steered,
            heading = report.animation.heading,
            crosshair = report.crosshair_alpha,
            "scenario tick"
        );

        summary.max_speed = summary.max_speed.max(speed);
        if summary.ticks_to_top_speed.is_none() && speed >= top_speed - SPEED_TOLERANCE {
            summary.ticks_to_top_speed = Some(tick + 1);
        }
        if scenario == Scenario::Stop
            && tick >= release_tick
            && summary.ticks_to_stop.is_none()
            && speed <= SPEED_TOLERANCE
        {
            summary.ticks_to_stop = Some(tick + 1 - release_tick);
        }
        if report.step.steered {
            summary.steered_ticks += 1;
        }
        if scenario == Scenario::Avoid {
            let clearance = flatten(report.step.position).distance(PILLAR);
            summary.pillar_clearance = Some(
                summary
                    .pillar_clearance
                    .map_or(clearance, |c| c.min(clearance)),
            );
        }
        if let Some(shot) = report.shot {
            summary.shots += 1;
            if shot.hit.is_some() {
                summary.hits += 1;
            }
        }
        summary.final_speed = speed;
    }

    summary.final_position = rig.position();
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICKS: u32 = 100;

    fn run_default(scenario: Scenario) -> ScenarioSummary {
        run(scenario, &Config::default(), TICKS).unwrap()
    }

    #[test]
    fn test_accelerate_reaches_top_speed() {
        let summary = run_default(Scenario::Accelerate);
        let ticks = summary.ticks_to_top_speed.unwrap();
        // 0.3 s at 50 Hz, give or take a tick.
        assert!((14..=16).contains(&ticks), "took {ticks} ticks");
        assert!(summary.max_speed <= 5.0 + 1e-4);
        assert!((summary.final_position.y - 0.9).abs() < 1e-5);
    }

    #[test]
    fn test_stop_halts_within_stop_time() {
        let summary = run_default(Scenario::Stop);
        let ticks = summary.ticks_to_stop.unwrap();
        // 0.2 s at 50 Hz, give or take a tick.
        assert!(ticks <= 11, "took {ticks} ticks");
        assert!(summary.final_speed < SPEED_TOLERANCE);
    }

    #[test]
    fn test_turn_fires_at_target() {
        let summary = run_default(Scenario::Turn);
        // One second of trigger at 8 shots per second.
        assert!((7..=8).contains(&summary.shots), "fired {}", summary.shots);
        assert_eq!(summary.hits, summary.shots);
        // Back-pedalling at the aim top speed.
        assert!((summary.final_speed - 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_avoid_steers_around_pillar() {
        let summary = run_default(Scenario::Avoid);
        assert!(summary.steered_ticks > 0);
        assert!(summary.pillar_clearance.unwrap() > 0.5);
        assert!(summary.final_position.z > PILLAR.y);
    }

    #[test]
    fn test_avoid_without_avoidance_never_steers() {
        let mut config = Config::default();
        config.avoidance.enabled = false;
        let summary = run(Scenario::Avoid, &config, TICKS).unwrap();
        assert_eq!(summary.steered_ticks, 0);
    }

    #[test]
    fn test_invalid_settings_are_reported() {
        let mut config = Config::default();
        config.movement.time_to_stop = -1.0;
        assert!(run(Scenario::Accelerate, &config, 10).is_err());
    }
}
