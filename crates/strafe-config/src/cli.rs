//! Command-line arguments for the Strafe demo runner.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use strafe_easing::EasingProfile;

use crate::Config;

/// Which movement scenario the demo runs.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scenario {
    /// Full input from rest until top speed.
    Accelerate,
    /// Release the input at top speed.
    Stop,
    /// Reverse the input at top speed.
    Turn,
    /// Run at a pillar and steer around it.
    Avoid,
    /// Every scenario in order.
    #[default]
    All,
}

impl Scenario {
    /// The scenarios `self` expands to.
    pub fn expand(self) -> Vec<Scenario> {
        match self {
            Scenario::All => vec![
                Scenario::Accelerate,
                Scenario::Stop,
                Scenario::Turn,
                Scenario::Avoid,
            ],
            single => vec![single],
        }
    }
}

/// Strafe command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "strafe", about = "Strafe movement demo")]
pub struct CliArgs {
    /// Simulation ticks per second.
    #[arg(long)]
    pub tick_rate: Option<u32>,

    /// Top speed in m/s.
    #[arg(long)]
    pub top_speed: Option<f32>,

    /// Acceleration curve, e.g. `ease-out-quad`.
    #[arg(long)]
    pub acceleration_profile: Option<EasingProfile>,

    /// Deceleration curve, e.g. `ease-in-quad`.
    #[arg(long)]
    pub deceleration_profile: Option<EasingProfile>,

    /// Inertia factor, 0 disables the velocity change limit.
    #[arg(long)]
    pub inertia: Option<f32>,

    /// Enable or disable obstacle avoidance.
    #[arg(long)]
    pub avoidance: Option<bool>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Scenario to run.
    #[arg(long, value_enum, default_value_t = Scenario::All)]
    pub scenario: Scenario,

    /// Ticks per scenario (defaults to two seconds of simulation).
    #[arg(long)]
    pub ticks: Option<u32>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(rate) = args.tick_rate {
            self.simulation.tick_rate_hz = rate;
        }
        if let Some(speed) = args.top_speed {
            self.movement.top_speed = speed;
            self.player.run_top_speed = speed;
        }
        if let Some(profile) = args.acceleration_profile {
            self.movement.acceleration_profile = profile;
        }
        if let Some(profile) = args.deceleration_profile {
            self.movement.deceleration_profile = profile;
        }
        if let Some(inertia) = args.inertia {
            self.movement.inertia_factor = inertia;
        }
        if let Some(enabled) = args.avoidance {
            self.avoidance.enabled = enabled;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_args() -> CliArgs {
        CliArgs {
            tick_rate: None,
            top_speed: None,
            acceleration_profile: None,
            deceleration_profile: None,
            inertia: None,
            avoidance: None,
            log_level: None,
            scenario: Scenario::All,
            ticks: None,
            config: None,
        }
    }

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            top_speed: Some(7.5),
            deceleration_profile: Some(EasingProfile::EaseOutCubic),
            avoidance: Some(false),
            ..no_args()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.movement.top_speed, 7.5);
        assert_eq!(config.player.run_top_speed, 7.5);
        assert_eq!(config.movement.deceleration_profile, EasingProfile::EaseOutCubic);
        assert!(!config.avoidance.enabled);
        // Non-overridden fields retain defaults
        assert_eq!(config.simulation.tick_rate_hz, 50);
        assert_eq!(
            config.movement.acceleration_profile,
            EasingProfile::EaseOutQuad
        );
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&no_args());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from([
            "strafe",
            "--tick-rate",
            "100",
            "--acceleration-profile",
            "ease-in-quad",
            "--scenario",
            "avoid",
            "--avoidance",
            "true",
        ]);
        assert_eq!(args.tick_rate, Some(100));
        assert_eq!(args.acceleration_profile, Some(EasingProfile::EaseInQuad));
        assert_eq!(args.scenario, Scenario::Avoid);
        assert_eq!(args.avoidance, Some(true));
        assert!(args.ticks.is_none());
    }

    #[test]
    fn test_unknown_profile_rejected() {
        let result = CliArgs::try_parse_from(["strafe", "--acceleration-profile", "bouncy"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_scenario_defaults_to_all() {
        let args = CliArgs::parse_from(["strafe"]);
        assert_eq!(args.scenario, Scenario::All);
        assert_eq!(args.scenario.expand().len(), 4);
        assert_eq!(Scenario::Stop.expand(), vec![Scenario::Stop]);
    }
}
