//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strafe_movement::{AvoidanceSettings, MovementSettings};
use strafe_player::{
    AimCameraSettings, CrosshairSettings, LocomotionSettings, PlayerIntent, RifleSettings,
};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Fixed-step simulation settings.
    pub simulation: SimulationConfig,
    /// Speed curves of the controlled character.
    pub movement: MovementSettings,
    /// Obstacle steering.
    pub avoidance: AvoidanceSettings,
    /// Run and aim top speeds.
    pub player: PlayerIntent,
    pub camera: AimCameraSettings,
    pub crosshair: CrosshairSettings,
    pub locomotion: LocomotionSettings,
    pub rifle: RifleSettings,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Fixed-step simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Simulation ticks per second.
    pub tick_rate_hz: u32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "strafe_movement=trace").
    pub log_level: String,
    /// Also write JSON logs to a file next to the config.
    pub log_to_file: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { tick_rate_hz: 50 }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: false,
        }
    }
}

/// `<platform config dir>/strafe`, if the platform has one.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("strafe"))
}

impl Config {
    /// Seconds per simulation tick.
    pub fn tick_duration(&self) -> f32 {
        1.0 / self.simulation.tick_rate_hz as f32
    }

    /// Movement settings with the player's run speed as top speed.
    pub fn movement_settings(&self) -> MovementSettings {
        MovementSettings {
            top_speed: self.player.run_top_speed,
            ..self.movement
        }
    }

    pub fn avoidance_settings(&self) -> AvoidanceSettings {
        self.avoidance
    }

    /// Movement settings with the player's aim speed as top speed.
    pub fn aiming_movement_settings(&self) -> MovementSettings {
        MovementSettings {
            top_speed: self.player.aim_walk_top_speed,
            ..self.movement
        }
    }

    /// Rejects anything the simulation would otherwise trip over mid-tick.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulation.tick_rate_hz == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        self.movement_settings().validate()?;
        self.aiming_movement_settings().validate()?;
        self.avoidance.validate()?;

        positive("rifle.fire_rate", self.rifle.fire_rate)?;
        non_negative("rifle.trail_alpha", self.rifle.trail_alpha)?;
        non_negative("rifle.trail_width", self.rifle.trail_width)?;
        // Zero durations snap straight to the end state.
        non_negative(
            "camera.transition_duration",
            self.camera.transition_duration,
        )?;
        non_negative("crosshair.appear_duration", self.crosshair.appear_duration)?;
        non_negative(
            "crosshair.unsteady_duration",
            self.crosshair.unsteady_duration,
        )?;
        non_negative("crosshair.displacement", self.crosshair.displacement)?;
        non_negative("crosshair.shot_kick", self.crosshair.shot_kick)?;
        positive(
            "locomotion.walk_animation_speed",
            self.locomotion.walk_animation_speed,
        )?;
        positive(
            "locomotion.run_animation_speed",
            self.locomotion.run_animation_speed,
        )?;
        positive(
            "locomotion.walk_turning_speed",
            self.locomotion.walk_turning_speed,
        )?;
        positive(
            "locomotion.run_turning_speed",
            self.locomotion.run_turning_speed,
        )?;
        non_negative("locomotion.aim_smoothing", self.locomotion.aim_smoothing)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            value,
            requirement: "positive and finite",
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            value,
            requirement: "non-negative and finite",
        })
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(config_dir.join(CONFIG_FILE), serialized).map_err(ConfigError::WriteError)
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }
}
