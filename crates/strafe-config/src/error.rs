//! Configuration error types.

use strafe_movement::MovementError;

/// Errors from loading, saving, or checking `config.ron`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    #[error("failed to write config: {0}")]
    WriteError(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),

    /// The file parsed, but a movement or avoidance value is unusable.
    #[error("invalid movement settings: {0}")]
    InvalidSettings(#[from] MovementError),

    #[error("tick rate must be at least 1 Hz")]
    ZeroTickRate,

    /// A player, camera, crosshair or rifle value its state machine cannot use.
    #[error("{field} must be {requirement}, got {value}")]
    InvalidValue {
        field: &'static str,
        value: f32,
        requirement: &'static str,
    },
}
