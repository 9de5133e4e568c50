//! Movement configuration error types.

/// Rejected movement or avoidance settings.
///
/// Raised when a planner or controller is configured, never mid-tick.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MovementError {
    /// A duration, speed, or tick length that must be strictly positive.
    #[error("{field} must be positive and finite, got {value}")]
    NotPositive {
        /// Name of the offending setting.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// A factor, distance, or angle that must not be negative.
    #[error("{field} must be non-negative and finite, got {value}")]
    Negative {
        /// Name of the offending setting.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// A bounded setting outside its allowed range.
    #[error("{field} must lie in {min}..={max}, got {value}")]
    OutOfRange {
        /// Name of the offending setting.
        field: &'static str,
        /// The rejected value.
        value: f32,
        /// Inclusive lower bound.
        min: f32,
        /// Inclusive upper bound.
        max: f32,
    },
}

/// Checks `value > 0` and finite.
pub(crate) fn positive(field: &'static str, value: f32) -> Result<(), MovementError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MovementError::NotPositive { field, value })
    }
}

/// Checks `value >= 0` and finite.
pub(crate) fn non_negative(field: &'static str, value: f32) -> Result<(), MovementError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(MovementError::Negative { field, value })
    }
}

/// Checks `min <= value <= max`.
pub(crate) fn in_range(
    field: &'static str,
    value: f32,
    min: f32,
    max: f32,
) -> Result<(), MovementError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(MovementError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
