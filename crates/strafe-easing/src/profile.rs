//! Named easing profiles and their forward/inverse/integral dispatch table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::curves::*;

/// Selects one of the catalog's curve shapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EasingProfile {
    #[default]
    EaseInSine,
    EaseOutSine,
    EaseInCubic,
    EaseOutCubic,
    EaseInQuint,
    EaseOutQuint,
    EaseInCirc,
    EaseOutCirc,
    EaseInQuad,
    EaseOutQuad,
    EaseInQuart,
    EaseOutQuart,
    EaseInExpo,
    EaseOutExpo,
}

/// The three functions bound to a profile.
///
/// A plain `Copy` table of function pointers: owners cache one per profile
/// and rebuild it only when the profile changes.
#[derive(Clone, Copy)]
pub struct CurveFunctionSet {
    /// Normalized time to normalized value.
    pub forward: fn(f64) -> f64,
    /// Normalized value back to normalized time.
    pub inverse: fn(f64) -> f64,
    /// Area under `forward` between `0` and `x`.
    pub integral: fn(f64) -> f64,
}

impl fmt::Debug for CurveFunctionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurveFunctionSet").finish_non_exhaustive()
    }
}

impl CurveFunctionSet {
    const fn new(forward: fn(f64) -> f64, inverse: fn(f64) -> f64, integral: fn(f64) -> f64) -> Self {
        Self {
            forward,
            inverse,
            integral,
        }
    }
}

impl EasingProfile {
    /// Every profile, in declaration order.
    pub const ALL: [EasingProfile; 14] = [
        EasingProfile::EaseInSine,
        EasingProfile::EaseOutSine,
        EasingProfile::EaseInCubic,
        EasingProfile::EaseOutCubic,
        EasingProfile::EaseInQuint,
        EasingProfile::EaseOutQuint,
        EasingProfile::EaseInCirc,
        EasingProfile::EaseOutCirc,
        EasingProfile::EaseInQuad,
        EasingProfile::EaseOutQuad,
        EasingProfile::EaseInQuart,
        EasingProfile::EaseOutQuart,
        EasingProfile::EaseInExpo,
        EasingProfile::EaseOutExpo,
    ];

    /// Returns the function table for this profile.
    pub fn functions(self) -> CurveFunctionSet {
        use EasingProfile::*;
        match self {
            EaseInSine => {
                CurveFunctionSet::new(ease_in_sine, inverse_ease_in_sine, integral_ease_in_sine)
            }
            EaseOutSine => {
                CurveFunctionSet::new(ease_out_sine, inverse_ease_out_sine, integral_ease_out_sine)
            }
            EaseInCubic => {
                CurveFunctionSet::new(ease_in_cubic, inverse_ease_in_cubic, integral_ease_in_cubic)
            }
            EaseOutCubic => CurveFunctionSet::new(
                ease_out_cubic,
                inverse_ease_out_cubic,
                integral_ease_out_cubic,
            ),
            EaseInQuint => {
                CurveFunctionSet::new(ease_in_quint, inverse_ease_in_quint, integral_ease_in_quint)
            }
            EaseOutQuint => CurveFunctionSet::new(
                ease_out_quint,
                inverse_ease_out_quint,
                integral_ease_out_quint,
            ),
            EaseInCirc => {
                CurveFunctionSet::new(ease_in_circ, inverse_ease_in_circ, integral_ease_in_circ)
            }
            EaseOutCirc => {
                CurveFunctionSet::new(ease_out_circ, inverse_ease_out_circ, integral_ease_out_circ)
            }
            EaseInQuad => {
                CurveFunctionSet::new(ease_in_quad, inverse_ease_in_quad, integral_ease_in_quad)
            }
            EaseOutQuad => {
                CurveFunctionSet::new(ease_out_quad, inverse_ease_out_quad, integral_ease_out_quad)
            }
            EaseInQuart => {
                CurveFunctionSet::new(ease_in_quart, inverse_ease_in_quart, integral_ease_in_quart)
            }
            EaseOutQuart => CurveFunctionSet::new(
                ease_out_quart,
                inverse_ease_out_quart,
                integral_ease_out_quart,
            ),
            EaseInExpo => {
                CurveFunctionSet::new(ease_in_expo, inverse_ease_in_expo, integral_ease_in_expo)
            }
            EaseOutExpo => {
                CurveFunctionSet::new(ease_out_expo, inverse_ease_out_expo, integral_ease_out_expo)
            }
        }
    }

    /// Evaluates the forward curve.
    pub fn forward(self, x: f64) -> f64 {
        (self.functions().forward)(x)
    }

    /// Evaluates the inverse curve.
    pub fn inverse(self, y: f64) -> f64 {
        (self.functions().inverse)(y)
    }

    /// Evaluates the integral curve.
    pub fn integral(self, x: f64) -> f64 {
        (self.functions().integral)(x)
    }

    /// Maps a linear progress value (clamped to `0.0..=1.0`) to an eased value.
    /// Convenience for `f32` callers such as UI and camera transitions.
    pub fn apply(self, t: f32) -> f32 {
        self.forward(f64::from(t.clamp(0.0, 1.0))) as f32
    }

    /// Whether this is an ease-in (slow start) shape.
    pub fn is_ease_in(self) -> bool {
        use EasingProfile::*;
        matches!(
            self,
            EaseInSine | EaseInCubic | EaseInQuint | EaseInCirc | EaseInQuad | EaseInQuart | EaseInExpo
        )
    }

    /// Kebab-case name, e.g. `ease-in-quad`.
    pub fn name(self) -> &'static str {
        use EasingProfile::*;
        match self {
            EaseInSine => "ease-in-sine",
            EaseOutSine => "ease-out-sine",
            EaseInCubic => "ease-in-cubic",
            EaseOutCubic => "ease-out-cubic",
            EaseInQuint => "ease-in-quint",
            EaseOutQuint => "ease-out-quint",
            EaseInCirc => "ease-in-circ",
            EaseOutCirc => "ease-out-circ",
            EaseInQuad => "ease-in-quad",
            EaseOutQuad => "ease-out-quad",
            EaseInQuart => "ease-in-quart",
            EaseOutQuart => "ease-out-quart",
            EaseInExpo => "ease-in-expo",
            EaseOutExpo => "ease-out-expo",
        }
    }
}

impl fmt::Display for EasingProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known profile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown easing profile '{0}'")]
pub struct UnknownProfileError(pub String);

impl FromStr for EasingProfile {
    type Err = UnknownProfileError;

    /// Accepts the kebab-case name (`ease-in-quad`) or the variant name
    /// (`EaseInQuad`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        EasingProfile::ALL
            .into_iter()
            .find(|p| p.name().replace('-', "") == wanted)
            .ok_or_else(|| UnknownProfileError(s.to_string()))
    }
}
