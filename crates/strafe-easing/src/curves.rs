//! The individual curve functions.
//!
//! Every function clamps its argument to `[0, 1]` first. Forward curves map
//! normalized time to a normalized value, inverse curves undo them, and
//! integral curves return the area under the forward curve between `0`
//! and `x`.

use std::f64::consts::{FRAC_2_PI, FRAC_PI_2, FRAC_PI_4, LN_2};

#[inline]
fn unit(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

// --- Sine ---

pub fn ease_in_sine(x: f64) -> f64 {
    1.0 - (unit(x) * FRAC_PI_2).cos()
}

pub fn inverse_ease_in_sine(y: f64) -> f64 {
    (1.0 - unit(y)).acos() * FRAC_2_PI
}

pub fn integral_ease_in_sine(x: f64) -> f64 {
    let x = unit(x);
    x - FRAC_2_PI * (x * FRAC_PI_2).sin()
}

pub fn ease_out_sine(x: f64) -> f64 {
    (unit(x) * FRAC_PI_2).sin()
}

pub fn inverse_ease_out_sine(y: f64) -> f64 {
    unit(y).asin() * FRAC_2_PI
}

pub fn integral_ease_out_sine(x: f64) -> f64 {
    FRAC_2_PI * (1.0 - (unit(x) * FRAC_PI_2).cos())
}

// --- Cubic ---

pub fn ease_in_cubic(x: f64) -> f64 {
    unit(x).powi(3)
}

pub fn inverse_ease_in_cubic(y: f64) -> f64 {
    unit(y).cbrt()
}

pub fn integral_ease_in_cubic(x: f64) -> f64 {
    unit(x).powi(4) / 4.0
}

pub fn ease_out_cubic(x: f64) -> f64 {
    1.0 - (1.0 - unit(x)).powi(3)
}

pub fn inverse_ease_out_cubic(y: f64) -> f64 {
    1.0 - (1.0 - unit(y)).cbrt()
}

pub fn integral_ease_out_cubic(x: f64) -> f64 {
    let x = unit(x);
    x + (1.0 - x).powi(4) / 4.0 - 0.25
}

// --- Quintic ---

pub fn ease_in_quint(x: f64) -> f64 {
    unit(x).powi(5)
}

pub fn inverse_ease_in_quint(y: f64) -> f64 {
    unit(y).powf(1.0 / 5.0)
}

pub fn integral_ease_in_quint(x: f64) -> f64 {
    unit(x).powi(6) / 6.0
}

pub fn ease_out_quint(x: f64) -> f64 {
    1.0 - (1.0 - unit(x)).powi(5)
}

pub fn inverse_ease_out_quint(y: f64) -> f64 {
    1.0 - (1.0 - unit(y)).powf(1.0 / 5.0)
}

pub fn integral_ease_out_quint(x: f64) -> f64 {
    let x = unit(x);
    x + (1.0 - x).powi(6) / 6.0 - 1.0 / 6.0
}

// --- Circular (quarter circle) ---

pub fn ease_in_circ(x: f64) -> f64 {
    let x = unit(x);
    1.0 - (1.0 - x * x).sqrt()
}

pub fn inverse_ease_in_circ(y: f64) -> f64 {
    let y = unit(y);
    (1.0 - (1.0 - y) * (1.0 - y)).sqrt()
}

pub fn integral_ease_in_circ(x: f64) -> f64 {
    let x = unit(x);
    x - 0.5 * (x * (1.0 - x * x).sqrt() + x.asin())
}

pub fn ease_out_circ(x: f64) -> f64 {
    let u = unit(x) - 1.0;
    (1.0 - u * u).sqrt()
}

pub fn inverse_ease_out_circ(y: f64) -> f64 {
    let y = unit(y);
    1.0 - (1.0 - y * y).sqrt()
}

pub fn integral_ease_out_circ(x: f64) -> f64 {
    let u = unit(x) - 1.0;
    0.5 * (u * (1.0 - u * u).sqrt() + u.asin()) + FRAC_PI_4
}

// --- Quadratic ---

pub fn ease_in_quad(x: f64) -> f64 {
    let x = unit(x);
    x * x
}

pub fn inverse_ease_in_quad(y: f64) -> f64 {
    unit(y).sqrt()
}

pub fn integral_ease_in_quad(x: f64) -> f64 {
    unit(x).powi(3) / 3.0
}

pub fn ease_out_quad(x: f64) -> f64 {
    let r = 1.0 - unit(x);
    1.0 - r * r
}

pub fn inverse_ease_out_quad(y: f64) -> f64 {
    1.0 - (1.0 - unit(y)).sqrt()
}

pub fn integral_ease_out_quad(x: f64) -> f64 {
    let x = unit(x);
    x + (1.0 - x).powi(3) / 3.0 - 1.0 / 3.0
}

// --- Quartic ---

pub fn ease_in_quart(x: f64) -> f64 {
    unit(x).powi(4)
}

pub fn inverse_ease_in_quart(y: f64) -> f64 {
    unit(y).powf(0.25)
}

pub fn integral_ease_in_quart(x: f64) -> f64 {
    unit(x).powi(5) / 5.0
}

pub fn ease_out_quart(x: f64) -> f64 {
    1.0 - (1.0 - unit(x)).powi(4)
}

pub fn inverse_ease_out_quart(y: f64) -> f64 {
    1.0 - (1.0 - unit(y)).powf(0.25)
}

pub fn integral_ease_out_quart(x: f64) -> f64 {
    let x = unit(x);
    x + (1.0 - x).powi(5) / 5.0 - 0.2
}

// --- Exponential ---
//
// 2^(10x - 10) never reaches zero and 1 - 2^(-10x) never reaches one, so
// both ends are pinned explicitly.

const EXPO_FLOOR: f64 = 1.0 / 1024.0;

pub fn ease_in_expo(x: f64) -> f64 {
    let x = unit(x);
    if x == 0.0 {
        return 0.0;
    }
    (10.0 * x - 10.0).exp2()
}

pub fn inverse_ease_in_expo(y: f64) -> f64 {
    let y = unit(y);
    if y == 0.0 {
        return 0.0;
    }
    ((y.log2() + 10.0) / 10.0).max(0.0)
}

pub fn integral_ease_in_expo(x: f64) -> f64 {
    let x = unit(x);
    if x == 0.0 {
        return 0.0;
    }
    ((10.0 * x - 10.0).exp2() - EXPO_FLOOR) / (10.0 * LN_2)
}

pub fn ease_out_expo(x: f64) -> f64 {
    let x = unit(x);
    if x == 1.0 {
        return 1.0;
    }
    1.0 - (-10.0 * x).exp2()
}

pub fn inverse_ease_out_expo(y: f64) -> f64 {
    let y = unit(y);
    if y == 1.0 {
        return 1.0;
    }
    (-(1.0 - y).log2() / 10.0).min(1.0)
}

pub fn integral_ease_out_expo(x: f64) -> f64 {
    let x = unit(x);
    x - (1.0 - (-10.0 * x).exp2()) / (10.0 * LN_2)
}

// --- Blending ---

/// Cubic Hermite smoothstep `3x^2 - 2x^3`, clamped to `[0, 1]`.
///
/// Used for aim/run camera and crosshair transitions; the velocity planner
/// does not use it.
pub fn bezier_smoothstep(x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    x * x * (3.0 - 2.0 * x)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Trapezoidal integration of `f` on `[0, x]`.
    fn numeric_integral(f: fn(f64) -> f64, x: f64) -> f64 {
        let steps = 20_000;
        let h = x / steps as f64;
        let mut sum = 0.5 * (f(0.0) + f(x));
        for i in 1..steps {
            sum += f(i as f64 * h);
        }
        sum * h
    }

    #[test]
    fn test_closed_form_integrals_match_numeric() {
        let pairs: [(fn(f64) -> f64, fn(f64) -> f64, &str); 14] = [
            (ease_in_sine, integral_ease_in_sine, "in_sine"),
            (ease_out_sine, integral_ease_out_sine, "out_sine"),
            (ease_in_cubic, integral_ease_in_cubic, "in_cubic"),
            (ease_out_cubic, integral_ease_out_cubic, "out_cubic"),
            (ease_in_quint, integral_ease_in_quint, "in_quint"),
            (ease_out_quint, integral_ease_out_quint, "out_quint"),
            (ease_in_circ, integral_ease_in_circ, "in_circ"),
            (ease_out_circ, integral_ease_out_circ, "out_circ"),
            (ease_in_quad, integral_ease_in_quad, "in_quad"),
            (ease_out_quad, integral_ease_out_quad, "out_quad"),
            (ease_in_quart, integral_ease_in_quart, "in_quart"),
            (ease_out_quart, integral_ease_out_quart, "out_quart"),
            (ease_in_expo, integral_ease_in_expo, "in_expo"),
            (ease_out_expo, integral_ease_out_expo, "out_expo"),
        ];
        for (forward, integral, name) in pairs {
            for x in [0.25, 0.5, 0.8, 1.0] {
                let expected = numeric_integral(forward, x);
                let actual = integral(x);
                assert!(
                    (expected - actual).abs() < 1e-3,
                    "{name} at {x}: closed form {actual}, numeric {expected}"
                );
            }
        }
    }

    #[test]
    fn test_expo_endpoints_are_pinned() {
        assert_eq!(ease_in_expo(0.0), 0.0);
        assert_eq!(ease_out_expo(1.0), 1.0);
        assert_eq!(inverse_ease_in_expo(0.0), 0.0);
        assert_eq!(inverse_ease_out_expo(1.0), 1.0);
        // Values inside the pinned gap never invert outside the domain.
        assert_eq!(inverse_ease_in_expo(1e-6), 0.0);
        assert_eq!(inverse_ease_out_expo(1.0 - 1e-6), 1.0);
    }

    #[test]
    fn test_out_of_domain_inputs_clamp() {
        assert_eq!(ease_in_quad(-1.0), 0.0);
        assert_eq!(ease_in_quad(2.0), 1.0);
        assert_eq!(inverse_ease_out_circ(3.0), 1.0);
        assert_eq!(integral_ease_in_cubic(-0.5), 0.0);
        assert!((integral_ease_in_cubic(5.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_bezier_smoothstep() {
        assert_eq!(bezier_smoothstep(0.0), 0.0);
        assert_eq!(bezier_smoothstep(1.0), 1.0);
        assert!((bezier_smoothstep(0.5) - 0.5).abs() < 1e-6);
        assert!(bezier_smoothstep(0.25) < 0.25);
        assert!(bezier_smoothstep(0.75) > 0.75);
        assert_eq!(bezier_smoothstep(-3.0), 0.0);
        assert_eq!(bezier_smoothstep(4.0), 1.0);
    }
}
