//! Angle conversion and wrapping
//!
//! All functions are generic over `num_traits::Float`, so the arithmetic runs
//! at whatever precision the caller passes in (`f32` stays `f32`).

use num_traits::Float;

/// Convert degrees to radians
///
/// Multiplies by π/180 evaluated at the input precision.
#[inline]
#[must_use]
pub fn deg_to_rad<T: Float>(deg: T) -> T {
    deg.to_radians()
}

/// Convert radians to degrees
///
/// Multiplies by 180/π evaluated at the input precision.
#[inline]
#[must_use]
pub fn rad_to_deg<T: Float>(rad: T) -> T {
    rad.to_degrees()
}

/// Wrap an angle [rad] into (-π, π]
///
/// Computed as `atan2(sin θ, cos θ)`: no range-reduction loop, valid for any
/// magnitude, and the boundary follows the sign conventions of `atan2`.
/// An input whose sine rounds to a tiny negative value (e.g. the nearest
/// double to -π) lands on -π itself. Non-finite input yields NaN.
#[inline]
#[must_use]
pub fn normalize_angle<T: Float>(angle: T) -> T {
    angle.sin().atan2(angle.cos())
}

/// Shortest signed rotation [rad] taking `current` to `target`
#[inline]
#[must_use]
pub fn angle_diff<T: Float>(target: T, current: T) -> T {
    normalize_angle(target - current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_deg_to_rad_half_turn() {
        assert_relative_eq!(deg_to_rad(180.0_f64), PI, epsilon = 1e-9);
        assert_relative_eq!(deg_to_rad(90.0_f64), FRAC_PI_2, epsilon = 1e-9);
        assert_relative_eq!(deg_to_rad(-360.0_f64), -2.0 * PI, epsilon = 1e-9);
    }

    #[test]
    fn test_deg_to_rad_keeps_f32() {
        let rad: f32 = deg_to_rad(180.0_f32);
        assert_relative_eq!(rad, std::f32::consts::PI, epsilon = 1e-6);
    }

    #[test]
    fn test_rad_to_deg() {
        assert_relative_eq!(rad_to_deg(PI), 180.0, epsilon = 1e-9);
        assert_relative_eq!(rad_to_deg(-FRAC_PI_2), -90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_normalize_angle_wraps() {
        assert_relative_eq!(normalize_angle(0.0_f64), 0.0, epsilon = 1e-12);
        assert_relative_eq!(normalize_angle(PI), PI, epsilon = 1e-12);
        assert_relative_eq!(normalize_angle(3.0 * FRAC_PI_2), -FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(normalize_angle(2.0 * PI + 0.25), 0.25, epsilon = 1e-12);
        assert_relative_eq!(normalize_angle(-2.0 * PI - 0.25), -0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_angle_large_magnitude() {
        let wrapped = normalize_angle(1000.0 * PI + 0.5);
        assert_relative_eq!(wrapped, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_normalize_angle_non_finite() {
        assert!(normalize_angle(f64::INFINITY).is_nan());
        assert!(normalize_angle(f64::NAN).is_nan());
    }

    #[test]
    fn test_angle_diff_takes_short_way() {
        // 350° -> 10° is +20°, not -340°
        let diff = angle_diff(deg_to_rad(10.0), deg_to_rad(350.0));
        assert_relative_eq!(rad_to_deg(diff), 20.0, epsilon = 1e-9);
    }
}
