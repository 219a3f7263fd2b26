//! Degree and radian conversions over generic numeric scalars.
//!
//! The [`Angle`] trait is implemented for every numeric type that can be
//! projected to `f64`, so integer and floating point literals can be used
//! interchangeably: `90.radians()` equals `90.0.radians()`.

use num_traits::ToPrimitive;
use std::f64::consts::TAU;

/// Converts a value in degrees to radians.
pub fn radians_from_degrees<N: ToPrimitive>(degrees: &N) -> f64 {
    degrees.to_f64().unwrap_or(f64::NAN).to_radians()
}

/// Converts a value in radians to degrees.
pub fn degrees_from_radians<N: ToPrimitive>(radians: &N) -> f64 {
    radians.to_f64().unwrap_or(f64::NAN).to_degrees()
}

/// Angle conversions and trigonometry for any numeric scalar.
///
/// Values that cannot be represented as `f64` project to NaN, which then
/// propagates through the arithmetic as usual.
pub trait Angle: ToPrimitive {
    /// The value interpreted as degrees, converted to radians.
    fn radians(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN).to_radians()
    }

    /// The value interpreted as radians, converted to degrees.
    fn degrees(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN).to_degrees()
    }

    /// The value interpreted as radians, reduced to the half-open range
    /// `[0, 2π)`. The double modulo maps negative angles into the range
    /// as well.
    fn normalized(&self) -> f64 {
        let radians = self.to_f64().unwrap_or(f64::NAN);
        (radians % TAU + TAU) % TAU
    }

    /// Sine of the value in radians.
    fn sin(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN).sin()
    }

    /// Cosine of the value in radians.
    fn cos(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN).cos()
    }

    /// Tangent of the value in radians.
    fn tan(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN).tan()
    }

    /// Arcsine, in radians.
    fn asin(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN).asin()
    }

    /// Arccosine, in radians.
    fn acos(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN).acos()
    }

    /// Arctangent, in radians.
    fn atan(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN).atan()
    }
}

impl<T: ToPrimitive> Angle for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn integer_and_float_operands_agree() {
        assert_eq!(90.radians(), 90.0f64.radians());
        assert_eq!(Angle::radians(&90i64), 90.0f32.radians());
        assert_abs_diff_eq!(90.radians(), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(180.radians(), PI, epsilon = 1e-12);
    }

    #[test]
    fn free_functions_match_trait_methods() {
        assert_eq!(radians_from_degrees(&90), 90.radians());
        assert_eq!(radians_from_degrees(&90.0), 90.0f64.radians());
        assert_eq!(degrees_from_radians(&PI), PI.degrees());
        assert_abs_diff_eq!(degrees_from_radians(&FRAC_PI_2), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn round_trip() {
        for d in [-720.0f64, -1.0, 0.0, 0.25, 90.0, 123.456, 1e6] {
            assert_abs_diff_eq!(d.radians().degrees(), d, epsilon = 1e-9 * d.abs().max(1.0));
        }
    }

    #[test]
    fn normalized_range() {
        for a in [-7.0, -PI, -0.1, 0.0, 0.1, PI, 7.0, 100.0] {
            let n = a.normalized();
            assert!((0.0..TAU).contains(&n), "normalized({a}) = {n}");
        }
    }

    #[test]
    fn normalized_is_periodic() {
        for k in -3i32..=3 {
            let shifted = 1.25 + TAU * f64::from(k);
            assert_abs_diff_eq!(shifted.normalized(), 1.25, epsilon = 1e-12);
        }
        assert_abs_diff_eq!((-FRAC_PI_2).normalized(), 3.0 * FRAC_PI_2);
    }

    #[test]
    fn trigonometry_uses_matching_functions() {
        assert_abs_diff_eq!(45.radians().tan(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Angle::atan(&1.0), FRAC_PI_4, epsilon = 1e-12);
        assert_abs_diff_eq!(0.sin(), 0.0);
        assert_abs_diff_eq!(0.cos(), 1.0);
    }
}
