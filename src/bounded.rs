//! Numeric newtypes whose constructors normalize their input.
//!
//! Every value of these types already satisfies its range invariant, so nothing
//! downstream has to validate them again. NaN is not handled specially: it passes
//! straight through the clamping comparisons.

use std::fmt;

use crate::math::{clamp, mod_pos};

/// An angle on the color wheel, in degrees.
///
/// Normalized into `[0, 360)`, except that `360` itself is kept as is.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Hue(f64);

impl Hue {
    pub const ZERO: Self = Self(0.0);

    pub fn new(degrees: f64) -> Self {
        if degrees == 360.0 {
            Self(degrees)
        } else {
            Self(mod_pos(degrees, 360.0))
        }
    }

    pub const fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Hue {
    fn from(degrees: f64) -> Self {
        Self::new(degrees)
    }
}

impl fmt::Display for Hue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A number in the closed interval `[0, 1]`.
///
/// Used for saturation, lightness, value, alpha, normalized RGB channels and
/// color stop ratios.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct UnitInterval(f64);

impl UnitInterval {
    pub const ZERO: Self = Self(0.0);
    pub const ONE: Self = Self(1.0);

    pub fn new(x: f64) -> Self {
        Self(clamp(x, 0.0, 1.0))
    }

    pub const fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for UnitInterval {
    fn from(x: f64) -> Self {
        Self::new(x)
    }
}

impl fmt::Display for UnitInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An 8-bit RGB channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Channel(u8);

impl Channel {
    /// Rounds `x` and clamps the result into `[0, 255]`.
    pub fn new(x: f64) -> Self {
        Self(clamp(x.round(), 0.0, 255.0) as u8)
    }

    /// Scales a normalized channel up to `[0, 255]`. Clamping happens after rounding.
    pub fn denormalize(x: UnitInterval) -> Self {
        Self::new(x.value() * 255.0)
    }

    pub fn normalize(self) -> UnitInterval {
        UnitInterval::new(f64::from(self.0) / 255.0)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for Channel {
    fn from(x: u8) -> Self {
        Self(x)
    }
}

impl From<Channel> for u8 {
    fn from(channel: Channel) -> Self {
        channel.0
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_normalization() {
        assert_eq!(Hue::new(0.0).value(), 0.0);
        assert_eq!(Hue::new(180.0).value(), 180.0);
        assert_eq!(Hue::new(360.0).value(), 360.0);
        assert_eq!(Hue::new(361.0).value(), 1.0);
        assert_eq!(Hue::new(380.0).value(), 20.0);
        assert_eq!(Hue::new(720.0).value(), 0.0);
        assert_eq!(Hue::new(-10.0).value(), 350.0);
    }

    #[test]
    fn hue_is_periodic() {
        for k in -3..=3 {
            let shifted = Hue::new(42.5 + 360.0 * f64::from(k));
            assert!((shifted.value() - 42.5).abs() < 1e-9);
        }
    }

    #[test]
    fn unit_interval_clamps() {
        assert_eq!(UnitInterval::new(-0.5).value(), 0.0);
        assert_eq!(UnitInterval::new(1.5).value(), 1.0);
        assert_eq!(UnitInterval::new(0.3).value(), 0.3);
    }

    #[test]
    fn unit_interval_passes_nan_through() {
        assert!(UnitInterval::new(f64::NAN).value().is_nan());
    }

    #[test]
    fn channel_rounds_then_clamps() {
        assert_eq!(Channel::new(127.5).value(), 128);
        assert_eq!(Channel::new(-3.0).value(), 0);
        assert_eq!(Channel::new(300.0).value(), 255);
        assert_eq!(Channel::new(254.6).value(), 255);
        assert_eq!(Channel::denormalize(UnitInterval::new(0.5)).value(), 128);
        assert_eq!(Channel::denormalize(UnitInterval::ONE).value(), 255);
    }
}
