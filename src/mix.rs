use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    colorspace::{LCh, Lab},
    math::{interpolate, interpolate_angle},
    Color, ParseColorError,
};

/// The color space two colors are interpolated in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    #[default]
    Rgb,
    Hsl,
    Lab,
    LCh,
}

impl ColorSpace {
    pub const ALL: [ColorSpace; 4] = [Self::Rgb, Self::Hsl, Self::Lab, Self::LCh];

    pub fn name(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Lab => "lab",
            Self::LCh => "lch",
        }
    }

    /// Mixes two colors in this space. A `ratio` of 0 yields `from`, 1 yields `to`.
    ///
    /// Hue components take the shorter way around the color wheel. Alpha is interpolated
    /// linearly in every space.
    pub fn mix(self, from: &Color, to: &Color, ratio: f64) -> Color {
        let alpha = interpolate(ratio, from.alpha(), to.alpha());
        match self {
            Self::Rgb => {
                let (f, t) = (from.to_rgba_float(), to.to_rgba_float());
                Color::from_rgba_float(
                    interpolate(ratio, f.r.value(), t.r.value()),
                    interpolate(ratio, f.g.value(), t.g.value()),
                    interpolate(ratio, f.b.value(), t.b.value()),
                    alpha,
                )
            }
            Self::Hsl => {
                let (f, t) = (from.to_hsla(), to.to_hsla());
                Color::hsla(
                    interpolate_angle(ratio, f.h.value(), t.h.value()),
                    interpolate(ratio, f.s.value(), t.s.value()),
                    interpolate(ratio, f.l.value(), t.l.value()),
                    alpha,
                )
            }
            Self::Lab => {
                let (f, t) = (from.to_lab(), to.to_lab());
                Color::from(Lab::new(
                    interpolate(ratio, f.l, t.l),
                    interpolate(ratio, f.a, t.a),
                    interpolate(ratio, f.b, t.b),
                ))
                .with_alpha(alpha)
            }
            Self::LCh => {
                let (f, t) = (from.to_lch(), to.to_lch());
                Color::from(LCh::new(
                    interpolate(ratio, f.l, t.l),
                    interpolate(ratio, f.c, t.c),
                    interpolate_angle(ratio, f.h.value(), t.h.value()),
                ))
                .with_alpha(alpha)
            }
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|space| space.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseColorError::UnknownColorSpace(s.to_owned()))
    }
}

impl Color {
    /// Mixes this color with `other` in the given color space.
    pub fn mix(&self, space: ColorSpace, other: &Color, ratio: f64) -> Color {
        space.mix(self, other, ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Color {
        Color::rgb(255, 0, 0)
    }

    fn blue() -> Color {
        Color::rgb(0, 0, 255)
    }

    #[test]
    fn hsl_and_rgb_diverge() {
        assert_eq!(red().mix(ColorSpace::Hsl, &blue(), 0.5), Color::from_int(0xff00ff));
        assert_eq!(red().mix(ColorSpace::Rgb, &blue(), 0.5), Color::from_int(0x800080));
    }

    #[test]
    fn endpoints_are_preserved() {
        for space in ColorSpace::ALL {
            assert_eq!(space.mix(&red(), &blue(), 0.0), red(), "{space}");
            assert_eq!(space.mix(&red(), &blue(), 1.0), blue(), "{space}");
        }
    }

    #[test]
    fn grays_stay_gray_in_rgb() {
        let mixed = ColorSpace::Rgb.mix(&Color::BLACK, &Color::WHITE, 0.5);
        assert_eq!(mixed, Color::from_rgb_float(0.5, 0.5, 0.5));
    }

    #[test]
    fn hue_takes_short_path() {
        let a = Color::hsl(350.0, 1.0, 0.5);
        let b = Color::hsl(10.0, 1.0, 0.5);
        assert_eq!(a.mix(ColorSpace::Hsl, &b, 0.5), red());
        assert_eq!(a.mix(ColorSpace::LCh, &a, 0.5), a);
    }

    #[test]
    fn alpha_is_interpolated() {
        let a = red().with_alpha(0.0);
        let b = blue().with_alpha(1.0);
        for space in ColorSpace::ALL {
            assert!((a.mix(space, &b, 0.25).alpha() - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn parse_space_names() {
        assert_eq!("rgb".parse(), Ok(ColorSpace::Rgb));
        assert_eq!("LCH".parse(), Ok(ColorSpace::LCh));
        assert_eq!(
            "cmyk".parse::<ColorSpace>(),
            Err(ParseColorError::UnknownColorSpace("cmyk".into()))
        );
        assert_eq!(ColorSpace::Lab.to_string(), "lab");
    }
}
