use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer};

use crate::{
    bounded::{Hue, UnitInterval},
    colorspace::{Hsla, Hsva, LCh, Lab, NormalizedRgba, Rgba, Xyz},
    error::ParseColorError,
    hex, named,
};

/// A color, stored as hue, saturation, lightness and alpha.
///
/// Every other color model is a view computed on demand. Two colors are equal when their
/// rounded 8-bit RGBA projections are equal, so e.g. all fully desaturated blacks compare
/// equal regardless of their hue.
#[derive(Clone, Copy, Debug)]
pub struct Color {
    hue: Hue,
    saturation: UnitInterval,
    lightness: UnitInterval,
    alpha: UnitInterval,
}

impl Color {
    pub const BLACK: Self = Self {
        hue: Hue::ZERO,
        saturation: UnitInterval::ZERO,
        lightness: UnitInterval::ZERO,
        alpha: UnitInterval::ONE,
    };

    pub const WHITE: Self = Self {
        hue: Hue::ZERO,
        saturation: UnitInterval::ZERO,
        lightness: UnitInterval::ONE,
        alpha: UnitInterval::ONE,
    };

    /// Hue in degrees, saturation, lightness and alpha in `[0, 1]`. Out of range values are
    /// wrapped (hue) or clamped (everything else).
    pub fn hsla(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self::from(Hsla::new(hue, saturation, lightness, alpha))
    }

    pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self::hsla(hue, saturation, lightness, 1.0)
    }

    pub fn rgba(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self::from(Rgba::new(r.into(), g.into(), b.into(), alpha))
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// RGB channels and alpha in `[0, 1]`. Channels are rounded to the nearest 8-bit value.
    pub fn from_rgba_float(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Self::from(NormalizedRgba::new(r, g, b, alpha).denormalize())
    }

    pub fn from_rgb_float(r: f64, g: f64, b: f64) -> Self {
        Self::from_rgba_float(r, g, b, 1.0)
    }

    pub fn hsva(hue: f64, saturation: f64, value: f64, alpha: f64) -> Self {
        Self::from(Hsva::new(hue, saturation, value, alpha).to_hsla())
    }

    pub fn hsv(hue: f64, saturation: f64, value: f64) -> Self {
        Self::hsva(hue, saturation, value, 1.0)
    }

    pub fn from_xyz(x: f64, y: f64, z: f64) -> Self {
        Self::from(Xyz::new(x, y, z))
    }

    pub fn from_lab(l: f64, a: f64, b: f64) -> Self {
        Self::from(Lab::new(l, a, b))
    }

    pub fn from_lch(l: f64, c: f64, h: f64) -> Self {
        Self::from(LCh::new(l, c, h))
    }

    /// Parses `#rgb` or `#rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        hex::parse(hex).map(|[r, g, b]| Self::rgb(r, g, b))
    }

    /// Unpacks a `0xRRGGBB` integer. Values outside `[0, 0xFFFFFF]` are clamped.
    pub fn from_int(packed: i64) -> Self {
        let packed = packed.clamp(0, 0xFFFFFF);
        Self::rgb(
            ((packed >> 16) & 0xFF) as u8,
            ((packed >> 8) & 0xFF) as u8,
            (packed & 0xFF) as u8,
        )
    }

    /// A shade of gray with the given lightness.
    pub fn graytone(lightness: f64) -> Self {
        Self::hsl(0.0, 0.0, lightness)
    }

    pub fn to_hsla(&self) -> Hsla {
        Hsla {
            h: self.hue,
            s: self.saturation,
            l: self.lightness,
            a: self.alpha,
        }
    }

    pub fn to_rgba(&self) -> Rgba {
        self.to_rgba_float().denormalize()
    }

    /// The exact, unrounded RGB representation.
    pub fn to_rgba_float(&self) -> NormalizedRgba {
        self.to_hsla().to_rgb()
    }

    pub fn to_hsva(&self) -> Hsva {
        self.to_hsla().to_hsva()
    }

    pub fn to_xyz(&self) -> Xyz {
        self.to_rgba().normalize().to_xyz()
    }

    pub fn to_lab(&self) -> Lab {
        self.to_xyz().to_lab()
    }

    pub fn to_lch(&self) -> LCh {
        self.to_lab().to_lch()
    }

    /// Lowercase `#rrggbb`. Alpha is dropped.
    pub fn to_hex(&self) -> String {
        let Rgba { r, g, b, .. } = self.to_rgba();
        hex::format([r.into(), g.into(), b.into()])
    }

    /// Packs the RGB channels into `0xRRGGBB`. Alpha is dropped.
    pub fn to_int(&self) -> u32 {
        let Rgba { r, g, b, .. } = self.to_rgba();
        (u32::from(r.value()) << 16) | (u32::from(g.value()) << 8) | u32::from(b.value())
    }

    pub fn to_css_rgb(&self) -> String {
        self.to_rgba().to_css()
    }

    pub fn to_css_hsl(&self) -> String {
        self.to_hsla().to_css()
    }

    pub fn alpha(&self) -> f64 {
        self.alpha.value()
    }

    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self {
            alpha: UnitInterval::new(alpha),
            ..*self
        }
    }

    /// Rotates the hue by `degrees`.
    pub fn rotate_hue(&self, degrees: f64) -> Self {
        Self {
            hue: Hue::new(self.hue.value() + degrees),
            ..*self
        }
    }

    /// The color on the opposite side of the color wheel.
    pub fn complementary(&self) -> Self {
        self.rotate_hue(180.0)
    }

    /// Adds `amount` to the lightness. Negative amounts darken.
    pub fn lighten(&self, amount: f64) -> Self {
        Self {
            lightness: UnitInterval::new(self.lightness.value() + amount),
            ..*self
        }
    }

    pub fn darken(&self, amount: f64) -> Self {
        self.lighten(-amount)
    }

    /// Adds `amount` to the saturation. Negative amounts desaturate.
    pub fn saturate(&self, amount: f64) -> Self {
        Self {
            saturation: UnitInterval::new(self.saturation.value() + amount),
            ..*self
        }
    }

    pub fn desaturate(&self, amount: f64) -> Self {
        self.saturate(-amount)
    }

    /// A gray with the same CIE lightness as this color. Alpha is kept.
    pub fn to_gray(&self) -> Self {
        let lch = self.to_lch();
        Self::from_lch(lch.l, 0.0, 0.0)
            .desaturate(1.0)
            .with_alpha(self.alpha())
    }

    /// Perceived brightness in `[0, 1]`, as defined by the W3C accessibility guidelines.
    pub fn brightness(&self) -> f64 {
        let NormalizedRgba { r, g, b, .. } = self.to_rgba_float();
        (299.0 * r.value() + 587.0 * g.value() + 114.0 * b.value()) / 1000.0
    }

    /// Relative luminance in `[0, 1]`, as defined by WCAG 2.0.
    pub fn luminance(&self) -> f64 {
        let linear = |c: UnitInterval| {
            let c = c.value();
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };

        let NormalizedRgba { r, g, b, .. } = self.to_rgba_float();
        0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
    }

    /// WCAG contrast ratio between two colors, in `[1, 21]`. Symmetric.
    pub fn contrast(&self, other: &Color) -> f64 {
        let (l1, l2) = (self.luminance(), other.luminance());
        let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
        (lighter + 0.05) / (darker + 0.05)
    }

    pub fn is_light(&self) -> bool {
        self.brightness() > 0.5
    }

    /// Whether the contrast ratio between the two colors is above the WCAG AA threshold
    /// of 4.5.
    pub fn is_readable(&self, other: &Color) -> bool {
        self.contrast(other) > 4.5
    }

    /// Black for light colors, white for dark ones.
    pub fn text_color(&self) -> Self {
        if self.is_light() {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }

    /// CIE76 color difference (ΔE*ab).
    pub fn distance(&self, other: &Color) -> f64 {
        self.to_lab().delta_e(other.to_lab())
    }

    /// Orders colors by relative luminance.
    pub fn cmp_luminance(&self, other: &Color) -> Ordering {
        self.luminance().total_cmp(&other.luminance())
    }

    /// Orders colors by perceived brightness.
    pub fn cmp_brightness(&self, other: &Color) -> Ordering {
        self.brightness().total_cmp(&other.brightness())
    }
}

impl From<Hsla> for Color {
    fn from(hsla: Hsla) -> Self {
        Self {
            hue: hsla.h,
            saturation: hsla.s,
            lightness: hsla.l,
            alpha: hsla.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(rgba: Rgba) -> Self {
        Self::from(rgba.to_hsla())
    }
}

impl From<Xyz> for Color {
    fn from(xyz: Xyz) -> Self {
        Self::from(xyz.to_rgb().denormalize())
    }
}

impl From<Lab> for Color {
    fn from(lab: Lab) -> Self {
        Self::from(lab.to_xyz())
    }
}

impl From<LCh> for Color {
    fn from(lch: LCh) -> Self {
        Self::from(lch.to_lab())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.to_rgba() == other.to_rgba()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_hsl())
    }
}

/// Accepts hex strings (`#rgb`, `#rrggbb`) and case-insensitive color names.
impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            Err(ParseColorError::Empty)
        } else if s.starts_with('#') {
            Self::from_hex(s).ok_or_else(|| ParseColorError::InvalidHex(s.to_owned()))
        } else {
            named::lookup(s).ok_or_else(|| ParseColorError::UnknownName(s.to_owned()))
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
