//! Color space conversions.
//!
//! Each model is a plain view type. [`Color`](crate::Color) converts to and from these on
//! demand and never stores them.

use std::fmt;

use crate::{
    bounded::{Channel, Hue, UnitInterval},
    math::{clamp, mod_pos, round_to, DEG_TO_RAD, RAD_TO_DEG},
};

// Illuminant D65 white point.
pub const D65_XN: f64 = 0.95047;
pub const D65_YN: f64 = 1.0;
pub const D65_ZN: f64 = 1.08883;

type Mat3 = [[f64; 3]; 3];

#[rustfmt::skip]
const SRGB_TO_XYZ: Mat3 = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

#[rustfmt::skip]
const XYZ_TO_SRGB: Mat3 = [
    [ 3.2406, -1.5372, -0.4986],
    [-0.9689,  1.8758,  0.0415],
    [ 0.0557, -0.2040,  1.0570],
];

fn mat3_dot(m: Mat3, v: [f64; 3]) -> [f64; 3] {
    m.map(|row| row[0] * v[0] + row[1] * v[1] + row[2] * v[2])
}

fn gamma(x: f64) -> f64 {
    if x <= 0.0031308 {
        12.92 * x
    } else {
        1.055 * x.powf(1.0 / 2.4) - 0.055
    }
}

fn gamma_inv(x: f64) -> f64 {
    if x <= 0.04045 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

/// RGB with 8-bit channels and a floating point alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: Channel,
    pub g: Channel,
    pub b: Channel,
    pub a: UnitInterval,
}

impl Rgba {
    /// Channels are rounded and clamped to `[0, 255]`, alpha is clamped to `[0, 1]`.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: Channel::new(r),
            g: Channel::new(g),
            b: Channel::new(b),
            a: UnitInterval::new(a),
        }
    }

    pub fn normalize(self) -> NormalizedRgba {
        NormalizedRgba {
            r: self.r.normalize(),
            g: self.g.normalize(),
            b: self.b.normalize(),
            a: self.a,
        }
    }

    pub fn to_hsla(self) -> Hsla {
        let [r, g, b] = [self.r, self.g, self.b].map(|c| f64::from(c.value()));
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let chroma = max - min;

        let hue = if chroma == 0.0 {
            0.0
        } else {
            let sector = if max == r {
                mod_pos((g - b) / chroma, 6.0)
            } else if max == g {
                (b - r) / chroma + 2.0
            } else {
                (r - g) / chroma + 4.0
            };
            60.0 * sector
        };

        let lightness = (max + min) / (255.0 * 2.0);
        let saturation = if chroma == 0.0 {
            0.0
        } else {
            (chroma / 255.0) / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        Hsla::new(hue, saturation, lightness, self.a.value())
    }

    /// `rgb(r, g, b)`, or `rgba(r, g, b, a)` if the color is not fully opaque.
    pub fn to_css(self) -> String {
        if self.a.value() == 1.0 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// RGB with every channel scaled down to `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedRgba {
    pub r: UnitInterval,
    pub g: UnitInterval,
    pub b: UnitInterval,
    pub a: UnitInterval,
}

impl NormalizedRgba {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: UnitInterval::new(r),
            g: UnitInterval::new(g),
            b: UnitInterval::new(b),
            a: UnitInterval::new(a),
        }
    }

    /// Scales the channels back up to 8 bits, rounding to the nearest integer.
    pub fn denormalize(self) -> Rgba {
        Rgba {
            r: Channel::denormalize(self.r),
            g: Channel::denormalize(self.g),
            b: Channel::denormalize(self.b),
            a: self.a,
        }
    }

    pub fn to_xyz(self) -> Xyz {
        let linear = [self.r, self.g, self.b].map(|c| gamma_inv(c.value()));
        let [x, y, z] = mat3_dot(SRGB_TO_XYZ, linear);
        Xyz::new(x, y, z)
    }
}

/// Hue, saturation, lightness and alpha. This is the layout [`Color`](crate::Color) is
/// stored in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub h: Hue,
    pub s: UnitInterval,
    pub l: UnitInterval,
    pub a: UnitInterval,
}

impl Hsla {
    pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self {
            h: Hue::new(h),
            s: UnitInterval::new(s),
            l: UnitInterval::new(l),
            a: UnitInterval::new(a),
        }
    }

    pub fn to_rgb(self) -> NormalizedRgba {
        let h = self.h.value() / 60.0;
        let (s, l) = (self.s.value(), self.l.value());

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let m = l - chroma / 2.0;
        let x = chroma * (1.0 - ((h % 2.0) - 1.0).abs());

        let (r, g, b) = match h {
            h if h < 1.0 => (chroma, x, 0.0),
            h if h < 2.0 => (x, chroma, 0.0),
            h if h < 3.0 => (0.0, chroma, x),
            h if h < 4.0 => (0.0, x, chroma),
            h if h < 5.0 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        NormalizedRgba::new(r + m, g + m, b + m, self.a.value())
    }

    pub fn to_hsva(self) -> Hsva {
        let (h, s, l, a) = (
            self.h.value(),
            self.s.value(),
            self.l.value(),
            self.a.value(),
        );

        if l == 0.0 {
            return Hsva::new(h, (2.0 * s) / (1.0 + s), 0.0, a);
        }
        if s == 0.0 && l == 1.0 {
            return Hsva::new(h, 0.0, 1.0, a);
        }

        let tmp = s * if l < 0.5 { l } else { 1.0 - l };
        Hsva::new(h, (2.0 * tmp) / (l + tmp), l + tmp, a)
    }

    /// `hsl(h, s%, l%)`, or `hsla(h, s%, l%, a)` if the color is not fully opaque.
    ///
    /// Hue and percentages are rounded to two decimal places.
    pub fn to_css(self) -> String {
        let hue = round_to(self.h.value(), 2);
        let saturation = round_to(self.s.value() * 100.0, 2);
        let lightness = round_to(self.l.value() * 100.0, 2);
        if self.a.value() == 1.0 {
            format!("hsl({hue}, {saturation}%, {lightness}%)")
        } else {
            format!("hsla({hue}, {saturation}%, {lightness}%, {})", self.a)
        }
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Hue, saturation, value and alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsva {
    pub h: Hue,
    pub s: UnitInterval,
    pub v: UnitInterval,
    pub a: UnitInterval,
}

impl Hsva {
    pub fn new(h: f64, s: f64, v: f64, a: f64) -> Self {
        Self {
            h: Hue::new(h),
            s: UnitInterval::new(s),
            v: UnitInterval::new(v),
            a: UnitInterval::new(a),
        }
    }

    pub fn to_hsla(self) -> Hsla {
        let (h, s, v, a) = (
            self.h.value(),
            self.s.value(),
            self.v.value(),
            self.a.value(),
        );

        if v == 0.0 {
            return Hsla::new(h, s / (2.0 - s), 0.0, a);
        }
        if s == 0.0 && v == 1.0 {
            return Hsla::new(h, 0.0, 1.0, a);
        }

        let tmp = (2.0 - s) * v;
        let saturation = (s * v) / if tmp < 1.0 { tmp } else { 2.0 - tmp };
        Hsla::new(h, saturation, tmp / 2.0, a)
    }
}

impl fmt::Display for Hsva {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsva({}, {}%, {}%, {})",
            round_to(self.h.value(), 2),
            round_to(self.s.value() * 100.0, 2),
            round_to(self.v.value() * 100.0, 2),
            self.a
        )
    }
}

/// A color in the CIE 1931 XYZ color space.
///
/// Coordinates are clamped to the range spanned by the D65 white point, so `x` lies in
/// `[0, 0.95047]`, `y` (the luminance) in `[0, 1]` and `z` in `[0, 1.08883]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Xyz {
    x: f64,
    y: f64,
    z: f64,
}

impl Xyz {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: clamp(x, 0.0, D65_XN),
            y: clamp(y, 0.0, D65_YN),
            z: clamp(z, 0.0, D65_ZN),
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    /// Converts back into sRGB. Colors outside the sRGB gamut end up clamped to its edge.
    pub fn to_rgb(self) -> NormalizedRgba {
        let [r, g, b] = mat3_dot(XYZ_TO_SRGB, [self.x, self.y, self.z]).map(gamma);
        NormalizedRgba::new(r, g, b, 1.0)
    }

    pub fn to_lab(self) -> Lab {
        let cut = (6.0_f64 / 29.0).powi(3);
        let f = |t: f64| {
            if t > cut {
                t.cbrt()
            } else {
                (1.0 / 3.0) * (29.0_f64 / 6.0).powi(2) * t + 4.0 / 29.0
            }
        };

        let fy = f(self.y / D65_YN);
        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (f(self.x / D65_XN) - fy),
            b: 200.0 * (fy - f(self.z / D65_ZN)),
        }
    }
}

impl fmt::Display for Xyz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XYZ({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A color in the CIE L*a*b* color space, relative to D65.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    pub fn to_xyz(self) -> Xyz {
        let delta = 6.0 / 29.0;
        let f_inv = |t: f64| {
            if t > delta {
                t.powi(3)
            } else {
                3.0 * delta * delta * (t - 4.0 / 29.0)
            }
        };

        let l = (self.l + 16.0) / 116.0;
        Xyz::new(
            D65_XN * f_inv(l + self.a / 500.0),
            D65_YN * f_inv(l),
            D65_ZN * f_inv(l - self.b / 200.0),
        )
    }

    pub fn to_lch(self) -> LCh {
        LCh::new(
            self.l,
            self.a.hypot(self.b),
            self.b.atan2(self.a) * RAD_TO_DEG,
        )
    }

    /// CIE76 color difference: the euclidean distance between two Lab coordinates.
    pub fn delta_e(self, other: Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lab({}, {}, {})", self.l, self.a, self.b)
    }
}

/// The cylindrical form of [`Lab`]: lightness, chroma and hue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LCh {
    pub l: f64,
    pub c: f64,
    pub h: Hue,
}

impl LCh {
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self {
            l,
            c,
            h: Hue::new(h),
        }
    }

    pub fn to_lab(self) -> Lab {
        let h = self.h.value() * DEG_TO_RAD;
        Lab::new(self.l, self.c * h.cos(), self.c * h.sin())
    }
}

impl fmt::Display for LCh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LCh({}, {}, {})", self.l, self.c, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn hue_from_rgb() {
        let hue = |r, g, b| Rgba::new(r, g, b, 1.0).to_hsla().h.value();
        assert_eq!(hue(255.0, 255.0, 255.0), 0.0);
        assert_eq!(hue(255.0, 0.0, 0.0), 0.0);
        assert_eq!(hue(0.0, 255.0, 0.0), 120.0);
        assert_eq!(hue(0.0, 0.0, 255.0), 240.0);
        assert_eq!(hue(0.0, 255.0, 255.0), 180.0);
        assert_eq!(hue(255.0, 255.0, 0.0), 60.0);
    }

    #[test]
    fn rgb_constructor_clamps() {
        let rgba = Rgba::new(-20.0, 300.0, 127.4, 2.0);
        assert_eq!(rgba.r.value(), 0);
        assert_eq!(rgba.g.value(), 255);
        assert_eq!(rgba.b.value(), 127);
        assert_eq!(rgba.a.value(), 1.0);
    }

    #[test]
    fn rgb_hsl_roundtrip_is_exact() {
        for r in (0..=255).step_by(5) {
            for g in (0..=255).step_by(15) {
                for b in (0..=255).step_by(3) {
                    let rgba = Rgba::new(r as f64, g as f64, b as f64, 0.25);
                    assert_eq!(rgba, rgba.to_hsla().to_rgb().denormalize());
                }
            }
        }
    }

    #[test]
    fn hsl_of_hue_360_is_red() {
        let rgba = Hsla::new(360.0, 1.0, 0.5, 1.0).to_rgb().denormalize();
        assert_eq!(rgba, Rgba::new(255.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn hsv_special_cases() {
        let black = Hsva::new(0.0, 0.5, 0.0, 1.0).to_hsla();
        assert_eq!(black.l.value(), 0.0);
        assert_relative_eq!(black.s.value(), 0.5 / 1.5);

        let white = Hsva::new(0.0, 0.0, 1.0, 1.0).to_hsla();
        assert_eq!(white.s.value(), 0.0);
        assert_eq!(white.l.value(), 1.0);

        let back = Hsla::new(0.0, 0.0, 1.0, 1.0).to_hsva();
        assert_eq!(back.s.value(), 0.0);
        assert_eq!(back.v.value(), 1.0);
    }

    #[test]
    fn hsv_of_pure_red() {
        let hsva = Hsla::new(0.0, 1.0, 0.5, 1.0).to_hsva();
        assert_relative_eq!(hsva.s.value(), 1.0);
        assert_relative_eq!(hsva.v.value(), 1.0);

        let hsla = Hsva::new(0.0, 1.0, 1.0, 1.0).to_hsla();
        assert_relative_eq!(hsla.s.value(), 1.0);
        assert_relative_eq!(hsla.l.value(), 0.5);
    }

    #[test]
    fn xyz_of_black_and_white() {
        let black = Hsla::new(360.0, 0.5, 0.0, 1.0).to_rgb().to_xyz();
        assert_eq!(black, Xyz::new(0.0, 0.0, 0.0));

        let white = Hsla::new(0.0, 0.0, 1.0, 1.0).to_rgb().to_xyz();
        assert_relative_eq!(white.x(), D65_XN, epsilon = 1e-3);
        assert_relative_eq!(white.y(), D65_YN, epsilon = 1e-3);
        assert_relative_eq!(white.z(), D65_ZN, epsilon = 1e-3);
    }

    #[test]
    fn xyz_clamps_to_white_point() {
        let xyz = Xyz::new(2.0, -1.0, 5.0);
        assert_eq!(xyz.x(), D65_XN);
        assert_eq!(xyz.y(), 0.0);
        assert_eq!(xyz.z(), D65_ZN);
    }

    #[test]
    fn lab_of_red() {
        let lab = Rgba::new(255.0, 0.0, 0.0, 1.0).normalize().to_xyz().to_lab();
        assert_relative_eq!(lab.l, 53.233, epsilon = 0.01);
        assert_relative_eq!(lab.a, 80.109, epsilon = 0.01);
        assert_relative_eq!(lab.b, 67.22, epsilon = 0.01);
    }

    #[test]
    fn lch_is_polar_lab() {
        let lab = Lab::new(50.0, 3.0, 4.0);
        let lch = lab.to_lch();
        assert_relative_eq!(lch.c, 5.0);
        assert_relative_eq!(lch.h.value(), 53.130102354, epsilon = 1e-6);

        let back = lch.to_lab();
        assert_relative_eq!(back.a, 3.0, epsilon = 1e-9);
        assert_relative_eq!(back.b, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn lch_hue_is_normalized() {
        let lch = Lab::new(50.0, 0.0, -10.0).to_lch();
        assert_relative_eq!(lch.h.value(), 270.0, epsilon = 1e-9);
    }

    #[test]
    fn css_strings() {
        assert_eq!(Rgba::new(255.0, 127.0, 4.0, 1.0).to_css(), "rgb(255, 127, 4)");
        assert_eq!(
            Rgba::new(1.0, 2.0, 3.0, 0.5).to_css(),
            "rgba(1, 2, 3, 0.5)"
        );
        assert_eq!(
            Hsla::new(120.0, 1.0 / 3.0, 0.5, 1.0).to_css(),
            "hsl(120, 33.33%, 50%)"
        );
        assert_eq!(
            Hsla::new(0.0, 0.0, 1.0, 0.25).to_css(),
            "hsla(0, 0%, 100%, 0.25)"
        );
    }
}
