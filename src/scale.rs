//! Color scales (gradients) built from ordered color stops.
//!
//! A scale is anchored by a start color at ratio 0 and an end color at ratio 1. Any number of
//! intermediate stops may sit between them, kept sorted by ratio. Scales are immutable: every
//! operation returns a new value.

use std::iter;

use tracing::trace;

use crate::{bounded::UnitInterval, math::round_to, Color, ColorSpace};

/// Gap left between the two halves of a combined scale.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// The number of stops non-RGB scales are resampled to before being turned into CSS, as CSS
/// gradients always interpolate in RGB.
const CSS_MIN_STOPS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    color: Color,
    ratio: UnitInterval,
}

impl ColorStop {
    /// Creates a stop. The ratio is clamped to `[0, 1]`.
    pub fn new(color: Color, ratio: f64) -> Self {
        Self {
            color,
            ratio: UnitInterval::new(ratio),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn ratio(&self) -> f64 {
        self.ratio.value()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColorStops {
    start: Color,
    middle: Vec<ColorStop>,
    end: Color,
}

impl ColorStops {
    /// The middle stops are sorted by ratio. Stops with equal ratios keep their order.
    pub fn new(start: Color, mut middle: Vec<ColorStop>, end: Color) -> Self {
        middle.sort_by(|a, b| a.ratio().total_cmp(&b.ratio()));
        Self { start, middle, end }
    }

    /// Spaces `middle` out evenly between the two endpoints.
    pub fn uniform(start: Color, middle: &[Color], end: Color) -> Self {
        let n = (middle.len() + 1) as f64;
        let middle = middle
            .iter()
            .enumerate()
            .map(|(i, &color)| ColorStop::new(color, (i + 1) as f64 / n))
            .collect();
        Self { start, middle, end }
    }

    pub fn start(&self) -> Color {
        self.start
    }

    pub fn middle(&self) -> &[ColorStop] {
        &self.middle
    }

    pub fn end(&self) -> Color {
        self.end
    }

    /// Inserts a stop after every stop whose ratio is not greater than `ratio`.
    pub fn add_stop(&self, color: Color, ratio: f64) -> Self {
        let stop = ColorStop::new(color, ratio);
        let index = self
            .middle
            .iter()
            .position(|other| other.ratio() > stop.ratio())
            .unwrap_or(self.middle.len());

        let mut middle = self.middle.clone();
        middle.insert(index, stop);
        Self {
            middle,
            ..self.clone()
        }
    }

    /// Samples the stops at `x`, mixing neighboring stops with `mix`.
    ///
    /// `x` below 0 yields the start color and `x` above 1 the end color. Otherwise the first
    /// segment `[left, right]` containing `x` is mixed at `(x - left) / (right - left)`.
    /// Zero-width segments yield their left color.
    pub fn sample_with<F>(&self, x: f64, mix: F) -> Color
    where
        F: Fn(&Color, &Color, f64) -> Color,
    {
        if x < 0.0 {
            return self.start;
        }
        if x > 1.0 {
            return self.end;
        }

        let mut left = ColorStop::new(self.start, 0.0);
        for right in self
            .middle
            .iter()
            .copied()
            .chain(iter::once(ColorStop::new(self.end, 1.0)))
        {
            if left.ratio() <= x && x <= right.ratio() {
                if left.ratio() == right.ratio() {
                    return left.color;
                }
                let p = (x - left.ratio()) / (right.ratio() - left.ratio());
                return mix(&left.color, &right.color, p);
            }
            left = right;
        }

        left.color
    }

    /// Mirrors the stops around the middle of the scale.
    pub fn reverse(&self) -> Self {
        Self {
            start: self.end,
            middle: self
                .middle
                .iter()
                .rev()
                .map(|stop| ColorStop::new(stop.color, 1.0 - stop.ratio()))
                .collect(),
            end: self.start,
        }
    }

    /// Maps every stop's color through `f`, which receives the stop's ratio and color.
    pub fn modify<F>(&self, mut f: F) -> Self
    where
        F: FnMut(f64, Color) -> Color,
    {
        let start = f(0.0, self.start);
        let middle = self
            .middle
            .iter()
            .map(|stop| ColorStop {
                color: f(stop.ratio(), stop.color),
                ratio: stop.ratio,
            })
            .collect();
        let end = f(1.0, self.end);
        Self { start, middle, end }
    }

    /// Joins `self` and `other` at `x`, see [`combine_stops`].
    pub fn combine(&self, x: f64, other: &ColorStops) -> Self {
        combine_stops(DEFAULT_EPSILON, x, self, other)
    }

    /// Adds `n - 1` stops sampled at `k / n` (with `mix`), so that the scale has at least
    /// `n + 1` stops in total.
    pub fn min_color_stops<F>(&self, n: usize, mix: F) -> Self
    where
        F: Fn(&Color, &Color, f64) -> Color,
    {
        trace!(n, existing = self.middle.len(), "resampling color stops");
        (1..n).fold(self.clone(), |stops, k| {
            let ratio = k as f64 / n as f64;
            stops.add_stop(self.sample_with(ratio, &mix), ratio)
        })
    }
}

/// Concatenates two sets of stops, switching from `a` to `b` at ratio `x`.
///
/// The middle stops of `a` are scaled into `[0, x]` and those of `b` into `[x, 1]`. The end
/// of `a` is placed at `x - epsilon` and the start of `b` at `x`, so that sampling just left
/// of `x` sees `a` and sampling at `x` sees `b`.
pub fn combine_stops(epsilon: f64, x: f64, a: &ColorStops, b: &ColorStops) -> ColorStops {
    trace!(x, epsilon, "combining color stops");
    let first = a
        .middle
        .iter()
        .map(|stop| ColorStop::new(stop.color, stop.ratio() * x));
    let seam = [
        ColorStop::new(a.end, x - epsilon),
        ColorStop::new(b.start, x),
    ];
    let second = b
        .middle
        .iter()
        .map(|stop| ColorStop::new(stop.color, x + stop.ratio() * (1.0 - x)));

    ColorStops::new(a.start, first.chain(seam).chain(second).collect(), b.end)
}

/// A set of color stops together with the color space they are interpolated in.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorScale {
    space: ColorSpace,
    stops: ColorStops,
}

impl ColorScale {
    pub fn new(space: ColorSpace, start: Color, middle: Vec<ColorStop>, end: Color) -> Self {
        Self::from_stops(space, ColorStops::new(start, middle, end))
    }

    pub fn from_stops(space: ColorSpace, stops: ColorStops) -> Self {
        Self { space, stops }
    }

    /// Black to white in RGB.
    pub fn grayscale() -> Self {
        Self::new(ColorSpace::Rgb, Color::BLACK, Vec::new(), Color::WHITE)
    }

    /// A scale with `middle` spaced out evenly between `start` and `end`.
    pub fn uniform(space: ColorSpace, start: Color, middle: &[Color], end: Color) -> Self {
        Self::from_stops(space, ColorStops::uniform(start, middle, end))
    }

    pub fn space(&self) -> ColorSpace {
        self.space
    }

    pub fn stops(&self) -> &ColorStops {
        &self.stops
    }

    pub fn with_space(&self, space: ColorSpace) -> Self {
        Self {
            space,
            stops: self.stops.clone(),
        }
    }

    pub fn add_stop(&self, color: Color, ratio: f64) -> Self {
        Self::from_stops(self.space, self.stops.add_stop(color, ratio))
    }

    pub fn sample(&self, x: f64) -> Color {
        self.stops.sample_with(x, |a, b, t| self.space.mix(a, b, t))
    }

    /// Samples `n` evenly spaced colors, including both endpoints when `n >= 2`.
    pub fn sample_colors(&self, n: usize) -> Vec<Color> {
        match n {
            0 => Vec::new(),
            1 => vec![self.sample(0.0)],
            _ => (0..n)
                .map(|i| self.sample(i as f64 / (n - 1) as f64))
                .collect(),
        }
    }

    pub fn reverse(&self) -> Self {
        Self::from_stops(self.space, self.stops.reverse())
    }

    pub fn modify<F>(&self, f: F) -> Self
    where
        F: FnMut(f64, Color) -> Color,
    {
        Self::from_stops(self.space, self.stops.modify(f))
    }

    /// Joins two scales at `x`. The result is interpolated in this scale's color space.
    pub fn combine(&self, x: f64, other: &ColorScale) -> Self {
        Self::from_stops(self.space, self.stops.combine(x, &other.stops))
    }

    pub fn min_color_stops(&self, n: usize) -> Self {
        Self::from_stops(
            self.space,
            self.stops
                .min_color_stops(n, |a, b, t| self.space.mix(a, b, t)),
        )
    }

    /// The comma-separated stop list of a CSS gradient, e.g. for use in `linear-gradient()`.
    ///
    /// Scales in spaces other than RGB are resampled first so that the browser's RGB
    /// interpolation approximates them.
    pub fn css_color_stops(&self) -> String {
        let resampled;
        let stops = match self.space {
            ColorSpace::Rgb => &self.stops,
            _ => {
                resampled = self.stops.min_color_stops(CSS_MIN_STOPS, |a, b, t| {
                    self.space.mix(a, b, t)
                });
                &resampled
            }
        };
        trace!(space = %self.space, count = stops.middle.len() + 2, "generating css color stops");

        let middle = stops.middle.iter().map(|stop| {
            let percentage = round_to(stop.ratio() * 100.0, 2);
            format!("{} {percentage}%", stop.color.to_css_hsl())
        });
        iter::once(stops.start.to_css_hsl())
            .chain(middle)
            .chain(iter::once(stops.end.to_css_hsl()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
