//! Photoshop-style blend modes.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Color, ParseColorError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    Multiply,
    Screen,
    Overlay,
}

impl BlendMode {
    pub const ALL: [BlendMode; 3] = [Self::Multiply, Self::Screen, Self::Overlay];

    /// Blends two normalized channel values. `a` belongs to the background.
    pub fn blend_channel(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Multiply => a * b,
            Self::Screen => 1.0 - (1.0 - a) * (1.0 - b),
            Self::Overlay => {
                if a < 0.5 {
                    2.0 * a * b
                } else {
                    1.0 - 2.0 * (1.0 - a) * (1.0 - b)
                }
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Multiply => "multiply",
            Self::Screen => "screen",
            Self::Overlay => "overlay",
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlendMode {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseColorError::UnknownBlendMode(s.to_owned()))
    }
}

/// Blends `foreground` onto `background` channel by channel in RGB space. The resulting alpha
/// is the mean of both alphas.
pub fn blend(mode: BlendMode, background: &Color, foreground: &Color) -> Color {
    let bg = background.to_rgba_float();
    let fg = foreground.to_rgba_float();
    let [r, g, b] = [(bg.r, fg.r), (bg.g, fg.g), (bg.b, fg.b)]
        .map(|(a, b)| mode.blend_channel(a.value(), b.value()));

    Color::from_rgba_float(r, g, b, (bg.a.value() + fg.a.value()) / 2.0)
}

impl Color {
    pub fn multiply(&self, foreground: &Color) -> Color {
        blend(BlendMode::Multiply, self, foreground)
    }

    pub fn screen(&self, foreground: &Color) -> Color {
        blend(BlendMode::Screen, self, foreground)
    }

    pub fn overlay(&self, foreground: &Color) -> Color {
        blend(BlendMode::Overlay, self, foreground)
    }
}
