use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("Color string is empty")]
    Empty,
    #[error("Invalid hex color {0:?} (expected #rgb or #rrggbb)")]
    InvalidHex(String),
    #[error("Unknown color name {0:?}")]
    UnknownName(String),
    #[error("Unknown color space {0:?} (expected one of rgb, hsl, lab, lch)")]
    UnknownColorSpace(String),
    #[error("Unknown blend mode {0:?} (expected one of multiply, screen, overlay)")]
    UnknownBlendMode(String),
}
