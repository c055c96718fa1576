//! Color conversion, mixing and gradients.
//!
//! [`Color`] stores colors as HSLA and converts to and from RGB, HSV, CIE XYZ, CIE Lab and
//! CIE LCh on demand. On top of that the crate provides blending ([`blend`]), mixing in
//! several color spaces ([`ColorSpace`]), perceptual metrics such as WCAG contrast, and
//! multi-stop gradients ([`ColorScale`]) that can be rendered as CSS.
//!
//! ```
//! use prismatic::{Color, ColorScale, ColorSpace, ColorStop};
//!
//! let red: Color = "red".parse().unwrap();
//! let blue = Color::from_hex("#0000ff").unwrap();
//! assert_eq!(red.mix(ColorSpace::Hsl, &blue, 0.5).to_hex(), "#ff00ff");
//!
//! let scale = ColorScale::new(
//!     ColorSpace::Hsl,
//!     red,
//!     vec![ColorStop::new(blue, 0.3)],
//!     Color::rgb(255, 255, 0),
//! );
//! assert_eq!(scale.sample(0.3), blue);
//! ```

pub mod blend;
pub mod bounded;
mod color;
pub mod colorspace;
mod error;
pub mod hex;
pub mod math;
mod mix;
pub mod named;
pub mod scale;

pub use blend::{blend, BlendMode};
pub use color::Color;
pub use error::ParseColorError;
pub use mix::ColorSpace;
pub use scale::{combine_stops, ColorScale, ColorStop, ColorStops};
