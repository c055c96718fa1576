use std::{collections::HashMap, path::Path};

use prismatic::{Color, ColorScale, ColorSpace, ColorStop};
use serde::Deserialize;
use tracing::debug;

use crate::error::Error;

pub const PATH: &str = "swatch.toml";

#[derive(Deserialize)]
pub struct Config {
    /// Named color scales, usable with `swatch scale <name>`.
    #[serde(default)]
    pub scales: HashMap<String, ScaleConfig>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!(?path, "loading config");
        let config = std::fs::read_to_string(path)?;
        Self::parse(&config)
    }

    pub fn parse(source: &str) -> Result<Self, Error> {
        let config: Config = toml::from_str(source)?;
        debug!(scales = config.scales.len(), "config loaded");
        Ok(config)
    }

    pub fn scale(&self, name: &str) -> Result<&ScaleConfig, Error> {
        self.scales
            .get(name)
            .ok_or_else(|| Error::UnknownScale(name.to_owned()))
    }
}

#[derive(Deserialize)]
pub struct ScaleConfig {
    /// The color space the scale is interpolated in. Defaults to RGB.
    #[serde(default)]
    pub space: ColorSpace,
    /// How many colors `swatch scale` prints when `--count` is not given.
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(flatten)]
    pub source: ScaleSource,
}

fn default_count() -> usize {
    7
}

/// The colors a scale is made of.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum ScaleSource {
    /// Explicit endpoints, with stops at arbitrary ratios in between.
    Stops {
        start: Color,
        end: Color,
        #[serde(default)]
        stops: Vec<StopConfig>,
    },
    /// A list of colors spaced out evenly. The first and last colors are the endpoints.
    Uniform { colors: Vec<Color> },
}

#[derive(Deserialize)]
pub struct StopConfig {
    pub color: Color,
    pub ratio: f64,
}

impl ScaleConfig {
    pub fn to_scale(&self) -> Result<ColorScale, Error> {
        match &self.source {
            ScaleSource::Stops { start, end, stops } => {
                let stops = stops
                    .iter()
                    .map(|stop| ColorStop::new(stop.color, stop.ratio))
                    .collect();
                Ok(ColorScale::new(self.space, *start, stops, *end))
            }
            ScaleSource::Uniform { colors } => uniform_scale(self.space, colors),
        }
    }
}

/// Builds a scale from at least two evenly spaced colors.
pub fn uniform_scale(space: ColorSpace, colors: &[Color]) -> Result<ColorScale, Error> {
    match colors {
        [start, middle @ .., end] => Ok(ColorScale::uniform(space, *start, middle, *end)),
        _ => Err(Error::TooFewColors(colors.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = r##"
        [scales.sunset]
        space = "lch"
        start = "#ff0000"
        end = "yellow"
        stops = [{ color = "blue", ratio = 0.3 }]

        [scales.rainbow]
        space = "hsl"
        count = 12
        colors = ["red", "orange", "yellow", "green", "blue"]

        [scales.plain]
        start = "black"
        end = "white"
    "##;

    #[test]
    fn parse_scales() {
        let config = Config::parse(EXAMPLE).unwrap();
        assert_eq!(config.scales.len(), 3);

        let sunset = config.scale("sunset").unwrap();
        assert_eq!(sunset.space, ColorSpace::LCh);
        assert_eq!(sunset.count, 7);
        let scale = sunset.to_scale().unwrap();
        assert_eq!(scale.stops().start(), Color::rgb(255, 0, 0));
        assert_eq!(scale.stops().middle()[0].ratio(), 0.3);
        assert_eq!(scale.sample(1.0), Color::rgb(255, 255, 0));

        let rainbow = config.scale("rainbow").unwrap();
        assert_eq!(rainbow.count, 12);
        let scale = rainbow.to_scale().unwrap();
        assert_eq!(scale.space(), ColorSpace::Hsl);
        assert_eq!(scale.stops().middle().len(), 3);
        assert_eq!(scale.sample(0.5), Color::rgb(255, 255, 0));

        let plain = config.scale("plain").unwrap();
        assert_eq!(plain.space, ColorSpace::Rgb);
        assert_eq!(plain.to_scale().unwrap(), ColorScale::grayscale());
    }

    #[test]
    fn empty_config_has_no_scales() {
        let config = Config::parse("").unwrap();
        assert!(config.scales.is_empty());
        assert!(matches!(
            config.scale("sunset"),
            Err(Error::UnknownScale(name)) if name == "sunset"
        ));
    }

    #[test]
    fn invalid_colors_are_rejected() {
        let result = Config::parse(
            r#"
            [scales.broken]
            colors = ["red", "not a color"]
            "#,
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn uniform_scale_needs_two_colors() {
        let red = Color::rgb(255, 0, 0);
        assert!(matches!(
            uniform_scale(ColorSpace::Rgb, &[red]),
            Err(Error::TooFewColors(1))
        ));
        assert!(uniform_scale(ColorSpace::Rgb, &[red, red]).is_ok());
    }
}
