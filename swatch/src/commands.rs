use prismatic::{blend, BlendMode, Color, ColorScale, ColorSpace};
use tracing::debug;

use crate::error::Error;

/// Every representation of a single color, one per line.
pub fn show(color: &Color) -> String {
    let hsva = color.to_hsva();
    let xyz = color.to_xyz();
    let lab = color.to_lab();
    let lch = color.to_lch();

    let rows = [
        ("hex", color.to_hex()),
        ("rgb", color.to_css_rgb()),
        ("hsl", color.to_css_hsl()),
        (
            "hsv",
            format!(
                "hsv({:.2}, {:.2}%, {:.2}%)",
                hsva.h.value(),
                hsva.s.value() * 100.0,
                hsva.v.value() * 100.0
            ),
        ),
        (
            "xyz",
            format!("xyz({:.4}, {:.4}, {:.4})", xyz.x(), xyz.y(), xyz.z()),
        ),
        (
            "lab",
            format!("lab({:.2}, {:.2}, {:.2})", lab.l, lab.a, lab.b),
        ),
        (
            "lch",
            format!("lch({:.2}, {:.2}, {:.2})", lch.l, lch.c, lch.h.value()),
        ),
        ("luminance", format!("{:.4}", color.luminance())),
        ("brightness", format!("{:.4}", color.brightness())),
        ("text color", color.text_color().to_hex()),
    ];

    rows.iter()
        .map(|(label, value)| format!("{label:<12}{value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn mix(a: &Color, b: &Color, space: ColorSpace, ratio: f64) -> String {
    debug!(%space, ratio, "mixing colors");
    a.mix(space, b, ratio).to_hex()
}

pub fn blend_colors(mode: BlendMode, background: &Color, foreground: &Color) -> String {
    debug!(%mode, "blending colors");
    blend(mode, background, foreground).to_hex()
}

pub fn contrast(a: &Color, b: &Color) -> String {
    let readable = if a.is_readable(b) { "yes" } else { "no" };
    format!(
        "contrast    {:.2}:1\nreadable    {readable}\ndistance    {:.2}",
        a.contrast(b),
        a.distance(b)
    )
}

/// Renders a scale either as `count` hex colors, one per line, or as a CSS gradient.
pub fn render_scale(scale: &ColorScale, count: usize, css: bool) -> Result<String, Error> {
    if css {
        return Ok(format!(
            "linear-gradient(to right, {})",
            scale.css_color_stops()
        ));
    }
    if count == 0 {
        return Err(Error::InvalidCount);
    }

    debug!(count, space = %scale.space(), "sampling scale");
    Ok(scale
        .sample_colors(count)
        .iter()
        .map(Color::to_hex)
        .collect::<Vec<_>>()
        .join("\n"))
}
