mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use prismatic::{BlendMode, Color, ColorSpace};
use tracing::debug;

use config::{uniform_scale, Config};
use error::Error;

/// Inspect, mix and blend colors, and render color scales.
#[derive(Parser)]
#[clap(version)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a color in every supported color model.
    Show { color: Color },
    /// Mix two colors.
    Mix {
        a: Color,
        b: Color,
        /// Color space to mix in: rgb, hsl, lab or lch.
        #[clap(long, default_value = "hsl")]
        space: ColorSpace,
        /// 0 yields the first color, 1 the second.
        #[clap(long, default_value_t = 0.5)]
        ratio: f64,
    },
    /// Blend a foreground color onto a background color.
    Blend {
        /// multiply, screen or overlay.
        mode: BlendMode,
        background: Color,
        foreground: Color,
    },
    /// WCAG contrast ratio and CIE76 distance between two colors.
    Contrast { a: Color, b: Color },
    /// Sample a scale defined in the config file.
    Scale {
        name: String,
        /// Number of colors to print. Defaults to the scale's `count`.
        #[clap(long)]
        count: Option<usize>,
        /// Print the scale as a CSS gradient instead.
        #[clap(long)]
        css: bool,
        #[clap(long, default_value = config::PATH)]
        config: PathBuf,
    },
    /// Sample an evenly spaced scale through the given colors.
    Gradient {
        #[clap(required = true)]
        colors: Vec<Color>,
        #[clap(long, default_value = "rgb")]
        space: ColorSpace,
        #[clap(long, default_value_t = 5)]
        count: usize,
        #[clap(long)]
        css: bool,
    },
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let output = match args.command {
        Command::Show { color } => {
            debug!(%color, "show");
            commands::show(&color)
        }
        Command::Mix {
            a,
            b,
            space,
            ratio,
        } => commands::mix(&a, &b, space, ratio),
        Command::Blend {
            mode,
            background,
            foreground,
        } => commands::blend_colors(mode, &background, &foreground),
        Command::Contrast { a, b } => commands::contrast(&a, &b),
        Command::Scale {
            name,
            count,
            css,
            config,
        } => {
            let config = Config::load(&config)?;
            let scale_config = config.scale(&name)?;
            let scale = scale_config.to_scale()?;
            debug!(%name, space = %scale.space(), "rendering scale from config");
            commands::render_scale(&scale, count.unwrap_or(scale_config.count), css)?
        }
        Command::Gradient {
            colors,
            space,
            count,
            css,
        } => {
            let scale = uniform_scale(space, &colors)?;
            commands::render_scale(&scale, count, css)?
        }
    };

    println!("{output}");
    Ok(())
}
