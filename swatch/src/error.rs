use prismatic::ParseColorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error while parsing config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("{0}")]
    Color(#[from] ParseColorError),

    #[error("No scale named {0:?} is defined in the config file")]
    UnknownScale(String),
    #[error("A scale needs at least two colors (got {0})")]
    TooFewColors(usize),
    #[error("Cannot sample zero colors from a scale")]
    InvalidCount,
}
