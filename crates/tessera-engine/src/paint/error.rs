use thiserror::Error;

/// Error returned when parsing an [`Rgb`](super::Rgb) from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The input was empty or whitespace only.
    #[error("empty color string")]
    Empty,

    /// A `#`-prefixed literal that is not `#rgb` or `#rrggbb` hex.
    #[error("invalid hex color literal: {0:?}")]
    InvalidHex(String),

    /// A bare word that does not name a known color.
    #[error("unknown color name: {0:?}")]
    UnknownName(String),
}
