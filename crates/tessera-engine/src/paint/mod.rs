//! Color input model.
//!
//! Scope:
//! - caller-facing RGB colors (0–255 bytes or named colors)
//! - normalization to the 0..1 vectors uploaded as uniforms
//!
//! Alpha is deliberately absent: transparency comes from the fixed blend mode
//! and from texture alpha.

pub mod color;
mod error;

pub use color::Rgb;
pub use error::ColorParseError;
