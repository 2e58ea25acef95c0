//! Core types for the bitbi digital rain animation.
//!
//! This crate holds everything the simulation and the terminal frontend
//! share: the configuration model and its validation, the default
//! charset and colors, color blending primitives, and construction of
//! the random source that drives glyph choice and column resets.

mod chars;
mod color;
mod config;
mod error;
pub mod rng;

pub use chars::DEFAULT_CHARSET;
pub use color::{Rgb, Rgba};
pub use config::RainConfig;
pub use error::ConfigError;
pub use rng::RainRng;
