//! Error types for configuration validation.

/// A rejected configuration.
///
/// Raised once at construction or config load; after a configuration
/// passes validation no runtime operation can fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A zero glyph size would make the column count degenerate.
    #[error("glyph size must be positive")]
    GlyphSize,
    /// The rain has nothing to draw from.
    #[error("charset must not be empty")]
    EmptyCharset,
    /// A probability or opacity outside `0.0..=1.0`.
    #[error("{name} must be within 0.0..=1.0, got {value}")]
    UnitInterval {
        /// Which field was rejected.
        name: &'static str,
        /// The offending value.
        value: f32,
    },
}
