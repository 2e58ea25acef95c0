//! Rain animation configuration.

use serde::{Deserialize, Serialize};

use crate::chars::DEFAULT_CHARSET;
use crate::color::Rgb;
use crate::error::ConfigError;

/// Accent color of the falling glyphs (purple).
const ACCENT: Rgb = Rgb::new(147, 51, 234);

/// Background color the trails fade into (dark navy).
const BACKGROUND: Rgb = Rgb::new(10, 14, 39);

/// Tunables for the rain field and renderer.
///
/// Every field has a default, so a partial (or absent) config file is
/// fine. Call [`RainConfig::validate`] after deserializing; the
/// simulation refuses to start from an invalid configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RainConfig {
    /// Pixel size of one glyph cell.
    pub glyph_size: u16,
    /// Symbols the columns draw from.
    pub charset: String,
    /// Opacity of the per-frame background fill that fades the trails.
    pub fade_alpha: f32,
    /// Per-frame chance that an off-screen column restarts from the top.
    pub reset_probability: f32,
    /// Color of the falling glyphs.
    pub accent: Rgb,
    /// Background color; also the tint of the fade overlay.
    pub background: Rgb,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            glyph_size: 14,
            charset: DEFAULT_CHARSET.to_string(),
            fade_alpha: 0.05,
            reset_probability: 0.025,
            accent: ACCENT,
            background: BACKGROUND,
        }
    }
}

impl RainConfig {
    /// Check the configuration invariants.
    ///
    /// A zero glyph size or an empty charset would otherwise produce a
    /// degenerate or undrawable field, so they are rejected up front.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.glyph_size == 0 {
            return Err(ConfigError::GlyphSize);
        }
        if self.charset.is_empty() {
            return Err(ConfigError::EmptyCharset);
        }
        for (name, value) in [
            ("fade_alpha", self.fade_alpha),
            ("reset_probability", self.reset_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::UnitInterval { name, value });
            }
        }
        Ok(())
    }

    /// The charset as an indexable sequence of symbols.
    pub fn charset_chars(&self) -> Vec<char> {
        self.charset.chars().collect()
    }
}
