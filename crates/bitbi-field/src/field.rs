//! Per-column rain drop state.

use bitbi_core::{ConfigError, RainConfig};
use rand::Rng;

/// How far above the viewport a fresh column may start, in rows.
/// Staggered negative starts keep new streams from arriving in lockstep.
const SPAWN_DEPTH: f32 = 100.0;

/// One vertical glyph lane.
#[derive(Debug, Clone)]
struct Column {
    /// Vertical offset of the drop head in glyph-height units.
    /// Negative while the drop is still above the visible area.
    row: f32,
    /// Symbol drawn for the current frame; re-rolled every advance.
    glyph: char,
}

/// The field of falling glyph streams.
///
/// Holds one [`Column`] per horizontal glyph cell of the viewport:
/// `columns.len() == width / glyph_size` after construction and after
/// every [`resize`](Self::resize).
#[derive(Debug, Clone)]
pub struct RainField {
    glyph_size: u16,
    charset: Vec<char>,
    reset_probability: f32,
    width: u32,
    height: u32,
    columns: Vec<Column>,
}

impl RainField {
    /// Create a field sized to the initial viewport.
    ///
    /// Fails fast on an invalid configuration (zero glyph size, empty
    /// charset); everything after construction is infallible.
    pub fn new<R: Rng>(
        config: &RainConfig,
        width: u32,
        height: u32,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut field = Self {
            glyph_size: config.glyph_size,
            charset: config.charset_chars(),
            reset_probability: config.reset_probability,
            width: 0,
            height: 0,
            columns: Vec::new(),
        };
        field.resize(width, height, rng);
        Ok(field)
    }

    /// Pixel size of one glyph cell.
    pub fn glyph_size(&self) -> u16 {
        self.glyph_size
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the field has no columns (zero-width viewport).
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Row position of column `i` in glyph-height units.
    pub fn position(&self, i: usize) -> f32 {
        self.columns[i].row
    }

    /// Symbol column `i` shows this frame.
    pub fn glyph(&self, i: usize) -> char {
        self.columns[i].glyph
    }

    /// Adjust the column array to a new viewport.
    ///
    /// The column count is recomputed from scratch on every call, so
    /// resize notifications may arrive at any frequency. Surviving
    /// columns keep their positions untouched; columns added on growth
    /// start at a random position above the visible area (strictly
    /// negative). Shrinking discards trailing columns.
    pub fn resize<R: Rng>(&mut self, width: u32, height: u32, rng: &mut R) {
        self.width = width;
        self.height = height;
        let count = (width / u32::from(self.glyph_size)) as usize;
        if count < self.columns.len() {
            self.columns.truncate(count);
        }
        while self.columns.len() < count {
            let row = -(1.0 + rng.random::<f32>() * (SPAWN_DEPTH - 1.0));
            let glyph = pick(&self.charset, rng);
            self.columns.push(Column { row, glyph });
        }
    }

    /// Move the field forward one frame.
    ///
    /// Every column re-rolls its glyph, then falls one row. A column
    /// whose head has passed the bottom edge (`row * glyph_size`
    /// strictly greater than the viewport height) instead restarts from
    /// the top with probability `reset_probability`; otherwise it keeps
    /// falling, so streams overshoot by a randomized amount before
    /// looping. Columns at or above the edge never reset.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) {
        let height = self.height as f32;
        for column in &mut self.columns {
            column.glyph = pick(&self.charset, rng);
            let y = column.row * f32::from(self.glyph_size);
            if y > height && rng.random::<f32>() < self.reset_probability {
                column.row = 0.0;
            } else {
                column.row += 1.0;
            }
        }
    }
}

/// Uniform choice from the charset.
fn pick<R: Rng>(charset: &[char], rng: &mut R) -> char {
    let index = (rng.random::<f32>() * charset.len() as f32) as usize;
    charset[index.min(charset.len() - 1)]
}
