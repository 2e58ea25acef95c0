//! Drawing targets for the rain renderer.

use bitbi_core::{Rgb, Rgba};

/// Per-channel distance under which a faded trail cell is considered
/// fully dissolved into the background. Quantized blending stalls once
/// a channel step rounds below one, so this band must cover the stall
/// distance of the default fade opacity.
const DISSOLVE_TOLERANCE: u8 = 10;

/// A vertical gradient brush for the glowing leading edge of a stream:
/// fully transparent at `top`, half opacity at the midpoint, fully
/// opaque at `bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalGradient {
    /// The accent color of the gradient.
    pub color: Rgb,
    /// Pixel y of the transparent end.
    pub top: f32,
    /// Pixel y of the opaque end.
    pub bottom: f32,
}

impl VerticalGradient {
    /// Create a brush spanning `top..bottom`.
    pub const fn new(color: Rgb, top: f32, bottom: f32) -> Self {
        Self { color, top, bottom }
    }

    /// Opacity at pixel `y`, clamped outside the span.
    pub fn alpha_at(&self, y: f32) -> f32 {
        if self.bottom <= self.top {
            return 1.0;
        }
        ((y - self.top) / (self.bottom - self.top)).clamp(0.0, 1.0)
    }
}

/// A drawable target owning pixel dimensions.
///
/// The renderer only ever blends: the translucent [`fill`](Self::fill)
/// is what turns previous frames into fading trails, so an
/// implementation must never treat it as a hard clear.
pub trait Surface {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Blend a translucent tint over the whole surface.
    fn fill(&mut self, tint: Rgba);

    /// Draw one glyph with its baseline at `(x, y)`, colored by `brush`.
    /// Coordinates outside the surface are silently skipped.
    fn draw_glyph(&mut self, glyph: char, x: f32, y: f32, brush: &VerticalGradient);
}

/// One glyph cell of a [`CellGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Last glyph drawn into this cell; space once dissolved.
    pub glyph: char,
    /// Current foreground color, converging to the background as the
    /// fade overlay accumulates.
    pub color: Rgb,
}

/// A software raster at glyph-cell resolution.
///
/// The terminal frontend maps one grid cell to one terminal cell. The
/// grid rasterizes the renderer's pixel-space paint calls coarsely: a
/// glyph lands in the cell above its baseline, tinted by the brush
/// sampled at the baseline, and the per-frame fill blends every cell's
/// color toward the tint. A cell whose color has converged to the
/// background drops its glyph.
#[derive(Debug, Clone)]
pub struct CellGrid {
    width: u32,
    height: u32,
    cell_size: u16,
    cols: usize,
    rows: usize,
    background: Rgb,
    cells: Vec<Cell>,
}

impl CellGrid {
    /// Create a grid for a `width` x `height` pixel viewport divided
    /// into `cell_size` pixel cells. `cell_size` comes from a validated
    /// configuration and must be positive.
    pub fn new(width: u32, height: u32, cell_size: u16, background: Rgb) -> Self {
        let mut grid = Self {
            width: 0,
            height: 0,
            cell_size: cell_size.max(1),
            cols: 0,
            rows: 0,
            background,
            cells: Vec::new(),
        };
        grid.resize(width, height);
        grid
    }

    /// Rebuild the grid for a new viewport, cleared to the background.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.cols = (width / u32::from(self.cell_size)) as usize;
        self.rows = (height / u32::from(self.cell_size)) as usize;
        self.cells.clear();
        self.cells.resize(
            self.cols * self.rows,
            Cell {
                glyph: ' ',
                color: self.background,
            },
        );
    }

    /// Number of cell columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cell rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The background color cells fade into.
    pub fn background(&self) -> Rgb {
        self.background
    }

    /// The cell at `(col, row)`.
    pub fn cell(&self, col: usize, row: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Iterate rows top to bottom, each a slice of `cols()` cells.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols.max(1))
    }
}

impl Surface for CellGrid {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill(&mut self, tint: Rgba) {
        for cell in &mut self.cells {
            cell.color = cell.color.mix(tint.color, tint.alpha);
            if cell.color.close_to(self.background, DISSOLVE_TOLERANCE) {
                cell.glyph = ' ';
                cell.color = self.background;
            }
        }
    }

    fn draw_glyph(&mut self, glyph: char, x: f32, y: f32, brush: &VerticalGradient) {
        if x < 0.0 {
            return;
        }
        let cell_size = f32::from(self.cell_size);
        let col = (x / cell_size) as usize;
        // The glyph box spans the cell above the baseline.
        let row = (y / cell_size).ceil() as i64 - 1;
        if col >= self.cols || row < 0 || row as usize >= self.rows {
            return;
        }
        let cell = &mut self.cells[row as usize * self.cols + col];
        cell.glyph = glyph;
        cell.color = cell.color.mix(brush.color, brush.alpha_at(y));
    }
}
