//! Rain field simulation and rendering for bitbi.
//!
//! This crate owns the animated part of the digital rain effect: the
//! per-column drop state ([`RainField`]), the painting of one frame
//! ([`Renderer`]) over an abstract drawing target ([`Surface`]), and a
//! software glyph-cell raster ([`CellGrid`]) the terminal frontend
//! paints from.
//!
//! The animation is frame-count driven: one [`Renderer::draw`] call
//! moves every column exactly one row, however irregularly the host
//! schedules frames.

mod field;
mod render;
mod surface;

pub use field::RainField;
pub use render::Renderer;
pub use surface::{Cell, CellGrid, Surface, VerticalGradient};
