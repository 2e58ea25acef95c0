//! Frame painting for the rain field.

use bitbi_core::{RainConfig, Rgb, Rgba};
use rand::Rng;

use crate::field::RainField;
use crate::surface::{Surface, VerticalGradient};

/// Paints one frame of rain and moves the field forward.
#[derive(Debug, Clone)]
pub struct Renderer {
    /// Background tint blended over the surface every frame.
    fade: Rgba,
    /// Color of the falling glyphs.
    accent: Rgb,
}

impl Renderer {
    /// Build a renderer from the animation configuration.
    pub fn new(config: &RainConfig) -> Self {
        Self {
            fade: Rgba::new(config.background, config.fade_alpha),
            accent: config.accent,
        }
    }

    /// Paint one frame.
    ///
    /// In order: blend the low-opacity fade tint over the whole surface
    /// (this, not clearing, is what leaves trails behind each stream);
    /// draw every column's glyph at its pixel position with a gradient
    /// brush spanning one glyph height above the baseline; then advance
    /// the field one row.
    ///
    /// The routine is frame-count driven, so irregular call intervals
    /// only vary the apparent speed. Pixels on `surface` and the
    /// field's column state are the only side effects.
    pub fn draw<S, R>(&self, surface: &mut S, field: &mut RainField, rng: &mut R)
    where
        S: Surface + ?Sized,
        R: Rng,
    {
        surface.fill(self.fade);

        let size = f32::from(field.glyph_size());
        for i in 0..field.len() {
            let x = i as f32 * size;
            let y = field.position(i) * size;
            let brush = VerticalGradient::new(self.accent, y - size, y);
            surface.draw_glyph(field.glyph(i), x, y, &brush);
        }

        field.advance(rng);
    }
}

#[cfg(test)]
mod tests {
    use bitbi_core::rng;

    use super::*;

    const ACCENT: Rgb = Rgb::new(147, 51, 234);
    const NAVY: Rgb = Rgb::new(10, 14, 39);

    /// A surface that records paint calls instead of rasterizing them.
    #[derive(Debug, PartialEq)]
    enum PaintOp {
        Fill(Rgba),
        Glyph {
            glyph: char,
            x: f32,
            y: f32,
            brush: VerticalGradient,
        },
    }

    struct Recorder {
        width: u32,
        height: u32,
        ops: Vec<PaintOp>,
    }

    impl Recorder {
        fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                ops: Vec::new(),
            }
        }
    }

    impl Surface for Recorder {
        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn fill(&mut self, tint: Rgba) {
            self.ops.push(PaintOp::Fill(tint));
        }

        fn draw_glyph(&mut self, glyph: char, x: f32, y: f32, brush: &VerticalGradient) {
            self.ops.push(PaintOp::Glyph {
                glyph,
                x,
                y,
                brush: *brush,
            });
        }
    }

    fn setup() -> (Renderer, RainField, bitbi_core::RainRng) {
        let config = RainConfig::default();
        let mut rng = rng::seeded(21);
        let field = RainField::new(&config, 140, 70, &mut rng).unwrap();
        (Renderer::new(&config), field, rng)
    }

    #[test]
    fn fade_overlay_comes_first() {
        let (renderer, mut field, mut rng) = setup();
        let mut surface = Recorder::new(140, 70);
        renderer.draw(&mut surface, &mut field, &mut rng);

        assert_eq!(surface.ops[0], PaintOp::Fill(Rgba::new(NAVY, 0.05)));
    }

    #[test]
    fn one_glyph_per_column_at_its_pixel_position() {
        let (renderer, mut field, mut rng) = setup();
        let positions: Vec<f32> = (0..field.len()).map(|i| field.position(i)).collect();
        let glyphs: Vec<char> = (0..field.len()).map(|i| field.glyph(i)).collect();

        let mut surface = Recorder::new(140, 70);
        renderer.draw(&mut surface, &mut field, &mut rng);

        assert_eq!(surface.ops.len(), 1 + positions.len());
        for (i, op) in surface.ops[1..].iter().enumerate() {
            let PaintOp::Glyph { glyph, x, y, brush } = op else {
                panic!("unexpected paint op {op:?}");
            };
            assert_eq!(*glyph, glyphs[i]);
            assert_eq!(*x, i as f32 * 14.0);
            assert_eq!(*y, positions[i] * 14.0);
            assert_eq!(*brush, VerticalGradient::new(ACCENT, y - 14.0, *y));
        }
    }

    #[test]
    fn draw_advances_the_field_one_row() {
        let (renderer, mut field, mut rng) = setup();
        let before: Vec<f32> = (0..field.len()).map(|i| field.position(i)).collect();

        let mut surface = Recorder::new(140, 70);
        renderer.draw(&mut surface, &mut field, &mut rng);

        // All columns start above the viewport, so none can reset.
        for (i, row) in before.iter().enumerate() {
            assert_eq!(field.position(i), row + 1.0);
        }
    }

    #[test]
    fn repeated_draws_keep_one_op_per_column() {
        let (renderer, mut field, mut rng) = setup();
        let mut surface = Recorder::new(140, 70);
        for _ in 0..10 {
            surface.ops.clear();
            renderer.draw(&mut surface, &mut field, &mut rng);
            assert_eq!(surface.ops.len(), 1 + field.len());
        }
    }

    #[test]
    fn empty_field_still_paints_the_fade() {
        let config = RainConfig::default();
        let mut rng = rng::seeded(22);
        let mut field = RainField::new(&config, 0, 0, &mut rng).unwrap();
        let renderer = Renderer::new(&config);

        let mut surface = Recorder::new(0, 0);
        renderer.draw(&mut surface, &mut field, &mut rng);
        assert_eq!(surface.ops, vec![PaintOp::Fill(Rgba::new(NAVY, 0.05))]);
    }
}
