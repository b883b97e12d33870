pub mod sdl;

use crate::{config::LineStyle, error::SimulationError, field_lines::FieldLines, vector::Vec2};
use sdl2::pixels::Color;

pub use sdl::{init_graphics, DisplayConfig, Graphics};

/// Whatever the field lines are drawn on.
pub trait Renderer {
    fn clear(&mut self, color: Color) -> Result<(), SimulationError>;
    fn draw_polyline(
        &mut self,
        points: &[Vec2],
        color: Color,
        width: u8,
    ) -> Result<(), SimulationError>;
    fn present(&mut self) -> Result<(), SimulationError>;
}

/// Draws every line with at least two points. Returns how many were drawn.
pub fn draw_field_lines<R: Renderer + ?Sized>(
    renderer: &mut R,
    field_lines: &FieldLines,
    style: &LineStyle,
) -> Result<usize, SimulationError> {
    let mut drawn = 0;
    for line in field_lines.renderable() {
        renderer.draw_polyline(line, style.color, style.width)?;
        drawn += 1;
    }
    Ok(drawn)
}

#[cfg(test)]
pub mod testing {
    use super::*;

    #[derive(Default)]
    pub struct RecordingRenderer {
        pub clears: usize,
        pub presents: usize,
        pub polylines: Vec<Vec<Vec2>>,
    }

    impl Renderer for RecordingRenderer {
        fn clear(&mut self, _color: Color) -> Result<(), SimulationError> {
            self.clears += 1;
            Ok(())
        }

        fn draw_polyline(
            &mut self,
            points: &[Vec2],
            _color: Color,
            _width: u8,
        ) -> Result<(), SimulationError> {
            self.polylines.push(points.to_vec());
            Ok(())
        }

        fn present(&mut self) -> Result<(), SimulationError> {
            self.presents += 1;
            Ok(())
        }
    }
}
