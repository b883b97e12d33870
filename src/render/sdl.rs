use super::Renderer;
use crate::{error::SimulationError, motion::SharedPointer, vector::Vec2};
use log::debug;
use sdl2::{
    gfx::primitives::DrawRenderer, mouse::MouseUtil, pixels::Color, render::Canvas,
    video::Window, EventPump,
};

pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
}

pub struct Graphics {
    pub sdl_context: sdl2::Sdl,
    pub canvas: Canvas<Window>,
    mouse: MouseUtil,
}

fn platform_error<E: ToString>(error: E) -> SimulationError {
    SimulationError::Platform(error.to_string())
}

pub fn init_graphics(display_config: DisplayConfig) -> Result<Graphics, SimulationError> {
    let sdl_context = sdl2::init().map_err(platform_error)?;
    let video_subsystem = sdl_context.video().map_err(platform_error)?;

    let window = video_subsystem
        .window("Kinks", display_config.width, display_config.height)
        .position_centered()
        .build()
        .map_err(platform_error)?;
    let canvas = window
        .into_canvas()
        .present_vsync()
        .build()
        .map_err(platform_error)?;
    let mouse = sdl_context.mouse();

    Ok(Graphics {
        sdl_context,
        canvas,
        mouse,
    })
}

fn to_screen(point: &Vec2) -> (i16, i16) {
    // Float to int casts saturate, so far-away points clip at the border.
    (point.x.round() as i16, point.y.round() as i16)
}

impl Graphics {
    pub fn event_pump(&self) -> Result<EventPump, SimulationError> {
        self.sdl_context.event_pump().map_err(platform_error)
    }

    /// Hands the mouse position to `pointer`, first warping the mouse if
    /// the charge asked for it.
    pub fn sync_pointer(&self, pointer: &SharedPointer, event_pump: &EventPump) {
        if let Some(requested) = pointer.take_request() {
            debug!("Warping pointer to {:?}", requested);
            self.mouse.warp_mouse_in_window(
                self.canvas.window(),
                requested.x.round() as i32,
                requested.y.round() as i32,
            );
            pointer.store(requested);
            return;
        }
        let mouse_state = event_pump.mouse_state();
        pointer.store(Vec2::new(mouse_state.x() as f64, mouse_state.y() as f64));
    }
}

impl Renderer for Graphics {
    fn clear(&mut self, color: Color) -> Result<(), SimulationError> {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
        Ok(())
    }

    fn draw_polyline(
        &mut self,
        points: &[Vec2],
        color: Color,
        width: u8,
    ) -> Result<(), SimulationError> {
        for segment in points.windows(2) {
            let (x0, y0) = to_screen(&segment[0]);
            let (x1, y1) = to_screen(&segment[1]);
            self.canvas
                .thick_line(x0, y0, x1, y1, width, color)
                .map_err(SimulationError::Render)?;
        }
        Ok(())
    }

    fn present(&mut self) -> Result<(), SimulationError> {
        self.canvas.present();
        Ok(())
    }
}
