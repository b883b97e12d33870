use crate::vector::Vec2;
use sdl2::pixels::Color;

/// Constants fixed for the whole run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    pub width: u32,
    pub height: u32,
    /// Speed at which disturbances travel away from the charge, in pixels per
    /// second.
    pub propagation_speed: f64,
    /// Seconds between history samples.
    pub sample_interval: f64,
    /// Number of field lines.
    pub directions: usize,
    /// Upper bound on a single step, so a stalled frame does not teleport
    /// the charge.
    pub max_time_step: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            width: 800,
            height: 600,
            propagation_speed: 100.,
            sample_interval: 0.05,
            directions: 16,
            max_time_step: 0.25,
        }
    }
}

impl SimulationConfig {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f64 / 2., self.height as f64 / 2.)
    }

    /// Radius past which a circle cannot intersect the playfield wherever the
    /// charge was when it emitted.
    pub fn visible_radius(&self) -> f64 {
        (self.width as f64).hypot(self.height as f64)
    }

    /// Number of samples needed to cover `visible_radius`.
    pub fn history_capacity(&self) -> usize {
        let per_sample = self.propagation_speed * self.sample_interval;
        (self.visible_radius() / per_sample).ceil().max(1.) as usize
    }
}

/// Per-model constants. Speeds are fractions of the propagation speed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    pub cruise_speed_fraction: f64,
    pub acceleration_fraction: f64,
    pub amplitude_fraction: f64,
    pub orbit_speed_fraction: f64,
    pub stepped_initial_speed: f64,
    pub stepped_acceleration_fraction: f64,
    pub stepped_max_speed_fraction: f64,
    pub rest_duration: f64,
    pub pointer_max_speed_fraction: f64,
    pub reaction_time: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        MotionConfig {
            cruise_speed_fraction: 0.5,
            acceleration_fraction: 0.05,
            amplitude_fraction: 0.9,
            orbit_speed_fraction: 0.7,
            stepped_initial_speed: 0.1,
            stepped_acceleration_fraction: 1.,
            stepped_max_speed_fraction: 0.7,
            rest_duration: 2.,
            pointer_max_speed_fraction: 0.8,
            reaction_time: 0.3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    pub width: u8,
    pub background: Color,
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle {
            color: Color::RGB(255, 0, 0),
            width: 2,
            background: Color::RGB(255, 255, 255),
        }
    }
}
