//! Phase-driven trajectories. Both models keep only an accumulated phase and
//! evaluate position and velocity analytically from it, with unit angular
//! frequency.

use super::Trajectory;
use crate::vector::{normalize_or_zero, Vec2};

/// Harmonic motion along a fixed axis through `base`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillating {
    pub base: Vec2,
    /// Unit axis of oscillation.
    pub direction: Vec2,
    /// Peak speed, which equals the displacement amplitude.
    pub amplitude: f64,
    pub t: f64,
}

impl Oscillating {
    pub fn new(base: Vec2, direction: Vec2, amplitude: f64) -> Oscillating {
        Oscillating {
            base,
            direction: normalize_or_zero(&direction),
            amplitude,
            t: 0.,
        }
    }
}

impl Trajectory for Oscillating {
    fn advance(&mut self, dt: f64) {
        self.t += dt;
    }

    fn position(&self) -> Vec2 {
        self.base + self.direction * self.amplitude * self.t.sin()
    }

    fn velocity(&self) -> Vec2 {
        self.direction * self.amplitude * self.t.cos()
    }
}

/// Uniform circular motion of radius `radius` around `base`, starting at the
/// point straight below it (positive y) and moving towards positive x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circular {
    pub base: Vec2,
    pub radius: f64,
    pub t: f64,
}

impl Circular {
    pub fn new(base: Vec2, radius: f64) -> Circular {
        Circular { base, radius, t: 0. }
    }
}

impl Trajectory for Circular {
    fn advance(&mut self, dt: f64) {
        self.t += dt;
    }

    fn position(&self) -> Vec2 {
        let (sin, cos) = self.t.sin_cos();
        self.base + Vec2::new(sin, cos) * self.radius
    }

    fn velocity(&self) -> Vec2 {
        let (sin, cos) = self.t.sin_cos();
        Vec2::new(cos, -sin) * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn oscillation_turns_around_at_quarter_period() {
        let mut charge = Oscillating::new(Vec2::new(400., 300.), Vec2::new(2., 0.), 90.);
        assert_relative_eq!(charge.velocity(), Vec2::new(90., 0.));
        charge.advance(FRAC_PI_2);
        assert_relative_eq!(charge.position(), Vec2::new(490., 300.), epsilon = 1e-9);
        assert_relative_eq!(charge.velocity(), Vec2::zeros(), epsilon = 1e-9);
    }

    #[test]
    fn circular_velocity_is_the_derivative_of_position() {
        let mut charge = Circular::new(Vec2::new(400., 300.), 70.);
        assert_relative_eq!(charge.position(), Vec2::new(400., 370.));
        let h = 1e-6;
        for _ in 0..50 {
            charge.advance(0.13);
            let before = charge.position();
            let mut ahead = charge;
            ahead.advance(h);
            let numeric = (ahead.position() - before) / h;
            assert_relative_eq!(numeric, charge.velocity(), epsilon = 1e-3);
            assert_relative_eq!(charge.velocity().norm(), 70., epsilon = 1e-9);
            assert_relative_eq!((before - charge.base).norm(), 70., epsilon = 1e-9);
        }
    }
}
