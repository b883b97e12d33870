//! Relativistic aberration of emission directions.
//!
//! A direction at angle `θ` from the emitter's velocity is observed at
//! `θ'` with `tan θ' = γ tan θ`, `θ'` staying in the same half plane as `θ`.
//! Lines crowd towards the perpendicular of the motion and spread out along
//! its axis.

use crate::error::AberrationError;
use crate::vector::{angle_of, Vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aberration {
    pub propagation_speed: f64,
}

impl Aberration {
    pub fn new(propagation_speed: f64) -> Aberration {
        Aberration { propagation_speed }
    }

    /// Lorentz factor for an emitter moving at `velocity`.
    pub fn gamma(&self, velocity: &Vec2) -> Result<f64, AberrationError> {
        let beta = velocity.norm() / self.propagation_speed;
        // Also rejects NaN.
        if !(beta < 1.) {
            return Err(AberrationError::Superluminal {
                velocity: *velocity,
                limit: self.propagation_speed,
            });
        }
        Ok(1. / (1. - beta * beta).sqrt())
    }

    /// Angle at which a line emitted at `angle` by a charge moving at
    /// `emission_velocity` is observed.
    pub fn transform(
        &self,
        angle: f64,
        emission_velocity: &Vec2,
    ) -> Result<f64, AberrationError> {
        if emission_velocity.x == 0. && emission_velocity.y == 0. {
            return Ok(angle);
        }
        let gamma = self.gamma(emission_velocity)?;
        let velocity_angle = angle_of(emission_velocity);
        let (sin, cos) = (angle - velocity_angle).sin_cos();
        // Two-argument form keeps the back half plane without a pole at
        // the perpendicular.
        let new_relative_angle = (gamma * sin).atan2(cos);
        Ok(new_relative_angle + velocity_angle)
    }
}
