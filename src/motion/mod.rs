//! Charge trajectories.
//!
//! Exactly one [`MotionModel`] drives a run. Every variant advances its own
//! state by an elapsed time step and answers position/velocity queries with
//! copies of that state.

pub mod kinematic;
pub mod periodic;
pub mod pointer;
pub mod stepped;

use crate::config::{MotionConfig, SimulationConfig};
use crate::vector::Vec2;
use clap::ValueEnum;
use std::fmt;

pub use kinematic::{ConstantAcceleration, ConstantVelocity, Stationary};
pub use periodic::{Circular, Oscillating};
pub use pointer::{PointerFollowing, PointerSource, SharedPointer};
pub use stepped::SteppedAcceleration;

/// Snapshot of the charge's kinematic state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChargeState {
    pub position: Vec2,
    pub velocity: Vec2,
}

pub trait Trajectory {
    /// Advances internal state by `dt` seconds. Callers guarantee `dt > 0`.
    fn advance(&mut self, dt: f64);
    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum MotionKind {
    Stationary,
    ConstantVelocity,
    ConstantAcceleration,
    Oscillating,
    Circular,
    SteppedAcceleration,
    PointerFollowing,
}

impl fmt::Display for MotionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MotionKind::Stationary => "stationary",
            MotionKind::ConstantVelocity => "constant-velocity",
            MotionKind::ConstantAcceleration => "constant-acceleration",
            MotionKind::Oscillating => "oscillating",
            MotionKind::Circular => "circular",
            MotionKind::SteppedAcceleration => "stepped-acceleration",
            MotionKind::PointerFollowing => "pointer-following",
        };
        f.write_str(name)
    }
}

pub enum MotionModel {
    Stationary(Stationary),
    ConstantVelocity(ConstantVelocity),
    ConstantAcceleration(ConstantAcceleration),
    Oscillating(Oscillating),
    Circular(Circular),
    SteppedAcceleration(SteppedAcceleration),
    PointerFollowing(PointerFollowing),
}

impl MotionModel {
    /// Builds the model selected by `kind` with the run's constants.
    ///
    /// `pointer` is only consumed by [`MotionKind::PointerFollowing`], which
    /// asks it to move to the charge's starting position.
    pub fn from_config(
        kind: MotionKind,
        simulation_config: &SimulationConfig,
        motion_config: &MotionConfig,
        pointer: Box<dyn PointerSource>,
    ) -> MotionModel {
        let c = simulation_config.propagation_speed;
        let center = simulation_config.center();
        match kind {
            MotionKind::Stationary => MotionModel::Stationary(Stationary::new(center)),
            MotionKind::ConstantVelocity => MotionModel::ConstantVelocity(ConstantVelocity::new(
                Vec2::new(0., center.y),
                Vec2::new(c * motion_config.cruise_speed_fraction, 0.),
            )),
            MotionKind::ConstantAcceleration => {
                MotionModel::ConstantAcceleration(ConstantAcceleration::new(
                    center,
                    Vec2::zeros(),
                    Vec2::new(c * motion_config.acceleration_fraction, 0.),
                ))
            }
            MotionKind::Oscillating => MotionModel::Oscillating(Oscillating::new(
                center,
                Vec2::new(1., 0.),
                c * motion_config.amplitude_fraction,
            )),
            MotionKind::Circular => MotionModel::Circular(Circular::new(
                center,
                c * motion_config.orbit_speed_fraction,
            )),
            MotionKind::SteppedAcceleration => {
                MotionModel::SteppedAcceleration(SteppedAcceleration::new(
                    center,
                    Vec2::new(motion_config.stepped_initial_speed, 0.),
                    Vec2::new(c * motion_config.stepped_acceleration_fraction, 0.),
                    c * motion_config.stepped_max_speed_fraction,
                    motion_config.rest_duration,
                ))
            }
            MotionKind::PointerFollowing => MotionModel::PointerFollowing(PointerFollowing::new(
                center,
                c * motion_config.pointer_max_speed_fraction,
                motion_config.reaction_time,
                pointer,
            )),
        }
    }

    pub fn kind(&self) -> MotionKind {
        match self {
            MotionModel::Stationary(_) => MotionKind::Stationary,
            MotionModel::ConstantVelocity(_) => MotionKind::ConstantVelocity,
            MotionModel::ConstantAcceleration(_) => MotionKind::ConstantAcceleration,
            MotionModel::Oscillating(_) => MotionKind::Oscillating,
            MotionModel::Circular(_) => MotionKind::Circular,
            MotionModel::SteppedAcceleration(_) => MotionKind::SteppedAcceleration,
            MotionModel::PointerFollowing(_) => MotionKind::PointerFollowing,
        }
    }

    fn trajectory(&self) -> &dyn Trajectory {
        match self {
            MotionModel::Stationary(m) => m,
            MotionModel::ConstantVelocity(m) => m,
            MotionModel::ConstantAcceleration(m) => m,
            MotionModel::Oscillating(m) => m,
            MotionModel::Circular(m) => m,
            MotionModel::SteppedAcceleration(m) => m,
            MotionModel::PointerFollowing(m) => m,
        }
    }

    fn trajectory_mut(&mut self) -> &mut dyn Trajectory {
        match self {
            MotionModel::Stationary(m) => m,
            MotionModel::ConstantVelocity(m) => m,
            MotionModel::ConstantAcceleration(m) => m,
            MotionModel::Oscillating(m) => m,
            MotionModel::Circular(m) => m,
            MotionModel::SteppedAcceleration(m) => m,
            MotionModel::PointerFollowing(m) => m,
        }
    }

    /// Advances the active model. Non-positive steps leave it untouched.
    pub fn advance(&mut self, dt: f64) {
        if !(dt > 0.) {
            return;
        }
        self.trajectory_mut().advance(dt);
    }

    pub fn position(&self) -> Vec2 {
        self.trajectory().position()
    }

    pub fn velocity(&self) -> Vec2 {
        self.trajectory().velocity()
    }

    pub fn state(&self) -> ChargeState {
        ChargeState {
            position: self.position(),
            velocity: self.velocity(),
        }
    }
}
