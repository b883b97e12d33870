use super::Trajectory;
use crate::vector::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stationary {
    pub position: Vec2,
}

impl Stationary {
    pub fn new(position: Vec2) -> Stationary {
        Stationary { position }
    }
}

impl Trajectory for Stationary {
    fn advance(&mut self, _dt: f64) {}

    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        Vec2::zeros()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantVelocity {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl ConstantVelocity {
    pub fn new(position: Vec2, velocity: Vec2) -> ConstantVelocity {
        ConstantVelocity { position, velocity }
    }
}

impl Trajectory for ConstantVelocity {
    fn advance(&mut self, dt: f64) {
        self.position += self.velocity * dt;
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantAcceleration {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
}

impl ConstantAcceleration {
    pub fn new(position: Vec2, velocity: Vec2, acceleration: Vec2) -> ConstantAcceleration {
        ConstantAcceleration {
            position,
            velocity,
            acceleration,
        }
    }
}

impl Trajectory for ConstantAcceleration {
    // Semi-implicit Euler: velocity first.
    fn advance(&mut self, dt: f64) {
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }
}
