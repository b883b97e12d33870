use super::Trajectory;
use crate::vector::{normalize_or_zero, Vec2};
use log::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Rest,
    Accelerating,
}

/// Alternates between coasting for `rest_duration` seconds and accelerating
/// until the speed along the acceleration passes `max_speed`, flipping the
/// acceleration at the end of every accelerating phase.
///
/// A braking phase runs through zero velocity and only ends once the charge
/// is moving at `max_speed` the other way, so the charge shuttles back and
/// forth along the acceleration axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SteppedAcceleration {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub max_speed: f64,
    pub rest_duration: f64,
    timer: f64,
    phase: Phase,
}

impl SteppedAcceleration {
    pub fn new(
        position: Vec2,
        velocity: Vec2,
        acceleration: Vec2,
        max_speed: f64,
        rest_duration: f64,
    ) -> SteppedAcceleration {
        SteppedAcceleration {
            position,
            velocity,
            acceleration,
            max_speed,
            rest_duration,
            timer: 0.,
            phase: Phase::Rest,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Signed speed along the current acceleration.
    fn speed_along_acceleration(&self) -> f64 {
        self.velocity.dot(&normalize_or_zero(&self.acceleration))
    }

    fn enter(&mut self, phase: Phase) {
        debug!("Stepped charge: {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        self.timer = 0.;
    }
}

impl Trajectory for SteppedAcceleration {
    fn advance(&mut self, dt: f64) {
        self.timer += dt;
        self.position += self.velocity * dt;

        if self.phase == Phase::Rest && self.timer > self.rest_duration {
            self.enter(Phase::Accelerating);
        }

        if self.phase == Phase::Accelerating {
            self.velocity += self.acceleration * dt;
            if self.speed_along_acceleration() > self.max_speed {
                self.acceleration = -self.acceleration;
                self.enter(Phase::Rest);
            }
        }
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const DT: f64 = 0.01;

    fn charge() -> SteppedAcceleration {
        SteppedAcceleration::new(
            Vec2::new(400., 300.),
            Vec2::new(0.1, 0.),
            Vec2::new(100., 0.),
            70.,
            2.,
        )
    }

    fn run(charge: &mut SteppedAcceleration, seconds: f64) {
        for _ in 0..(seconds / DT).round() as usize {
            charge.advance(DT);
        }
    }

    #[test]
    fn rests_before_accelerating() {
        let mut charge = charge();
        run(&mut charge, 1.9);
        assert_eq!(charge.phase(), Phase::Rest);
        assert_relative_eq!(charge.velocity(), Vec2::new(0.1, 0.));
        assert_relative_eq!(charge.position().x, 400.19, epsilon = 1e-9);
        run(&mut charge, 0.2);
        assert_eq!(charge.phase(), Phase::Accelerating);
        assert!(charge.velocity().x > 0.1);
    }

    #[test]
    fn flips_acceleration_past_max_speed() {
        let mut charge = charge();
        // 2 s rest, then 0.7 s to reach 70.
        run(&mut charge, 2.8);
        assert_eq!(charge.phase(), Phase::Rest);
        assert!(charge.velocity().x > 70.);
        assert!(charge.velocity().x < 70. + 100. * DT + 1e-9);
        assert_relative_eq!(charge.acceleration, Vec2::new(-100., 0.));
    }

    #[test]
    fn braking_runs_through_zero_to_reverse() {
        let mut charge = charge();
        let mut min_vx = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_x = f64::INFINITY;
        for _ in 0..3000 {
            charge.advance(DT);
            min_vx = min_vx.min(charge.velocity().x);
            max_x = max_x.max(charge.position().x);
            min_x = min_x.min(charge.position().x);
            assert!(charge.velocity().norm() < 100.);
        }
        assert!(min_vx < -70.);
        // Shuttles instead of drifting off.
        assert!(max_x - min_x < 400.);
    }
}
