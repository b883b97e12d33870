use super::Trajectory;
use crate::vector::{clamp_norm, Vec2};
use std::sync::{Arc, Mutex, MutexGuard};

/// Where the user is pointing, in playfield coordinates.
pub trait PointerSource: Send + Sync {
    fn current_position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct PointerCell {
    position: Vec2,
    requested: Option<Vec2>,
}

/// Pointer position shared between the host's event loop and the charge.
///
/// The host calls [`SharedPointer::store`] once per frame with the mouse
/// position and applies any position requested through
/// [`PointerSource::set_position`] (see [`SharedPointer::take_request`]).
#[derive(Clone, Debug, Default)]
pub struct SharedPointer {
    cell: Arc<Mutex<PointerCell>>,
}

impl SharedPointer {
    pub fn new() -> SharedPointer {
        SharedPointer::default()
    }

    fn lock(&self) -> MutexGuard<'_, PointerCell> {
        // The cell holds plain data, so a poisoned lock is still consistent.
        self.cell.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn store(&self, position: Vec2) {
        self.lock().position = position;
    }

    pub fn take_request(&self) -> Option<Vec2> {
        self.lock().requested.take()
    }
}

impl PointerSource for SharedPointer {
    fn current_position(&self) -> Vec2 {
        self.lock().position
    }

    fn set_position(&mut self, position: Vec2) {
        let mut cell = self.lock();
        cell.position = position;
        cell.requested = Some(position);
    }
}

/// Chases the pointer: the desired velocity is the offset to the pointer,
/// capped at `max_speed`, and the actual velocity relaxes towards it with
/// time constant `reaction_time`.
pub struct PointerFollowing {
    pub position: Vec2,
    pub velocity: Vec2,
    pub max_speed: f64,
    pub reaction_time: f64,
    pointer: Box<dyn PointerSource>,
}

impl PointerFollowing {
    pub fn new(
        position: Vec2,
        max_speed: f64,
        reaction_time: f64,
        mut pointer: Box<dyn PointerSource>,
    ) -> PointerFollowing {
        pointer.set_position(position);
        PointerFollowing {
            position,
            velocity: Vec2::zeros(),
            max_speed,
            reaction_time,
            pointer,
        }
    }
}

impl Trajectory for PointerFollowing {
    fn advance(&mut self, dt: f64) {
        let offset = self.pointer.current_position() - self.position;
        let desired = clamp_norm(&offset, self.max_speed);
        self.velocity += (desired - self.velocity) * dt / self.reaction_time;
        self.position += self.velocity * dt;
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

    #[test]
    fn construction_moves_the_pointer_to_the_charge() {
        let shared = SharedPointer::new();
        shared.store(Vec2::new(10., 10.));
        let charge = PointerFollowing::new(
            Vec2::new(400., 300.),
            80.,
            0.3,
            Box::new(shared.clone()),
        );
        assert_eq!(shared.current_position(), Vec2::new(400., 300.));
        assert_eq!(shared.take_request(), Some(Vec2::new(400., 300.)));
        assert_eq!(shared.take_request(), None);
        assert_eq!(charge.velocity(), Vec2::zeros());
    }

    #[test]
    fn pointer_at_charge_keeps_it_still() {
        let mut charge = PointerFollowing::new(
            Vec2::new(400., 300.),
            80.,
            0.3,
            Box::new(testing::FixedPointer::at(Vec2::zeros())),
        );
        for _ in 0..10 {
            charge.advance(0.05);
        }
        assert_eq!(charge.position(), Vec2::new(400., 300.));
        assert_eq!(charge.velocity(), Vec2::zeros());
    }

    #[test]
    fn velocity_relaxes_towards_capped_offset() {
        let shared = SharedPointer::new();
        let mut charge = PointerFollowing::new(
            Vec2::new(400., 300.),
            80.,
            0.3,
            Box::new(shared.clone()),
        );
        shared.store(Vec2::new(800., 300.));
        charge.advance(0.03);
        // One tenth of the way to the capped desired velocity.
        assert_relative_eq!(charge.velocity(), Vec2::new(8., 0.), epsilon = 1e-9);
        assert_relative_eq!(charge.position(), Vec2::new(400.24, 300.), epsilon = 1e-9);
        for _ in 0..300 {
            charge.advance(0.01);
            assert!(charge.velocity().norm() <= 80. + 1e-9);
        }
        assert_relative_eq!(charge.velocity().x, 80., epsilon = 1e-2);
    }

    #[test]
    fn slows_down_when_close_to_the_pointer() {
        let shared = SharedPointer::new();
        let mut charge = PointerFollowing::new(
            Vec2::new(400., 300.),
            80.,
            0.3,
            Box::new(shared.clone()),
        );
        shared.store(Vec2::new(410., 300.));
        for _ in 0..2000 {
            charge.advance(0.01);
        }
        assert_relative_eq!(charge.position(), Vec2::new(410., 300.), epsilon = 1e-3);
        assert_relative_eq!(charge.velocity(), Vec2::zeros(), epsilon = 1e-3);
    }
}
