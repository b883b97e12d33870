use crate::motion::ChargeState;
use crate::vector::Vec2;
use log::debug;
use std::collections::{vec_deque, VecDeque};

/// One emission event: where the charge was, how fast it moved and when.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistorySample {
    emission_position: Vec2,
    emission_velocity: Vec2,
    emission_time: f64,
}

impl HistorySample {
    pub fn new(state: ChargeState, emission_time: f64) -> HistorySample {
        HistorySample {
            emission_position: state.position,
            emission_velocity: state.velocity,
            emission_time,
        }
    }

    pub fn emission_position(&self) -> Vec2 {
        self.emission_position
    }

    pub fn emission_velocity(&self) -> Vec2 {
        self.emission_velocity
    }

    pub fn emission_time(&self) -> f64 {
        self.emission_time
    }

    /// Radius reached by this emission's circle at `now`.
    pub fn radius_at(&self, now: f64, propagation_speed: f64) -> f64 {
        (now - self.emission_time) * propagation_speed
    }
}

/// Bounded, oldest-first record of the charge's past states.
#[derive(Clone, Debug)]
pub struct RetardedHistory {
    samples: VecDeque<HistorySample>,
    capacity: usize,
    interval: f64,
    accumulator: f64,
}

impl RetardedHistory {
    pub fn new(interval: f64, capacity: usize) -> RetardedHistory {
        RetardedHistory {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
            interval,
            accumulator: 0.,
        }
    }

    /// Accumulates `dt` and records `state` at `now` once more than one
    /// interval has passed since the last recording. Returns whether a
    /// sample was appended.
    pub fn sample(&mut self, state: ChargeState, dt: f64, now: f64) -> bool {
        self.accumulator += dt.max(0.);
        if self.accumulator <= self.interval {
            return false;
        }
        self.accumulator = 0.;
        if let Some(newest) = self.samples.back() {
            if newest.emission_time >= now {
                debug!(
                    "Dropping sample at {}, not after newest at {}",
                    now, newest.emission_time
                );
                return false;
            }
        }
        self.samples.push_back(HistorySample::new(state, now));
        self.evict_overflow();
        true
    }

    /// Drops the oldest samples until at most `capacity` remain.
    pub fn evict_overflow(&mut self) {
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Drops samples whose circles have grown past `visible_radius`.
    pub fn evict_expired(&mut self, now: f64, propagation_speed: f64, visible_radius: f64) {
        while let Some(oldest) = self.samples.front() {
            if oldest.radius_at(now, propagation_speed) <= visible_radius {
                break;
            }
            debug!("Evicting sample emitted at {}", oldest.emission_time);
            self.samples.pop_front();
        }
    }

    pub fn entries(&self) -> vec_deque::Iter<'_, HistorySample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
