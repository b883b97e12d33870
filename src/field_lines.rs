use crate::aberration::Aberration;
use crate::error::AberrationError;
use crate::history::RetardedHistory;
use crate::vector::{unit, Vec2};
use rayon::prelude::*;
use std::f64::consts::TAU;

/// One polyline per direction, each ordered oldest emission first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldLines {
    pub lines: Vec<Vec<Vec2>>,
}

impl FieldLines {
    pub fn empty(directions: usize) -> FieldLines {
        FieldLines {
            lines: vec![Vec::new(); directions],
        }
    }

    /// Lines with at least two points; shorter ones have nothing to draw.
    pub fn renderable(&self) -> impl Iterator<Item = &[Vec2]> {
        self.lines
            .iter()
            .filter(|line| line.len() > 1)
            .map(|line| line.as_slice())
    }
}

pub struct FieldLineAssembler {
    base_angles: Vec<f64>,
    aberration: Aberration,
}

impl FieldLineAssembler {
    /// `directions` lines evenly spread over a full turn, starting along +x.
    pub fn new(directions: usize, propagation_speed: f64) -> FieldLineAssembler {
        FieldLineAssembler {
            base_angles: (0..directions)
                .map(|i| i as f64 * TAU / directions as f64)
                .collect(),
            aberration: Aberration::new(propagation_speed),
        }
    }

    pub fn base_angles(&self) -> &[f64] {
        &self.base_angles
    }

    /// Places every sample's circle point for every direction at time `now`.
    ///
    /// Samples must not be newer than `now`.
    pub fn assemble(
        &self,
        history: &RetardedHistory,
        now: f64,
    ) -> Result<FieldLines, AberrationError> {
        let speed = self.aberration.propagation_speed;
        let lines = self
            .base_angles
            .par_iter()
            .map(|&angle| {
                history
                    .entries()
                    .map(|sample| -> Result<Vec2, AberrationError> {
                        debug_assert!(sample.emission_time() <= now);
                        let radius = sample.radius_at(now, speed);
                        let observed = self
                            .aberration
                            .transform(angle, &sample.emission_velocity())?;
                        Ok(sample.emission_position() + unit(observed) * radius)
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FieldLines { lines })
    }
}
