use crate::motion::MotionKind;
use crate::vector::Vec2;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum AberrationError {
    /// The emitter moved at or above the propagation speed, so the Lorentz
    /// factor is undefined.
    #[error(
        "emission velocity ({:.3}, {:.3}) is not below the propagation speed {limit}",
        .velocity.x,
        .velocity.y
    )]
    Superluminal { velocity: Vec2, limit: f64 },
}

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(
        "{model} charge emitted at velocity ({:.3}, {:.3})",
        .velocity.x,
        .velocity.y
    )]
    Superluminal {
        model: MotionKind,
        velocity: Vec2,
        #[source]
        source: AberrationError,
    },
    #[error("rendering failed: {0}")]
    Render(String),
    #[error("platform setup failed: {0}")]
    Platform(String),
}
