use thiserror::Error;

use crate::arena::BodyHandle;
use crate::shapes::ShapeKind;

/// Rejected body parameters. Raised at construction so the tick loop never
/// divides by a zero mass or tests a degenerate shape.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum BodyError {
    #[error("mass must be positive, got {0}")]
    NonPositiveMass(f32),
    #[error("density must be positive and finite, got {0}")]
    NonPositiveDensity(f32),
    #[error("density {density} times volume {volume} overflows the mass")]
    MassOverflow { density: f32, volume: f32 },
    #[error("{shape:?} extent must be positive and finite, got {value}")]
    InvalidExtent { shape: ShapeKind, value: f32 },
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PhysicsError {
    #[error(transparent)]
    Body(#[from] BodyError),
    #[error("a body with code {0} is already registered")]
    DuplicateBodyCode(i32),
    #[error("handle {0:?} does not refer to a live body")]
    StaleHandle(BodyHandle),
    #[error("time step must be finite and non-negative, got {0}")]
    InvalidTimeStep(f32),
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(&'static str),
}
