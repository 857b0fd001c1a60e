use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::BodyError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Sphere,
    Cube,
}

/// Collision geometry of a body. Cubes are axis-aligned and described by
/// their full side length.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    Sphere { radius: f32 },
    Cube { side: f32 },
}

impl Shape {
    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Shape::Sphere { .. } => ShapeKind::Sphere,
            Shape::Cube { .. } => ShapeKind::Cube,
        }
    }

    /// Radius for spheres, side length for cubes.
    #[must_use]
    pub const fn extent(&self) -> f32 {
        match *self {
            Shape::Sphere { radius } => radius,
            Shape::Cube { side } => side,
        }
    }

    #[must_use]
    pub fn volume(&self) -> f32 {
        match *self {
            Shape::Sphere { radius } => 4.0 / 3.0 * PI * radius.powi(3),
            Shape::Cube { side } => side.powi(3),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), BodyError> {
        let value = self.extent();
        if value > 0.0 && value.is_finite() {
            Ok(())
        } else {
            Err(BodyError::InvalidExtent {
                shape: self.kind(),
                value,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volumes() {
        let unit_sphere = Shape::Sphere { radius: 1.0 };
        assert!((unit_sphere.volume() - 4.188_790_3).abs() < 1e-5);
        assert!((Shape::Cube { side: 2.0 }.volume() - 8.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_extents_are_rejected() {
        assert!(Shape::Sphere { radius: 0.0 }.validate().is_err());
        assert!(Shape::Cube { side: -1.0 }.validate().is_err());
        assert!(Shape::Cube { side: f32::NAN }.validate().is_err());
        assert!(Shape::Cube { side: 0.5 }.validate().is_ok());
    }
}
