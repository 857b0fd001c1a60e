//! # Collision Detection and Response
//!
//! Narrow-phase overlap tests for the three shape pairings, the contact
//! normal used to resolve a colliding pair, and the impulse response.
//!
//! Two families of overlap formulas are available. The legacy formulas are
//! cheap approximations kept for compatibility with scenes tuned against
//! them; the geometric ones are exact for spheres and axis-aligned cubes.
//! [`CollisionConfig`] chooses between them per pairing.

mod box_box;
mod dispatcher;
mod normal;
mod response;
mod sphere_box;
mod sphere_sphere;

pub use box_box::cubes_overlap;
pub use dispatcher::bodies_overlap;
pub use normal::collision_normal;
pub use response::{apply_positional_correction, resolve_impulse};
pub use sphere_box::cube_sphere_overlap;
pub use sphere_sphere::spheres_overlap;

use serde::{Deserialize, Serialize};

use crate::error::PhysicsError;
use crate::types::Vec3;

/// Overlap formula for sphere-sphere pairs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SphereOverlap {
    /// `d² <= (rA + rB)²`
    #[default]
    SquaredSum,
    /// `d² <= rA² + rB²`. Misses shallow contacts between similar spheres.
    SumOfSquares,
}

/// Overlap formula for pairs involving at least one cube.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxOverlap {
    /// Smallest squared per-axis center distance compared against the summed
    /// extents. Reports overlap whenever the centers line up on any axis.
    #[default]
    MinAxis,
    /// Per-axis interval test for cube-cube, closest-point test for
    /// cube-sphere.
    Slab,
}

/// How the contact normal is chosen for pairs involving a cube.
/// Sphere-sphere pairs always use the normalized center line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalModel {
    /// World axis at the smallest signed component of `posA - posB`,
    /// flipped so it points from B to A.
    #[default]
    MinDeltaAxis,
    /// Signed world axis of least penetration, pointing from B to A.
    PenetrationAxis,
}

/// Linear projection pushing overlapping bodies apart after the impulse.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionalCorrection {
    /// Fraction of the penetration removed per tick, in `(0, 1]`.
    pub percent: f32,
    /// Penetration tolerated without correction.
    pub slop: f32,
}

impl Default for PositionalCorrection {
    fn default() -> Self {
        Self {
            percent: 0.8,
            slop: 0.01,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Coefficient of restitution, `1.0` is perfectly elastic.
    pub restitution: f32,
    pub sphere_overlap: SphereOverlap,
    pub box_overlap: BoxOverlap,
    pub normal: NormalModel,
    /// Skip the impulse when the pair is already moving apart along the
    /// normal. Off by default: every overlapping pair is resolved.
    pub ignore_separating: bool,
    pub positional_correction: Option<PositionalCorrection>,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            restitution: 1.0,
            sphere_overlap: SphereOverlap::default(),
            box_overlap: BoxOverlap::default(),
            normal: NormalModel::default(),
            ignore_separating: false,
            positional_correction: None,
        }
    }
}

impl CollisionConfig {
    /// Sum-of-squares sphere test with the min-axis box test and axis normal.
    /// Kept for reproducing older recordings.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            sphere_overlap: SphereOverlap::SumOfSquares,
            ..Self::default()
        }
    }

    /// Exact overlap tests with penetration-derived normals.
    #[must_use]
    pub fn geometric() -> Self {
        Self {
            sphere_overlap: SphereOverlap::SquaredSum,
            box_overlap: BoxOverlap::Slab,
            normal: NormalModel::PenetrationAxis,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(PhysicsError::InvalidConfig(
                "restitution must lie in [0, 1]",
            ));
        }
        if let Some(correction) = self.positional_correction {
            if correction.percent.is_nan()
                || correction.percent <= 0.0
                || correction.percent > 1.0
            {
                return Err(PhysicsError::InvalidConfig(
                    "positional correction percent must lie in (0, 1]",
                ));
            }
            if !correction.slop.is_finite() || correction.slop < 0.0 {
                return Err(PhysicsError::InvalidConfig(
                    "positional correction slop must be finite and non-negative",
                ));
            }
        }
        Ok(())
    }
}

/// Smallest squared per-axis distance between two centers.
pub(crate) fn min_axis_distance_squared(delta: Vec3) -> f32 {
    (delta.x * delta.x)
        .min(delta.y * delta.y)
        .min(delta.z * delta.z)
}
