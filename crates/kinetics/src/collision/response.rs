//! Single-contact impulse response

use super::{CollisionConfig, PositionalCorrection};
use crate::body::RigidBody;
use crate::shapes::Shape;
use crate::types::Vec3;

/// Applies a frictionless impulse along `normal` (pointing from B to A) and
/// returns its signed magnitude `j`.
///
/// `j = -(1 + e) (vA - vB)·n / (1/mA + 1/mB)`, then `vA += j/mA n` and
/// `vB -= j/mB n`. Infinite masses contribute a zero inverse mass; a pair
/// of two immovable bodies is left untouched.
pub fn resolve_impulse(
    a: &mut RigidBody,
    b: &mut RigidBody,
    normal: Vec3,
    config: &CollisionConfig,
) -> f32 {
    let inv_mass_sum = a.inverse_mass() + b.inverse_mass();
    if inv_mass_sum <= 0.0 {
        return 0.0;
    }

    let relative_velocity = a.velocity - b.velocity;
    let velocity_along_normal = relative_velocity.dot(normal);
    if config.ignore_separating && velocity_along_normal > 0.0 {
        return 0.0;
    }

    let j = -(1.0 + config.restitution) * velocity_along_normal / inv_mass_sum;
    let impulse = normal * j;
    a.velocity += impulse * a.inverse_mass();
    b.velocity -= impulse * b.inverse_mass();
    j
}

/// Moves an overlapping pair apart along `normal`, split by inverse mass.
/// Returns the penetration depth measured along the normal before the push.
pub fn apply_positional_correction(
    a: &mut RigidBody,
    b: &mut RigidBody,
    normal: Vec3,
    correction: PositionalCorrection,
) -> f32 {
    let depth = penetration_along(a, b, normal);
    let inv_mass_sum = a.inverse_mass() + b.inverse_mass();
    if depth <= correction.slop || inv_mass_sum <= 0.0 {
        return depth;
    }
    let push = normal * ((depth - correction.slop) / inv_mass_sum * correction.percent);
    a.position += push * a.inverse_mass();
    b.position -= push * b.inverse_mass();
    depth
}

/// Combined half extents minus the center separation along `normal`.
fn penetration_along(a: &RigidBody, b: &RigidBody, normal: Vec3) -> f32 {
    let reach = half_extent(a.shape()) + half_extent(b.shape());
    reach - (a.position - b.position).dot(normal).abs()
}

fn half_extent(shape: Shape) -> f32 {
    match shape {
        Shape::Sphere { radius } => radius,
        Shape::Cube { side } => side * 0.5,
    }
}
