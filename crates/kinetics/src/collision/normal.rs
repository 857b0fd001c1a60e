//! Contact normal for a colliding pair. The normal never points from A
//! towards B: `(posA - posB)·n >= 0` for every model.

use super::NormalModel;
use crate::body::RigidBody;
use crate::shapes::Shape;
use crate::types::Vec3;

/// Normal used to resolve a colliding pair.
///
/// Sphere pairs use the normalized center line; coincident centers give a
/// zero normal, which makes the impulse vanish. Every other pairing follows
/// `model`.
///
/// The min-delta axis is flipped when A lies on its negative side. The
/// velocity change of the impulse is the same either way, but positional
/// correction and the separating-pair check need the orientation.
#[must_use]
pub fn collision_normal(a: &RigidBody, b: &RigidBody, model: NormalModel) -> Vec3 {
    let delta = a.position - b.position;
    if let (Shape::Sphere { .. }, Shape::Sphere { .. }) = (a.shape(), b.shape()) {
        return delta.normalize_or_zero();
    }
    match model {
        NormalModel::MinDeltaAxis => {
            let axis = Vec3::unit_axis(argmin(delta.to_array()));
            if delta.dot(axis) < 0.0 {
                -axis
            } else {
                axis
            }
        }
        NormalModel::PenetrationAxis => penetration_axis(delta, half_extent(a) + half_extent(b)),
    }
}

/// Index of the smallest value; the first one wins ties.
fn argmin(values: [f32; 3]) -> usize {
    values
        .iter()
        .enumerate()
        .skip(1)
        .fold(0, |best, (i, &v)| if v < values[best] { i } else { best })
}

/// Half side for cubes, radius for spheres.
fn half_extent(body: &RigidBody) -> f32 {
    match body.shape() {
        Shape::Sphere { radius } => radius,
        Shape::Cube { side } => side * 0.5,
    }
}

fn penetration_axis(delta: Vec3, reach: f32) -> Vec3 {
    let overlap = Vec3::new(reach, reach, reach) - delta.abs();
    let axis = argmin(overlap.to_array());
    let sign = if delta.to_array()[axis] < 0.0 { -1.0 } else { 1.0 };
    Vec3::unit_axis(axis) * sign
}
