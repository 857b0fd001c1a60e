//! Routes a body pair to the narrow-phase test for its shape pairing

use super::{cube_sphere_overlap, cubes_overlap, spheres_overlap, CollisionConfig};
use crate::body::RigidBody;
use crate::shapes::Shape;

/// Runs the overlap test selected by the shapes of `a` and `b`.
///
/// Mixed pairs are reordered here so the cube-sphere test always receives
/// the cube first; the result does not depend on argument order.
#[must_use]
pub fn bodies_overlap(a: &RigidBody, b: &RigidBody, config: &CollisionConfig) -> bool {
    match (a.shape(), b.shape()) {
        (Shape::Sphere { radius: ra }, Shape::Sphere { radius: rb }) => {
            spheres_overlap(a.position, ra, b.position, rb, config.sphere_overlap)
        }
        (Shape::Cube { side: sa }, Shape::Cube { side: sb }) => {
            cubes_overlap(a.position, sa, b.position, sb, config.box_overlap)
        }
        (Shape::Cube { side }, Shape::Sphere { radius }) => {
            cube_sphere_overlap(a.position, side, b.position, radius, config.box_overlap)
        }
        (Shape::Sphere { radius }, Shape::Cube { side }) => {
            cube_sphere_overlap(b.position, side, a.position, radius, config.box_overlap)
        }
    }
}
