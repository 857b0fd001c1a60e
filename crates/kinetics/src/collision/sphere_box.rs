//! Cube-sphere overlap test

use super::{min_axis_distance_squared, BoxOverlap};
use crate::types::Vec3;

/// Returns `true` when an axis-aligned cube and a sphere overlap under
/// `model`. Argument order is fixed: the dispatcher puts the cube first.
#[must_use]
pub fn cube_sphere_overlap(
    cube_center: Vec3,
    side: f32,
    sphere_center: Vec3,
    radius: f32,
    model: BoxOverlap,
) -> bool {
    match model {
        BoxOverlap::MinAxis => {
            min_axis_distance_squared(cube_center - sphere_center) <= side + radius
        }
        BoxOverlap::Slab => {
            let closest = closest_point_on_cube(sphere_center, cube_center, side);
            (closest - sphere_center).length_squared() <= radius * radius
        }
    }
}

/// Closest point of the cube's volume to `point`.
fn closest_point_on_cube(point: Vec3, center: Vec3, side: f32) -> Vec3 {
    let half = Vec3::new(side, side, side) * 0.5;
    point.clamp(center - half, center + half)
}
