//! Cube-cube overlap test

use super::{min_axis_distance_squared, BoxOverlap};
use crate::types::Vec3;

/// Returns `true` when two axis-aligned cubes overlap under `model`.
///
/// `side_a` and `side_b` are full side lengths.
#[must_use]
pub fn cubes_overlap(
    center_a: Vec3,
    side_a: f32,
    center_b: Vec3,
    side_b: f32,
    model: BoxOverlap,
) -> bool {
    let delta = center_a - center_b;
    match model {
        BoxOverlap::MinAxis => min_axis_distance_squared(delta) <= side_a + side_b,
        BoxOverlap::Slab => {
            let reach = (side_a + side_b) * 0.5;
            let gap = delta.abs();
            gap.x <= reach && gap.y <= reach && gap.z <= reach
        }
    }
}
