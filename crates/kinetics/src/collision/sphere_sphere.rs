//! Sphere-sphere overlap test

use super::SphereOverlap;
use crate::types::Vec3;

/// Returns `true` when the spheres touch or overlap under `model`.
#[must_use]
pub fn spheres_overlap(
    center_a: Vec3,
    radius_a: f32,
    center_b: Vec3,
    radius_b: f32,
    model: SphereOverlap,
) -> bool {
    let distance_squared = (center_a - center_b).length_squared();
    let threshold = match model {
        SphereOverlap::SquaredSum => {
            let reach = radius_a + radius_b;
            reach * reach
        }
        SphereOverlap::SumOfSquares => radius_a * radius_a + radius_b * radius_b,
    };
    distance_squared <= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32) -> Vec3 {
        Vec3::new(x, 0.0, 0.0)
    }

    #[test]
    fn unit_spheres_one_and_a_half_apart() {
        // 2.25 <= 4 but not <= 2
        assert!(spheres_overlap(at(0.0), 1.0, at(1.5), 1.0, SphereOverlap::SquaredSum));
        assert!(!spheres_overlap(at(0.0), 1.0, at(1.5), 1.0, SphereOverlap::SumOfSquares));
    }

    #[test]
    fn touching_counts_as_overlap() {
        assert!(spheres_overlap(at(0.0), 1.0, at(2.0), 1.0, SphereOverlap::SquaredSum));
        // r1² + r2² = 9 + 16 = 25 = 5²
        assert!(spheres_overlap(at(0.0), 3.0, at(5.0), 4.0, SphereOverlap::SumOfSquares));
    }

    #[test]
    fn separated_spheres_never_overlap() {
        for model in [SphereOverlap::SquaredSum, SphereOverlap::SumOfSquares] {
            assert!(!spheres_overlap(at(0.0), 1.0, at(2.01), 1.0, model));
        }
    }

    #[test]
    fn legacy_threshold_matches_formula_off_axis() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(1.0, 1.0, 0.5);
        // d² = 2.25
        assert!(spheres_overlap(a, 1.0, b, 0.5 + 0.625, SphereOverlap::SumOfSquares));
        assert!(!spheres_overlap(a, 1.0, b, 1.0, SphereOverlap::SumOfSquares));
    }
}
