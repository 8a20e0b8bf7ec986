//! Elliptical-cylinder roll: same peel path as the circular model, but the
//! cross-section is an ellipse whose approximate circumference matches the
//! roll-path length. The flattened section lifts the paper edge much faster
//! at small bend angles, which reads as a crisper initial peel.

use std::f64::consts::TAU;

use crate::Tolerance;
use crate::geometry::{Point3, Vec2};
use crate::plane::{PathCoords, RollPath};

pub(crate) fn evaluate(
    path: &RollPath,
    p: Vec2,
    amount: f64,
    ratio: f64,
    tol: &Tolerance,
) -> Point3 {
    // Semi-axes sized so 2π·√((a² + b²)/2) ≈ path length, with b/a fixed by
    // the requested ratio.
    let avg = path.length() / TAU;
    let a = avg * (2.0 * ratio * ratio / (1.0 + ratio * ratio)).sqrt();
    let b = a / ratio;

    let coords = path.project(p);
    let front = path.front_at(amount);

    if coords.along > front || coords.along < -tol.degenerate {
        return Point3::from_plane(p);
    }

    let arc = front - coords.along;
    let theta = if tol.is_degenerate_length(avg) {
        0.0
    } else {
        arc / avg
    };

    // Parametric ellipse: the bend angle drives both the lift and the
    // shortening of the wrapped run of paper.
    let lift = a * (1.0 - theta.cos()) + b * theta.sin();
    let along = front - (a * theta.sin() - b * (1.0 - theta.cos()));

    let world = path.to_world(PathCoords {
        along,
        across: coords.across,
    });
    Point3::new(world.x, world.y, lift)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curl::{CurlProfile, VertexCurl};
    use crate::plane::PagePlane;

    const GEOM_WIDTH: f64 = 4.0;
    const GEOM_HEIGHT: f64 = 8.0;
    const RATIO: f64 = 0.125;

    fn curl() -> VertexCurl {
        let plane = PagePlane::new(GEOM_WIDTH, GEOM_HEIGHT).unwrap();
        VertexCurl::new(plane, CurlProfile::elliptical(RATIO)).unwrap()
    }

    #[test]
    fn test_amount_zero_is_identity() {
        let result = curl().evaluate(1.0, 1.0, 0.0);
        assert_eq!(result.x, 1.0);
        assert_eq!(result.y, 1.0);
        assert_eq!(result.z, 0.0);
    }

    #[test]
    fn test_bottom_right_lifts_past_midline_at_half_curl() {
        let result = curl().evaluate(GEOM_WIDTH / 2.0, -GEOM_HEIGHT / 2.0, 0.5);
        assert!(result.y > 0.0, "y = {}", result.y);
    }

    #[test]
    fn test_bottom_left_lifts_above_midline_at_point_eight() {
        let result = curl().evaluate(-GEOM_WIDTH / 2.0, -GEOM_HEIGHT / 2.0, 0.8);
        assert!(result.y > 0.0, "y = {}", result.y);
    }

    #[test]
    fn test_curl_initiates_from_bottom_right_edge() {
        let amount = 0.25;
        let bottom_right = curl().evaluate(GEOM_WIDTH / 2.0, -GEOM_HEIGHT / 2.0, amount);
        let bottom_left = curl().evaluate(-GEOM_WIDTH / 2.0, -GEOM_HEIGHT / 2.0, amount);
        assert!(
            bottom_right.y > bottom_left.y,
            "bottom-right y {} should exceed bottom-left y {}",
            bottom_right.y,
            bottom_left.y,
        );
    }

    #[test]
    fn test_top_corners_fixed_at_quarter_curl() {
        let amount = 0.25;
        let top_right = curl().evaluate(GEOM_WIDTH / 2.0, GEOM_HEIGHT / 2.0, amount);
        let top_left = curl().evaluate(-GEOM_WIDTH / 2.0, GEOM_HEIGHT / 2.0, amount);
        assert_eq!(top_right.x, GEOM_WIDTH / 2.0);
        assert_eq!(top_right.y, GEOM_HEIGHT / 2.0);
        assert_eq!(top_left.x, -GEOM_WIDTH / 2.0);
        assert_eq!(top_left.y, GEOM_HEIGHT / 2.0);
    }

    #[test]
    fn test_early_lift_dominated_by_minor_axis() {
        // z ≈ b·θ for small θ, so the lift at a shallow amount should land
        // well above the circular R·(1 - cos θ) scale.
        let result = curl().evaluate(GEOM_WIDTH / 2.0, -GEOM_HEIGHT / 2.0, 0.05);
        assert!(result.z > 0.1, "z = {}", result.z);
    }

    #[test]
    fn test_degenerate_plane_is_identity() {
        let plane = PagePlane::new(1e-6, 1e-6).unwrap();
        let c = VertexCurl::new(plane, CurlProfile::elliptical(RATIO)).unwrap();
        let result = c.evaluate(3.0e-7, -2.0e-7, 0.7);
        assert_eq!(result.x, 3.0e-7);
        assert_eq!(result.y, -2.0e-7);
        assert_eq!(result.z, 0.0);
    }
}
