use nalgebra::{Point2, Vector2};
use slide3d_fit::{project_quad, Quad, ShapeParams};

/// Renders `params` the way the slide would and moves the result to `offset`.
pub fn synthetic_target(params: &ShapeParams, offset: [f64; 2]) -> Quad {
    let shift = Vector2::new(offset[0], offset[1]);
    let q = project_quad(params);
    Quad::from_corners(q.corners().map(|p: Point2<f64>| p + shift))
}

/// The tilted image used by the demo binary.
pub fn demo_target() -> Quad {
    Quad::new(
        Point2::new(1.94, 1.82),
        Point2::new(6.62, 0.4),
        Point2::new(7.54, 3.85),
        Point2::new(2.95, 5.45),
    )
}

/// Unsigned difference of two angles in degrees, taking the 360° wrap into
/// account.
pub fn angular_distance_deg(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}
