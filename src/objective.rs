//! Scoring of a candidate shape against the target quadrilateral.
//!
//! A candidate is rendered the way the slide application would draw it: a
//! rectangle centred at the origin is rotated by the three slide rotations
//! and then projected with the slide perspective. Both the projected corners
//! and the target are shifted so that their bounding boxes start at the
//! origin, and the score is the sum of squared distances between matching
//! vertices.
//!
//! Axis naming follows the slide application, which labels rotations
//! differently from the geometric axes:
//! - "Z Rotation" rotates about Z,
//! - "Y Rotation" rotates about X,
//! - "X Rotation" rotates about Y.
//!
//! All angles are negated because the slide rotates clockwise.

use crate::angle::degrees_to_radians;
use crate::transform::{project, AffineTransform};
use crate::types::{min_corner, Quad, ShapeParams};
use nalgebra::{Point2, Point3};

/// Rotation chain for the slide settings in `params`.
pub fn shape_transform(params: &ShapeParams) -> AffineTransform {
    AffineTransform::identity()
        .rotate_z(degrees_to_radians(-params.z_rotation))
        .rotate_x(degrees_to_radians(-params.y_rotation))
        .rotate_y(degrees_to_radians(-params.x_rotation))
}

/// Corners of a `width × height` rectangle centred at the origin, ordered
/// TL, TR, BR, BL (y grows downwards on a slide).
pub fn rectangle_corners(width: f64, height: f64) -> [Point3<f64>; 4] {
    let hw = width / 2.0;
    let hh = height / 2.0;
    [
        Point3::new(-hw, -hh, 0.0),
        Point3::new(hw, -hh, 0.0),
        Point3::new(hw, hh, 0.0),
        Point3::new(-hw, hh, 0.0),
    ]
}

/// Projected corners of the shape described by `params`, ordered like
/// [`Quad::corners`].
pub fn project_rectangle(params: &ShapeParams) -> [Point2<f64>; 4] {
    let transform = shape_transform(params);
    let fov = degrees_to_radians(params.perspective);
    rectangle_corners(params.width, params.height).map(|c| project(&transform.apply(&c), fov))
}

/// Projected shape as a [`Quad`].
pub fn project_quad(params: &ShapeParams) -> Quad {
    Quad::from_corners(project_rectangle(params))
}

/// Translation-invariant sum of squared vertex distances between the
/// projected candidate and `target`.
///
/// Never fails; degenerate input yields NaN or infinity.
pub fn evaluate(target: &Quad, params: &ShapeParams) -> f64 {
    let projected = project_rectangle(params);
    let projected_min = min_corner(&projected);

    let wanted = target.corners();
    let wanted_min = min_corner(&wanted);

    projected
        .iter()
        .zip(wanted.iter())
        .map(|(p, t)| {
            let dx = (p.x - projected_min.x) - (t.x - wanted_min.x);
            let dy = (p.y - projected_min.y) - (t.y - wanted_min.y);
            dx * dx + dy * dy
        })
        .sum()
}
