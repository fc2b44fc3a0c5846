//! 3D affine transform and the slide perspective projection.
//!
//! [`AffineTransform`] holds a 3×4 matrix `[R | t]`. Rotations are appended
//! by right-multiplication, so for a chain `identity().rotate_z(a).rotate_x(b)`
//! a point is rotated about X first and about Z last.
//!
//! [`project`] is not a textbook pinhole divide. It is a hand-tuned mapping
//! that approximates how the presentation renderer draws a shape with a
//! "Perspective" angle, and it has to stay numerically identical to the
//! formula the search was calibrated with.

use nalgebra::{Matrix3x4, Point2, Point3};
use std::f64::consts::PI;

/// Immutable 3D affine map (rotation block plus translation column).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineTransform {
    m: Matrix3x4<f64>,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    pub fn identity() -> Self {
        Self {
            m: Matrix3x4::new(
                1.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0,
            ),
        }
    }

    pub fn from_matrix(m: Matrix3x4<f64>) -> Self {
        Self { m }
    }

    /// Returns `self · other`, treating both as 4×4 matrices with an implicit
    /// `[0 0 0 1]` bottom row.
    pub fn compose(&self, other: &AffineTransform) -> AffineTransform {
        let a = &self.m;
        let b = &other.m;
        let mut out = Matrix3x4::zeros();
        for r in 0..3 {
            for c in 0..3 {
                out[(r, c)] = a[(r, 0)] * b[(0, c)] + a[(r, 1)] * b[(1, c)] + a[(r, 2)] * b[(2, c)];
            }
            out[(r, 3)] =
                a[(r, 0)] * b[(0, 3)] + a[(r, 1)] * b[(1, 3)] + a[(r, 2)] * b[(2, 3)] + a[(r, 3)];
        }
        AffineTransform { m: out }
    }

    /// Appends a right-handed rotation about the X axis.
    pub fn rotate_x(&self, angle_rad: f64) -> AffineTransform {
        let (sin, cos) = angle_rad.sin_cos();
        self.compose(&AffineTransform::from_matrix(Matrix3x4::new(
            1.0, 0.0, 0.0, 0.0, //
            0.0, cos, -sin, 0.0, //
            0.0, sin, cos, 0.0,
        )))
    }

    /// Appends a right-handed rotation about the Y axis.
    pub fn rotate_y(&self, angle_rad: f64) -> AffineTransform {
        let (sin, cos) = angle_rad.sin_cos();
        self.compose(&AffineTransform::from_matrix(Matrix3x4::new(
            cos, 0.0, sin, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            -sin, 0.0, cos, 0.0,
        )))
    }

    /// Appends a right-handed rotation about the Z axis.
    pub fn rotate_z(&self, angle_rad: f64) -> AffineTransform {
        let (sin, cos) = angle_rad.sin_cos();
        self.compose(&AffineTransform::from_matrix(Matrix3x4::new(
            cos, -sin, 0.0, 0.0, //
            sin, cos, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0,
        )))
    }

    /// Affine image of `p` (no perspective).
    pub fn apply(&self, p: &Point3<f64>) -> Point3<f64> {
        let m = &self.m;
        Point3::new(
            m[(0, 0)] * p.x + m[(0, 1)] * p.y + m[(0, 2)] * p.z + m[(0, 3)],
            m[(1, 0)] * p.x + m[(1, 1)] * p.y + m[(1, 2)] * p.z + m[(1, 3)],
            m[(2, 0)] * p.x + m[(2, 1)] * p.y + m[(2, 2)] * p.z + m[(2, 3)],
        )
    }
}

/// Projects a 3D point to the slide plane for a field of view in radians.
///
/// - `s = 1 / tan(fov / 2)`, clamped to `1` when infinite (`fov == 0`).
/// - `x, y` are scaled by `s`; the camera sits at `z = s·2π`, except for
///   `fov == 0` where depth is pinned to `1`.
/// - When the resulting depth is exactly zero the divide is skipped and the
///   scaled coordinates are returned as-is.
pub fn project(p: &Point3<f64>, fov_rad: f64) -> Point2<f64> {
    let mut s = 1.0 / (fov_rad * 0.5).tan();
    if s.is_infinite() {
        s = 1.0;
    }
    let mut x = s * p.x;
    let mut y = s * p.y;
    let mut z = p.z;

    if fov_rad == 0.0 {
        z = 1.0;
    } else {
        z -= s * 2.0 * PI;
    }

    if z != 0.0 {
        x = x / z.abs() * 2.0 * PI;
        y = y / z.abs() * 2.0 * PI;
    }

    Point2::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn approx_point(a: &Point3<f64>, b: &Point3<f64>) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    #[test]
    fn identity_leaves_points_unchanged() {
        let p = Point3::new(1.5, -2.0, 3.25);
        assert_eq!(AffineTransform::identity().apply(&p), p);
    }

    #[test]
    fn rotate_z_quarter_turn() {
        let t = AffineTransform::identity().rotate_z(FRAC_PI_2);
        let p = t.apply(&Point3::new(1.0, 0.0, 0.0));
        assert!(approx_point(&p, &Point3::new(0.0, 1.0, 0.0)), "{p:?}");
    }

    #[test]
    fn rotate_x_and_y_quarter_turns() {
        let tx = AffineTransform::identity().rotate_x(FRAC_PI_2);
        let p = tx.apply(&Point3::new(0.0, 1.0, 0.0));
        assert!(approx_point(&p, &Point3::new(0.0, 0.0, 1.0)), "{p:?}");

        let ty = AffineTransform::identity().rotate_y(FRAC_PI_2);
        let q = ty.apply(&Point3::new(0.0, 0.0, 1.0));
        assert!(approx_point(&q, &Point3::new(1.0, 0.0, 0.0)), "{q:?}");
    }

    #[test]
    fn later_rotations_apply_first() {
        // Z then X in call order: X acts on the point first.
        let t = AffineTransform::identity()
            .rotate_z(FRAC_PI_2)
            .rotate_x(FRAC_PI_2);
        let p = t.apply(&Point3::new(0.0, 1.0, 0.0));
        // X: (0,1,0) -> (0,0,1); Z leaves the z axis alone.
        assert!(approx_point(&p, &Point3::new(0.0, 0.0, 1.0)), "{p:?}");

        let swapped = AffineTransform::identity()
            .rotate_x(FRAC_PI_2)
            .rotate_z(FRAC_PI_2);
        let q = swapped.apply(&Point3::new(0.0, 1.0, 0.0));
        // Z: (0,1,0) -> (-1,0,0); X leaves the x axis alone.
        assert!(approx_point(&q, &Point3::new(-1.0, 0.0, 0.0)), "{q:?}");
    }

    #[test]
    fn compose_carries_translation() {
        let translate = |tx: f64, ty: f64, tz: f64| {
            AffineTransform::from_matrix(Matrix3x4::new(
                1.0, 0.0, 0.0, tx, //
                0.0, 1.0, 0.0, ty, //
                0.0, 0.0, 1.0, tz,
            ))
        };
        let rot = AffineTransform::identity().rotate_z(FRAC_PI_2);
        let t = translate(1.0, 2.0, 3.0).compose(&rot).compose(&translate(1.0, 0.0, 0.0));
        // Innermost translation is rotated before the outer one is added.
        let p = t.apply(&Point3::origin());
        assert!(approx_point(&p, &Point3::new(1.0, 3.0, 3.0)), "{p:?}");
    }

    #[test]
    fn compose_with_identity_is_neutral() {
        let t = AffineTransform::identity().rotate_y(0.3).rotate_x(-1.1);
        assert_eq!(t.compose(&AffineTransform::identity()), t);
        assert_eq!(AffineTransform::identity().compose(&t), t);
    }

    #[test]
    fn project_zero_fov_scales_by_two_pi() {
        let p = project(&Point3::new(1.0, -2.0, 5.0), 0.0);
        assert!(p.x.is_finite() && p.y.is_finite());
        assert!(approx_eq(p.x, 2.0 * PI));
        assert!(approx_eq(p.y, -4.0 * PI));
    }

    #[test]
    fn project_zero_fov_accepts_any_finite_point() {
        for p in [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(-1e6, 3.0, -7.0),
            Point3::new(2.5, 1e-9, 1e9),
        ] {
            let q = project(&p, 0.0);
            assert!(q.x.is_finite() && q.y.is_finite(), "{p:?} -> {q:?}");
        }
    }

    #[test]
    fn project_keeps_planar_points_for_nonzero_fov() {
        let fov = 30f64.to_radians();
        let p = project(&Point3::new(2.0, -1.5, 0.0), fov);
        assert!(approx_eq(p.x, 2.0));
        assert!(approx_eq(p.y, -1.5));
    }

    #[test]
    fn project_skips_divide_at_zero_depth() {
        let fov = FRAC_PI_2;
        let s = 1.0 / (fov * 0.5).tan();
        let depth = s * 2.0 * PI;
        let p = project(&Point3::new(3.0, -4.0, depth), fov);
        assert_eq!(p.x, s * 3.0);
        assert_eq!(p.y, s * -4.0);
    }

    #[test]
    fn project_points_towards_camera_are_enlarged() {
        let fov = 60f64.to_radians();
        let near = project(&Point3::new(1.0, 1.0, 1.0), fov);
        let far = project(&Point3::new(1.0, 1.0, -1.0), fov);
        assert!(near.x > 1.0 && far.x < 1.0, "near={near:?} far={far:?}");
    }
}
