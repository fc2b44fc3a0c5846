use crate::angle::wrap_degrees_once;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Target quadrilateral on the slide, vertices in clockwise order starting at
/// the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quad {
    pub top_left: Point2<f64>,
    pub top_right: Point2<f64>,
    pub bottom_right: Point2<f64>,
    pub bottom_left: Point2<f64>,
}

impl Quad {
    pub fn new(
        top_left: Point2<f64>,
        top_right: Point2<f64>,
        bottom_right: Point2<f64>,
        bottom_left: Point2<f64>,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Builds a quad from `[TL, TR, BR, BL]`.
    pub fn from_corners(corners: [Point2<f64>; 4]) -> Self {
        let [top_left, top_right, bottom_right, bottom_left] = corners;
        Self::new(top_left, top_right, bottom_right, bottom_left)
    }

    pub fn corners(&self) -> [Point2<f64>; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    /// Smallest x and smallest y over the four vertices.
    pub fn min_corner(&self) -> Point2<f64> {
        min_corner(&self.corners())
    }

    /// Width and height of the axis-aligned bounding box.
    pub fn bounding_size(&self) -> (f64, f64) {
        let pts = self.corners();
        let min = min_corner(&pts);
        let max_x = pts.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let max_y = pts.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        (max_x - min.x, max_y - min.y)
    }
}

pub(crate) fn min_corner(pts: &[Point2<f64>; 4]) -> Point2<f64> {
    let min_x = pts.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let min_y = pts.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    Point2::new(min_x, min_y)
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.corners();
        write!(
            f,
            "({}, {}), ({}, {}), ({}, {}), ({}, {})",
            a.x, a.y, b.x, b.y, c.x, c.y, d.x, d.y
        )
    }
}

/// Size and 3D settings of a slide shape.
///
/// Rotations and perspective are in degrees and use the presentation
/// application's naming, not the geometric axis they rotate about.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeParams {
    pub width: f64,
    pub height: f64,
    pub x_rotation: f64,
    pub y_rotation: f64,
    pub z_rotation: f64,
    pub perspective: f64,
}

/// Best candidate found so far together with its score.
///
/// `score` is the sum of squared vertex distances after removing translation;
/// `0` is a perfect match. A fresh record starts at `f64::MAX` so any finite
/// evaluation replaces it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeSettings {
    #[serde(flatten)]
    pub params: ShapeParams,
    pub score: f64,
}

impl Default for ShapeSettings {
    fn default() -> Self {
        Self {
            params: ShapeParams::default(),
            score: f64::MAX,
        }
    }
}

impl ShapeSettings {
    /// Replaces the record when `score` is strictly lower, then wraps each
    /// rotation back into `[0, 360]` with a single correction.
    ///
    /// Returns whether the record changed. NaN scores never win.
    pub fn offer(&mut self, params: ShapeParams, score: f64) -> bool {
        if score.is_nan() || score >= self.score {
            return false;
        }
        self.params = ShapeParams {
            x_rotation: wrap_degrees_once(params.x_rotation),
            y_rotation: wrap_degrees_once(params.y_rotation),
            z_rotation: wrap_degrees_once(params.z_rotation),
            ..params
        };
        self.score = score;
        true
    }

    /// Adopts `other` verbatim when it scores strictly lower.
    pub fn merge(&mut self, other: &ShapeSettings) -> bool {
        if other.score < self.score {
            *self = *other;
            true
        } else {
            false
        }
    }

    /// True once any candidate has been recorded.
    pub fn is_set(&self) -> bool {
        self.score < f64::MAX
    }
}

impl fmt::Display for ShapeSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.params;
        writeln!(f, "Width: {:.2}", p.width)?;
        writeln!(f, "Height: {:.2}", p.height)?;
        writeln!(f, "X Rotation: {:.1}", p.x_rotation)?;
        writeln!(f, "Y Rotation: {:.1}", p.y_rotation)?;
        writeln!(f, "Z Rotation: {:.1}", p.z_rotation)?;
        writeln!(f, "Perspective: {:.1}", p.perspective)?;
        write!(f, "(Estimate: {:.6})", self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(x: f64, y: f64, z: f64) -> ShapeParams {
        ShapeParams {
            width: 4.0,
            height: 2.5,
            x_rotation: x,
            y_rotation: y,
            z_rotation: z,
            perspective: 30.0,
        }
    }

    #[test]
    fn fresh_settings_accept_any_finite_score() {
        let mut s = ShapeSettings::default();
        assert!(!s.is_set());
        assert!(s.offer(params(0.0, 0.0, 0.0), 1e300));
        assert!(s.is_set());
    }

    #[test]
    fn offer_requires_strict_improvement() {
        let mut s = ShapeSettings::default();
        assert!(s.offer(params(10.0, 0.0, 0.0), 2.0));
        assert!(!s.offer(params(20.0, 0.0, 0.0), 2.0));
        assert!(!s.offer(params(30.0, 0.0, 0.0), f64::NAN));
        assert_eq!(s.params.x_rotation, 10.0);
        assert!(s.offer(params(40.0, 0.0, 0.0), 1.0));
        assert_eq!(s.params.x_rotation, 40.0);
        assert_eq!(s.score, 1.0);
    }

    #[test]
    fn offer_wraps_rotations_once() {
        let mut s = ShapeSettings::default();
        s.offer(params(-15.0, 375.0, -400.0), 0.5);
        assert_eq!(s.params.x_rotation, 345.0);
        assert_eq!(s.params.y_rotation, 15.0);
        assert_eq!(s.params.z_rotation, -40.0);
        assert_eq!(s.params.perspective, 30.0);
    }

    #[test]
    fn merge_keeps_values_verbatim() {
        let mut a = ShapeSettings::default();
        let b = ShapeSettings {
            params: params(-40.0, 0.0, 0.0),
            score: 0.25,
        };
        assert!(a.merge(&b));
        assert_eq!(a.params.x_rotation, -40.0);
        assert!(!a.merge(&b));
    }

    #[test]
    fn bounding_size_and_min_corner() {
        let q = Quad::new(
            Point2::new(1.94, 1.82),
            Point2::new(6.62, 0.4),
            Point2::new(7.54, 3.85),
            Point2::new(2.95, 5.45),
        );
        let (w, h) = q.bounding_size();
        assert!((w - 5.6).abs() < 1e-12);
        assert!((h - 5.05).abs() < 1e-12);
        assert_eq!(q.min_corner(), Point2::new(1.94, 0.4));
    }

    #[test]
    fn display_uses_fixed_precision() {
        let s = ShapeSettings {
            params: ShapeParams {
                width: 5.126,
                height: 3.2,
                x_rotation: 10.04,
                y_rotation: 359.96,
                z_rotation: 5.0,
                perspective: 29.95,
            },
            score: 0.000_012_34,
        };
        let text = s.to_string();
        assert!(text.contains("Width: 5.13"), "{text}");
        assert!(text.contains("Height: 3.20"), "{text}");
        assert!(text.contains("X Rotation: 10.0"), "{text}");
        assert!(text.contains("(Estimate: 0.000012)"), "{text}");
    }
}
