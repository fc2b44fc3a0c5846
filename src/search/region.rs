//! Parameter-space windows scanned by one round of the search.

use super::params::SearchParams;
use crate::types::{Quad, ShapeSettings};
use serde::Serialize;

/// Half-open range `[min, max)` walked in increments of `step`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Grid values of this range.
    ///
    /// Values are produced by repeated addition (`min`, `min + step`, ...), so
    /// they carry the same accumulated rounding as a plain `for` loop over
    /// floats. A non-positive or NaN step yields at most `min`.
    pub fn values(&self) -> AxisValues {
        AxisValues {
            next: self.min,
            max: self.max,
            step: self.step,
            done: false,
        }
    }

    pub fn count(&self) -> usize {
        self.values().count()
    }
}

#[derive(Clone, Debug)]
pub struct AxisValues {
    next: f64,
    max: f64,
    step: f64,
    done: bool,
}

impl Iterator for AxisValues {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.done || !(self.next < self.max) {
            return None;
        }
        let value = self.next;
        if self.step > 0.0 {
            self.next += self.step;
        } else {
            self.done = true;
        }
        Some(value)
    }
}

/// Window of the 5-dimensional search space (height follows width).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRegion {
    pub width: AxisRange,
    pub x_rotation: AxisRange,
    pub y_rotation: AxisRange,
    pub z_rotation: AxisRange,
    pub perspective: AxisRange,
}

impl SearchRegion {
    /// First-round window derived from the target's bounding box.
    ///
    /// The box width is widened when needed so that a rectangle of
    /// `aspect_ratio` spanning it is at least as tall as the box.
    pub fn initial(target: &Quad, aspect_ratio: f64, params: &SearchParams) -> Self {
        let (mut width, height) = target.bounding_size();
        if width / aspect_ratio < height {
            width = height * aspect_ratio;
        }
        let min_width = round_half_even(width * params.min_width_factor, 2);
        let max_width = round_half_even(width * params.max_width_factor, 2);
        let width_step = round_half_even((max_width - min_width) / params.width_divisions, 2);

        let step = params.initial_rotation_step;
        let rotation = AxisRange::new(0.0, params.rotation_limit, step);
        Self {
            width: AxisRange::new(min_width, max_width, width_step),
            x_rotation: rotation,
            y_rotation: rotation,
            z_rotation: rotation,
            perspective: AxisRange::new(0.0, params.perspective_limit, step),
        }
    }

    /// Window of the next round, centred on `best`.
    ///
    /// Rotations are not clamped; the grid evaluator wraps the winner.
    pub fn around(
        best: &ShapeSettings,
        rotation_step: f64,
        width_step: f64,
        params: &SearchParams,
    ) -> Self {
        let p = &best.params;
        let width_half = params.width_window_steps * width_step;
        let rotation_half = params.rotation_window_steps * rotation_step;
        let perspective_half = params.perspective_window_steps * rotation_step;
        let rotation =
            |center: f64| AxisRange::new(center - rotation_half, center + rotation_half, rotation_step);
        Self {
            width: AxisRange::new(
                (p.width - width_half).max(0.0),
                p.width + width_half,
                width_step,
            ),
            x_rotation: rotation(p.x_rotation),
            y_rotation: rotation(p.y_rotation),
            z_rotation: rotation(p.z_rotation),
            perspective: AxisRange::new(
                (p.perspective - perspective_half).max(0.0),
                (p.perspective + perspective_half).min(params.perspective_limit),
                rotation_step,
            ),
        }
    }

    /// Number of grid points in this window.
    pub fn grid_size(&self) -> usize {
        self.width.count()
            * self.x_rotation.count()
            * self.y_rotation.count()
            * self.z_rotation.count()
            * self.perspective.count()
    }
}

/// Halves the rotation step, rounding up to one decimal.
pub fn next_rotation_step(step: f64) -> f64 {
    (step / 2.0 * 10.0).ceil() / 10.0
}

/// Number of rounds the rotation schedule runs from `initial` until half the
/// step drops below `stop_half_step`, or `None` if it never gets there.
///
/// [`next_rotation_step`] settles at `0.1`, so a stop threshold of `0.05` or
/// less is only reachable when the initial step already satisfies it.
pub fn rotation_rounds(initial: f64, stop_half_step: f64) -> Option<usize> {
    let mut step = initial;
    let mut rounds = 1;
    while !(step / 2.0 < stop_half_step) {
        let next = next_rotation_step(step);
        if !(next < step) {
            return None;
        }
        step = next;
        rounds += 1;
    }
    Some(rounds)
}

/// Halves the width step, rounding up to two decimals.
pub fn next_width_step(step: f64) -> f64 {
    (step / 2.0 * 100.0).ceil() / 100.0
}

/// Rounds to `digits` decimals with ties going to the even neighbour.
pub fn round_half_even(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round_ties_even() / scale
}
