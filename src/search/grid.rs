//! Exhaustive scan of one [`SearchRegion`].
//!
//! Work is split by width: every width value is one independent unit that
//! sweeps the four angle axes and scores each grid point. Units run on the
//! rayon pool when the `parallel` feature is enabled and sequentially
//! otherwise. The function returns only after every unit has finished.

use super::params::ReductionMode;
use super::region::SearchRegion;
use crate::objective::evaluate;
use crate::types::{Quad, ShapeParams, ShapeSettings};
use parking_lot::Mutex;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of one grid scan.
#[derive(Clone, Copy, Debug)]
pub struct GridOutcome {
    /// Lowest-scoring grid point, rotations wrapped once into `[0, 360]`.
    /// Left at its default (`score == f64::MAX`) when the region is empty or
    /// every score was NaN.
    pub best: ShapeSettings,
    /// Number of objective evaluations performed.
    pub evaluations: usize,
}

/// Scores every grid point of `region` and returns the best one.
///
/// `height` is derived from each width as `width / aspect_ratio`.
pub fn evaluate_region(
    target: &Quad,
    aspect_ratio: f64,
    region: &SearchRegion,
    mode: ReductionMode,
) -> GridOutcome {
    let widths: Vec<f64> = region.width.values().collect();
    match mode {
        ReductionMode::Deterministic => {
            let locals = map_widths(&widths, |width| {
                let mut local = ShapeSettings::default();
                let evaluations = scan_width(target, aspect_ratio, region, width, |params, score| {
                    local.offer(params, score);
                });
                (local, evaluations)
            });
            let mut best = ShapeSettings::default();
            let mut evaluations = 0;
            for (local, count) in &locals {
                best.merge(local);
                evaluations += count;
            }
            GridOutcome { best, evaluations }
        }
        ReductionMode::SharedLock => {
            let shared = Mutex::new(ShapeSettings::default());
            let counts = map_widths(&widths, |width| {
                scan_width(target, aspect_ratio, region, width, |params, score| {
                    // Compare and write under one lock so the record is never torn.
                    shared.lock().offer(params, score);
                })
            });
            GridOutcome {
                best: shared.into_inner(),
                evaluations: counts.iter().sum(),
            }
        }
    }
}

#[cfg(feature = "parallel")]
fn map_widths<T, F>(widths: &[f64], unit: F) -> Vec<T>
where
    T: Send,
    F: Fn(f64) -> T + Sync + Send,
{
    widths.par_iter().map(|&w| unit(w)).collect()
}

#[cfg(not(feature = "parallel"))]
fn map_widths<T, F>(widths: &[f64], unit: F) -> Vec<T>
where
    F: Fn(f64) -> T,
{
    widths.iter().map(|&w| unit(w)).collect()
}

/// Sweeps the angle axes for a single width, feeding every score to `sink`.
fn scan_width<F>(
    target: &Quad,
    aspect_ratio: f64,
    region: &SearchRegion,
    width: f64,
    mut sink: F,
) -> usize
where
    F: FnMut(ShapeParams, f64),
{
    let height = width / aspect_ratio;
    let mut evaluations = 0;
    for x_rotation in region.x_rotation.values() {
        for y_rotation in region.y_rotation.values() {
            for z_rotation in region.z_rotation.values() {
                for perspective in region.perspective.values() {
                    let params = ShapeParams {
                        width,
                        height,
                        x_rotation,
                        y_rotation,
                        z_rotation,
                        perspective,
                    };
                    sink(params, evaluate(target, &params));
                    evaluations += 1;
                }
            }
        }
    }
    evaluations
}
