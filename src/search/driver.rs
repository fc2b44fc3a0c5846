use super::error::SearchError;
use super::grid::evaluate_region;
use super::params::SearchParams;
use super::region::{next_rotation_step, next_width_step, SearchRegion};
use crate::diagnostics::{RoundReport, SearchReport, SearchTrace};
use crate::types::{Quad, ShapeSettings};
use log::debug;
use std::time::Instant;

/// Nested-interval search for the slide settings matching a quadrilateral.
#[derive(Clone, Debug, Default)]
pub struct SettingsFinder {
    params: SearchParams,
}

impl SettingsFinder {
    pub fn new(params: SearchParams) -> Self {
        Self { params }
    }

    /// Finds the settings that turn a `rect_width × rect_height` rectangle
    /// into `target`. Only the ratio of the rectangle sides matters.
    pub fn find(
        &self,
        target: &Quad,
        rect_width: f64,
        rect_height: f64,
    ) -> Result<ShapeSettings, SearchError> {
        self.find_with_trace(target, rect_width, rect_height)
            .map(|report| report.result)
    }

    /// Same as [`find`](Self::find) but also returns the per-round trace.
    pub fn find_with_trace(
        &self,
        target: &Quad,
        rect_width: f64,
        rect_height: f64,
    ) -> Result<SearchReport, SearchError> {
        let t0 = Instant::now();
        if let Err(err) = self.params.validate() {
            debug!("SettingsFinder::find rejected params: {}", err);
            return Err(err);
        }
        let aspect_ratio = rect_width / rect_height;
        if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
            debug!(
                "SettingsFinder::find rejected rectangle {}x{} (aspect={})",
                rect_width, rect_height, aspect_ratio
            );
            return Err(SearchError::InvalidRectangle {
                width: rect_width,
                height: rect_height,
            });
        }

        let params = &self.params;
        let mut region = SearchRegion::initial(target, aspect_ratio, params);
        if !(region.width.step > 0.0) || !region.width.step.is_finite() {
            let (width, height) = target.bounding_size();
            debug!(
                "SettingsFinder::find degenerate target {}x{} (width step={})",
                width, height, region.width.step
            );
            return Err(SearchError::DegenerateTarget { width, height });
        }

        let mut rotation_step = params.initial_rotation_step;
        let mut width_step = region.width.step;
        let mut trace = SearchTrace::default();

        loop {
            let round = trace.rounds.len();
            let round_start = Instant::now();
            let outcome = evaluate_region(target, aspect_ratio, &region, params.reduction);
            let elapsed_ms = round_start.elapsed().as_secs_f64() * 1000.0;
            let best = outcome.best;
            debug!(
                "round {}: rot_step={:.1} width=[{:.3}, {:.3}) step={:.2} evals={} score={:.6} ({:.1} ms)",
                round,
                rotation_step,
                region.width.min,
                region.width.max,
                width_step,
                outcome.evaluations,
                best.score,
                elapsed_ms
            );
            trace.push(RoundReport {
                round,
                rotation_step,
                width_step,
                region,
                evaluations: outcome.evaluations,
                best,
                elapsed_ms,
            });

            if rotation_step / 2.0 < params.stop_half_step {
                trace.total_ms = t0.elapsed().as_secs_f64() * 1000.0;
                debug!(
                    "SettingsFinder::find done after {} rounds, {} evaluations, score={:.6}",
                    trace.rounds.len(),
                    trace.evaluations(),
                    best.score
                );
                return Ok(SearchReport {
                    result: best,
                    trace,
                });
            }

            rotation_step = next_rotation_step(rotation_step);
            width_step = next_width_step(width_step);
            region = SearchRegion::around(&best, rotation_step, width_step, params);
        }
    }
}

/// Runs the search with default parameters.
pub fn find_shape_settings(
    target: &Quad,
    rect_width: f64,
    rect_height: f64,
) -> Result<ShapeSettings, SearchError> {
    SettingsFinder::default().find(target, rect_width, rect_height)
}
