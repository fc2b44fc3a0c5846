//! Tunable constants of the nested-interval search.
//!
//! Defaults reproduce the settings the slide tool was calibrated with. Most
//! users only touch `initial_rotation_step` (coarser is faster, finer is less
//! likely to lock onto a wrong basin) and `reduction`.

use super::error::SearchError;
use super::region::rotation_rounds;
use serde::{Deserialize, Serialize};

/// How the grid evaluator combines the per-width results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReductionMode {
    /// Each width keeps a local best; locals are folded in width order, so
    /// ties always resolve to the first grid point. Reproducible.
    #[default]
    Deterministic,
    /// All widths race on one lock-guarded record. Ties resolve to whichever
    /// worker gets there first.
    SharedLock,
}

/// Parameters of the coarse-to-fine search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchParams {
    /// Lower bound of the first width window as a fraction of the target's
    /// (aspect-adjusted) bounding-box width.
    pub min_width_factor: f64,
    /// Upper bound of the first width window, same reference.
    pub max_width_factor: f64,
    /// Number of width steps in the first window.
    pub width_divisions: f64,
    /// Rotation and perspective step of the first round (degrees).
    pub initial_rotation_step: f64,
    /// Upper bound of the first rotation window (degrees, exclusive).
    pub rotation_limit: f64,
    /// Perspective is always kept within `[0, perspective_limit]` degrees.
    pub perspective_limit: f64,
    /// The round loop ends after the round whose rotation step, halved, is
    /// below this value. Must be above `0.05` unless the initial step already
    /// satisfies it, since the step never drops below `0.1`.
    pub stop_half_step: f64,
    /// Width window half-size in width steps for refinement rounds.
    pub width_window_steps: f64,
    /// Rotation window half-size in rotation steps for refinement rounds.
    pub rotation_window_steps: f64,
    /// Perspective window half-size in rotation steps for refinement rounds.
    pub perspective_window_steps: f64,
    pub reduction: ReductionMode,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            min_width_factor: 0.3,
            max_width_factor: 1.1,
            width_divisions: 50.0,
            initial_rotation_step: 30.0,
            rotation_limit: 360.0,
            perspective_limit: 120.0,
            stop_half_step: 0.1,
            width_window_steps: 8.0,
            rotation_window_steps: 4.0,
            perspective_window_steps: 6.0,
            reduction: ReductionMode::Deterministic,
        }
    }
}

impl SearchParams {
    /// Checks that the rotation schedule starts somewhere and reaches its
    /// stop test.
    pub fn validate(&self) -> Result<(), SearchError> {
        let initial = self.initial_rotation_step;
        if !initial.is_finite() || initial <= 0.0 {
            return Err(SearchError::InvalidParams {
                field: "initial_rotation_step",
                value: initial,
            });
        }
        if rotation_rounds(initial, self.stop_half_step).is_none() {
            return Err(SearchError::InvalidParams {
                field: "stop_half_step",
                value: self.stop_half_step,
            });
        }
        Ok(())
    }
}
