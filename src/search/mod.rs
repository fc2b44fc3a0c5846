//! Coarse-to-fine search for slide 3D settings.
//!
//! Overview
//! - The first round scans widths between 30% and 110% of the target's
//!   bounding-box width (widened to respect the rectangle's aspect ratio),
//!   all three rotations over `[0, 360)` and perspective over `[0, 120)`, on a
//!   30° grid.
//! - Every following round halves the steps (rounded up to 0.1° and 0.01
//!   width units) and recentres a window of ±4 rotation steps, ±6 perspective
//!   steps and ±8 width steps around the previous best.
//! - The search stops once half the rotation step drops below 0.1°, which
//!   with the default schedule is after ten rounds
//!   (30, 15, 7.5, 3.8, 1.9, 1.0, 0.5, 0.3, 0.2, 0.1).
//!
//! There is no convergence guarantee: a round only looks inside its window,
//! so an optimum outside it is never revisited.
//!
//! Modules
//! - [`params`]: tunable constants and the reduction mode.
//! - [`region`]: grid windows and the step schedule.
//! - `grid`: the per-round exhaustive scan.
//! - `driver`: the [`SettingsFinder`] round loop.

mod driver;
mod error;
mod grid;
pub mod params;
pub mod region;

pub use driver::{find_shape_settings, SettingsFinder};
pub use error::SearchError;
pub use grid::{evaluate_region, GridOutcome};
pub use params::{ReductionMode, SearchParams};
pub use region::{AxisRange, SearchRegion};
