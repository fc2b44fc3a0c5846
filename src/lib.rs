#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod objective;
pub mod search;
pub mod transform;
pub mod types;

// Supporting modules used by the binaries.
pub mod angle;
pub mod config;
pub mod diagnostics;
pub mod io;

// --- High-level re-exports -------------------------------------------------

// Main entry points: finder + results.
pub use crate::search::{find_shape_settings, SearchError, SearchParams, SettingsFinder};
pub use crate::types::{Quad, ShapeParams, ShapeSettings};

// Per-round trace returned by `SettingsFinder::find_with_trace`.
pub use crate::diagnostics::{RoundReport, SearchReport, SearchTrace};

// Geometry helpers that are useful on their own.
pub use crate::objective::{evaluate, project_quad};
pub use crate::transform::{project, AffineTransform};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use slide3d_fit::prelude::*;
///
/// # fn main() -> Result<(), SearchError> {
/// let target = Quad::new(
///     Point2::new(1.94, 1.82),
///     Point2::new(6.62, 0.4),
///     Point2::new(7.54, 3.85),
///     Point2::new(2.95, 5.45),
/// );
/// let settings = SettingsFinder::new(SearchParams::default()).find(&target, 1440.0, 900.0)?;
/// println!("{settings}");
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::{Quad, SearchError, SearchParams, SettingsFinder, ShapeParams, ShapeSettings};
    pub use nalgebra::Point2;
}
