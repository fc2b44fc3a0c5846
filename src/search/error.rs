/// Reasons why the search cannot start.
///
/// The objective itself never fails; these are the inputs for which the
/// nested-interval loop would otherwise scan nothing useful or never finish.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SearchError {
    /// The source rectangle does not define a finite, positive aspect ratio
    /// (for example a height of zero).
    InvalidRectangle { width: f64, height: f64 },
    /// The target bounding box is too small to lay out a width grid.
    ///
    /// The first width step is rounded to two decimals, so with the default
    /// factors (`0.3..1.1` over 50 divisions) any target whose aspect-adjusted
    /// bounding-box width is below about `0.31` slide units gets a step of
    /// `0.00` and is rejected. Coincident points are the extreme case.
    DegenerateTarget { width: f64, height: f64 },
    /// A search parameter would leave the round loop without a stop.
    ///
    /// `initial_rotation_step` must be finite and positive. The rotation step
    /// never halves below `0.1`, so `stop_half_step` must be reachable from
    /// the initial step (in practice: above `0.05`).
    InvalidParams { field: &'static str, value: f64 },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::InvalidRectangle { width, height } => write!(
                f,
                "rectangle {width} x {height} has no finite positive aspect ratio"
            ),
            SearchError::DegenerateTarget { width, height } => write!(
                f,
                "target bounding box {width} x {height} is too small to search"
            ),
            SearchError::InvalidParams { field, value } => write!(
                f,
                "search parameter {field} = {value} never lets the search stop"
            ),
        }
    }
}

impl std::error::Error for SearchError {}
