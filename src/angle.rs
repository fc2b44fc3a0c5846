//! Angle utilities shared by the transform model and the search.

use std::f64::consts::PI;

/// Converts an angle in degrees to radians.
///
/// Written as `value * π / 180` rather than [`f64::to_radians`] so the
/// rounding matches the projection model the search was tuned against.
#[inline]
pub fn degrees_to_radians(value: f64) -> f64 {
    value * PI / 180.0
}

/// Pulls a rotation back into `[0, 360]` with at most one correction.
///
/// Values below zero get `+360`, values above 360 get `-360`. Anything more
/// than one turn out of range stays out of range; the refinement windows
/// never reach that far.
#[inline]
pub fn wrap_degrees_once(value: f64) -> f64 {
    if value < 0.0 {
        value + 360.0
    } else if value > 360.0 {
        value - 360.0
    } else {
        value
    }
}
