//! # Deadband Filter
//!
//! Suppresses small axis deflections around zero to reject sensor noise and
//! drift. Values above the threshold pass through unchanged; unlike a
//! game-controller deadzone there is no rescaling of the remaining range,
//! so the command gain stays exactly linear in the raw deflection.

use crate::input::frame::{InputFrame, AXIS_COUNT};

/// Applies a deadband threshold to a single axis value.
///
/// Returns `value` if `|value| > threshold`, else `0.0`. The boundary
/// itself is suppressed.
///
/// # Examples
///
/// ```
/// use ptz_teleop::teleop::deadband::deadband;
///
/// assert_eq!(deadband(0.15, 0.2), 0.0);
/// assert_eq!(deadband(0.2, 0.2), 0.0);
/// assert_eq!(deadband(0.5, 0.2), 0.5);
/// assert_eq!(deadband(-0.5, 0.2), -0.5);
/// ```
#[must_use]
pub fn deadband(value: f64, threshold: f64) -> f64 {
    if value.abs() > threshold {
        value
    } else {
        0.0
    }
}

/// Thresholds the first six axes of a frame against per-axis deadbands.
///
/// The frame must have been validated; fewer than six axes panics.
#[must_use]
pub fn apply(frame: &InputFrame, deadbands: &[f64; AXIS_COUNT]) -> [f64; AXIS_COUNT] {
    let mut thresholded = [0.0; AXIS_COUNT];
    for (i, slot) in thresholded.iter_mut().enumerate() {
        *slot = deadband(frame.axes[i], deadbands[i]);
    }
    thresholded
}
