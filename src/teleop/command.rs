//! # Camera Command Mapper
//!
//! Scales thresholded joystick axes into absolute pan/tilt/zoom/focus
//! commands and manages the autofocus override.
//!
//! ## Axis Assignments
//!
//! | Axis | Motion | Command |
//! |------|--------|---------|
//! | 0 | push forward | zoom |
//! | 1 | push left | (unused) |
//! | 2 | pull up | save/go mode |
//! | 3 | tilt right | pan |
//! | 4 | tilt forward | tilt |
//! | 5 | twist | focus / favorite select |

use serde::{Deserialize, Serialize};

use crate::config::AxesConfig;
use crate::error::{PtzTeleopError, Result};
use crate::input::frame::{InputFrame, AXIS_COUNT};

/// Semantic axis indices for spacenav-style devices.
pub mod axis {
    /// Zoom - push forward
    pub const ZOOM: usize = 0;
    /// Unused - push left
    pub const LEFT: usize = 1;
    /// Save/go mode - pull up
    pub const SAVE_GO: usize = 2;
    /// Pan - tilt right
    pub const PAN: usize = 3;
    /// Tilt - tilt forward
    pub const TILT: usize = 4;
    /// Focus and favorite select - twist
    pub const FOCUS: usize = 5;
}

/// Semantic button indices.
pub mod button {
    /// Backlight toggle; also re-enables autofocus when manual focus is
    /// allowed.
    pub const AUTOFOCUS: usize = 0;
    /// Mirror toggle.
    pub const MIRROR: usize = 1;
}

/// Focus magnitude below which the command does not disengage autofocus.
pub const FOCUS_EPSILON: f64 = 1e-5;

/// Per-axis scale factors and deadband thresholds, fixed at startup.
#[derive(Debug, Clone)]
pub struct AxisGains {
    /// Scale factor per axis; sign encodes direction.
    pub sensitivities: [f64; AXIS_COUNT],
    /// Deadband threshold per axis.
    pub deadbands: [f64; AXIS_COUNT],
}

impl AxisGains {
    /// Builds the fixed-size gain table from configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error unless both sequences have exactly
    /// one entry per axis.
    pub fn from_config(axes: &AxesConfig) -> Result<Self> {
        use serde::de::Error;

        let sensitivities: [f64; AXIS_COUNT] =
            axes.sensitivities.as_slice().try_into().map_err(|_| {
                PtzTeleopError::Config(toml::de::Error::custom(format!(
                    "expected {} sensitivities, got {}",
                    AXIS_COUNT,
                    axes.sensitivities.len()
                )))
            })?;
        let deadbands: [f64; AXIS_COUNT] = axes.deadbands.as_slice().try_into().map_err(|_| {
            PtzTeleopError::Config(toml::de::Error::custom(format!(
                "expected {} deadbands, got {}",
                AXIS_COUNT,
                axes.deadbands.len()
            )))
        })?;

        Ok(Self {
            sensitivities,
            deadbands,
        })
    }
}

/// Absolute PTZ command published to the camera.
///
/// # Examples
///
/// ```
/// use ptz_teleop::teleop::command::CameraCommand;
///
/// let command = CameraCommand::default();
/// assert_eq!(command.pan, 0.0);
/// assert!(command.autofocus);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraCommand {
    pub pan: f64,
    pub tilt: f64,
    pub zoom: f64,
    pub focus: f64,
    pub autofocus: bool,
}

impl Default for CameraCommand {
    /// All axes at rest with autofocus engaged.
    fn default() -> Self {
        Self {
            pan: 0.0,
            tilt: 0.0,
            zoom: 0.0,
            focus: 0.0,
            autofocus: true,
        }
    }
}

/// Writes one tick's pan/tilt/zoom/focus values into `command`.
///
/// `thresholded` is the deadband-filtered axis vector for the same tick.
/// With manual focus disabled the focus and autofocus fields are left
/// untouched. With it enabled, a pressed button 0 forces autofocus back on
/// and leaves the focus value alone; otherwise the twist axis drives focus,
/// and any focus command above [`FOCUS_EPSILON`] disengages autofocus. A
/// near-zero focus command leaves the autofocus state as it was; only
/// button 0 ever re-engages it.
pub fn apply(
    command: &mut CameraCommand,
    thresholded: &[f64; AXIS_COUNT],
    gains: &AxisGains,
    frame: &InputFrame,
    manual_focus: bool,
) {
    command.pan = thresholded[axis::PAN] * gains.sensitivities[axis::PAN];
    command.tilt = thresholded[axis::TILT] * gains.sensitivities[axis::TILT];
    command.zoom = thresholded[axis::ZOOM] * gains.sensitivities[axis::ZOOM];

    if manual_focus {
        if frame.button_pressed(button::AUTOFOCUS) {
            command.autofocus = true;
        } else {
            command.focus = thresholded[axis::FOCUS] * gains.sensitivities[axis::FOCUS];
            if command.focus.abs() > FOCUS_EPSILON {
                command.autofocus = false;
            }
        }
    }
}
