//! # Input Frames
//!
//! The raw frame delivered by a spacenav-style input device: six continuous
//! axes plus a row of momentary buttons.
//!
//! ## Axis Order
//!
//! | Index | Motion | Drives |
//! |-------|--------|--------|
//! | 0 | push forward | zoom |
//! | 1 | push left | (unused) |
//! | 2 | pull up | save/go mode |
//! | 3 | tilt right | pan |
//! | 4 | tilt forward | tilt |
//! | 5 | twist | focus / favorite select |
//!
//! Devices may report more axes and buttons than the translation engine
//! reads; everything past `axes[5]` and `buttons[1]` is carried untouched.

use serde::{Deserialize, Serialize};

use crate::error::{PtzTeleopError, Result};

/// Number of axes the translation engine reads.
pub const AXIS_COUNT: usize = 6;

/// Number of buttons the translation engine reads.
pub const BUTTON_COUNT: usize = 2;

/// One raw frame from the input device.
///
/// Axis values are nominally in [-1, 1]; buttons are 0/1 integers, matching
/// the device driver's wire format.
///
/// # Examples
///
/// ```
/// use ptz_teleop::input::frame::InputFrame;
///
/// let frame = InputFrame {
///     axes: vec![0.0, 0.0, 0.0, 0.5, 0.0, 0.0],
///     buttons: vec![0, 1],
/// };
/// assert!(frame.validate().is_ok());
/// assert!(frame.button_pressed(1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputFrame {
    /// Continuous axis deflections.
    pub axes: Vec<f64>,
    /// Momentary button states, 1 = pressed.
    pub buttons: Vec<i32>,
}

impl InputFrame {
    /// Checks that the frame exposes every index the engine reads.
    ///
    /// A frame shorter than six axes or two buttons is a contract violation
    /// by the upstream device driver and is rejected rather than crashing
    /// the loop on an out-of-range read.
    ///
    /// # Errors
    ///
    /// Returns [`PtzTeleopError::Frame`] naming the missing dimension.
    pub fn validate(&self) -> Result<()> {
        if self.axes.len() < AXIS_COUNT {
            return Err(PtzTeleopError::Frame(format!(
                "expected at least {} axes, got {}",
                AXIS_COUNT,
                self.axes.len()
            )));
        }
        if self.buttons.len() < BUTTON_COUNT {
            return Err(PtzTeleopError::Frame(format!(
                "expected at least {} buttons, got {}",
                BUTTON_COUNT,
                self.buttons.len()
            )));
        }
        Ok(())
    }

    /// Whether the button at `index` is pressed.
    ///
    /// Out-of-range indices read as released.
    #[must_use]
    pub fn button_pressed(&self, index: usize) -> bool {
        self.buttons.get(index).map_or(false, |&b| b == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neutral_frame() -> InputFrame {
        InputFrame {
            axes: vec![0.0; AXIS_COUNT],
            buttons: vec![0; BUTTON_COUNT],
        }
    }

    #[test]
    fn test_neutral_frame_validates() {
        assert!(neutral_frame().validate().is_ok());
    }

    #[test]
    fn test_extra_axes_and_buttons_allowed() {
        let frame = InputFrame {
            axes: vec![0.0; 8],
            buttons: vec![0; 12],
        };
        assert!(frame.validate().is_ok());
    }

    #[test]
    fn test_too_few_axes_rejected() {
        let frame = InputFrame {
            axes: vec![0.0; 3],
            buttons: vec![0; BUTTON_COUNT],
        };
        let err = frame.validate().unwrap_err();
        assert!(err.to_string().contains("axes"));
    }

    #[test]
    fn test_too_few_buttons_rejected() {
        let frame = InputFrame {
            axes: vec![0.0; AXIS_COUNT],
            buttons: vec![1],
        };
        let err = frame.validate().unwrap_err();
        assert!(err.to_string().contains("buttons"));
    }

    #[test]
    fn test_button_pressed() {
        let mut frame = neutral_frame();
        assert!(!frame.button_pressed(0));

        frame.buttons[0] = 1;
        assert!(frame.button_pressed(0));
        assert!(!frame.button_pressed(1));
    }

    #[test]
    fn test_button_pressed_out_of_range_is_released() {
        let frame = neutral_frame();
        assert!(!frame.button_pressed(99));
    }

    #[test]
    fn test_frame_decodes_from_wire_json() {
        let frame: InputFrame =
            serde_json::from_str(r#"{"axes":[0.0,0.0,0.0,0.5,0.0,0.0],"buttons":[1,0]}"#).unwrap();
        assert_eq!(frame.axes[3], 0.5);
        assert!(frame.button_pressed(0));
    }
}
