//! # Teleop Engine
//!
//! Owns every piece of translation state that survives between ticks (the
//! camera command, the mode toggles, the favorite selector) and runs one
//! full translation pass per frame. The engine is purely synchronous; the
//! control loop in [`super::runner`] drives it at a fixed rate.

use crate::config::Config;
use crate::error::Result;
use crate::input::frame::InputFrame;

use super::command::{self, axis, button, AxisGains, CameraCommand};
use super::deadband;
use super::debounce::Toggle;
use super::favorites::{self, FavoriteSelector};

/// One tick's complete output set, one field per outbound channel.
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutput {
    /// Absolute PTZ command.
    pub command: CameraCommand,
    /// Image mirror toggle state.
    pub mirror: bool,
    /// Backlight compensation toggle state.
    pub backlight: bool,
    /// Selected favorite slot.
    pub favorite: u8,
    /// Save/recall direction, 0 when idle.
    pub save_go: i8,
}

/// Translation engine: deadband, axis scaling, toggles, favorites.
#[derive(Debug)]
pub struct TeleopEngine {
    gains: AxisGains,
    manual_focus: bool,
    command: CameraCommand,
    mirror: Toggle,
    backlight: Toggle,
    favorite: FavoriteSelector,
}

impl TeleopEngine {
    /// Builds an engine from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the axis tables have the wrong
    /// length.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            gains: AxisGains::from_config(&config.axes)?,
            manual_focus: config.focus.allow_manual,
            command: CameraCommand::default(),
            mirror: Toggle::new(),
            backlight: Toggle::new(),
            favorite: FavoriteSelector::new(),
        })
    }

    /// The current camera command; before any tick this is the startup
    /// baseline published to downstream consumers.
    #[must_use]
    pub fn command(&self) -> &CameraCommand {
        &self.command
    }

    /// Runs one translation pass over `frame`.
    ///
    /// Rejects frames missing any index the engine reads; on rejection no
    /// internal state changes.
    pub fn tick(&mut self, frame: &InputFrame) -> Result<TickOutput> {
        frame.validate()?;

        let thresholded = deadband::apply(frame, &self.gains.deadbands);
        command::apply(
            &mut self.command,
            &thresholded,
            &self.gains,
            frame,
            self.manual_focus,
        );

        // Mirror and backlight run unconditionally. Button 0 intentionally
        // drives both the backlight toggle and the autofocus override.
        let mirror = self.mirror.update(frame.button_pressed(button::MIRROR));
        let backlight = self.backlight.update(frame.button_pressed(button::AUTOFOCUS));

        // Favorite selection and save/go read the raw axes: their 0.6
        // deflection threshold subsumes the deadband.
        let favorite = self.favorite.update(frame.axes[axis::FOCUS]);
        let save_go = favorites::save_go_mode(frame.axes[axis::SAVE_GO]);

        Ok(TickOutput {
            command: self.command.clone(),
            mirror,
            backlight,
            favorite,
            save_go,
        })
    }
}
