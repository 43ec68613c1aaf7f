//! # Teleop Module
//!
//! The input-to-command translation engine.
//!
//! This module handles:
//! - Deadband filtering of raw axis values
//! - Scaling thresholded axes into camera command fields
//! - Edge-triggered debouncing of mode toggles
//! - Favorite-position selection and the save/go mode signal
//! - The fixed-rate control loop that drives it all

pub mod command;
pub mod deadband;
pub mod debounce;
pub mod engine;
pub mod favorites;
pub mod runner;
