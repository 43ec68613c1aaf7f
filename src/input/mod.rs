//! # Input Module
//!
//! Input device frame handling.
//!
//! This module handles:
//! - The [`frame::InputFrame`] wire type and its validation
//! - The single-slot latest-value mailbox between the transport task and
//!   the control loop
//! - The JSON-lines frame reader task feeding that mailbox

pub mod frame;
pub mod mailbox;
pub mod reader;

pub use frame::InputFrame;
pub use mailbox::{channel, FrameMailbox, FrameSender};
