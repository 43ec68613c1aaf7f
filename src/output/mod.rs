//! # Output Module
//!
//! Outbound command publication.
//!
//! This module handles:
//! - The [`sink::CommandSink`] trait the control loop publishes through
//! - The JSON-lines sink used by the binary

pub mod jsonl;
pub mod sink;

pub use jsonl::JsonLineSink;
pub use sink::CommandSink;
