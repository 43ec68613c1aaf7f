//! # Frame Reader
//!
//! Reads one JSON-encoded [`InputFrame`] per line from the transport stream
//! and stores it in the mailbox. Undecodable lines are logged and dropped so
//! a glitching upstream never stalls the control loop.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use crate::error::Result;

use super::frame::InputFrame;
use super::mailbox::FrameSender;

/// Reads frames from `reader` until EOF, feeding the mailbox.
///
/// # Errors
///
/// Returns error only on transport I/O failure; malformed lines are skipped.
pub async fn read_frames<R>(reader: R, sender: FrameSender) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<InputFrame>(&line) {
            Ok(frame) => {
                debug!("Received frame with {} axes", frame.axes.len());
                sender.store(frame);
            }
            Err(e) => {
                warn!("Dropping undecodable frame: {}", e);
            }
        }
    }
    debug!("Frame stream closed");
    Ok(())
}
