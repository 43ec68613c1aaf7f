//! # Frame Mailbox
//!
//! Single-slot hand-off between the asynchronous frame producer and the
//! control loop. Only the most recent frame is retained: a new frame
//! replaces the old one atomically as a whole, so the loop never observes a
//! half-written frame and no history is queued.

use tokio::sync::watch;

use super::frame::InputFrame;

/// Producer half: the transport adapter stores each arriving frame here.
#[derive(Debug)]
pub struct FrameSender {
    tx: watch::Sender<Option<InputFrame>>,
}

/// Consumer half: the control loop polls the most recent frame once per tick.
#[derive(Debug, Clone)]
pub struct FrameMailbox {
    rx: watch::Receiver<Option<InputFrame>>,
}

/// Creates a connected sender/mailbox pair with an empty slot.
#[must_use]
pub fn channel() -> (FrameSender, FrameMailbox) {
    let (tx, rx) = watch::channel(None);
    (FrameSender { tx }, FrameMailbox { rx })
}

impl FrameSender {
    /// Replaces the slot content. The previous frame, read or not, is
    /// dropped; frames are never queued.
    pub fn store(&self, frame: InputFrame) {
        self.tx.send_replace(Some(frame));
    }
}

impl FrameMailbox {
    /// Returns a copy of the most recent frame, or `None` before the first
    /// one arrives.
    ///
    /// Repeated calls between deliveries return the same frame; the loop
    /// deliberately re-processes a stale frame rather than pausing when the
    /// producer falls behind.
    #[must_use]
    pub fn latest(&self) -> Option<InputFrame> {
        self.rx.borrow().clone()
    }
}
