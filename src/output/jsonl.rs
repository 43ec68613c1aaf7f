//! # JSON-Lines Sink
//!
//! Serializes each outbound message as one channel-tagged JSON line on any
//! async writer. The binary points this at stdout; the camera-side
//! transport adapter consumes the stream from there.

use async_trait::async_trait;
use serde::Serialize;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::Result;
use crate::teleop::command::CameraCommand;

use super::sink::CommandSink;

/// Wire representation of one outbound message.
#[derive(Debug, Serialize)]
#[serde(tag = "channel", rename_all = "snake_case")]
enum Message<'a> {
    Command(&'a CameraCommand),
    Mirror { on: bool },
    Backlight { on: bool },
    Favorite { index: u8 },
    SaveGo { mode: i8 },
}

/// Publishes channel-tagged JSON lines on an async writer.
pub struct JsonLineSink<W> {
    writer: W,
}

impl<W: AsyncWrite + Unpin + Send> JsonLineSink<W> {
    /// Wraps `writer`; each publication becomes one flushed line.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    async fn write_message(&mut self, message: &Message<'_>) -> Result<()> {
        let mut line = serde_json::to_vec(message)?;
        line.push(b'\n');
        self.writer.write_all(&line).await?;
        self.writer.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> CommandSink for JsonLineSink<W> {
    async fn publish_command(&mut self, command: &CameraCommand) -> Result<()> {
        self.write_message(&Message::Command(command)).await
    }

    async fn publish_mirror(&mut self, on: bool) -> Result<()> {
        self.write_message(&Message::Mirror { on }).await
    }

    async fn publish_backlight(&mut self, on: bool) -> Result<()> {
        self.write_message(&Message::Backlight { on }).await
    }

    async fn publish_favorite(&mut self, index: u8) -> Result<()> {
        self.write_message(&Message::Favorite { index }).await
    }

    async fn publish_save_go(&mut self, mode: i8) -> Result<()> {
        self.write_message(&Message::SaveGo { mode }).await
    }
}
