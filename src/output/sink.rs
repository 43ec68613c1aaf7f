//! Trait abstraction for outbound publication to enable testing

use async_trait::async_trait;

use crate::error::Result;
use crate::teleop::command::CameraCommand;

/// Sink for the five outbound channels.
///
/// Each method publishes one independent message; the control loop calls
/// all five once per running tick.
#[async_trait]
pub trait CommandSink: Send {
    /// Publish the absolute PTZ command
    async fn publish_command(&mut self, command: &CameraCommand) -> Result<()>;

    /// Publish the image mirror toggle state
    async fn publish_mirror(&mut self, on: bool) -> Result<()>;

    /// Publish the backlight compensation toggle state
    async fn publish_backlight(&mut self, on: bool) -> Result<()>;

    /// Publish the selected favorite slot
    async fn publish_favorite(&mut self, index: u8) -> Result<()>;

    /// Publish the save/recall direction
    async fn publish_save_go(&mut self, mode: i8) -> Result<()>;
}

#[cfg(test)]
pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// One recorded publication.
    #[derive(Debug, Clone, PartialEq)]
    pub enum Published {
        Command(CameraCommand),
        Mirror(bool),
        Backlight(bool),
        Favorite(u8),
        SaveGo(i8),
    }

    /// Mock sink recording every publication for testing
    #[derive(Clone, Default)]
    pub struct MockSink {
        pub published: Arc<Mutex<Vec<Published>>>,
    }

    impl MockSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn get_published(&self) -> Vec<Published> {
            self.published.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CommandSink for MockSink {
        async fn publish_command(&mut self, command: &CameraCommand) -> Result<()> {
            self.published
                .lock()
                .unwrap()
                .push(Published::Command(command.clone()));
            Ok(())
        }

        async fn publish_mirror(&mut self, on: bool) -> Result<()> {
            self.published.lock().unwrap().push(Published::Mirror(on));
            Ok(())
        }

        async fn publish_backlight(&mut self, on: bool) -> Result<()> {
            self.published.lock().unwrap().push(Published::Backlight(on));
            Ok(())
        }

        async fn publish_favorite(&mut self, index: u8) -> Result<()> {
            self.published.lock().unwrap().push(Published::Favorite(index));
            Ok(())
        }

        async fn publish_save_go(&mut self, mode: i8) -> Result<()> {
            self.published.lock().unwrap().push(Published::SaveGo(mode));
            Ok(())
        }
    }
}
