//! # Control Loop
//!
//! Fixed-rate scheduler around the engine. Publishes the startup baseline,
//! waits for the first frame, then translates and publishes every tick
//! until shutdown. There is no final flush on exit.

use std::future::Future;
use std::time::Duration;

use tokio::time::interval;
use tracing::{info, warn};

use crate::error::Result;
use crate::input::mailbox::FrameMailbox;
use crate::output::sink::CommandSink;

use super::engine::{TeleopEngine, TickOutput};

/// Ticks between cadence log messages (20 seconds at the default 5 Hz)
const LOG_INTERVAL_TICKS: u64 = 100;

/// Fixed-rate control loop over a [`TeleopEngine`].
///
/// Two states: waiting for the first frame (nothing but the startup
/// baseline is published) and running (five messages per tick). A
/// malformed frame while running republishes the previous outputs so
/// downstream consumers keep a steady stream.
pub struct ControlLoop<S> {
    engine: TeleopEngine,
    mailbox: FrameMailbox,
    sink: S,
    period: Duration,
    ticks: u64,
    last: Option<TickOutput>,
}

impl<S: CommandSink> ControlLoop<S> {
    /// Assembles a loop; nothing is published until [`ControlLoop::run`].
    pub fn new(engine: TeleopEngine, mailbox: FrameMailbox, sink: S, period: Duration) -> Self {
        Self {
            engine,
            mailbox,
            sink,
            period,
            ticks: 0,
            last: None,
        }
    }

    /// Runs until `shutdown` resolves.
    ///
    /// # Errors
    ///
    /// Returns error if publishing to the sink fails.
    pub async fn run<F>(mut self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        // Startup baseline: downstream consumers see a known command
        // before any input has arrived.
        self.sink.publish_command(self.engine.command()).await?;

        let mut ticker = interval(self.period);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.tick().await?;
                }
                _ = &mut shutdown => {
                    info!("Control loop stopped after {} ticks", self.ticks);
                    break;
                }
            }
        }

        Ok(())
    }

    /// One scheduler tick: poll the mailbox, translate, publish.
    async fn tick(&mut self) -> Result<()> {
        let Some(frame) = self.mailbox.latest() else {
            // No frame has ever arrived; keep waiting silently.
            return Ok(());
        };

        match self.engine.tick(&frame) {
            Ok(output) => {
                self.publish(&output).await?;
                self.last = Some(output);
            }
            Err(e) => {
                warn!("Rejecting input frame: {}", e);
                // Previous outputs persist across a bad frame.
                if let Some(output) = self.last.clone() {
                    self.publish(&output).await?;
                }
                return Ok(());
            }
        }

        self.ticks += 1;
        if self.ticks % LOG_INTERVAL_TICKS == 0 {
            info!("Published {} ticks", self.ticks);
        }

        Ok(())
    }

    /// Publishes one output set as five independent messages.
    async fn publish(&mut self, output: &TickOutput) -> Result<()> {
        self.sink.publish_command(&output.command).await?;
        self.sink.publish_mirror(output.mirror).await?;
        self.sink.publish_backlight(output.backlight).await?;
        self.sink.publish_favorite(output.favorite).await?;
        self.sink.publish_save_go(output.save_go).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::input::frame::InputFrame;
    use crate::input::mailbox;
    use crate::output::sink::mocks::{MockSink, Published};

    const PERIOD: Duration = Duration::from_millis(200);

    fn engine() -> TeleopEngine {
        TeleopEngine::new(&Config::default()).unwrap()
    }

    fn neutral_frame() -> InputFrame {
        InputFrame {
            axes: vec![0.0; 6],
            buttons: vec![0, 0],
        }
    }

    // ==================== Direct Tick Tests ====================

    #[tokio::test]
    async fn test_tick_without_frame_publishes_nothing() {
        let (_tx, mailbox) = mailbox::channel();
        let sink = MockSink::new();
        let mut control = ControlLoop::new(engine(), mailbox, sink.clone(), PERIOD);

        control.tick().await.unwrap();
        control.tick().await.unwrap();

        assert!(sink.get_published().is_empty());
    }

    #[tokio::test]
    async fn test_tick_publishes_all_five_channels() {
        let (tx, mailbox) = mailbox::channel();
        let sink = MockSink::new();
        let mut control = ControlLoop::new(engine(), mailbox, sink.clone(), PERIOD);

        tx.store(neutral_frame());
        control.tick().await.unwrap();

        let published = sink.get_published();
        assert_eq!(published.len(), 5);
        assert!(matches!(published[0], Published::Command(_)));
        assert_eq!(published[1], Published::Mirror(false));
        assert_eq!(published[2], Published::Backlight(false));
        assert_eq!(published[3], Published::Favorite(0));
        assert_eq!(published[4], Published::SaveGo(0));
    }

    #[tokio::test]
    async fn test_same_frame_is_reprocessed_each_tick() {
        let (tx, mailbox) = mailbox::channel();
        let sink = MockSink::new();
        let mut control = ControlLoop::new(engine(), mailbox, sink.clone(), PERIOD);

        // A single frame with the mirror button held: the toggle must not
        // flicker across ticks that re-read it.
        let mut frame = neutral_frame();
        frame.buttons[1] = 1;
        tx.store(frame);

        control.tick().await.unwrap();
        control.tick().await.unwrap();
        control.tick().await.unwrap();

        let mirrors: Vec<_> = sink
            .get_published()
            .into_iter()
            .filter(|p| matches!(p, Published::Mirror(_)))
            .collect();
        assert_eq!(
            mirrors,
            vec![
                Published::Mirror(true),
                Published::Mirror(true),
                Published::Mirror(true)
            ]
        );
    }

    #[tokio::test]
    async fn test_malformed_frame_republishes_previous_outputs() {
        let (tx, mailbox) = mailbox::channel();
        let sink = MockSink::new();
        let mut control = ControlLoop::new(engine(), mailbox, sink.clone(), PERIOD);

        tx.store(neutral_frame());
        control.tick().await.unwrap();

        tx.store(InputFrame {
            axes: vec![0.0; 2],
            buttons: vec![],
        });
        control.tick().await.unwrap();

        let published = sink.get_published();
        assert_eq!(published.len(), 10);
        assert_eq!(published[..5], published[5..]);
    }

    #[tokio::test]
    async fn test_malformed_frame_before_first_good_frame_stays_waiting() {
        let (tx, mailbox) = mailbox::channel();
        let sink = MockSink::new();
        let mut control = ControlLoop::new(engine(), mailbox, sink.clone(), PERIOD);

        tx.store(InputFrame {
            axes: vec![],
            buttons: vec![],
        });
        control.tick().await.unwrap();

        assert!(sink.get_published().is_empty());
    }

    // ==================== Scheduled Run Tests ====================

    #[tokio::test(start_paused = true)]
    async fn test_baseline_only_before_first_frame() {
        let (_tx, mailbox) = mailbox::channel();
        let sink = MockSink::new();
        let control = ControlLoop::new(engine(), mailbox, sink.clone(), PERIOD);

        control
            .run(tokio::time::sleep(Duration::from_millis(450)))
            .await
            .unwrap();

        // One baseline command publish, nothing on the other channels.
        let published = sink.get_published();
        assert_eq!(published.len(), 1);
        assert!(matches!(published[0], Published::Command(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_running_loop_publishes_every_period() {
        let (tx, mailbox) = mailbox::channel();
        tx.store(neutral_frame());
        let sink = MockSink::new();
        let control = ControlLoop::new(engine(), mailbox, sink.clone(), PERIOD);

        control
            .run(tokio::time::sleep(Duration::from_millis(500)))
            .await
            .unwrap();

        // Baseline plus ticks at 0, 200 and 400 ms, five channels each.
        assert_eq!(sink.get_published().len(), 1 + 3 * 5);
    }
}
