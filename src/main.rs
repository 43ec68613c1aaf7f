//! # PTZ Teleop
//!
//! Drive a pan-tilt-zoom camera with a six-axis joystick.
//!
//! Reads JSON-encoded input frames on stdin, runs the translation loop at
//! the configured rate, and writes channel-tagged JSON command lines on
//! stdout for the camera-side transport adapter.
//!
//! # Control Flow
//!
//! 1. **Initialization**
//!    - Set up logging with tracing subscriber
//!    - Load TOML configuration (built-in defaults if none found)
//!    - Spawn the frame reader feeding the latest-value mailbox
//!
//! 2. **Main Loop**
//!    - Publish the startup baseline command once
//!    - Wait for the first frame, then translate and publish every tick
//!    - Handle Ctrl+C for graceful shutdown
//!
//! # Examples
//!
//! Run against a joystick adapter:
//! ```bash
//! joystick-adapter | ptz-teleop | camera-adapter
//! ```

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use tokio::io::BufReader;
use tracing::{info, warn};

use ptz_teleop::config::Config;
use ptz_teleop::input::{mailbox, reader};
use ptz_teleop::output::JsonLineSink;
use ptz_teleop::teleop::engine::TeleopEngine;
use ptz_teleop::teleop::runner::ControlLoop;

/// Configuration file consulted when no path is given on the command line
const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("PTZ Teleop v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;
    info!(
        "Loop rate {} Hz, manual focus {}",
        config.rate.tick_hz,
        if config.focus.allow_manual {
            "enabled"
        } else {
            "disabled"
        }
    );

    // Frame delivery: reader task fills the mailbox, the loop polls it.
    let (sender, frames) = mailbox::channel();
    tokio::spawn(async move {
        let stdin = BufReader::new(tokio::io::stdin());
        if let Err(e) = reader::read_frames(stdin, sender).await {
            warn!("Frame reader stopped: {}", e);
        }
    });

    let engine = TeleopEngine::new(&config)?;
    let sink = JsonLineSink::new(tokio::io::stdout());
    let period = tick_period(config.rate.tick_hz);
    let control = ControlLoop::new(engine, frames, sink, period);

    info!("Press Ctrl+C to exit");
    control
        .run(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Received Ctrl+C, shutting down...");
        })
        .await?;

    Ok(())
}

/// Loads the configuration file named on the command line, or the default
/// path, falling back to built-in defaults when neither exists.
fn load_config() -> Result<Config> {
    match std::env::args().nth(1) {
        // An explicit path must load.
        Some(path) => {
            info!("Loading configuration from {}", path);
            Ok(Config::load(&path)?)
        }
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            info!("Loading configuration from {}", DEFAULT_CONFIG_PATH);
            Ok(Config::load(DEFAULT_CONFIG_PATH)?)
        }
        None => {
            info!("No {} found, using built-in defaults", DEFAULT_CONFIG_PATH);
            Ok(Config::default())
        }
    }
}

/// Tick period for a loop rate in Hz.
fn tick_period(tick_hz: u32) -> Duration {
    Duration::from_millis(1000 / u64::from(tick_hz))
}
