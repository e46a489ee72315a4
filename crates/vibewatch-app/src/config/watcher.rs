//! Config file watcher
//!
//! Watches `.vibewatch/` for edits to config.toml and emits
//! `Message::ConfigChanged` with debouncing, so runtime configuration
//! changes take effect on the next evaluation without a restart.

use std::path::PathBuf;
use std::time::Duration;

use notify::RecursiveMode;
use notify_debouncer_full::{new_debouncer, DebounceEventResult};
use tokio::sync::mpsc;

use vibewatch_core::prelude::*;

use crate::message::Message;

/// Debounce duration for config edits (editors often write twice)
const DEBOUNCE: Duration = Duration::from_millis(500);

/// Watches the config directory and reports changes as messages.
pub struct ConfigWatcher {
    /// Directory being watched (`.vibewatch/`)
    config_dir: PathBuf,
    /// Handle to stop the watcher
    stop_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl ConfigWatcher {
    pub fn new(config_dir: PathBuf) -> Self {
        Self {
            config_dir,
            stop_tx: None,
        }
    }

    /// Start watching. Sends `Message::ConfigChanged` on relevant edits.
    pub fn start(&mut self, message_tx: mpsc::Sender<Message>) -> Result<()> {
        if self.stop_tx.is_some() {
            return Err(Error::config("Config watcher is already running"));
        }

        let config_dir = self.config_dir.clone();
        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel();
        self.stop_tx = Some(stop_tx);

        // The notify backend is blocking; park it on the blocking pool
        tokio::task::spawn_blocking(move || {
            Self::run_watcher(config_dir, message_tx, stop_rx);
        });

        Ok(())
    }

    /// Stop the watcher. No messages are delivered after this returns.
    pub fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }

    pub fn is_running(&self) -> bool {
        self.stop_tx.is_some()
    }

    fn run_watcher(
        config_dir: PathBuf,
        message_tx: mpsc::Sender<Message>,
        mut stop_rx: tokio::sync::oneshot::Receiver<()>,
    ) {
        let tx_clone = message_tx.clone();

        let debouncer_result = new_debouncer(
            DEBOUNCE,
            None, // No tick rate override
            move |result: DebounceEventResult| match result {
                Ok(events) => {
                    // Only .toml edits count; ignore our own .tmp writes
                    let relevant = events.iter().any(|event| {
                        event.paths.iter().any(|path| {
                            path.extension().and_then(|ext| ext.to_str()) == Some("toml")
                        })
                    });

                    if relevant {
                        debug!("Config file changed");
                        let _ = tx_clone.blocking_send(Message::ConfigChanged);
                    }
                }
                Err(errors) => {
                    for error in errors {
                        warn!("Config watcher error: {:?}", error);
                    }
                }
            },
        );

        let mut debouncer = match debouncer_result {
            Ok(d) => d,
            Err(e) => {
                warn!("Failed to create config watcher: {}", e);
                return;
            }
        };

        if !config_dir.exists() {
            debug!("Config dir does not exist yet: {:?}", config_dir);
            // Still poll the stop channel so the task exits cleanly
        } else if let Err(e) = debouncer.watch(&config_dir, RecursiveMode::NonRecursive) {
            warn!("Failed to watch {:?}: {}", config_dir, e);
        } else {
            info!("Watching config: {:?}", config_dir);
        }

        // Keep running until stop signal
        loop {
            match stop_rx.try_recv() {
                Ok(()) | Err(tokio::sync::oneshot::error::TryRecvError::Closed) => {
                    info!("Config watcher stopping");
                    break;
                }
                Err(tokio::sync::oneshot::error::TryRecvError::Empty) => {
                    std::thread::sleep(Duration::from_millis(100));
                }
            }
        }
    }
}

impl Drop for ConfigWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}
