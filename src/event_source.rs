//! Stdin event source
//!
//! The editor/shell integration pipes completion events into vibewatch as
//! JSON lines (see `RawEvent::parse` for the shapes). This module reads
//! stdin line by line and forwards parsed events as messages.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use vibewatch_app::Message;
use vibewatch_core::prelude::*;
use vibewatch_core::RawEvent;

/// Spawn the stdin reader task.
///
/// Sends `Message::Event` per parsed line and `Message::EventSourceClosed`
/// on EOF. A shutdown signal stops the task without draining the rest of
/// the stream; no messages are delivered after shutdown.
pub fn spawn_stdin_reader(
    message_tx: mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            tokio::select! {
                line = lines.next_line() => match line {
                    Ok(Some(line)) => {
                        let line = line.trim();
                        if line.is_empty() {
                            continue;
                        }
                        match RawEvent::parse(line) {
                            Some(event) => {
                                trace!("Event: {}", event.summary());
                                if message_tx.send(Message::Event(event)).await.is_err() {
                                    // Receiver gone; the loop is shutting down
                                    return;
                                }
                            }
                            None => debug!("Ignoring malformed event line: {}", line),
                        }
                    }
                    Ok(None) => {
                        info!("Event source reached EOF");
                        let _ = message_tx.send(Message::EventSourceClosed).await;
                        return;
                    }
                    Err(e) => {
                        warn!("Error reading event source: {}", e);
                        let _ = message_tx.send(Message::EventSourceClosed).await;
                        return;
                    }
                },
                _ = shutdown_rx.changed() => {
                    if *shutdown_rx.borrow() {
                        debug!("Stdin reader stopping");
                        return;
                    }
                }
            }
        }
    })
}
