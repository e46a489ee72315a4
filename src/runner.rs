//! The message loop
//!
//! Single mpsc channel, single consumer: every input source (stdin events,
//! keys, config watcher, timers) funnels into one queue and handlers run to
//! completion before the next message, so throttle and vibe state are never
//! touched concurrently.

use std::path::PathBuf;
use std::time::Duration;

use tokio::sync::{mpsc, watch};

use vibewatch_app::{config, update, AppState, Message, UpdateAction};
use vibewatch_audio::AudioPlayer;
use vibewatch_core::prelude::*;

use crate::event_source;
use crate::frontend;

/// Message channel capacity
const CHANNEL_CAPACITY: usize = 256;

/// Tick cadence when no terminal drives the 50ms poll loop
const HEADLESS_TICK: Duration = Duration::from_millis(250);

/// Run the watcher until quit or fatal error.
pub async fn run(project_root: PathBuf) -> Result<()> {
    info!("Project path: {}", project_root.display());

    // Non-fatal: missing config dir just means defaults
    if let Err(e) = config::init_config_dir(&project_root) {
        warn!("Failed to initialize .vibewatch directory: {}", e);
    }

    let settings = config::load_settings(&project_root);
    let mut state = AppState::with_settings(project_root.clone(), settings);

    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let mut config_watcher = config::ConfigWatcher::new(config::config_dir(&project_root));
    if let Err(e) = config_watcher.start(msg_tx.clone()) {
        warn!("Config watcher unavailable: {}", e);
    }

    event_source::spawn_stdin_reader(msg_tx.clone(), shutdown_rx.clone());

    // A terminal may not exist (integration pipes only); degrade to
    // headless: no keys, no status line, but timers still advance.
    let mut terminal = match frontend::Terminal::init() {
        Ok(t) => Some(t),
        Err(e) => {
            warn!("No interactive terminal, running headless: {}", e);
            None
        }
    };

    if terminal.is_some() {
        frontend::spawn_key_poller(msg_tx.clone(), shutdown_rx.clone());
    } else {
        spawn_headless_ticker(msg_tx.clone(), shutdown_rx.clone());
    }

    let mut player = AudioPlayer::new();

    if terminal.is_some() {
        let _ = frontend::render(&state);
    }

    while let Some(message) = msg_rx.recv().await {
        let mut result = update(&mut state, message);

        // Drain follow-up actions/messages from this handler run
        loop {
            if let Some(action) = result.action.take() {
                perform_action(action, &state, &mut player, &msg_tx);
            }
            match result.message.take() {
                Some(follow_up) => result = update(&mut state, follow_up),
                None => break,
            }
        }

        if state.should_quit {
            break;
        }

        if terminal.is_some() {
            if let Err(e) = frontend::render(&state) {
                warn!("Render failed: {}", e);
            }
        }
    }

    // Teardown: stop every input source before dropping state so nothing
    // fires after this point
    let _ = shutdown_tx.send(true);
    config_watcher.stop();
    player.stop();
    if let Some(terminal) = terminal.as_mut() {
        terminal.restore();
    }

    info!("vibewatch stopped");
    Ok(())
}

/// Perform a side effect requested by the update function
fn perform_action(
    action: UpdateAction,
    state: &AppState,
    player: &mut AudioPlayer,
    msg_tx: &mpsc::Sender<Message>,
) {
    match action {
        UpdateAction::PlaySound { path, volume } => {
            if let Err(e) = player.play(path.as_deref(), volume) {
                // Throttle and vibe state stay as they are; just report
                let _ = msg_tx.try_send(Message::PlaybackFailed {
                    reason: e.to_string(),
                });
            }
        }

        UpdateAction::SaveSettings => {
            if let Err(e) = config::save_settings(&state.project_root, &state.settings) {
                warn!("Failed to save settings: {}", e);
            }
        }
    }
}

/// Tick generator for headless runs
fn spawn_headless_ticker(message_tx: mpsc::Sender<Message>, shutdown_rx: watch::Receiver<bool>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(HEADLESS_TICK);
        loop {
            interval.tick().await;
            if *shutdown_rx.borrow() {
                return;
            }
            if message_tx.send(Message::Tick).await.is_err() {
                return;
            }
        }
    });
}
