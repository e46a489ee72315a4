//! Terminal frontend
//!
//! Key polling plus the one-line vibe status display. vibewatch may run with
//! stdin piped from an integration, so crossterm's tty-backed input is what
//! makes interactive keys work alongside the event stream.

use std::io::stdout;
use std::time::Duration;

use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::execute;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use vibewatch_app::{AppState, InputKey, Message, NoticeKind};
use vibewatch_core::prelude::*;
use vibewatch_core::Vibe;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        _ => None, // Unsupported keys ignored
    }
}

/// Spawn the blocking key poller.
///
/// Polls with a 50ms timeout; timeouts become `Message::Tick`, so the vibe
/// auto-reset and notice expiry advance even when nothing happens.
pub fn spawn_key_poller(
    message_tx: mpsc::Sender<Message>,
    shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        loop {
            if *shutdown_rx.borrow() {
                debug!("Key poller stopping");
                return;
            }

            let message = match event::poll(Duration::from_millis(50)) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind == event::KeyEventKind::Press => {
                        key_event_to_input(key).map(Message::Key)
                    }
                    Ok(_) => None,
                    Err(e) => {
                        warn!("Terminal event read failed: {}", e);
                        return;
                    }
                },
                Ok(false) => Some(Message::Tick),
                Err(e) => {
                    warn!("Terminal event poll failed: {}", e);
                    return;
                }
            };

            if let Some(message) = message {
                if message_tx.blocking_send(message).is_err() {
                    return;
                }
            }
        }
    })
}

/// Raw-mode guard. Restores the terminal on drop, panics included.
pub struct Terminal {
    active: bool,
}

impl Terminal {
    pub fn init() -> Result<Self> {
        terminal::enable_raw_mode().map_err(|e| Error::terminal_init(e.to_string()))?;
        execute!(stdout(), cursor::Hide).map_err(|e| Error::terminal_init(e.to_string()))?;
        Ok(Self { active: true })
    }

    pub fn restore(&mut self) {
        if self.active {
            self.active = false;
            let _ = execute!(stdout(), Clear(ClearType::CurrentLine), cursor::Show);
            let _ = terminal::disable_raw_mode();
            println!();
        }
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        self.restore();
    }
}

fn vibe_color(vibe: Vibe) -> Color {
    match vibe {
        Vibe::Unknown => Color::DarkGrey,
        Vibe::Passing => Color::Green,
        Vibe::Failing => Color::Red,
    }
}

fn notice_color(kind: NoticeKind) -> Color {
    match kind {
        NoticeKind::Info => Color::Cyan,
        NoticeKind::Warning => Color::Yellow,
        NoticeKind::Error => Color::Red,
    }
}

/// Render the status line in place.
///
/// Single line, redrawn after every processed message:
/// `✗ Vibes: RANCID │ cargo test │ 💀 Tests said: nah. (cargo test)`
pub fn render(state: &AppState) -> Result<()> {
    if !state.settings.show_status_bar {
        return Ok(());
    }

    let mut out = stdout();
    let vibe = state.vibe.vibe();

    execute!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))
        .map_err(|e| Error::terminal(e.to_string()))?;

    // Vibe segment; only Failing gets alert styling
    let styled = if vibe.is_alert() {
        execute!(
            out,
            SetForegroundColor(vibe_color(vibe)),
            SetAttribute(Attribute::Bold)
        )
    } else {
        execute!(out, SetForegroundColor(vibe_color(vibe)))
    };
    styled.map_err(|e| Error::terminal(e.to_string()))?;

    execute!(
        out,
        Print(format!(" {} {}", vibe.icon(), vibe.label())),
        SetAttribute(Attribute::Reset),
        ResetColor
    )
    .map_err(|e| Error::terminal(e.to_string()))?;

    // Muted indicator
    if !state.settings.enabled {
        execute!(
            out,
            SetForegroundColor(Color::DarkGrey),
            Print(" (muted)"),
            ResetColor
        )
        .map_err(|e| Error::terminal(e.to_string()))?;
    }

    // Last detected run
    if let Some(outcome) = &state.last_outcome {
        execute!(
            out,
            SetForegroundColor(Color::DarkGrey),
            Print(" │ "),
            ResetColor,
            Print(truncate(&outcome.source, 40))
        )
        .map_err(|e| Error::terminal(e.to_string()))?;
    }

    // Transient notice
    if let Some(notice) = &state.notice {
        execute!(
            out,
            SetForegroundColor(Color::DarkGrey),
            Print(" │ "),
            SetForegroundColor(notice_color(notice.kind)),
            Print(notice.text.clone()),
            ResetColor
        )
        .map_err(|e| Error::terminal(e.to_string()))?;
    }

    Ok(())
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let prefix: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", prefix)
    }
}
