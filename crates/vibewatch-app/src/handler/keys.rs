//! Key event handlers

use std::time::Instant;

use vibewatch_core::prelude::*;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, NoticeKind};

use super::{UpdateAction, UpdateResult};

pub(crate) fn handle_key(state: &mut AppState, key: InputKey, now: Instant) -> UpdateResult {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') | InputKey::Esc => {
            UpdateResult::message(Message::Quit)
        }

        // Toggle failure feedback; the new state persists to the config file
        InputKey::Char('m') => toggle_enabled(state, now),

        // Preview the sound, bypassing the throttle entirely
        InputKey::Char('p') => {
            info!("Sound preview requested");
            UpdateResult::action(UpdateAction::PlaySound {
                path: state.settings.sound_path.clone(),
                volume: state.settings.volume,
            })
        }

        _ => UpdateResult::none(),
    }
}

fn toggle_enabled(state: &mut AppState, now: Instant) -> UpdateResult {
    let enabled = !state.settings.enabled;
    state.settings.enabled = enabled;
    state.throttle.set_enabled(enabled);

    let text = if enabled {
        "vibewatch armed. No mercy."
    } else {
        "vibewatch muted. Your tests can fail in peace."
    };
    info!("Feedback {}", if enabled { "enabled" } else { "disabled" });
    state.set_notice(NoticeKind::Info, text.to_string(), now);

    UpdateResult::action(UpdateAction::SaveSettings)
}
