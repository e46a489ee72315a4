//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use vibewatch_core::prelude::*;
use vibewatch_core::{map_event, RawEvent, TestOutcome, ThrottleDecision};

use crate::config;
use crate::message::Message;
use crate::notify;
use crate::state::{AppState, NoticeKind};

use super::{keys, UpdateAction, UpdateResult};

/// Process a message and update state.
/// Returns optional follow-up message and/or action.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    update_at(state, message, Instant::now())
}

/// Clock-injected variant of [`update`]. All time-dependent decisions
/// (throttle, vibe auto-reset, notice expiry) key off `now`.
pub(crate) fn update_at(state: &mut AppState, message: Message, now: Instant) -> UpdateResult {
    match message {
        Message::Quit => {
            state.should_quit = true;
            UpdateResult::none()
        }

        Message::Key(key) => keys::handle_key(state, key, now),

        Message::Event(event) => handle_event(state, event, now),

        Message::Tick => {
            state.vibe.on_tick(now);
            state.expire_notice(now);
            UpdateResult::none()
        }

        Message::ConfigChanged => {
            let settings = config::load_settings(&state.project_root);
            if settings != state.settings {
                info!("Settings reloaded from config file");
                state.apply_settings(settings);
            }
            UpdateResult::none()
        }

        Message::EventSourceClosed => {
            info!("Event source closed; continuing on keys and timers");
            state.event_source_closed = true;
            UpdateResult::none()
        }

        Message::PlaybackFailed { reason } => {
            warn!("Sound playback failed: {}", reason);
            state.set_notice(NoticeKind::Error, format!("vibewatch: {}", reason), now);
            UpdateResult::none()
        }
    }
}

/// Map a completion event to an outcome and react to it
fn handle_event(state: &mut AppState, event: RawEvent, now: Instant) -> UpdateResult {
    let Some(outcome) = map_event(&event) else {
        debug!("Ignoring {}", event.summary());
        return UpdateResult::none();
    };

    if outcome.passed {
        handle_pass(state, outcome)
    } else {
        handle_failure(state, outcome, now)
    }
}

/// Any detected pass, from either event source, shows Passing
fn handle_pass(state: &mut AppState, outcome: TestOutcome) -> UpdateResult {
    debug!("Test run passed: {}", outcome.source);
    state.vibe.set_passing();
    state.last_outcome = Some(outcome);
    UpdateResult::none()
}

/// Failures run the cooldown gate; only a fired signal produces
/// user-visible feedback (vibe, sound, notification)
fn handle_failure(state: &mut AppState, outcome: TestOutcome, now: Instant) -> UpdateResult {
    state.last_outcome = Some(outcome.clone());

    match state.throttle.evaluate(now) {
        ThrottleDecision::Suppressed => {
            debug!("Failure feedback suppressed for: {}", outcome.source);
            UpdateResult::none()
        }
        ThrottleDecision::Fire => {
            info!("Test run failed: {}", outcome.source);
            state.vibe.set_failing(now);

            if state.settings.show_notifications {
                state.set_notice(
                    NoticeKind::Warning,
                    notify::failure_message(&outcome.source),
                    now,
                );
            }

            UpdateResult::action(UpdateAction::PlaySound {
                path: state.settings.sound_path.clone(),
                volume: state.settings.volume,
            })
        }
    }
}
