//! Handler module - TEA update function
//!
//! - `update`: main update() function and message dispatch
//! - `keys`: key event handlers

pub(crate) mod keys;
pub(crate) mod update;


use std::path::PathBuf;

pub use update::update;

/// Side effects the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Start sound playback (fire-and-forget)
    PlaySound {
        /// Custom sound file; `None` plays the bundled default
        path: Option<PathBuf>,
        volume: f32,
    },

    /// Persist current settings to the config file
    SaveSettings,
}

/// Result of one update: optional follow-up message and/or action
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<crate::message::Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: crate::message::Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
