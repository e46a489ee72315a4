//! Application error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Playback Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Sound file not found: {path}")]
    SoundFileNotFound { path: PathBuf },

    #[error("No audio player found. Install pulseaudio-utils, alsa-utils, or ffmpeg.")]
    NoPlayer,

    #[error("Unsupported platform for sound playback: {os}")]
    UnsupportedPlatform { os: String },

    #[error("Failed to spawn audio player: {reason}")]
    PlayerSpawn { reason: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },

    #[error("Channel closed unexpectedly")]
    ChannelClosed,
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn terminal_init(message: impl Into<String>) -> Self {
        Self::TerminalInit(message.into())
    }

    pub fn sound_file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::SoundFileNotFound { path: path.into() }
    }

    pub fn unsupported_platform(os: impl Into<String>) -> Self {
        Self::UnsupportedPlatform { os: os.into() }
    }

    pub fn player_spawn(reason: impl Into<String>) -> Self {
        Self::PlayerSpawn {
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error.
    ///
    /// Playback failures are the canonical case: the user gets a message,
    /// the throttle and vibe state stay consistent, the process keeps going.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::SoundFileNotFound { .. }
                | Error::NoPlayer
                | Error::UnsupportedPlatform { .. }
                | Error::PlayerSpawn { .. }
                | Error::Config { .. }
                | Error::ConfigInvalid { .. }
                | Error::ChannelSend { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::TerminalInit(_) | Error::ChannelClosed)
    }
}
