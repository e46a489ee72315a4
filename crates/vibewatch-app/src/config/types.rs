//! Configuration types for vibewatch

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Application settings (.vibewatch/config.toml)
///
/// Every field has a default so partial config files work: users can set
/// just `cooldown_ms = 10000` and keep everything else stock.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    /// Master switch for failure feedback
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Minimum interval between two fired failure feedbacks, in milliseconds
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,

    /// Show a failure notification line alongside the sound
    #[serde(default = "default_true")]
    pub show_notifications: bool,

    /// Render the vibe status line
    #[serde(default = "default_true")]
    pub show_status_bar: bool,

    /// Custom sound file; `None` plays the bundled default
    #[serde(default)]
    pub sound_path: Option<PathBuf>,

    /// Playback volume, 0.0 to 1.0
    #[serde(default = "default_volume")]
    pub volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            cooldown_ms: default_cooldown_ms(),
            show_notifications: true,
            show_status_bar: true,
            sound_path: None,
            volume: default_volume(),
        }
    }
}

impl Settings {
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }
}

fn default_cooldown_ms() -> u64 {
    3000
}

fn default_volume() -> f32 {
    1.0
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.enabled);
        assert_eq!(settings.cooldown_ms, 3000);
        assert!(settings.show_notifications);
        assert!(settings.show_status_bar);
        assert_eq!(settings.sound_path, None);
        assert_eq!(settings.volume, 1.0);
    }

    #[test]
    fn test_partial_file_picks_up_field_defaults() {
        let settings: Settings = toml::from_str("cooldown_ms = 10000").unwrap();
        assert_eq!(settings.cooldown_ms, 10000);
        assert!(settings.enabled);
        assert_eq!(settings.volume, 1.0);
    }

    #[test]
    fn test_full_file_round_trip() {
        let settings = Settings {
            enabled: false,
            cooldown_ms: 500,
            show_notifications: false,
            show_status_bar: true,
            sound_path: Some(PathBuf::from("/tmp/horn.wav")),
            volume: 0.4,
        };

        let serialized = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_cooldown_duration() {
        let settings = Settings::default();
        assert_eq!(settings.cooldown(), Duration::from_millis(3000));
    }
}
