//! Message types for the application (TEA pattern)

use vibewatch_core::RawEvent;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Completion event from the editor/shell integration
    Event(RawEvent),

    /// Tick event for periodic updates (vibe auto-reset, notice expiry)
    Tick,

    /// Config file changed on disk (debounced)
    ConfigChanged,

    /// The integration stream hit EOF; keep running on keys and timers
    EventSourceClosed,

    /// Sound playback failed; surface a non-fatal message
    PlaybackFailed { reason: String },

    /// Quit the application
    Quit,
}
