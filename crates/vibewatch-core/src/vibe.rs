//! Vibe state machine - the visual mood indicator
//!
//! `Failing` auto-expires back to `Unknown` after a fixed delay so the
//! indicator doesn't stay red forever. Expiry is deadline-based: the event
//! loop calls [`VibeState::on_tick`] with the current time rather than
//! scheduling a real timer.

use std::time::{Duration, Instant};

/// How long `Failing` persists before auto-resetting to `Unknown`
pub const FAILING_RESET_AFTER: Duration = Duration::from_secs(30);

/// Current visual state of the indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Vibe {
    #[default]
    Unknown,
    Passing,
    Failing,
}

impl Vibe {
    /// Display label for the status line
    pub fn label(&self) -> &'static str {
        match self {
            Vibe::Unknown => "Vibes: unknown",
            Vibe::Passing => "Vibes: immaculate",
            Vibe::Failing => "Vibes: RANCID",
        }
    }

    /// Indicator glyph shown before the label
    pub fn icon(&self) -> &'static str {
        match self {
            Vibe::Unknown => "?",
            Vibe::Passing => "✓",
            Vibe::Failing => "✗",
        }
    }

    /// Only `Failing` gets alert styling
    pub fn is_alert(&self) -> bool {
        matches!(self, Vibe::Failing)
    }
}

/// State machine behind the indicator.
///
/// Holds the current [`Vibe`] and at most one pending reset deadline.
/// Entering `Failing` replaces any prior deadline; entering `Passing`
/// clears it (no auto-reset from Passing).
#[derive(Debug, Clone, Default)]
pub struct VibeState {
    vibe: Vibe,
    reset_at: Option<Instant>,
}

impl VibeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vibe(&self) -> Vibe {
        self.vibe
    }

    /// Move to `Failing` and (re)arm the auto-reset deadline.
    pub fn set_failing(&mut self, now: Instant) {
        self.vibe = Vibe::Failing;
        self.reset_at = Some(now + FAILING_RESET_AFTER);
    }

    /// Move to `Passing` and cancel any pending auto-reset.
    pub fn set_passing(&mut self) {
        self.vibe = Vibe::Passing;
        self.reset_at = None;
    }

    /// Apply the auto-reset if its deadline has been reached.
    ///
    /// Returns `true` when the vibe changed, so callers know to re-render.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        match self.reset_at {
            Some(deadline) if now >= deadline => {
                self.vibe = Vibe::Unknown;
                self.reset_at = None;
                true
            }
            _ => false,
        }
    }

    /// Time until the pending auto-reset, if one is armed.
    /// Useful for event loop sleep timing.
    pub fn time_until_reset(&self, now: Instant) -> Option<Duration> {
        self.reset_at.map(|d| d.saturating_duration_since(now))
    }

    pub fn has_pending_reset(&self) -> bool {
        self.reset_at.is_some()
    }
}
