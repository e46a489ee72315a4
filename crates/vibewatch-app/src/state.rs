//! Application state (Model in TEA pattern)

use std::path::PathBuf;
use std::time::{Duration, Instant};

use vibewatch_core::{FeedbackThrottle, TestOutcome, VibeState};

use crate::config::Settings;

/// How long a notice line stays on screen
pub const NOTICE_TTL: Duration = Duration::from_secs(10);

/// Severity of a transient notice line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// A transient one-line message for the frontend (failure notifications,
/// toggle confirmations, playback errors)
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    expires_at: Instant,
}

/// The application model
#[derive(Debug)]
pub struct AppState {
    /// Project the tool was started in (config lives here)
    pub project_root: PathBuf,

    /// Current settings (kept in sync with the config file)
    pub settings: Settings,

    /// Cooldown gate for failure feedback
    pub throttle: FeedbackThrottle,

    /// Visual mood indicator
    pub vibe: VibeState,

    /// Most recent detected outcome, shown in the status line
    pub last_outcome: Option<TestOutcome>,

    /// Transient message line, if any
    pub notice: Option<Notice>,

    /// The integration stream hit EOF
    pub event_source_closed: bool,

    /// Set when the user asked to quit
    pub should_quit: bool,
}

impl AppState {
    pub fn new(project_root: PathBuf) -> Self {
        Self::with_settings(project_root, Settings::default())
    }

    pub fn with_settings(project_root: PathBuf, settings: Settings) -> Self {
        let mut throttle = FeedbackThrottle::new(settings.cooldown());
        throttle.set_enabled(settings.enabled);

        Self {
            project_root,
            settings,
            throttle,
            vibe: VibeState::new(),
            last_outcome: None,
            notice: None,
            event_source_closed: false,
            should_quit: false,
        }
    }

    /// Replace settings and propagate to the throttle.
    ///
    /// The throttle's reference time survives: reconfiguration never grants
    /// a free bypass of an active cooldown.
    pub fn apply_settings(&mut self, settings: Settings) {
        self.throttle.set_cooldown(settings.cooldown());
        self.throttle.set_enabled(settings.enabled);
        self.settings = settings;
    }

    /// Show a notice line; replaces any current one
    pub fn set_notice(&mut self, kind: NoticeKind, text: String, now: Instant) {
        self.notice = Some(Notice {
            kind,
            text,
            expires_at: now + NOTICE_TTL,
        });
    }

    /// Drop the notice once its time is up. Returns true if it was cleared.
    pub fn expire_notice(&mut self, now: Instant) -> bool {
        match &self.notice {
            Some(notice) if now >= notice.expires_at => {
                self.notice = None;
                true
            }
            _ => false,
        }
    }
}
