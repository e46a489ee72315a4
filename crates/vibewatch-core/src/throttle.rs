//! Feedback throttle - cooldown gate between failure signals and feedback
//!
//! Repeated failures inside the cooldown window are suppressed. Suppression
//! is normal, expected behavior, not an error.

use std::time::{Duration, Instant};

/// Default minimum interval between two fired failure feedbacks
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(3000);

/// Outcome of one throttle evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleDecision {
    /// Trigger the audible + visual feedback now
    Fire,
    /// Stay quiet; a feedback fired too recently (or feedback is disabled)
    Suppressed,
}

/// Stateful cooldown gate for failure feedback.
///
/// The clock is injected: callers pass `now` into [`evaluate`](Self::evaluate).
/// `last_fired_at` only ever moves forward, and only on a `Fire` decision.
#[derive(Debug, Clone)]
pub struct FeedbackThrottle {
    last_fired_at: Option<Instant>,
    cooldown: Duration,
    enabled: bool,
}

impl Default for FeedbackThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}

impl FeedbackThrottle {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            last_fired_at: None,
            cooldown,
            enabled: true,
        }
    }

    /// Decide whether a failure signal arriving at `now` should fire feedback.
    ///
    /// Disabled throttles always suppress and mutate nothing. Otherwise the
    /// signal fires when no feedback has fired yet, or when at least the
    /// cooldown has elapsed since the last fire; firing advances the
    /// reference time to `now`.
    pub fn evaluate(&mut self, now: Instant) -> ThrottleDecision {
        if !self.enabled {
            return ThrottleDecision::Suppressed;
        }

        if let Some(last) = self.last_fired_at {
            // saturates to zero if a caller hands us a stale `now`,
            // which keeps last_fired_at monotonically non-decreasing
            if now.duration_since(last) < self.cooldown {
                return ThrottleDecision::Suppressed;
            }
        }

        self.last_fired_at = Some(now);
        ThrottleDecision::Fire
    }

    /// Enable or disable feedback. An explicit user action; the cooldown
    /// reference time is deliberately left untouched.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Reconfigure the cooldown. Takes effect on the next evaluation.
    pub fn set_cooldown(&mut self, cooldown: Duration) {
        self.cooldown = cooldown;
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    pub fn last_fired_at(&self) -> Option<Instant> {
        self.last_fired_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_failure_fires() {
        let mut throttle = FeedbackThrottle::new(Duration::from_millis(3000));
        let now = Instant::now();
        assert_eq!(throttle.evaluate(now), ThrottleDecision::Fire);
        assert_eq!(throttle.last_fired_at(), Some(now));
    }

    #[test]
    fn test_suppressed_inside_cooldown() {
        let mut throttle = FeedbackThrottle::new(Duration::from_millis(3000));
        let t0 = Instant::now();

        assert_eq!(throttle.evaluate(t0), ThrottleDecision::Fire);
        assert_eq!(
            throttle.evaluate(t0 + Duration::from_millis(2999)),
            ThrottleDecision::Suppressed
        );
        // Suppression must not advance the reference time
        assert_eq!(throttle.last_fired_at(), Some(t0));
    }

    #[test]
    fn test_fires_at_cooldown_boundary_and_advances() {
        let mut throttle = FeedbackThrottle::new(Duration::from_millis(3000));
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_millis(3000);

        assert_eq!(throttle.evaluate(t0), ThrottleDecision::Fire);
        assert_eq!(throttle.evaluate(t1), ThrottleDecision::Fire);
        assert_eq!(throttle.last_fired_at(), Some(t1));

        // The new reference time is t1, so t1 + 2999ms is again suppressed
        assert_eq!(
            throttle.evaluate(t1 + Duration::from_millis(2999)),
            ThrottleDecision::Suppressed
        );
    }

    #[test]
    fn test_disabled_always_suppresses_without_mutating() {
        let mut throttle = FeedbackThrottle::new(Duration::from_millis(3000));
        throttle.set_enabled(false);

        let now = Instant::now();
        assert_eq!(throttle.evaluate(now), ThrottleDecision::Suppressed);
        assert_eq!(
            throttle.evaluate(now + Duration::from_secs(60)),
            ThrottleDecision::Suppressed
        );
        assert_eq!(throttle.last_fired_at(), None);
    }

    #[test]
    fn test_toggle_does_not_reset_reference_time() {
        let mut throttle = FeedbackThrottle::new(Duration::from_millis(3000));
        let t0 = Instant::now();
        assert_eq!(throttle.evaluate(t0), ThrottleDecision::Fire);

        throttle.set_enabled(false);
        throttle.set_enabled(true);

        assert_eq!(throttle.last_fired_at(), Some(t0));
        // Still inside the original cooldown window
        assert_eq!(
            throttle.evaluate(t0 + Duration::from_millis(1000)),
            ThrottleDecision::Suppressed
        );
    }

    #[test]
    fn test_cooldown_change_applies_on_next_evaluation() {
        let mut throttle = FeedbackThrottle::new(Duration::from_millis(3000));
        let t0 = Instant::now();
        assert_eq!(throttle.evaluate(t0), ThrottleDecision::Fire);

        throttle.set_cooldown(Duration::from_millis(500));
        assert_eq!(
            throttle.evaluate(t0 + Duration::from_millis(600)),
            ThrottleDecision::Fire
        );
    }

    #[test]
    fn test_stale_now_is_suppressed_not_rewound() {
        let mut throttle = FeedbackThrottle::new(Duration::from_millis(3000));
        let t0 = Instant::now();
        let later = t0 + Duration::from_secs(10);

        assert_eq!(throttle.evaluate(later), ThrottleDecision::Fire);
        // An earlier timestamp can never rewind the reference time
        assert_eq!(throttle.evaluate(t0), ThrottleDecision::Suppressed);
        assert_eq!(throttle.last_fired_at(), Some(later));
    }
}
