//! # vibewatch-core - Core Domain Types
//!
//! Foundation crate for vibewatch. Provides the test-run detection pipeline:
//! event definitions, the command-line classifier, outcome mapping, the
//! feedback throttle, and the vibe state machine.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Events (`events`)
//! - [`RawEvent`] - Completion events from the editor/shell integration
//! - [`ShellExecutionEnded`], [`TaskProcessEnded`] - The two event shapes
//!
//! ### Classification (`classifier`)
//! - [`is_test_command()`] - Decide whether a command line is a test run
//!
//! ### Outcomes (`outcome`)
//! - [`TestOutcome`] - Normalized pass/fail signal with a source label
//! - [`map_event()`] - Turn a raw event into an outcome (or nothing)
//!
//! ### Feedback gating (`throttle`)
//! - [`FeedbackThrottle`] - Cooldown gate between failure signals and feedback
//! - [`ThrottleDecision`] - Fire or Suppressed
//!
//! ### Visual state (`vibe`)
//! - [`Vibe`] - Three-valued mood indicator (Unknown/Passing/Failing)
//! - [`VibeState`] - State machine with auto-expiring Failing state
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`

pub mod classifier;
pub mod error;
pub mod events;
pub mod logging;
pub mod outcome;
pub mod throttle;
pub mod vibe;

/// Prelude for common imports used throughout all vibewatch crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use classifier::is_test_command;
pub use error::{Error, Result};
pub use events::{RawEvent, ShellExecutionEnded, TaskProcessEnded};
pub use outcome::{map_event, TestOutcome};
pub use throttle::{FeedbackThrottle, ThrottleDecision, DEFAULT_COOLDOWN};
pub use vibe::{Vibe, VibeState, FAILING_RESET_AFTER};
