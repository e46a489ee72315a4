//! Completion event definitions and wire parsing
//!
//! The editor/shell integration reports command completions as JSON lines:
//!
//! ```json
//! {"event":"shell.executionEnded","params":{"commandLine":"cargo test","exitCode":1}}
//! {"event":"task.processEnded","params":{"taskName":"unit tests","isTestGroup":true,"exitCode":0}}
//! ```

use serde::{Deserialize, Serialize};

/// A shell execution finished in an integrated terminal
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellExecutionEnded {
    /// The raw command line as typed
    pub command_line: String,
    /// Exit code. `None` means the code is unknowable (still running,
    /// killed by signal, shell integration lost track).
    #[serde(default)]
    pub exit_code: Option<i32>,
}

/// A configured task's process finished
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskProcessEnded {
    /// The task's declared display name
    pub task_name: String,
    /// Whether the task belongs to the environment's Test task group.
    /// This is an orthogonal signal from the task definition, not text matching.
    #[serde(default)]
    pub is_test_group: bool,
    #[serde(default)]
    pub exit_code: Option<i32>,
}

/// Fully typed completion event
#[derive(Debug, Clone)]
pub enum RawEvent {
    ShellExecutionEnded(ShellExecutionEnded),
    TaskProcessEnded(TaskProcessEnded),

    // Fallback for unknown events
    Unknown {
        event: String,
        params: serde_json::Value,
    },
}

impl RawEvent {
    /// Parse a JSON wire line into a typed event.
    ///
    /// Returns `None` for lines that are not event-shaped at all
    /// (malformed JSON, missing `event` key). Unknown event names parse
    /// into [`RawEvent::Unknown`] so new integration versions degrade
    /// gracefully instead of erroring.
    pub fn parse(json: &str) -> Option<Self> {
        let value: serde_json::Value = serde_json::from_str(json).ok()?;

        let event = value.get("event").and_then(|v| v.as_str())?;
        let params = value
            .get("params")
            .cloned()
            .unwrap_or(serde_json::Value::Null);
        Some(Self::parse_event(event, params))
    }

    /// Parse an event by name
    fn parse_event(event: &str, params: serde_json::Value) -> Self {
        match event {
            "shell.executionEnded" => serde_json::from_value(params.clone())
                .map(RawEvent::ShellExecutionEnded)
                .unwrap_or_else(|_| Self::unknown(event, params)),
            "task.processEnded" => serde_json::from_value(params.clone())
                .map(RawEvent::TaskProcessEnded)
                .unwrap_or_else(|_| Self::unknown(event, params)),
            _ => Self::unknown(event, params),
        }
    }

    fn unknown(event: &str, params: serde_json::Value) -> Self {
        RawEvent::Unknown {
            event: event.to_string(),
            params,
        }
    }

    /// Get a human-readable summary
    pub fn summary(&self) -> String {
        match self {
            RawEvent::ShellExecutionEnded(e) => {
                format!("shell `{}` exited {:?}", e.command_line, e.exit_code)
            }
            RawEvent::TaskProcessEnded(e) => {
                format!("task `{}` exited {:?}", e.task_name, e.exit_code)
            }
            RawEvent::Unknown { event, .. } => format!("event: {}", event),
        }
    }
}
