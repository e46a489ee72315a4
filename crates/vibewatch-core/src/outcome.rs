//! Outcome mapping - heterogeneous completion events to one pass/fail signal

use crate::classifier::is_test_command;
use crate::events::RawEvent;

/// Normalized result of one detected test run.
///
/// `source` is the raw command line for terminal executions and the task's
/// declared name for task completions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestOutcome {
    pub source: String,
    pub passed: bool,
}

/// Map a completion event to a test outcome, if it represents one.
///
/// Terminal executions count when the command line classifies as a test run;
/// task completions count when the task belongs to the Test task group.
/// An absent exit code is a non-event -- the run is still in flight or the
/// code is unknowable, and must never be read as pass or fail.
pub fn map_event(event: &RawEvent) -> Option<TestOutcome> {
    match event {
        RawEvent::ShellExecutionEnded(e) => {
            if !is_test_command(&e.command_line) {
                return None;
            }
            let code = e.exit_code?;
            Some(TestOutcome {
                source: e.command_line.clone(),
                passed: code == 0,
            })
        }
        RawEvent::TaskProcessEnded(e) => {
            if !e.is_test_group {
                return None;
            }
            let code = e.exit_code?;
            Some(TestOutcome {
                source: e.task_name.clone(),
                passed: code == 0,
            })
        }
        RawEvent::Unknown { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{ShellExecutionEnded, TaskProcessEnded};

    fn shell(command_line: &str, exit_code: Option<i32>) -> RawEvent {
        RawEvent::ShellExecutionEnded(ShellExecutionEnded {
            command_line: command_line.to_string(),
            exit_code,
        })
    }

    fn task(task_name: &str, is_test_group: bool, exit_code: Option<i32>) -> RawEvent {
        RawEvent::TaskProcessEnded(TaskProcessEnded {
            task_name: task_name.to_string(),
            is_test_group,
            exit_code,
        })
    }

    #[test]
    fn test_shell_exit_zero_is_pass() {
        let outcome = map_event(&shell("cargo test", Some(0))).expect("is a test run");
        assert_eq!(outcome.source, "cargo test");
        assert!(outcome.passed);
    }

    #[test]
    fn test_shell_nonzero_exit_is_fail() {
        let outcome = map_event(&shell("cargo test", Some(1))).expect("is a test run");
        assert!(!outcome.passed);

        // Any non-zero code, not just 1
        let outcome = map_event(&shell("pytest", Some(101))).expect("is a test run");
        assert!(!outcome.passed);
    }

    #[test]
    fn test_shell_missing_exit_code_emits_nothing() {
        assert_eq!(map_event(&shell("cargo test", None)), None);
    }

    #[test]
    fn test_shell_non_test_command_emits_nothing() {
        assert_eq!(map_event(&shell("git commit", Some(1))), None);
        assert_eq!(map_event(&shell("ls -la", Some(0))), None);
    }

    #[test]
    fn test_task_in_test_group_maps_by_exit_code() {
        let outcome = map_event(&task("unit tests", true, Some(0))).expect("test group task");
        assert_eq!(outcome.source, "unit tests");
        assert!(outcome.passed);

        let outcome = map_event(&task("unit tests", true, Some(2))).expect("test group task");
        assert!(!outcome.passed);
    }

    #[test]
    fn test_task_outside_test_group_emits_nothing() {
        // The task name is irrelevant; only the group signal counts
        assert_eq!(map_event(&task("run all tests", false, Some(1))), None);
        assert_eq!(map_event(&task("build", false, Some(0))), None);
    }

    #[test]
    fn test_task_missing_exit_code_emits_nothing() {
        assert_eq!(map_event(&task("unit tests", true, None)), None);
    }

    #[test]
    fn test_unknown_event_emits_nothing() {
        let event = RawEvent::Unknown {
            event: "window.focusChanged".to_string(),
            params: serde_json::Value::Null,
        };
        assert_eq!(map_event(&event), None);
    }
}
