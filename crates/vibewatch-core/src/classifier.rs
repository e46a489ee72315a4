//! Command-line classification
//!
//! Decides whether an arbitrary shell command line is a test invocation.
//! The pattern list is deliberately over-inclusive; a missed test run is
//! worse than an extra sound.

use regex::Regex;
use std::sync::LazyLock;

/// Patterns that identify test commands across ecosystems.
///
/// Each pattern is tested against the lower-cased, trimmed command line.
const TEST_COMMAND_PATTERNS: &[&str] = &[
    // JavaScript / TypeScript
    r"\b(jest|vitest|mocha|ava|jasmine|karma)\b",
    r"\bnpx?\s+(test|jest|vitest|mocha)\b",
    r"\byarn\s+test\b",
    r"\bpnpm\s+test\b",
    r"\bbun\s+test\b",
    // Python
    r"\b(pytest|unittest|nose2)\b",
    r"\bpython\S*\s+-m\s+(pytest|unittest)\b",
    // Rust
    r"\bcargo\s+test\b",
    // Go
    r"\bgo\s+test\b",
    // Dart / Flutter
    r"\b(dart|flutter)\s+test\b",
    // .NET
    r"\bdotnet\s+test\b",
    // Java / JVM
    r"\b(mvn|maven)\s+(test|verify)\b",
    r"\bgradlew?\s+(test|check)\b",
    // Ruby
    r"\b(rspec|minitest)\b",
    r"\brake\s+test\b",
    r"\brails\s+test\b",
    // PHP
    r"\bphpunit\b",
    r"\bcomposer\s+test\b",
    // Elixir
    r"\bmix\s+test\b",
    // Swift
    r"\bswift\s+test\b",
    // C / C++
    r"\bctest\b",
    // Generic
    r"\bmake\s+test\b",
    r"\bnpm\s+test\b",
];

static COMPILED_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    TEST_COMMAND_PATTERNS
        .iter()
        .map(|p| Regex::new(p).expect("Invalid test command pattern"))
        .collect()
});

/// Check whether a command line is a test invocation.
///
/// Pure and infallible: an unrecognized command is simply "not a test",
/// never an error.
pub fn is_test_command(command_line: &str) -> bool {
    let normalized = command_line.trim().to_lowercase();
    COMPILED_PATTERNS.iter().any(|re| re.is_match(&normalized))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognizes_common_test_runners() {
        assert!(is_test_command("cargo test"));
        assert!(is_test_command("cargo test --workspace -- --nocapture"));
        assert!(is_test_command("go test ./..."));
        assert!(is_test_command("pytest -k foo"));
        assert!(is_test_command("python3 -m pytest tests/"));
        assert!(is_test_command("npm test"));
        assert!(is_test_command("yarn test --watch"));
        assert!(is_test_command("npx jest src/"));
        assert!(is_test_command("flutter test"));
        assert!(is_test_command("dotnet test MySolution.sln"));
        assert!(is_test_command("mvn verify"));
        assert!(is_test_command("./gradlew check"));
        assert!(is_test_command("bundle exec rspec spec/models"));
        assert!(is_test_command("mix test"));
        assert!(is_test_command("swift test"));
        assert!(is_test_command("ctest --output-on-failure"));
        assert!(is_test_command("make test"));
    }

    #[test]
    fn test_normalizes_case_and_whitespace() {
        assert!(is_test_command("  CARGO TEST  "));
        assert!(is_test_command("Pytest"));
    }

    #[test]
    fn test_rejects_unrelated_commands() {
        assert!(!is_test_command("ls -la"));
        assert!(!is_test_command("git commit -m 'fix tests'"));
        assert!(!is_test_command("cargo build"));
        assert!(!is_test_command("go build ./..."));
        assert!(!is_test_command("npm install"));
        assert!(!is_test_command(""));
    }

    #[test]
    fn test_requires_word_boundaries() {
        // "test" embedded in other tokens must not match
        assert!(!is_test_command("cargo testament"));
        assert!(!is_test_command("echo pytester"));
        assert!(!is_test_command("vim attestation.md"));
    }

    #[test]
    fn test_runner_anywhere_in_pipeline() {
        // Over-inclusive on purpose: a runner token anywhere counts
        assert!(is_test_command("cd app && cargo test && cd .."));
        assert!(is_test_command("env RUST_LOG=debug cargo test"));
    }
}
