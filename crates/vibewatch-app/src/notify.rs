//! Failure notification text
//!
//! The notification is deliberately unserious. The sound already delivers
//! the bad news; the text just twists the knife a little.

use rand::seq::SliceRandom;

const FAILURE_MESSAGES: &[&str] = &[
    "Your tests are screaming.",
    "Tests said: nah.",
    "This is fine. (It is not fine.)",
    "The suite took one look at that diff and left.",
    "Assertion count: too many. Passing count: not enough.",
    "Your code made the tests sad.",
    "Red bar. Again.",
    "Tests failed. Blame the compiler, see if it helps.",
    "The CI gods demand a sacrifice.",
    "Skill issue detected.",
];

const FAILURE_EMOJIS: &[&str] = &["💀", "🔥", "😭", "☠️", "🫠", "🤡"];

/// Compose the warning line for a failed test run.
///
/// `source` is the command line or task name that failed.
pub fn failure_message(source: &str) -> String {
    let mut rng = rand::thread_rng();
    let emoji = FAILURE_EMOJIS
        .choose(&mut rng)
        .copied()
        .unwrap_or("💀");
    let line = FAILURE_MESSAGES
        .choose(&mut rng)
        .copied()
        .unwrap_or("Tests failed.");

    format!("{} {} ({})", emoji, line, source)
}
