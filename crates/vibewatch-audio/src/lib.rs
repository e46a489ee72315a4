//! # vibewatch-audio - Sound Playback
//!
//! The playback boundary: resolves a platform-appropriate command-line audio
//! player and spawns it fire-and-forget. Playback is the only fallible part
//! of the feedback pipeline, and every failure here is recoverable -- the
//! caller reports it and the rest of the state machine stays consistent.
//!
//! Players:
//! - macOS: `afplay`
//! - Windows: `powershell` + `System.Media.SoundPlayer`
//! - Linux: first of `paplay`, `aplay`, `ffplay` found on PATH

mod player;

pub use player::{default_sound_path, AudioPlayer, PlayerInvocation};
