//! vibewatch-app - Application state and orchestration for vibewatch
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: a [`Message`] enum for everything that can happen, an
//! [`AppState`] model, and an [`update`](handler::update) function that maps
//! messages to state transitions plus follow-up [`UpdateAction`]s for the
//! event loop. Configuration loading and config-file watching live here too.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod notify;
pub mod state;

// Re-export primary types
pub use config::{load_settings, save_settings, Settings};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, Notice, NoticeKind};
