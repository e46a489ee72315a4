//! Configuration for vibewatch
//!
//! Settings live in `.vibewatch/config.toml` inside the watched project.
//! The file is optional; missing or unparsable files fall back to defaults.
//! A watcher picks up runtime edits so changes apply without a restart.

pub mod settings;
pub mod types;
pub mod watcher;

pub use settings::{config_dir, config_path, init_config_dir, load_settings, save_settings};
pub use types::Settings;
pub use watcher::ConfigWatcher;
