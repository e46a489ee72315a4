//! Settings parser for .vibewatch/config.toml

use std::path::{Path, PathBuf};

use vibewatch_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const VIBEWATCH_DIR: &str = ".vibewatch";

/// Path to the config file for a project
pub fn config_path(project_root: &Path) -> PathBuf {
    project_root.join(VIBEWATCH_DIR).join(CONFIG_FILENAME)
}

/// Directory the config watcher observes
pub fn config_dir(project_root: &Path) -> PathBuf {
    project_root.join(VIBEWATCH_DIR)
}

/// Load settings for a project.
///
/// Missing or unparsable files are not errors: the tool runs with defaults
/// and logs what happened.
pub fn load_settings(project_root: &Path) -> Settings {
    let config_path = config_path(project_root);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Save settings, creating `.vibewatch/` if needed.
///
/// Atomic write: temp file then rename, so the config watcher never sees a
/// half-written file.
pub fn save_settings(project_root: &Path, settings: &Settings) -> Result<()> {
    let dir = config_dir(project_root);

    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::config(format!("Failed to create .vibewatch dir: {}", e)))?;
    }

    let config_path = dir.join(CONFIG_FILENAME);
    let temp_path = dir.join(".config.toml.tmp");

    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;
    let full_content = format!("{}{}", config_header(), content);

    std::fs::write(&temp_path, &full_content)
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;

    std::fs::rename(&temp_path, &config_path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    info!("Saved settings to {:?}", config_path);
    Ok(())
}

/// Create `.vibewatch/` with a default config.toml if missing
pub fn init_config_dir(project_root: &Path) -> Result<()> {
    let dir = config_dir(project_root);

    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::config(format!("Failed to create .vibewatch dir: {}", e)))?;
        info!("Created .vibewatch directory");
    }

    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        save_settings(project_root, &Settings::default())?;
        info!("Created default config.toml");
    }

    Ok(())
}

fn config_header() -> String {
    "# vibewatch configuration\n\
     # Edits apply live; no restart needed.\n\n"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_settings(dir.path()), Settings::default());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();

        let settings = Settings {
            enabled: false,
            cooldown_ms: 9000,
            volume: 0.5,
            ..Settings::default()
        };
        save_settings(dir.path(), &settings).unwrap();

        assert_eq!(load_settings(dir.path()), settings);
    }

    #[test]
    fn test_load_invalid_toml_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(config_dir(dir.path())).unwrap();
        std::fs::write(config_path(dir.path()), "enabled = {{{{").unwrap();

        assert_eq!(load_settings(dir.path()), Settings::default());
    }

    #[test]
    fn test_init_creates_default_config() {
        let dir = tempfile::tempdir().unwrap();
        init_config_dir(dir.path()).unwrap();

        assert!(config_path(dir.path()).exists());
        assert_eq!(load_settings(dir.path()), Settings::default());
    }

    #[test]
    fn test_init_does_not_clobber_existing_config() {
        let dir = tempfile::tempdir().unwrap();

        let custom = Settings {
            cooldown_ms: 60000,
            ..Settings::default()
        };
        save_settings(dir.path(), &custom).unwrap();
        init_config_dir(dir.path()).unwrap();

        assert_eq!(load_settings(dir.path()), custom);
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        save_settings(dir.path(), &Settings::default()).unwrap();

        assert!(!config_dir(dir.path()).join(".config.toml.tmp").exists());
    }
}
