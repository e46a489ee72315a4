//! vibewatch - plays a sound and flips a status indicator when your tests fail
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::{Path, PathBuf};

use clap::Parser;

use vibewatch_app::config;
use vibewatch_audio::AudioPlayer;

/// vibewatch - audible and visual feedback for failing test runs
#[derive(Parser, Debug)]
#[command(name = "vibewatch")]
#[command(
    about = "Plays a sound and flips a status indicator when your test runs fail",
    long_about = None
)]
struct Args {
    /// Project directory (config lives in <PATH>/.vibewatch)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Play the configured sound once and exit (bypasses the cooldown)
    #[arg(long)]
    preview: bool,

    /// Flip the enabled flag in the config file and exit
    #[arg(long)]
    toggle: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    let args = Args::parse();

    color_eyre::install()?;
    // Logs go to file; stdout belongs to the status line
    vibewatch_core::logging::init()?;

    let project_root = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.toggle {
        return toggle_enabled(&project_root);
    }

    if args.preview {
        return preview_sound(&project_root).await;
    }

    let result = vibewatch::run(project_root).await;
    if let Err(ref e) = result {
        tracing::error!("Application error: {:?}", e);
    }
    result.map_err(Into::into)
}

/// The "toggle enabled" command: flip the flag, persist, report.
fn toggle_enabled(project_root: &Path) -> color_eyre::Result<()> {
    let mut settings = config::load_settings(project_root);
    settings.enabled = !settings.enabled;
    config::save_settings(project_root, &settings)?;

    println!(
        "{}",
        if settings.enabled {
            "vibewatch armed. No mercy."
        } else {
            "vibewatch muted. Your tests can fail in peace."
        }
    );
    Ok(())
}

/// The "preview sound" command: unconditional playback, no throttle.
async fn preview_sound(project_root: &Path) -> color_eyre::Result<()> {
    let settings = config::load_settings(project_root);
    let mut player = AudioPlayer::new();
    player
        .play_and_wait(settings.sound_path.as_deref(), settings.volume)
        .await?;
    Ok(())
}
