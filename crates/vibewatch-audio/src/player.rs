//! External audio player management
//!
//! One playback at a time: starting a new sound kills any in-flight player
//! process first. Children are spawned with `kill_on_drop` so dropping the
//! player never leaks a running process.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::{Child, Command};

use vibewatch_core::prelude::*;

/// Linux players in preference order
const LINUX_PLAYERS: &[&str] = &["paplay", "aplay", "ffplay"];

/// Default sound file, installed under the user data dir
pub fn default_sound_path() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("vibewatch").join("sounds").join("alarm.wav")
}

/// A fully resolved player command line, ready to spawn.
///
/// Building is separated from spawning so the per-platform argument shapes
/// are testable without executing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerInvocation {
    pub program: String,
    pub args: Vec<String>,
}

impl PlayerInvocation {
    /// Build the invocation for `os` (a `std::env::consts::OS` value).
    ///
    /// `linux_player` is the pre-detected player command on Linux hosts,
    /// `None` when detection found nothing.
    pub fn build(
        os: &str,
        linux_player: Option<&str>,
        sound: &Path,
        volume: f32,
    ) -> Result<Self> {
        let sound_arg = sound.to_string_lossy().into_owned();
        let volume = volume.clamp(0.0, 1.0);

        match os {
            "macos" => Ok(Self {
                program: "afplay".to_string(),
                args: vec!["-v".to_string(), format!("{}", volume), sound_arg],
            }),

            "windows" => Ok(Self {
                program: "powershell".to_string(),
                args: vec![
                    "-NonInteractive".to_string(),
                    "-Command".to_string(),
                    format!(
                        "(New-Object System.Media.SoundPlayer '{}').PlaySync()",
                        sound_arg
                    ),
                ],
            }),

            "linux" => match linux_player {
                Some("paplay") => Ok(Self {
                    program: "paplay".to_string(),
                    args: vec![
                        // paplay takes linear volume 0..=65536
                        format!("--volume={}", (volume * 65536.0) as u32),
                        sound_arg,
                    ],
                }),
                Some("aplay") => Ok(Self {
                    // aplay has no volume control; play at device level
                    program: "aplay".to_string(),
                    args: vec!["-q".to_string(), sound_arg],
                }),
                Some("ffplay") => Ok(Self {
                    program: "ffplay".to_string(),
                    args: vec![
                        "-nodisp".to_string(),
                        "-autoexit".to_string(),
                        "-loglevel".to_string(),
                        "quiet".to_string(),
                        "-volume".to_string(),
                        format!("{}", (volume * 100.0) as u32),
                        sound_arg,
                    ],
                }),
                Some(other) => Err(Error::player_spawn(format!(
                    "unknown linux player: {}",
                    other
                ))),
                None => Err(Error::NoPlayer),
            },

            other => Err(Error::unsupported_platform(other)),
        }
    }
}

/// Find the first available Linux player on PATH
fn detect_linux_player() -> Option<String> {
    LINUX_PLAYERS
        .iter()
        .find(|cmd| which::which(cmd).is_ok())
        .map(|cmd| (*cmd).to_string())
}

/// Manages the external audio player child process.
pub struct AudioPlayer {
    /// Sound played when no custom path is configured
    default_sound: PathBuf,
    /// Detected player command on Linux, `None` elsewhere or when absent
    linux_player: Option<String>,
    /// In-flight playback, if any
    child: Option<Child>,
}

impl AudioPlayer {
    pub fn new() -> Self {
        Self::with_default_sound(default_sound_path())
    }

    pub fn with_default_sound(default_sound: PathBuf) -> Self {
        let linux_player = if std::env::consts::OS == "linux" {
            let player = detect_linux_player();
            match &player {
                Some(cmd) => debug!("Using linux audio player: {}", cmd),
                None => warn!("No linux audio player found on PATH"),
            }
            player
        } else {
            None
        };

        Self {
            default_sound,
            linux_player,
            child: None,
        }
    }

    /// Start playback, fire-and-forget.
    ///
    /// Kills any in-flight playback first. Returns without waiting for the
    /// player to finish; the child reaps via `kill_on_drop` or on the next
    /// `play`/`stop`.
    pub fn play(&mut self, custom_path: Option<&Path>, volume: f32) -> Result<()> {
        let sound = custom_path
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| self.default_sound.clone());

        if !sound.exists() {
            return Err(Error::sound_file_not_found(&sound));
        }

        self.stop();

        let invocation =
            PlayerInvocation::build(std::env::consts::OS, self.linux_player.as_deref(), &sound, volume)?;

        debug!(
            "Spawning audio player: {} {}",
            invocation.program,
            invocation.args.join(" ")
        );

        let child = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Error::player_spawn(e.to_string()))?;

        self.child = Some(child);
        Ok(())
    }

    /// Play and wait for the player to exit.
    ///
    /// Used by the preview command, where the process would otherwise exit
    /// (and kill the child) before the sound finishes.
    pub async fn play_and_wait(&mut self, custom_path: Option<&Path>, volume: f32) -> Result<()> {
        self.play(custom_path, volume)?;

        if let Some(mut child) = self.child.take() {
            let status = child
                .wait()
                .await
                .map_err(|e| Error::player_spawn(e.to_string()))?;
            if !status.success() {
                return Err(Error::player_spawn(format!(
                    "player exited with status {:?}",
                    status.code()
                )));
            }
        }
        Ok(())
    }

    /// Kill any in-flight playback
    pub fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Err(e) = child.start_kill() {
                // Usually means the player already exited
                debug!("Failed to kill audio player: {}", e);
            }
        }
    }
}

impl Default for AudioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AudioPlayer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macos_invocation() {
        let inv =
            PlayerInvocation::build("macos", None, Path::new("/s/alarm.wav"), 0.5).unwrap();
        assert_eq!(inv.program, "afplay");
        assert_eq!(inv.args, vec!["-v", "0.5", "/s/alarm.wav"]);
    }

    #[test]
    fn test_windows_invocation_uses_soundplayer() {
        let inv =
            PlayerInvocation::build("windows", None, Path::new("C:\\s\\alarm.wav"), 1.0).unwrap();
        assert_eq!(inv.program, "powershell");
        assert!(inv.args.iter().any(|a| a.contains("SoundPlayer")));
    }

    #[test]
    fn test_linux_paplay_scales_volume() {
        let inv = PlayerInvocation::build("linux", Some("paplay"), Path::new("/s/a.wav"), 1.0)
            .unwrap();
        assert_eq!(inv.program, "paplay");
        assert_eq!(inv.args[0], "--volume=65536");
    }

    #[test]
    fn test_linux_ffplay_flags() {
        let inv = PlayerInvocation::build("linux", Some("ffplay"), Path::new("/s/a.wav"), 0.25)
            .unwrap();
        assert_eq!(inv.program, "ffplay");
        assert!(inv.args.contains(&"-nodisp".to_string()));
        assert!(inv.args.contains(&"-autoexit".to_string()));
        assert!(inv.args.contains(&"25".to_string()));
    }

    #[test]
    fn test_linux_without_player_errors() {
        let err = PlayerInvocation::build("linux", None, Path::new("/s/a.wav"), 1.0)
            .expect_err("no player available");
        assert!(matches!(err, Error::NoPlayer));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_unsupported_platform_errors() {
        let err = PlayerInvocation::build("freebsd", None, Path::new("/s/a.wav"), 1.0)
            .expect_err("unsupported");
        assert!(matches!(err, Error::UnsupportedPlatform { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_volume_is_clamped() {
        let inv =
            PlayerInvocation::build("macos", None, Path::new("/s/a.wav"), 7.0).unwrap();
        assert_eq!(inv.args[1], "1");

        let inv =
            PlayerInvocation::build("linux", Some("paplay"), Path::new("/s/a.wav"), -1.0).unwrap();
        assert_eq!(inv.args[0], "--volume=0");
    }

    #[tokio::test]
    async fn test_play_missing_file_errors_without_spawning() {
        let mut player = AudioPlayer::with_default_sound(PathBuf::from("/nonexistent/alarm.wav"));
        let err = player.play(None, 1.0).expect_err("file is missing");
        assert!(matches!(err, Error::SoundFileNotFound { .. }));
    }

    #[test]
    fn test_stop_without_playback_is_noop() {
        let mut player = AudioPlayer::with_default_sound(PathBuf::from("/s/a.wav"));
        player.stop();
        player.stop();
    }
}
