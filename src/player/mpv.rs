// External media player (mpv)
// Launched once with a watch URL; we only wait for it to exit

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;
use tokio::process::Command;
use tracing::info;

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("failed to start {program}: {source}. Is it installed?")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
}

/// The ID goes into the URL verbatim.
pub fn watch_url(id: &str) -> String {
    format!("{}{}", WATCH_URL, id)
}

pub struct MediaPlayer {
    program: PathBuf,
    audio_only: bool,
}

impl MediaPlayer {
    pub fn new(program: impl Into<PathBuf>, audio_only: bool) -> Self {
        MediaPlayer {
            program: program.into(),
            audio_only,
        }
    }

    pub fn command(&self, id: &str) -> Command {
        let mut command = Command::new(&self.program);
        if self.audio_only {
            command.arg("--no-video");
        }
        command.arg(watch_url(id));
        command
    }

    /// Plays `id` and blocks until the player exits. There is no timeout.
    pub async fn play(&self, id: &str) -> Result<ExitStatus, PlayerError> {
        info!(program = %self.program.display(), id, audio_only = self.audio_only, "starting player");

        let status = self
            .command(id)
            .status()
            .await
            .map_err(|source| PlayerError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        info!(%status, "player exited");
        Ok(status)
    }
}
