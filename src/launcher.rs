// ==========================================
// LAUNCHER
// ==========================================
// Top-level flow shared by both executables:
// - take over the terminal
// - run one interactive session (mode menu, search or suggestions)
// - give the terminal back, whatever happened
// - hand the chosen ID to the player and wait for it

use anyhow::{Context, Result};
use ratatui::backend::CrosstermBackend;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::mode::ModeProfile;
use crate::player::mpv::MediaPlayer;
use crate::ui::app::PlayerApp;
use crate::ui::keys::TerminalKeys;
use crate::ui::screen::Screen;
use crate::ui::session::TerminalSession;
use crate::ui::UiError;
use crate::youtube::extractor::YtDlp;

/// External programs the launcher drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tools {
    pub search_tool: PathBuf,
    pub player: PathBuf,
}

pub async fn run(profile: ModeProfile, tools: &Tools) -> Result<()> {
    let chosen = match interact(profile, tools).await {
        Ok(chosen) => chosen,
        Err(UiError::Interrupted) => {
            info!("interrupted, nothing to play");
            None
        }
        Err(e) => return Err(e).context("interactive session failed"),
    };

    let Some(id) = chosen else {
        info!("no selection");
        return Ok(());
    };

    let player = MediaPlayer::new(&tools.player, profile.audio_only);
    let status = player.play(&id).await?;
    if !status.success() {
        warn!(%status, id = %id, "player exited with an error");
    }
    Ok(())
}

// The session guard is declared first so it is dropped last, after the
// screen has finished writing.
async fn interact(profile: ModeProfile, tools: &Tools) -> Result<Option<String>, UiError> {
    let _session = TerminalSession::enter()?;
    let screen = Screen::new(CrosstermBackend::new(io::stdout()), profile.theme)?;
    let provider = YtDlp::new(&tools.search_tool);

    let mut app = PlayerApp::new(screen, TerminalKeys, provider, profile);
    let chosen = app.run().await;
    chosen
}
