//! Command-line flags shared by both front-ends.

use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser};

use crate::launcher::Tools;
use crate::mode::ModeProfile;

#[derive(Parser, Debug)]
#[command(version, long_about = None)]
pub struct Args {
    /// Program used to search YouTube.
    #[arg(long, value_name = "PROGRAM", default_value = "yt-dlp")]
    pub search_tool: PathBuf,

    /// Program that plays the chosen ID.
    #[arg(long, value_name = "PROGRAM", default_value = "mpv")]
    pub player: PathBuf,

    /// More log output (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Parses the process arguments under the mode's executable name.
    pub fn parse_for(profile: &ModeProfile) -> Self {
        Self::parse_from_for(profile, std::env::args_os())
    }

    pub fn parse_from_for<I, T>(profile: &ModeProfile, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from_for(profile, args).unwrap_or_else(|e| e.exit())
    }

    pub fn try_parse_from_for<I, T>(profile: &ModeProfile, args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Self::command()
            .name(profile.bin)
            .about(profile.about)
            .try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }

    pub fn tools(&self) -> Tools {
        Tools {
            search_tool: self.search_tool.clone(),
            player: self.player.clone(),
        }
    }
}
