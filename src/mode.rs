// The two front-ends differ only in these settings

use ratatui::style::Color;

use crate::catalog::{CatalogEntry, SUGGESTED};
use crate::ui::screen::Theme;

/// How the search screen talks to the provider and the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchProfile {
    pub result_limit: usize,
    pub provider_prefix: &'static str,
    pub query_label: &'static str,
    pub id_label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeProfile {
    pub name: &'static str,
    /// Executable name and one-line help for `--help`.
    pub bin: &'static str,
    pub about: &'static str,
    pub theme: Theme,
    pub search: SearchProfile,
    /// Offered as a second menu entry when present.
    pub catalog: Option<&'static [CatalogEntry]>,
    /// Play sound only (`--no-video`).
    pub audio_only: bool,
}

pub const SEARCH_OPTION: &str = "Search";
pub const CATALOG_OPTION: &str = "Suggested";

pub const MUSIC: ModeProfile = ModeProfile {
    name: "music",
    bin: "pawel-music",
    about: "Search YouTube and listen to the pick with mpv",
    theme: Theme {
        header: "Welcome to Pawel Music!",
        accent: Color::Cyan,
    },
    search: SearchProfile {
        result_limit: 5,
        provider_prefix: "ytsearch",
        query_label: "Song title: ",
        id_label: "Enter track ID: ",
    },
    catalog: Some(&SUGGESTED),
    audio_only: true,
};

pub const VIDEO: ModeProfile = ModeProfile {
    name: "video",
    bin: "pawel-video",
    about: "Search YouTube and watch the pick with mpv",
    theme: Theme {
        header: "Welcome to Pawel Video!",
        accent: Color::Red,
    },
    search: SearchProfile {
        result_limit: 10,
        provider_prefix: "ytsearch",
        query_label: "Video title: ",
        id_label: "Enter video ID: ",
    },
    catalog: None,
    audio_only: false,
};

impl ModeProfile {
    /// Entries of the top-level menu, search first.
    pub fn menu_options(&self) -> Vec<String> {
        let mut options = vec![SEARCH_OPTION.to_string()];
        if self.catalog.is_some() {
            options.push(CATALOG_OPTION.to_string());
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn music_offers_search_and_suggestions() {
        assert_eq!(MUSIC.menu_options(), ["Search", "Suggested"]);
        assert_eq!(MUSIC.search.result_limit, 5);
        assert!(MUSIC.audio_only);
    }

    #[test]
    fn video_is_search_only() {
        assert_eq!(VIDEO.menu_options(), ["Search"]);
        assert_eq!(VIDEO.search.result_limit, 10);
        assert!(!VIDEO.audio_only);
    }
}
