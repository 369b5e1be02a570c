//! Terminal menus that search YouTube through yt-dlp and hand the chosen
//! video ID to mpv. `pawel-music` plays audio only and also offers a short
//! list of suggestions; `pawel-video` is search only.

pub mod catalog;
pub mod cli;
pub mod launcher;
pub mod logging;
pub mod mode;
pub mod player;
pub mod ui;
pub mod youtube;
