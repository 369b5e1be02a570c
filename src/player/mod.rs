// Playback is handed to an external player

pub mod mpv;
