// YouTube lookups via yt-dlp

pub mod extractor;
