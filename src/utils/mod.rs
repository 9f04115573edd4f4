/// Substrings that mark a URL as a YouTube link
pub const YOUTUBE_MARKERS: [&str; 2] = ["youtube.com", "youtu.be"];

/// Loose check that the text points at YouTube.
///
/// Only a substring test, no parsing.
pub fn is_youtube_url(url: &str) -> bool {
    YOUTUBE_MARKERS.iter().any(|marker| url.contains(marker))
}
