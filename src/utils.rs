use std::sync::LazyLock;

use regex::Regex;

use crate::error::{PosterError, Result};

static TRACK_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"track/([a-zA-Z0-9]+)").expect("track id pattern is a valid regex")
});

/// Extracts the track id from anything containing `track/<id>`.
///
/// Works for `https://open.spotify.com/track/<id>?si=...`, localized URLs such
/// as `https://open.spotify.com/intl-de/track/<id>` and bare `track/<id>`
/// strings. The id is not checked against Spotify; an unknown id only fails
/// once the metadata request is made.
pub fn extract_track_id(input: &str) -> Result<String> {
    TRACK_ID_PATTERN
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| PosterError::InvalidInput(format!("'{}' is not a track URL", input)))
}

/// Replaces path separators so the name stays a single path component.
pub fn sanitize_file_name(name: &str) -> String {
    name.replace(['/', '\\'], "_")
}

/// File name a poster for `track_name` is delivered under.
pub fn poster_file_name(track_name: &str) -> String {
    format!("{}_poster.jpg", sanitize_file_name(track_name))
}

/// Builds a `Content-Disposition` value for an attachment download.
///
/// `filename` carries an ASCII fallback and `filename*` the UTF-8 name
/// percent-encoded per RFC 5987.
pub fn attachment_disposition(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii() && !c.is_ascii_control() => c,
            _ => '_',
        })
        .collect();

    format!(
        "attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}",
        fallback = fallback,
        encoded = urlencoding::encode(file_name)
    )
}
