use reqwest::Client;

use crate::{
    config::Config,
    error::{PosterError, Result},
    types::Track,
};

/// Retrieves the metadata of a single track.
///
/// Sends `GET {api_url}/tracks/{id}` with the bearer token. Only the fields
/// described by [`Track`] are decoded; anything else in the body is ignored.
///
/// # Errors
///
/// - `UpstreamMetadata` for any non-success status (unknown id, expired token, ...)
/// - `MalformedResponse` when `name` or `album.images` is missing
/// - `Transport` when the request fails or the body cannot be read
pub async fn get_track(
    client: &Client,
    config: &Config,
    track_id: &str,
    token: &str,
) -> Result<Track> {
    let res = client
        .get(config.track_url(track_id))
        .bearer_auth(token)
        .send()
        .await?;

    let status = res.status();
    let body = res.text().await?;
    if !status.is_success() {
        return Err(PosterError::UpstreamMetadata { status, body });
    }

    serde_json::from_str(&body).map_err(|e| {
        PosterError::MalformedResponse(format!("unexpected track metadata for {}: {}", track_id, e))
    })
}

/// URL of the first, and by Spotify's ordering the largest, album image.
pub fn largest_image_url(track: &Track) -> Result<&str> {
    track
        .album
        .images
        .first()
        .map(|image| image.url.as_str())
        .ok_or_else(|| {
            PosterError::MalformedResponse(format!("track '{}' has no album images", track.name))
        })
}

/// Downloads an image without any authentication headers.
pub async fn download_image(client: &Client, url: &str) -> Result<Vec<u8>> {
    let res = client.get(url).send().await?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await?;
        return Err(PosterError::UpstreamImage { status, body });
    }

    Ok(res.bytes().await?.to_vec())
}
