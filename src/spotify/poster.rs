use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    config::Config,
    error::Result,
    spotify::{auth, tracks},
    types::Poster,
    utils,
};

/// Anything that can turn a track URL into a [`Poster`].
///
/// The HTTP server and the CLI only depend on this trait, so both can be
/// driven by a fake source in tests.
#[async_trait]
pub trait PosterSource: Send + Sync {
    async fn fetch_poster(&self, url: &str) -> Result<Poster>;
}

/// Poster source backed by the Spotify Web API.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    client: Client,
    config: Arc<Config>,
}

impl SpotifyClient {
    pub fn new(config: Arc<Config>) -> Self {
        SpotifyClient {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl PosterSource for SpotifyClient {
    /// Resolves the album poster of the track behind `url`.
    ///
    /// Steps, each awaited before the next one starts:
    /// 1. Extract the track id from `url`
    /// 2. Request a client-credentials token
    /// 3. Fetch the track metadata with that token
    /// 4. Pick the first album image
    /// 5. Download it without authentication
    ///
    /// The first failing step ends the call and its error is returned
    /// unchanged; no later request is made.
    async fn fetch_poster(&self, url: &str) -> Result<Poster> {
        let track_id = utils::extract_track_id(url)?;
        let token = auth::client_credentials_token(&self.client, &self.config).await?;
        let track = tracks::get_track(&self.client, &self.config, &track_id, &token).await?;
        let image_url = tracks::largest_image_url(&track)?;
        let bytes = tracks::download_image(&self.client, image_url).await?;

        Ok(Poster {
            name: track.name,
            bytes,
        })
    }
}
