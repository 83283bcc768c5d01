use serde::{Deserialize, Serialize};

/// Response body of the client-credentials token exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientCredentialsToken {
    pub access_token: String,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
}

/// The subset of `GET /tracks/{id}` the poster lookup depends on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub album: TrackAlbum,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    #[serde(default)]
    pub name: Option<String>,
    /// Spotify orders album images widest first.
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// An album poster ready to be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poster {
    /// Track name exactly as reported by the metadata endpoint.
    pub name: String,
    pub bytes: Vec<u8>,
}
