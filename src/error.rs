//! Error types for poster retrieval.
//!
//! Every step of the fetch chain fails with exactly one [`PosterError`] kind.
//! The delivery adapters decide how each kind is presented; see
//! [`crate::api::ApiError`] for the HTTP mapping.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PosterError {
    /// The input does not contain a `track/<id>` segment.
    #[error("Invalid Spotify track URL: {0}")]
    InvalidInput(String),

    /// The token endpoint rejected the client-credentials exchange.
    #[error("Token request rejected ({status}): {body}")]
    UpstreamAuth { status: StatusCode, body: String },

    /// The track metadata endpoint returned a non-success status.
    #[error("Track metadata request rejected ({status}): {body}")]
    UpstreamMetadata { status: StatusCode, body: String },

    /// The image host returned a non-success status.
    #[error("Image download rejected ({status}): {body}")]
    UpstreamImage { status: StatusCode, body: String },

    /// An upstream answered successfully but without the expected field.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The request could not be sent or its body could not be read.
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PosterError>;
