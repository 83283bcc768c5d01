//! # API Module
//!
//! HTTP endpoints of the poster proxy.
//!
//! ## Endpoints
//!
//! - [`poster`] - `GET /poster?url=<track-url>` streams the album poster of a
//!   Spotify track as an `image/jpeg` attachment named `{track}_poster.jpg`.
//! - [`health`] - `GET /health` returns application status and version.
//!
//! ## Error Responses
//!
//! Failures are JSON objects with a single `error` key:
//!
//! - `400` - the `url` query parameter is missing or empty
//! - `500` - any failure while fetching the poster, with its message
//!
//! See [`ApiError`] for the mapping.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use spotify_poster::api::{health, poster};
//!
//! let app = Router::new()
//!     .route("/poster", get(poster))
//!     .route("/health", get(health))
//!     .with_state(source);
//! ```

mod error;
mod health;
mod poster;

pub use error::ApiError;
pub use health::health;
pub use poster::poster;
