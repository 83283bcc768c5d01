//! # Spotify Integration Module
//!
//! This module talks to the Spotify Web API on behalf of the poster proxy. It
//! covers exactly the three requests a poster lookup needs and nothing else.
//!
//! ## Architecture
//!
//! ```text
//! Delivery Layer (HTTP server, CLI)
//!          ↓
//! PosterSource (poster)
//!     ├── Authentication (client-credentials grant)
//!     └── Tracks (metadata, album image download)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API / image CDN
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - Basic credential encoding and the client-credentials token exchange
//! - [`tracks`] - Track metadata retrieval, image selection and image download
//! - [`poster`] - The [`PosterSource`] trait and the [`SpotifyClient`] that chains
//!   the requests together
//!
//! ## API Coverage
//!
//! - `POST /api/token` - App token via `grant_type=client_credentials`
//! - `GET /tracks/{id}` - Track name and album images
//! - `GET <image url>` - The album image itself, no authentication
//!
//! ## Upstream Assumptions
//!
//! Spotify lists album images widest first. The first entry of
//! `album.images` is taken as the highest resolution without comparing
//! `width`/`height`; should that ordering ever change, a smaller image is
//! returned without any error.
//!
//! ## Token Lifecycle
//!
//! Tokens are requested for every poster and dropped afterwards. There is no
//! cache, no refresh and no retry.

pub mod auth;
pub mod poster;
pub mod tracks;

pub use poster::{PosterSource, SpotifyClient};
