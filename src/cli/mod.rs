//! # CLI Module
//!
//! Command implementations behind the `spotify-poster` binary.
//!
//! ## Commands
//!
//! - [`download`] - Fetches a track's album poster and writes it to disk
//! - [`serve`] - Runs the HTTP server exposing `GET /poster`
//!
//! Both commands reach Spotify through the same
//! [`PosterSource`](crate::spotify::PosterSource), so a poster saved from the
//! command line is byte-for-byte what the server would stream.
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotify-poster https://open.spotify.com/track/3n3Ppam7vgaVa1iaRUc9Lp
//! spotify-poster https://open.spotify.com/track/3n3Ppam7vgaVa1iaRUc9Lp --output-dir ~/Pictures
//! spotify-poster serve --addr 0.0.0.0:8080
//! ```
//!
//! ## Exit Status
//!
//! Commands return errors to `main`, which prints them and exits with
//! status 1. A successful download exits with status 0.

mod download;
mod serve;

pub use download::download;
pub use serve::serve;
