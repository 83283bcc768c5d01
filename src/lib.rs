//! Spotify Album Poster Proxy Library
//!
//! This library resolves the album poster of a Spotify track URL. It
//! authenticates with the client-credentials grant, reads the track metadata,
//! downloads the first album image and hands it to one of two front ends: an
//! HTTP endpoint or a command-line download.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for `/poster` and `/health`
//! - `cli` - Command-line command implementations
//! - `config` - Configuration loading from the environment and `.env` files
//! - `error` - The `PosterError` taxonomy
//! - `server` - Router construction and the HTTP listener
//! - `spotify` - Spotify Web API client and the `PosterSource` trait
//! - `types` - Data structures and type definitions
//! - `utils` - Track id extraction and file name helpers
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use spotify_poster::{config::Config, spotify::{PosterSource, SpotifyClient}};
//!
//! #[tokio::main]
//! async fn main() -> spotify_poster::Res<()> {
//!     let client = SpotifyClient::new(Arc::new(Config::from_env()));
//!     let url = "https://open.spotify.com/track/3n3Ppam7vgaVa1iaRUc9Lp";
//!     let poster = client.fetch_poster(url).await?;
//!     println!("{}: {} bytes", poster.name, poster.bytes.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Result alias for process-level glue such as startup and server binding.
///
/// Poster retrieval itself returns [`error::Result`]; this alias is for code
/// that mixes I/O, address parsing and poster errors and only needs to report
/// them.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints a status line prefixed with a blue `o`.
///
/// ```
/// info!("Listening on http://{}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a completion line prefixed with a green `✓`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a line prefixed with a red `!` and exits with status 1.
///
/// Only for the binary's top level: library code returns errors instead,
/// since this never returns.
///
/// ```
/// error!("Failed to download poster: {}", err);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a line prefixed with a yellow `!` and carries on.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
