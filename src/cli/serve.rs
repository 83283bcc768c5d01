use std::sync::Arc;

use crate::{
    Res,
    config::Config,
    server,
    spotify::{PosterSource, SpotifyClient},
};

/// Runs the HTTP server until the process is stopped.
///
/// `addr` overrides the configured `SERVER_ADDRESS`.
pub async fn serve(config: Arc<Config>, addr: Option<String>) -> Res<()> {
    let addr = addr.unwrap_or_else(|| config.server_addr.clone());
    let source: Arc<dyn PosterSource> = Arc::new(SpotifyClient::new(config));
    server::start_api_server(&addr, source).await
}
