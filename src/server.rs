use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
};

use crate::{Res, api, info, spotify::PosterSource};

/// Routes of the poster proxy, backed by `source`.
pub fn router(source: Arc<dyn PosterSource>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/poster", get(api::poster))
        .layer(middleware::from_fn(log_request))
        .with_state(source)
}

pub async fn start_api_server(addr: &str, source: Arc<dyn PosterSource>) -> Res<()> {
    let addr = SocketAddr::from_str(addr)
        .map_err(|e| format!("Failed to parse server address '{}': {}", addr, e))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(source)).await?;
    Ok(())
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    info!("{} {} -> {}", method, path, response.status());
    response
}
