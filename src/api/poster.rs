use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{api::ApiError, spotify::PosterSource, utils, warning};

pub async fn poster(
    State(source): State<Arc<dyn PosterSource>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(track_url) = params.get("url").filter(|url| !url.is_empty()) else {
        return ApiError::BadRequest("Missing 'url' parameter".to_string()).into_response();
    };

    match source.fetch_poster(track_url).await {
        Ok(poster) => {
            let disposition = utils::attachment_disposition(&utils::poster_file_name(&poster.name));
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "image/jpeg".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                poster.bytes,
            )
                .into_response()
        }
        Err(e) => {
            warning!("Poster lookup for {} failed: {}", track_url, e);
            ApiError::from(e).into_response()
        }
    }
}
