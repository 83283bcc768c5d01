use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::PosterError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl From<PosterError> for ApiError {
    // Every poster failure is reported as 500 with its message, whatever the
    // kind. Clients cannot tell bad input from an upstream outage.
    fn from(err: PosterError) -> Self {
        match err {
            PosterError::InvalidInput(_)
            | PosterError::UpstreamAuth { .. }
            | PosterError::UpstreamMetadata { .. }
            | PosterError::UpstreamImage { .. }
            | PosterError::MalformedResponse(_)
            | PosterError::Transport(_)
            | PosterError::Io(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) | ApiError::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // An invalid URL fails while building the request, before any I/O.
    fn request_error() -> reqwest::Error {
        reqwest::Client::new()
            .get("not a url")
            .build()
            .expect_err("building a request for an invalid URL fails")
    }

    #[test]
    fn test_every_poster_error_maps_to_internal() {
        let errors = vec![
            PosterError::InvalidInput("x".into()),
            PosterError::UpstreamAuth {
                status: StatusCode::UNAUTHORIZED,
                body: "invalid_client".into(),
            },
            PosterError::UpstreamMetadata {
                status: StatusCode::NOT_FOUND,
                body: "non existing id".into(),
            },
            PosterError::UpstreamImage {
                status: StatusCode::FORBIDDEN,
                body: String::new(),
            },
            PosterError::MalformedResponse("no images".into()),
            PosterError::Io(std::io::Error::other("disk full")),
            PosterError::Transport(request_error()),
        ];

        for err in errors {
            let message = err.to_string();
            let api = ApiError::from(err);
            assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(api.message(), message);
        }
    }

    #[test]
    fn test_bad_request_status() {
        let api = ApiError::BadRequest("Missing 'url' parameter".into());
        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
    }
}
