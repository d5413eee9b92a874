use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

use crate::request_id::RequestId;

/// Message returned for every storage failure; details stay in the logs.
pub const GENERIC_ERROR: &str = "Error occurred";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed identifier or body.
    #[error("{0}")]
    BadRequest(String),
    /// Keyed entity absent.
    #[error("not found")]
    NotFound,
    /// Storage failure; the payload is the server-side detail.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Map a repository failure, logging storage errors with the request id.
    pub fn from_service(e: ServiceError, request_id: &RequestId, context: &str) -> Self {
        match e {
            ServiceError::NotFound(_) => ApiError::NotFound,
            ServiceError::Db(detail) => {
                error!(request_id = %request_id, error = %detail, "{}", context);
                ApiError::Internal(detail)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, Json(ErrorBody { error: msg })).into_response(),
            ApiError::NotFound => (StatusCode::NOT_FOUND, Json(serde_json::json!({}))).into_response(),
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody { error: GENERIC_ERROR.to_string() }),
            )
                .into_response(),
        }
    }
}

/// Success with no body, still labelled `application/json`.
#[derive(Debug, Clone, Copy)]
pub struct EmptyJson(pub StatusCode);

impl IntoResponse for EmptyJson {
    fn into_response(self) -> Response {
        (self.0, [(header::CONTENT_TYPE, "application/json")]).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(resp: Response) -> String {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn internal_error_hides_detail() {
        let resp = ApiError::Internal("relation \"customers\" does not exist".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(resp).await, r#"{"error":"Error occurred"}"#);
    }

    #[tokio::test]
    async fn not_found_is_empty_object() {
        let resp = ApiError::NotFound.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_of(resp).await, "{}");
    }

    #[tokio::test]
    async fn empty_json_has_content_type_and_no_body() {
        let resp = EmptyJson(StatusCode::OK).into_response();
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(body_of(resp).await, "");
    }

    #[test]
    fn service_errors_map_to_api_errors() {
        let rid = RequestId::new();
        assert!(matches!(ApiError::from_service(ServiceError::not_found("customer"), &rid, "x"), ApiError::NotFound));
        assert!(matches!(ApiError::from_service(ServiceError::Db("boom".into()), &rid, "x"), ApiError::Internal(_)));
    }
}
