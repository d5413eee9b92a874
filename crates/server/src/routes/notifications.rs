use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use tracing::debug;
use utoipa::ToSchema;

use models::notification;

use crate::errors::ApiError;
use crate::extract::JsonBody;
use crate::request_id::RequestId;
use crate::state::ServerState;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct NotificationInput {
    pub from: String,
    pub text: String,
}

#[utoipa::path(
    post, path = "/notifications", tag = "notifications",
    request_body = NotificationInput,
    responses(
        (status = 201, description = "Notification recorded", body = crate::openapi::NotificationDoc),
        (status = 400, description = "Malformed body", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc),
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    request_id: RequestId,
    JsonBody(input): JsonBody<NotificationInput>,
) -> Result<(StatusCode, Json<notification::Model>), ApiError> {
    debug!(handler = "create_notification", %request_id, "handling request");
    let created = state
        .repos
        .notifications
        .create(&input.from, &input.text)
        .await
        .map_err(|e| ApiError::from_service(e, &request_id, "could not create notification"))?;
    Ok((StatusCode::CREATED, Json(created)))
}
