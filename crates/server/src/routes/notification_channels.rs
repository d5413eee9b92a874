use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use tracing::debug;
use utoipa::ToSchema;

use models::{customer_notification_channel as preference, notification_channel};
use service::preference::UpsertOutcome;

use crate::errors::{ApiError, EmptyJson};
use crate::extract::{CustomerId, JsonBody, PreferencePath};
use crate::request_id::RequestId;
use crate::state::ServerState;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct PreferenceInput {
    pub lookup_key: String,
    pub contact_customer: bool,
}

#[utoipa::path(
    get, path = "/customers/{id}/notification-channels", tag = "notification-channels",
    params(("id" = Uuid, Path, description = "Customer id")),
    responses(
        (status = 200, description = "The customer's channel preferences", body = [crate::openapi::PreferenceDoc]),
        (status = 400, description = "Malformed id", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc),
    )
)]
pub async fn list_for_customer(
    State(state): State<ServerState>,
    request_id: RequestId,
    CustomerId(customer_id): CustomerId,
) -> Result<Json<Vec<preference::Model>>, ApiError> {
    debug!(handler = "list_customer_notification_channels", %request_id, %customer_id, "handling request");
    let rows = state
        .repos
        .preferences
        .list_for_customer(customer_id)
        .await
        .map_err(|e| ApiError::from_service(e, &request_id, "could not list notification channels"))?;
    Ok(Json(rows))
}

#[utoipa::path(
    post, path = "/customers/{id}/notification-channels/{channel_type_id}", tag = "notification-channels",
    params(
        ("id" = Uuid, Path, description = "Customer id"),
        ("channel_type_id" = Uuid, Path, description = "Notification channel type id"),
    ),
    request_body = PreferenceInput,
    responses(
        (status = 200, description = "Preference inserted or updated"),
        (status = 400, description = "Malformed id or body", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc),
    )
)]
pub async fn upsert(
    State(state): State<ServerState>,
    request_id: RequestId,
    path: PreferencePath,
    JsonBody(input): JsonBody<PreferenceInput>,
) -> Result<EmptyJson, ApiError> {
    debug!(
        handler = "upsert_customer_notification_channel",
        %request_id,
        customer_id = %path.customer_id,
        channel_type_id = %path.channel_type_id,
        "handling request"
    );
    let outcome = state
        .repos
        .preferences
        .upsert(path.customer_id, path.channel_type_id, &input.lookup_key, input.contact_customer)
        .await
        .map_err(|e| ApiError::from_service(e, &request_id, "could not store notification channel"))?;
    debug!(%request_id, inserted = matches!(outcome, UpsertOutcome::Inserted), "preference stored");
    Ok(EmptyJson(StatusCode::OK))
}

#[utoipa::path(
    get, path = "/notification-channels", tag = "notification-channels",
    responses(
        (status = 200, description = "Known notification channel types", body = [crate::openapi::ChannelTypeDoc]),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc),
    )
)]
pub async fn list_types(
    State(state): State<ServerState>,
    request_id: RequestId,
) -> Result<Json<Vec<notification_channel::Model>>, ApiError> {
    debug!(handler = "list_notification_channel_types", %request_id, "handling request");
    let types = state
        .repos
        .channel_types
        .list()
        .await
        .map_err(|e| ApiError::from_service(e, &request_id, "could not list notification channel types"))?;
    Ok(Json(types))
}
