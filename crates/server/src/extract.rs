//! Extractors that turn path segments and bodies into typed values,
//! rejecting bad input with a 400 `{"error": ...}` response.

use std::collections::HashMap;

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::errors::ApiError;

pub const INVALID_ID: &str = "Invalid ID";
pub const INVALID_CHANNEL_TYPE_ID: &str = "Invalid notificationChannelTypeID";
pub const INVALID_BODY: &str = "Could not unmarshal body";

fn parse_param(params: &HashMap<String, String>, name: &str, message: &str) -> Result<Uuid, ApiError> {
    params
        .get(name)
        .and_then(|raw| Uuid::parse_str(raw).ok())
        .ok_or_else(|| ApiError::BadRequest(message.to_string()))
}

async fn path_params<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<HashMap<String, String>, ApiError> {
    Path::<HashMap<String, String>>::from_request_parts(parts, state)
        .await
        .map(|Path(p)| p)
        .map_err(|_| ApiError::BadRequest(INVALID_ID.to_string()))
}

/// `{id}` segment of `/customers/{id}...`.
#[derive(Debug, Clone, Copy)]
pub struct CustomerId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for CustomerId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = path_params(parts, state).await?;
        parse_param(&params, "id", INVALID_ID).map(CustomerId)
    }
}

/// `{id}` and `{channel_type_id}` of
/// `/customers/{id}/notification-channels/{channel_type_id}`.
#[derive(Debug, Clone, Copy)]
pub struct PreferencePath {
    pub customer_id: Uuid,
    pub channel_type_id: Uuid,
}

#[async_trait]
impl<S> FromRequestParts<S> for PreferencePath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = path_params(parts, state).await?;
        let customer_id = parse_param(&params, "id", INVALID_ID)?;
        let channel_type_id = parse_param(&params, "channel_type_id", INVALID_CHANNEL_TYPE_ID)?;
        Ok(PreferencePath { customer_id, channel_type_id })
    }
}

/// JSON body decoded regardless of the request's `Content-Type`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::BadRequest(INVALID_BODY.to_string()))?;
        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|_| ApiError::BadRequest(INVALID_BODY.to_string()))
    }
}
