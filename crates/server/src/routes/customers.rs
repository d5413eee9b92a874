use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use tracing::debug;
use utoipa::ToSchema;

use models::customer;

use crate::errors::{ApiError, EmptyJson};
use crate::extract::{CustomerId, JsonBody};
use crate::request_id::RequestId;
use crate::state::ServerState;

/// Body of `POST /customers` and `PUT /customers/{id}`. Absent fields
/// decode as empty values.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CustomerInput {
    pub name: String,
}

#[utoipa::path(
    get, path = "/customers", tag = "customers",
    responses(
        (status = 200, description = "All customers", body = [crate::openapi::CustomerDoc]),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc),
    )
)]
pub async fn list(State(state): State<ServerState>, request_id: RequestId) -> Result<Json<Vec<customer::Model>>, ApiError> {
    debug!(handler = "list_customers", %request_id, "handling request");
    let customers = state
        .repos
        .customers
        .list()
        .await
        .map_err(|e| ApiError::from_service(e, &request_id, "could not list customers"))?;
    Ok(Json(customers))
}

#[utoipa::path(
    post, path = "/customers", tag = "customers",
    request_body = CustomerInput,
    responses(
        (status = 201, description = "Customer created", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Malformed body", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc),
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    request_id: RequestId,
    JsonBody(input): JsonBody<CustomerInput>,
) -> Result<(StatusCode, Json<customer::Model>), ApiError> {
    debug!(handler = "create_customer", %request_id, "handling request");
    let created = state
        .repos
        .customers
        .create(&input.name)
        .await
        .map_err(|e| ApiError::from_service(e, &request_id, "could not create customer"))?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/customers/{id}", tag = "customers",
    params(("id" = Uuid, Path, description = "Customer id")),
    responses(
        (status = 200, description = "The customer", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Malformed id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "No such customer"),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc),
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    request_id: RequestId,
    CustomerId(id): CustomerId,
) -> Result<Json<customer::Model>, ApiError> {
    debug!(handler = "get_customer", %request_id, customer_id = %id, "handling request");
    state
        .repos
        .customers
        .get(id)
        .await
        .map_err(|e| ApiError::from_service(e, &request_id, "could not load customer"))?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

#[utoipa::path(
    put, path = "/customers/{id}", tag = "customers",
    params(("id" = Uuid, Path, description = "Customer id")),
    request_body = CustomerInput,
    responses(
        (status = 200, description = "Customer renamed"),
        (status = 400, description = "Malformed id or body", body = crate::openapi::ErrorDoc),
        (status = 404, description = "No such customer"),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc),
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    request_id: RequestId,
    CustomerId(id): CustomerId,
    JsonBody(input): JsonBody<CustomerInput>,
) -> Result<EmptyJson, ApiError> {
    debug!(handler = "update_customer", %request_id, customer_id = %id, "handling request");
    state
        .repos
        .customers
        .update(id, &input.name)
        .await
        .map_err(|e| ApiError::from_service(e, &request_id, "could not update customer"))?;
    Ok(EmptyJson(StatusCode::OK))
}

#[utoipa::path(
    delete, path = "/customers/{id}", tag = "customers",
    params(("id" = Uuid, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer and its preferences removed"),
        (status = 400, description = "Malformed id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "No such customer"),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc),
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    request_id: RequestId,
    CustomerId(id): CustomerId,
) -> Result<EmptyJson, ApiError> {
    debug!(handler = "delete_customer", %request_id, customer_id = %id, "handling request");
    state
        .repos
        .customers
        .delete(id)
        .await
        .map_err(|e| ApiError::from_service(e, &request_id, "could not delete customer"))?;
    Ok(EmptyJson(StatusCode::OK))
}
