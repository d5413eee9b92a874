use axum::{
    extract::Request,
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::trace::{DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::request_id::{attach_request_id, RequestId};
use crate::state::ServerState;

pub mod customers;
pub mod notification_channels;
pub mod notifications;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn request_span(req: &Request) -> tracing::Span {
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.to_string())
        .unwrap_or_default();
    tracing::info_span!(
        "request",
        method = %req.method(),
        uri = %req.uri(),
        request_id = %request_id,
    )
}

/// Build the application router over the given repositories.
pub fn build_router(state: ServerState) -> Router {
    let customer_routes = Router::new()
        .route("/customers", get(customers::list).post(customers::create))
        .route(
            "/customers/:id",
            get(customers::get).put(customers::update).delete(customers::delete),
        )
        .route(
            "/customers/:id/notification-channels",
            get(notification_channels::list_for_customer),
        )
        .route(
            "/customers/:id/notification-channels/:channel_type_id",
            post(notification_channels::upsert),
        );

    let other_routes = Router::new()
        .route("/notifications", post(notifications::create))
        .route("/notification-channels", get(notification_channels::list_types))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    customer_routes
        .merge(other_routes)
        .with_state(state)
        .layer(
            // Outermost first: the id must exist before the trace span reads it.
            ServiceBuilder::new()
                .layer(middleware::from_fn(attach_request_id))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(request_span)
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                        .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
                ),
        )
}
