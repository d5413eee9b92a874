//! OpenAPI description of the HTTP surface, served as JSON at
//! `/api-docs/openapi.json`.

use chrono::{DateTime, Utc};
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

use crate::routes::{customers, notification_channels, notifications};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(ToSchema)]
pub struct CustomerDoc { pub id: Uuid, pub name: String }

#[derive(ToSchema)]
pub struct ChannelTypeDoc { pub id: Uuid, pub name: String }

#[derive(ToSchema)]
pub struct PreferenceDoc {
    pub id: i32,
    pub customer_id: Uuid,
    pub notification_channel_type_id: Uuid,
    pub lookup_key: String,
    pub contact_customer: bool,
}

#[derive(ToSchema)]
pub struct NotificationDoc {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub from: String,
    pub text: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        customers::list,
        customers::create,
        customers::get,
        customers::update,
        customers::delete,
        notification_channels::list_for_customer,
        notification_channels::upsert,
        notification_channels::list_types,
        notifications::create,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            CustomerDoc,
            ChannelTypeDoc,
            PreferenceDoc,
            NotificationDoc,
            customers::CustomerInput,
            notification_channels::PreferenceInput,
            notifications::NotificationInput,
        )
    ),
    tags(
        (name = "health"),
        (name = "customers"),
        (name = "notification-channels"),
        (name = "notifications")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in [
            "/health",
            "/customers",
            "/customers/{id}",
            "/customers/{id}/notification-channels",
            "/customers/{id}/notification-channels/{channel_type_id}",
            "/notification-channels",
            "/notifications",
        ] {
            assert!(paths.iter().any(|p| p.as_str() == expected), "missing {expected}");
        }
    }
}
