use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::info;

use models::{gateway, notification};
use crate::errors::ServiceError;

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Persist a notification stamped with the current UTC time.
    async fn create(&self, from: &str, text: &str) -> Result<notification::Model, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmNotificationRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl NotificationRepository for SeaOrmNotificationRepository {
    async fn create(&self, from: &str, text: &str) -> Result<notification::Model, ServiceError> {
        let created = gateway::create(&self.db, notification::new_record(from, text)).await?;
        info!(notification_id = %created.id, "notification_created");
        Ok(created)
    }
}
