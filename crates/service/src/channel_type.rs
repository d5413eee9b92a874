use async_trait::async_trait;
use sea_orm::{Condition, DatabaseConnection};

use models::{gateway, notification_channel};
use crate::errors::ServiceError;

/// Read-only access to the notification channel type lookup table.
#[async_trait]
pub trait ChannelTypeRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<notification_channel::Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmChannelTypeRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ChannelTypeRepository for SeaOrmChannelTypeRepository {
    async fn list(&self) -> Result<Vec<notification_channel::Model>, ServiceError> {
        Ok(gateway::find_all::<notification_channel::Entity, _>(
            &self.db,
            Condition::all(),
            Some(notification_channel::Column::Name),
        )
        .await?)
    }
}
