use async_trait::async_trait;
use sea_orm::{Condition, DatabaseConnection, TransactionTrait};
use tracing::{info, instrument};
use uuid::Uuid;

use models::{customer, customer_notification_channel as preference, gateway};
use crate::errors::ServiceError;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<customer::Model>, ServiceError>;
    async fn get(&self, id: Uuid) -> Result<Option<customer::Model>, ServiceError>;
    async fn create(&self, name: &str) -> Result<customer::Model, ServiceError>;
    /// Rename; `NotFound` when no customer has `id`.
    async fn update(&self, id: Uuid, name: &str) -> Result<(), ServiceError>;
    /// Remove the customer's channel preferences, then the customer.
    async fn delete(&self, id: Uuid) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmCustomerRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn list(&self) -> Result<Vec<customer::Model>, ServiceError> {
        Ok(gateway::find_all::<customer::Entity, _>(&self.db, Condition::all(), None).await?)
    }

    async fn get(&self, id: Uuid) -> Result<Option<customer::Model>, ServiceError> {
        Ok(gateway::find_one::<customer::Entity, _>(&self.db, customer::by_id(id)).await?)
    }

    #[instrument(skip(self))]
    async fn create(&self, name: &str) -> Result<customer::Model, ServiceError> {
        let created = gateway::create(&self.db, customer::new_record(name)).await?;
        info!(customer_id = %created.id, "customer_created");
        Ok(created)
    }

    #[instrument(skip(self, name))]
    async fn update(&self, id: Uuid, name: &str) -> Result<(), ServiceError> {
        let rows = gateway::update_where(&self.db, customer::by_id(id), customer::rename_patch(name)).await?;
        if rows == 0 {
            return Err(ServiceError::not_found("customer"));
        }
        Ok(())
    }

    /// Locks the customer row, then deletes its preferences and the row in
    /// one transaction. An upsert for the same customer blocks on the lock
    /// until the cascade commits.
    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;
        if gateway::lock_one::<customer::Entity, _>(&txn, customer::by_id(id)).await?.is_none() {
            txn.rollback().await?;
            return Err(ServiceError::not_found("customer"));
        }
        let removed_preferences =
            gateway::delete_where::<preference::Entity, _>(&txn, preference::by_customer(id)).await?;
        let removed = gateway::delete_where::<customer::Entity, _>(&txn, customer::by_id(id)).await?;
        if removed == 0 {
            txn.rollback().await?;
            return Err(ServiceError::not_found("customer"));
        }
        txn.commit().await?;
        info!(customer_id = %id, removed_preferences, "customer_deleted");
        Ok(())
    }
}
