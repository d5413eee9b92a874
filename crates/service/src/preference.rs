use async_trait::async_trait;
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{debug, instrument};
use uuid::Uuid;

use models::errors::StoreError;
use models::{customer, customer_notification_channel as preference, gateway};
use crate::errors::ServiceError;

/// Which branch of the update-or-insert protocol an upsert took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Updated,
    Inserted,
}

#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    async fn list_for_customer(&self, customer_id: Uuid) -> Result<Vec<preference::Model>, ServiceError>;

    /// Set the lookup key and contact flag for `(customer_id, channel_type_id)`:
    /// update the existing row, or insert one when the update matched nothing.
    /// The customer row is not required to exist.
    async fn upsert(
        &self,
        customer_id: Uuid,
        channel_type_id: Uuid,
        lookup_key: &str,
        contact_customer: bool,
    ) -> Result<UpsertOutcome, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmPreferenceRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl PreferenceRepository for SeaOrmPreferenceRepository {
    async fn list_for_customer(&self, customer_id: Uuid) -> Result<Vec<preference::Model>, ServiceError> {
        Ok(gateway::find_all::<preference::Entity, _>(
            &self.db,
            preference::by_customer(customer_id),
            Some(preference::Column::Id),
        )
        .await?)
    }

    /// Runs in one transaction that first locks the owning customer row when
    /// there is one, so two upserts for the same customer cannot both miss
    /// the update and both insert. Without a customer row the unique index
    /// arbitrates: the losing insert falls back to the update.
    #[instrument(skip(self, lookup_key))]
    async fn upsert(
        &self,
        customer_id: Uuid,
        channel_type_id: Uuid,
        lookup_key: &str,
        contact_customer: bool,
    ) -> Result<UpsertOutcome, ServiceError> {
        let txn = self.db.begin().await?;

        let customer_locked = gateway::lock_one::<customer::Entity, _>(&txn, customer::by_id(customer_id))
            .await?
            .is_some();
        let condition = preference::by_customer_and_channel(customer_id, channel_type_id);
        let patch = || preference::settings_patch(lookup_key, contact_customer);

        let updated = gateway::update_where(&txn, condition.clone(), patch()).await?;

        // nothing updated so it doesn't exist; insert it
        let outcome = if updated == 0 {
            let savepoint = txn.begin().await?;
            match gateway::create(
                &savepoint,
                preference::new_record(customer_id, channel_type_id, lookup_key, contact_customer),
            )
            .await
            {
                Ok(_) => {
                    savepoint.commit().await?;
                    UpsertOutcome::Inserted
                }
                Err(StoreError::Conflict(detail)) => {
                    savepoint.rollback().await?;
                    debug!(%detail, "preference inserted concurrently; updating instead");
                    gateway::update_where(&txn, condition, patch()).await?;
                    UpsertOutcome::Updated
                }
                Err(e) => return Err(e.into()),
            }
        } else {
            UpsertOutcome::Updated
        };

        txn.commit().await?;
        debug!(?outcome, customer_locked, rows_updated = updated, "preference_upserted");
        Ok(outcome)
    }
}
