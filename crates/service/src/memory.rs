//! In-memory repositories for tests and doc examples.
//!
//! One [`InMemoryStore`] implements every repository trait over a single
//! lock, so multi-step operations (upsert, cascade delete) are atomic.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use models::{customer, customer_notification_channel as preference, notification, notification_channel};

use crate::channel_type::ChannelTypeRepository;
use crate::customer::CustomerRepository;
use crate::errors::ServiceError;
use crate::notification::NotificationRepository;
use crate::preference::{PreferenceRepository, UpsertOutcome};

#[derive(Default)]
struct State {
    customers: HashMap<Uuid, customer::Model>,
    preferences: Vec<preference::Model>,
    next_preference_id: i32,
    notifications: Vec<notification::Model>,
    channel_types: Vec<notification_channel::Model>,
}

#[derive(Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
    failing: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self { Self::default() }

    /// Make every subsequent call fail with a storage error (or stop failing).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub async fn add_channel_type(&self, name: &str) -> notification_channel::Model {
        let model = notification_channel::Model { id: Uuid::new_v4(), name: name.to_string() };
        self.state.write().await.channel_types.push(model.clone());
        model
    }

    /// Every stored notification, oldest first.
    pub async fn notifications(&self) -> Vec<notification::Model> {
        self.state.read().await.notifications.clone()
    }

    /// Every stored preference row regardless of customer.
    pub async fn all_preferences(&self) -> Vec<preference::Model> {
        self.state.read().await.preferences.clone()
    }

    fn check(&self) -> Result<(), ServiceError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ServiceError::Db("injected storage failure".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CustomerRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<customer::Model>, ServiceError> {
        self.check()?;
        Ok(self.state.read().await.customers.values().cloned().collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<customer::Model>, ServiceError> {
        self.check()?;
        Ok(self.state.read().await.customers.get(&id).cloned())
    }

    async fn create(&self, name: &str) -> Result<customer::Model, ServiceError> {
        self.check()?;
        let model = customer::Model { id: Uuid::new_v4(), name: name.to_string() };
        self.state.write().await.customers.insert(model.id, model.clone());
        Ok(model)
    }

    async fn update(&self, id: Uuid, name: &str) -> Result<(), ServiceError> {
        self.check()?;
        let mut state = self.state.write().await;
        let found = state.customers.get_mut(&id).ok_or_else(|| ServiceError::not_found("customer"))?;
        found.name = name.to_string();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        self.check()?;
        let mut state = self.state.write().await;
        if !state.customers.contains_key(&id) {
            return Err(ServiceError::not_found("customer"));
        }
        state.preferences.retain(|p| p.customer_id != id);
        state.customers.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl PreferenceRepository for InMemoryStore {
    async fn list_for_customer(&self, customer_id: Uuid) -> Result<Vec<preference::Model>, ServiceError> {
        self.check()?;
        let state = self.state.read().await;
        Ok(state.preferences.iter().filter(|p| p.customer_id == customer_id).cloned().collect())
    }

    async fn upsert(
        &self,
        customer_id: Uuid,
        channel_type_id: Uuid,
        lookup_key: &str,
        contact_customer: bool,
    ) -> Result<UpsertOutcome, ServiceError> {
        self.check()?;
        let mut state = self.state.write().await;
        let mut updated = 0;
        for p in state
            .preferences
            .iter_mut()
            .filter(|p| p.customer_id == customer_id && p.notification_channel_type_id == channel_type_id)
        {
            p.notification_channel_lookup_key = lookup_key.to_string();
            p.contact_customer = contact_customer;
            updated += 1;
        }
        if updated > 0 {
            return Ok(UpsertOutcome::Updated);
        }
        state.next_preference_id += 1;
        let id = state.next_preference_id;
        state.preferences.push(preference::Model {
            id,
            customer_id,
            notification_channel_type_id: channel_type_id,
            notification_channel_lookup_key: lookup_key.to_string(),
            contact_customer,
        });
        Ok(UpsertOutcome::Inserted)
    }
}

#[async_trait]
impl NotificationRepository for InMemoryStore {
    async fn create(&self, from: &str, text: &str) -> Result<notification::Model, ServiceError> {
        self.check()?;
        let model = notification::Model {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            sender: from.to_string(),
            text: text.to_string(),
        };
        self.state.write().await.notifications.push(model.clone());
        Ok(model)
    }
}

#[async_trait]
impl ChannelTypeRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<notification_channel::Model>, ServiceError> {
        self.check()?;
        let mut all = self.state.read().await.channel_types.clone();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upsert_then_cascade_delete() {
        let store = InMemoryStore::new();
        let c = CustomerRepository::create(&store, "dave").await.unwrap();
        let sms = Uuid::new_v4();

        assert_eq!(store.upsert(c.id, sms, "1", true).await.unwrap(), UpsertOutcome::Inserted);
        assert_eq!(store.upsert(c.id, sms, "2", false).await.unwrap(), UpsertOutcome::Updated);
        let rows = store.list_for_customer(c.id).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].notification_channel_lookup_key, "2");

        CustomerRepository::delete(&store, c.id).await.unwrap();
        assert!(store.all_preferences().await.is_empty());
        assert!(CustomerRepository::get(&store, c.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn upsert_does_not_require_customer() {
        let store = InMemoryStore::new();
        let orphan = Uuid::new_v4();
        let email = Uuid::new_v4();
        assert_eq!(store.upsert(orphan, email, "a@x", true).await.unwrap(), UpsertOutcome::Inserted);
        assert_eq!(store.list_for_customer(orphan).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failing_store_reports_db_error() {
        let store = InMemoryStore::new();
        store.set_failing(true);
        assert!(matches!(CustomerRepository::list(&store).await, Err(ServiceError::Db(_))));
        store.set_failing(false);
        assert!(CustomerRepository::list(&store).await.unwrap().is_empty());
    }

    #[test]
    fn notification_create_outside_runtime() {
        let store = InMemoryStore::new();
        let n = tokio_test::block_on(NotificationRepository::create(&store, "alice", "hi")).unwrap();
        assert_eq!(n.sender, "alice");
    }
}
