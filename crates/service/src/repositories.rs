use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::channel_type::{ChannelTypeRepository, SeaOrmChannelTypeRepository};
use crate::customer::{CustomerRepository, SeaOrmCustomerRepository};
use crate::memory::InMemoryStore;
use crate::notification::{NotificationRepository, SeaOrmNotificationRepository};
use crate::preference::{PreferenceRepository, SeaOrmPreferenceRepository};

/// The set of repositories a request handler can reach.
#[derive(Clone)]
pub struct Repositories {
    pub customers: Arc<dyn CustomerRepository>,
    pub preferences: Arc<dyn PreferenceRepository>,
    pub notifications: Arc<dyn NotificationRepository>,
    pub channel_types: Arc<dyn ChannelTypeRepository>,
}

impl Repositories {
    /// Repositories over a shared connection pool.
    pub fn seaorm(db: DatabaseConnection) -> Self {
        Self {
            customers: Arc::new(SeaOrmCustomerRepository { db: db.clone() }),
            preferences: Arc::new(SeaOrmPreferenceRepository { db: db.clone() }),
            notifications: Arc::new(SeaOrmNotificationRepository { db: db.clone() }),
            channel_types: Arc::new(SeaOrmChannelTypeRepository { db }),
        }
    }

    /// Repositories all backed by the same in-memory store.
    ///
    /// # Examples
    /// ```
    /// use service::{customer::CustomerRepository, memory::InMemoryStore, Repositories};
    /// use std::sync::Arc;
    /// let store = Arc::new(InMemoryStore::new());
    /// let repos = Repositories::in_memory(store);
    /// let created = tokio_test::block_on(repos.customers.create("alice")).unwrap();
    /// let found = tokio_test::block_on(repos.customers.get(created.id)).unwrap();
    /// assert_eq!(found.map(|c| c.name), Some("alice".to_string()));
    /// ```
    pub fn in_memory(store: Arc<InMemoryStore>) -> Self {
        Self {
            customers: store.clone(),
            preferences: store.clone(),
            notifications: store.clone(),
            channel_types: store,
        }
    }
}
