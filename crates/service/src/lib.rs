//! Repository layer for the notification service.
//! - One async trait per entity, the seam between HTTP handlers and storage.
//! - sea-orm implementations built on `models::gateway`.
//! - An in-memory implementation for tests and local experiments.

pub mod errors;
pub mod customer;
pub mod preference;
pub mod notification;
pub mod channel_type;
pub mod memory;
pub mod repositories;
#[cfg(test)]
pub mod test_support;

pub use repositories::Repositories;
