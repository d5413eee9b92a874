//! Persistence layer: connection setup, the typed storage gateway and the
//! sea-orm entities for customers, channel types, channel preferences and
//! notifications.

pub mod errors;
pub mod db;
pub mod gateway;
pub mod customer;
pub mod notification_channel;
pub mod customer_notification_channel;
pub mod notification;

#[cfg(test)]
mod tests;
