use sea_orm::{entity::prelude::*, Condition, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::{customer, notification_channel};

/// A customer's settings for one notification channel type.
///
/// `(customer_id, notification_channel_type_id)` identifies the row for
/// business purposes; `id` is only a surrogate.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer_notification_channels")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_id: Uuid,
    pub notification_channel_type_id: Uuid,
    #[serde(rename = "lookup_key")]
    pub notification_channel_lookup_key: String,
    pub contact_customer: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Customer,
    NotificationChannel,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Customer => Entity::belongs_to(customer::Entity)
                .from(Column::CustomerId)
                .to(customer::Column::Id)
                .into(),
            Relation::NotificationChannel => Entity::belongs_to(notification_channel::Entity)
                .from(Column::NotificationChannelTypeId)
                .to(notification_channel::Column::Id)
                .into(),
        }
    }
}

impl Related<customer::Entity> for Entity {
    fn to() -> RelationDef { Relation::Customer.def() }
}

impl Related<notification_channel::Entity> for Entity {
    fn to() -> RelationDef { Relation::NotificationChannel.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn new_record(customer_id: Uuid, channel_type_id: Uuid, lookup_key: &str, contact_customer: bool) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        customer_id: Set(customer_id),
        notification_channel_type_id: Set(channel_type_id),
        notification_channel_lookup_key: Set(lookup_key.to_string()),
        contact_customer: Set(contact_customer),
    }
}

/// Patch touching only the lookup key and the contact flag.
pub fn settings_patch(lookup_key: &str, contact_customer: bool) -> ActiveModel {
    ActiveModel {
        notification_channel_lookup_key: Set(lookup_key.to_string()),
        contact_customer: Set(contact_customer),
        ..Default::default()
    }
}

pub fn by_customer(customer_id: Uuid) -> Condition {
    Condition::all().add(Column::CustomerId.eq(customer_id))
}

pub fn by_customer_and_channel(customer_id: Uuid, channel_type_id: Uuid) -> Condition {
    Condition::all()
        .add(Column::CustomerId.eq(customer_id))
        .add(Column::NotificationChannelTypeId.eq(channel_type_id))
}
