//! Create `customer_notification_channels` join table.
//!
//! No foreign keys: the service deletes a customer's rows itself before
//! deleting the customer.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CustomerNotificationChannels::Table)
                    .if_not_exists()
                    .col(pk_auto(CustomerNotificationChannels::Id))
                    .col(uuid(CustomerNotificationChannels::CustomerId))
                    .col(uuid(CustomerNotificationChannels::NotificationChannelTypeId))
                    .col(string(CustomerNotificationChannels::NotificationChannelLookupKey))
                    .col(boolean(CustomerNotificationChannels::ContactCustomer))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CustomerNotificationChannels::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CustomerNotificationChannels {
    Table,
    Id,
    CustomerId,
    NotificationChannelTypeId,
    NotificationChannelLookupKey,
    ContactCustomer,
}
