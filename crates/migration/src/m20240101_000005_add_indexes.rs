use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One preference row per (customer, channel type)
        manager
            .create_index(
                Index::create()
                    .name("uniq_customer_notification_channel")
                    .table(CustomerNotificationChannels::Table)
                    .col(CustomerNotificationChannels::CustomerId)
                    .col(CustomerNotificationChannels::NotificationChannelTypeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_notification_created_at")
                    .table(Notifications::Table)
                    .col(Notifications::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_notification_created_at").table(Notifications::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_customer_notification_channel").table(CustomerNotificationChannels::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum CustomerNotificationChannels { Table, CustomerId, NotificationChannelTypeId }

#[derive(DeriveIden)]
enum Notifications { Table, CreatedAt }
