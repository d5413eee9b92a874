//! Create `notification_channels` lookup table (email, sms, ...).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NotificationChannels::Table)
                    .if_not_exists()
                    .col(uuid(NotificationChannels::Id).primary_key())
                    .col(string(NotificationChannels::Name))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(NotificationChannels::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum NotificationChannels { Table, Id, Name }
