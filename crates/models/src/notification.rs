use chrono::Utc;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

/// Inbound notification. Written once, never updated.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub created_at: DateTimeUtc,
    #[sea_orm(column_name = "from")]
    #[serde(rename = "from")]
    pub sender: String,
    pub text: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// New notification stamped with the current UTC time.
pub fn new_record(sender: &str, text: &str) -> ActiveModel {
    ActiveModel {
        id: Set(Uuid::new_v4()),
        created_at: Set(Utc::now()),
        sender: Set(sender.to_string()),
        text: Set(text.to_string()),
    }
}
