use sea_orm::{entity::prelude::*, Condition, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// New customer with a freshly generated id.
pub fn new_record(name: &str) -> ActiveModel {
    ActiveModel { id: Set(Uuid::new_v4()), name: Set(name.to_string()) }
}

/// Name-only patch; the id is left untouched.
pub fn rename_patch(name: &str) -> ActiveModel {
    ActiveModel { name: Set(name.to_string()), ..Default::default() }
}

pub fn by_id(id: Uuid) -> Condition {
    Condition::all().add(Column::Id.eq(id))
}
