//! Typed find/create/update/delete-by-condition helpers.
//!
//! Every helper is generic over [`ConnectionTrait`], so repositories run the
//! same calls on the pool or inside a transaction. Updates and deletes
//! report rows affected; lookups report absence as `Ok(None)`.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, Condition, ConnectionTrait, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::errors::StoreError;

/// All rows of `E` matching `condition`, in the order given by `order`.
pub async fn find_all<E, C>(conn: &C, condition: Condition, order: Option<E::Column>) -> Result<Vec<E::Model>, StoreError>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let mut select: Select<E> = E::find().filter(condition);
    if let Some(col) = order {
        select = select.order_by_asc(col);
    }
    Ok(select.all(conn).await?)
}

/// First row of `E` matching `condition`, if any.
pub async fn find_one<E, C>(conn: &C, condition: Condition) -> Result<Option<E::Model>, StoreError>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    Ok(E::find().filter(condition).one(conn).await?)
}

/// Like [`find_one`] but takes a row lock (`SELECT ... FOR UPDATE`) held
/// until the surrounding transaction ends. Backends without row locks
/// (SQLite) ignore the clause and rely on their database-level write lock.
pub async fn lock_one<E, C>(conn: &C, condition: Condition) -> Result<Option<E::Model>, StoreError>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    Ok(E::find().filter(condition).lock_exclusive().one(conn).await?)
}

/// Insert `record` and return the stored row.
pub async fn create<A, C>(conn: &C, record: A) -> Result<<A::Entity as EntityTrait>::Model, StoreError>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    C: ConnectionTrait,
{
    Ok(record.insert(conn).await?)
}

/// Apply the `Set` fields of `patch` to every row matching `condition`.
pub async fn update_where<A, C>(conn: &C, condition: Condition, patch: A) -> Result<u64, StoreError>
where
    A: ActiveModelTrait,
    C: ConnectionTrait,
{
    let res = <A::Entity as EntityTrait>::update_many()
        .set(patch)
        .filter(condition)
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

/// Delete every row of `E` matching `condition`.
pub async fn delete_where<E, C>(conn: &C, condition: Condition) -> Result<u64, StoreError>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let res = E::delete_many().filter(condition).exec(conn).await?;
    Ok(res.rows_affected)
}
