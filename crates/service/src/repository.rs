use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PrimaryKeyTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use models::Resource;

/// Resolved find arguments: optional filter, `take` / `skip` row bounds.
#[derive(Clone, Debug)]
pub struct FindOptions<F> {
    pub filter: Option<F>,
    pub take: Option<u64>,
    pub skip: Option<u64>,
}

impl<F> Default for FindOptions<F> {
    fn default() -> Self { Self { filter: None, take: None, skip: None } }
}

/// Persistence port used by [`crate::CrudService`].
///
/// Mutations report affected-row counts; turning a zero count into a
/// domain error is the service's job, not the repository's.
#[async_trait]
pub trait ResourceRepository<R: Resource>: Send + Sync {
    async fn find_one(&self, id: &str) -> Result<Option<R>, DbErr>;
    async fn find(&self, options: FindOptions<R::Filter>) -> Result<Vec<R>, DbErr>;
    /// Returns the identifier of the inserted row.
    async fn insert(&self, record: R::ActiveModel) -> Result<String, DbErr>;
    async fn update(&self, id: &str, patch: R::ActiveModel) -> Result<u64, DbErr>;
    async fn delete(&self, id: &str) -> Result<u64, DbErr>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmRepository<R> {
    pub db: DatabaseConnection,
    _resource: PhantomData<fn() -> R>,
}

impl<R> SeaOrmRepository<R> {
    pub fn new(db: DatabaseConnection) -> Self { Self { db, _resource: PhantomData } }
}

impl<R> Clone for SeaOrmRepository<R> {
    fn clone(&self) -> Self { Self::new(self.db.clone()) }
}

#[async_trait]
impl<R> ResourceRepository<R> for SeaOrmRepository<R>
where
    R: Resource,
    <<R::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType: Into<String>,
{
    async fn find_one(&self, id: &str) -> Result<Option<R>, DbErr> {
        R::Entity::find().filter(R::id_column().eq(id)).one(&self.db).await
    }

    async fn find(&self, options: FindOptions<R::Filter>) -> Result<Vec<R>, DbErr> {
        let mut select = R::Entity::find();
        if let Some(filter) = &options.filter {
            select = select.filter(R::filter_condition(filter));
        }
        // creation order, id as tie-breaker, keeps pages stable
        select = select
            .order_by_asc(R::created_at_column())
            .order_by_asc(R::id_column());
        if let Some(take) = options.take {
            select = select.limit(take);
        }
        if let Some(skip) = options.skip {
            select = select.offset(skip);
        }
        select.all(&self.db).await
    }

    async fn insert(&self, record: R::ActiveModel) -> Result<String, DbErr> {
        let res = R::Entity::insert(record).exec(&self.db).await?;
        Ok(res.last_insert_id.into())
    }

    async fn update(&self, id: &str, patch: R::ActiveModel) -> Result<u64, DbErr> {
        let res = R::Entity::update_many()
            .set(patch)
            .filter(R::id_column().eq(id))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected)
    }

    async fn delete(&self, id: &str) -> Result<u64, DbErr> {
        let res = R::Entity::delete_many()
            .filter(R::id_column().eq(id))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected)
    }
}
