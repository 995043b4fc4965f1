use std::{marker::PhantomData, sync::Arc};

use chrono::Utc;
use sea_orm::entity::prelude::DateTimeWithTimeZone;
use tracing::{debug, info, instrument};

use models::{ids, Resource};

use crate::errors::ServiceError;
use crate::pagination::ListQuery;
use crate::repository::{FindOptions, ResourceRepository, SeaOrmRepository};

/// Generic CRUD operations for one resource type.
///
/// Instantiated once per resource at startup and shared through the HTTP
/// state; the only state it holds is the repository handle.
pub struct CrudService<R, Repo = SeaOrmRepository<R>> {
    repo: Arc<Repo>,
    _resource: PhantomData<fn() -> R>,
}

impl<R, Repo> Clone for CrudService<R, Repo> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo), _resource: PhantomData } }
}

impl<R> CrudService<R, SeaOrmRepository<R>>
where
    R: Resource,
    SeaOrmRepository<R>: ResourceRepository<R>,
{
    pub fn from_db(db: sea_orm::DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmRepository::new(db)))
    }
}

impl<R, Repo> CrudService<R, Repo>
where
    R: Resource,
    Repo: ResourceRepository<R>,
{
    pub fn new(repo: Arc<Repo>) -> Self { Self { repo, _resource: PhantomData } }

    fn now() -> DateTimeWithTimeZone { Utc::now().into() }

    /// Persist a new record under a freshly generated id and return that id.
    #[instrument(skip_all, fields(resource = R::NAME))]
    pub async fn create(&self, input: R::Create) -> Result<String, ServiceError> {
        let id = ids::generate(R::ID_PREFIX);
        let record = R::new_active_model(id, input, Self::now());
        let id = self.repo.insert(record).await?;
        info!(%id, "created");
        Ok(id)
    }

    /// Look up a record; absence is not an error.
    #[instrument(skip(self), fields(resource = R::NAME))]
    pub async fn get(&self, id: &str) -> Result<Option<R>, ServiceError> {
        Ok(self.repo.find_one(id).await?)
    }

    pub async fn get_or_fail(&self, id: &str) -> Result<R, ServiceError> {
        self.get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("retrieve", R::NAME, id))
    }

    /// Apply the supplied fields only; refreshes `updated_at`.
    ///
    /// The stored record is read first so nested values can be merged. A
    /// record deleted between the read and the write still ends in NotFound.
    #[instrument(skip_all, fields(resource = R::NAME))]
    pub async fn update(&self, input: R::Update) -> Result<(), ServiceError> {
        let id = R::update_id(&input).to_owned();
        let current = self
            .repo
            .find_one(&id)
            .await?
            .ok_or_else(|| ServiceError::not_found("update", R::NAME, &id))?;
        debug!(%id, last_updated = %current.updated_at(), "patching");
        let patch = R::into_patch(input, &current, Self::now());
        let affected = self.repo.update(current.id(), patch).await?;
        if affected == 0 {
            return Err(ServiceError::not_found("update", R::NAME, &id));
        }
        info!(%id, "updated");
        Ok(())
    }

    #[instrument(skip(self), fields(resource = R::NAME))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let affected = self.repo.delete(id).await?;
        if affected == 0 {
            return Err(ServiceError::not_found("delete", R::NAME, id));
        }
        info!(%id, "deleted");
        Ok(())
    }

    /// Every record without a query; otherwise exact-match filtering with
    /// optional offset pagination (see [`crate::pagination`]).
    #[instrument(skip_all, fields(resource = R::NAME))]
    pub async fn list(&self, query: Option<ListQuery<R::Filter>>) -> Result<Vec<R>, ServiceError> {
        let Some(query) = query else {
            return Ok(self.repo.find(FindOptions::default()).await?);
        };
        let (take, skip) = match query.options {
            Some(opts) => {
                if opts.page_ignored() {
                    debug!(page = ?opts.page, "page without limit; pagination ignored");
                }
                opts.take_skip()
            }
            None => (None, None),
        };
        let rows = self
            .repo
            .find(FindOptions { filter: Some(query.filter), take, skip })
            .await?;
        debug!(count = rows.len(), ?take, ?skip, "listed");
        Ok(rows)
    }
}
