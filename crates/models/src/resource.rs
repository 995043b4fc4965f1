use sea_orm::{
    entity::prelude::DateTimeWithTimeZone, ActiveModelBehavior, ActiveModelTrait, Condition,
    EntityTrait, FromQueryResult,
};
use serde::Serialize;

use crate::validate::Validate;

/// A persisted entity exposed through the generic CRUD service.
///
/// Implemented on the SeaORM `Model` of each resource. Every resource has an
/// id and server-assigned timestamps, exposed through the accessors below so
/// generic code never needs to know the concrete model. The trait also ties
/// together the entity, its active model and the three request shapes the
/// service accepts.
pub trait Resource: Clone + Send + Sync + Serialize + FromQueryResult + Sized + 'static {
    type Entity: EntityTrait<Model = Self>;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + 'static;
    /// Create payload; never carries id or timestamps.
    type Create: Validate + Send + Sync + 'static;
    /// Partial update payload carrying the target id.
    type Update: Validate + Send + Sync + 'static;
    /// Exact-match filter; every field optional.
    type Filter: Default + Send + Sync + std::fmt::Debug + 'static;

    /// Human readable type name used in error messages.
    const NAME: &'static str;
    const ID_PREFIX: &'static str;

    fn id(&self) -> &str;
    fn created_at(&self) -> DateTimeWithTimeZone;
    fn updated_at(&self) -> DateTimeWithTimeZone;

    fn id_column() -> <Self::Entity as EntityTrait>::Column;
    fn created_at_column() -> <Self::Entity as EntityTrait>::Column;

    /// Full row for insertion: `id` and both timestamps come from the caller.
    fn new_active_model(id: String, input: Self::Create, now: DateTimeWithTimeZone) -> Self::ActiveModel;

    /// Id of the record an update targets.
    fn update_id(input: &Self::Update) -> &str;

    /// Active model where only the supplied fields (plus `updated_at`) are
    /// set. `current` is the stored record, used to merge nested values.
    fn into_patch(input: Self::Update, current: &Self, now: DateTimeWithTimeZone) -> Self::ActiveModel;

    fn filter_condition(filter: &Self::Filter) -> Condition;
}
