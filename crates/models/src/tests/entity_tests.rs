use chrono::{Duration, Utc};
use sea_orm::entity::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, EntityTrait, QueryFilter, Schema,
};

use crate::address::{self, AddressUpdate};
use crate::company::{self, CompanyCreate, CompanyFilter, CompanyUpdate};
use crate::{ids, Resource};

async fn setup_db() -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;
    let schema = Schema::new(db.get_database_backend());
    let stmt = schema.create_table_from_entity(company::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await?;
    Ok(db)
}

fn input(name: &str) -> CompanyCreate {
    CompanyCreate { name: name.into(), email: format!("{name}@example.com"), address: address::sample() }
}

#[tokio::test]
async fn new_active_model_round_trips_address_json() -> anyhow::Result<()> {
    let db = setup_db().await?;
    let id = ids::generate(company::ID_PREFIX);
    let now: DateTimeWithTimeZone = Utc::now().into();
    let am = company::Model::new_active_model(id.clone(), input("acme"), now);
    company::Entity::insert(am).exec_without_returning(&db).await?;

    let found = company::Entity::find_by_id(id.clone()).one(&db).await?.unwrap();
    assert_eq!(found.id, id);
    assert_eq!(found.address, address::sample());
    assert_eq!(found.created_at, found.updated_at);
    Ok(())
}

#[tokio::test]
async fn patch_sets_only_supplied_columns() -> anyhow::Result<()> {
    let db = setup_db().await?;
    let id = ids::generate(company::ID_PREFIX);
    let created: DateTimeWithTimeZone = Utc::now().into();
    company::Entity::insert(company::Model::new_active_model(id.clone(), input("acme"), created))
        .exec_without_returning(&db)
        .await?;

    let current = company::Entity::find_by_id(id.clone()).one(&db).await?.unwrap();
    let later = created + Duration::seconds(5);
    let update = CompanyUpdate {
        id: id.clone(),
        name: Some("renamed".into()),
        address: Some(AddressUpdate { city: Some("Ottawa".into()), ..Default::default() }),
        ..Default::default()
    };
    assert_eq!(company::Model::update_id(&update), id);
    let patch = company::Model::into_patch(update, &current, later);
    let res = company::Entity::update_many()
        .set(patch)
        .filter(company::Model::filter_condition(&CompanyFilter { name: Some("acme".into()), ..Default::default() }))
        .exec(&db)
        .await?;
    assert_eq!(res.rows_affected, 1);

    let found = company::Entity::find_by_id(id).one(&db).await?.unwrap();
    assert_eq!(found.name, "renamed");
    assert_eq!(found.email, "acme@example.com");
    assert_eq!(found.address.city, "Ottawa");
    assert_eq!(found.address.line1, address::sample().line1);
    assert_eq!(found.created_at, created);
    assert_eq!(found.updated_at, later);
    Ok(())
}

#[test]
fn empty_filter_matches_everything() {
    let cond = company::Model::filter_condition(&CompanyFilter::default());
    assert!(cond.is_empty());
}
