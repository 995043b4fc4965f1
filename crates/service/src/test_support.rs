//! In-memory SQLite fixtures shared by service and HTTP tests.

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};

use models::address::Address;
use models::company::{self, CompanyCreate};
use models::customer::{self, CustomerCreate};

/// Fresh database with the `company` and `customer` tables.
///
/// The pool is pinned to a single connection: every SQLite in-memory
/// connection is its own database.
pub async fn get_db() -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await?;

    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let tables = [
        schema.create_table_from_entity(company::Entity),
        schema.create_table_from_entity(customer::Entity),
    ];
    for stmt in &tables {
        db.execute(backend.build(stmt)).await?;
    }
    Ok(db)
}

pub fn sample_address() -> Address {
    Address {
        line1: "221B Baker Street".into(),
        line2: None,
        city: "London".into(),
        region: None,
        postal_code: "NW1 6XE".into(),
        country: "GB".into(),
    }
}

pub fn company_input(name: &str) -> CompanyCreate {
    CompanyCreate {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', "-")),
        address: sample_address(),
    }
}

pub fn customer_input(company_id: &str, first_name: &str) -> CustomerCreate {
    CustomerCreate {
        company_id: company_id.to_string(),
        address: sample_address(),
        first_name: first_name.to_string(),
        last_name: "Holmes".into(),
        email: format!("{}@example.com", first_name.to_lowercase()),
    }
}
