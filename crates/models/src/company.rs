use sea_orm::{entity::prelude::*, Condition, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::{
    address::{Address, AddressUpdate},
    errors::ModelError,
    resource::Resource,
    validate::{self, Validate},
};

pub const ID_PREFIX: &str = "com_";

pub mod limits {
    pub const NAME_MAX_LENGTH: usize = 100;
    pub const EMAIL_MAX_LENGTH: usize = 100;
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub email: String,
    #[sea_orm(column_type = "Json")]
    pub address: Address,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::customer::Entity")]
    Customer,
}

impl Related<crate::customer::Entity> for Entity {
    fn to() -> RelationDef { Relation::Customer.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Parameters required for creating a Company.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyCreate {
    pub name: String,
    pub email: String,
    pub address: Address,
}

impl Validate for CompanyCreate {
    fn validate(&self) -> Result<(), ModelError> {
        validate::not_blank("name", &self.name)?;
        validate::max_length("name", &self.name, limits::NAME_MAX_LENGTH)?;
        validate::email("email", &self.email)?;
        validate::max_length("email", &self.email, limits::EMAIL_MAX_LENGTH)?;
        self.address.validate()
    }
}

/// Parameters for updating a Company. Absent fields are left untouched.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyUpdate {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<AddressUpdate>,
}

impl Validate for CompanyUpdate {
    fn validate(&self) -> Result<(), ModelError> {
        validate::resource_id("id", &self.id, Some(ID_PREFIX))?;
        if let Some(name) = &self.name {
            validate::not_blank("name", name)?;
            validate::max_length("name", name, limits::NAME_MAX_LENGTH)?;
        }
        if let Some(email) = &self.email {
            validate::email("email", email)?;
            validate::max_length("email", email, limits::EMAIL_MAX_LENGTH)?;
        }
        self.address.validate()
    }
}

/// Exact-match list filter.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyFilter {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Resource for Model {
    type Entity = Entity;
    type ActiveModel = ActiveModel;
    type Create = CompanyCreate;
    type Update = CompanyUpdate;
    type Filter = CompanyFilter;

    const NAME: &'static str = "Company";
    const ID_PREFIX: &'static str = ID_PREFIX;

    fn id(&self) -> &str { &self.id }
    fn created_at(&self) -> DateTimeWithTimeZone { self.created_at }
    fn updated_at(&self) -> DateTimeWithTimeZone { self.updated_at }

    fn id_column() -> Column { Column::Id }
    fn created_at_column() -> Column { Column::CreatedAt }

    fn new_active_model(id: String, input: CompanyCreate, now: DateTimeWithTimeZone) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            name: Set(input.name),
            email: Set(input.email),
            address: Set(input.address),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    fn update_id(input: &CompanyUpdate) -> &str { &input.id }

    fn into_patch(input: CompanyUpdate, current: &Self, now: DateTimeWithTimeZone) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            name: input.name.map_or(NotSet, Set),
            email: input.email.map_or(NotSet, Set),
            address: input.address.map_or(NotSet, |a| Set(a.apply_to(&current.address))),
            created_at: NotSet,
            updated_at: Set(now),
        }
    }

    fn filter_condition(filter: &CompanyFilter) -> Condition {
        Condition::all()
            .add_option(filter.name.as_ref().map(|v| Column::Name.eq(v.as_str())))
            .add_option(filter.email.as_ref().map(|v| Column::Email.eq(v.as_str())))
    }
}
