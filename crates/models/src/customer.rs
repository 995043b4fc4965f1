use sea_orm::{entity::prelude::*, Condition, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::{
    address::{Address, AddressUpdate},
    company,
    errors::ModelError,
    ids,
    resource::Resource,
    validate::{self, Validate},
};

pub const ID_PREFIX: &str = "cus_";

pub mod limits {
    pub const NAME_MIN_LENGTH: usize = 2;
    pub const NAME_MAX_LENGTH: usize = 50;
    pub const EMAIL_MIN_LENGTH: usize = 5;
    pub const EMAIL_MAX_LENGTH: usize = 100;
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub company_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[sea_orm(column_type = "Json")]
    pub address: Address,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::company::Entity",
        from = "Column::CompanyId",
        to = "crate::company::Column::Id",
        on_delete = "Cascade"
    )]
    Company,
}

impl Related<company::Entity> for Entity {
    fn to() -> RelationDef { Relation::Company.def() }
}

impl ActiveModelBehavior for ActiveModel {}

fn validate_name(field: &str, value: &str) -> Result<(), ModelError> {
    validate::length(field, value, limits::NAME_MIN_LENGTH, limits::NAME_MAX_LENGTH)
}

fn validate_email(value: &str) -> Result<(), ModelError> {
    validate::email("email", value)?;
    validate::length("email", value, limits::EMAIL_MIN_LENGTH, limits::EMAIL_MAX_LENGTH)
}

/// Parameters required for creating a Customer.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreate {
    pub company_id: String,
    pub address: Address,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Validate for CustomerCreate {
    fn validate(&self) -> Result<(), ModelError> {
        validate::length("companyId", &self.company_id, ids::ID_LEN, ids::ID_LEN)?;
        validate::resource_id("companyId", &self.company_id, Some(company::ID_PREFIX))?;
        self.address.validate()?;
        validate_name("firstName", &self.first_name)?;
        validate_name("lastName", &self.last_name)?;
        validate_email(&self.email)
    }
}

/// Parameters for updating a Customer. Absent fields are left untouched.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdate {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub company_id: Option<String>,
    #[serde(default)]
    pub address: Option<AddressUpdate>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Validate for CustomerUpdate {
    fn validate(&self) -> Result<(), ModelError> {
        validate::resource_id("id", &self.id, Some(ID_PREFIX))?;
        if let Some(company_id) = &self.company_id {
            validate::resource_id("companyId", company_id, Some(company::ID_PREFIX))?;
        }
        self.address.validate()?;
        if let Some(v) = &self.first_name { validate_name("firstName", v)?; }
        if let Some(v) = &self.last_name { validate_name("lastName", v)?; }
        if let Some(v) = &self.email { validate_email(v)?; }
        Ok(())
    }
}

/// Exact-match list filter.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerFilter {
    pub company_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl Resource for Model {
    type Entity = Entity;
    type ActiveModel = ActiveModel;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Filter = CustomerFilter;

    const NAME: &'static str = "Customer";
    const ID_PREFIX: &'static str = ID_PREFIX;

    fn id(&self) -> &str { &self.id }
    fn created_at(&self) -> DateTimeWithTimeZone { self.created_at }
    fn updated_at(&self) -> DateTimeWithTimeZone { self.updated_at }

    fn id_column() -> Column { Column::Id }
    fn created_at_column() -> Column { Column::CreatedAt }

    fn new_active_model(id: String, input: CustomerCreate, now: DateTimeWithTimeZone) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            company_id: Set(input.company_id),
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            email: Set(input.email),
            address: Set(input.address),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    fn update_id(input: &CustomerUpdate) -> &str { &input.id }

    fn into_patch(input: CustomerUpdate, current: &Self, now: DateTimeWithTimeZone) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            company_id: input.company_id.map_or(NotSet, Set),
            first_name: input.first_name.map_or(NotSet, Set),
            last_name: input.last_name.map_or(NotSet, Set),
            email: input.email.map_or(NotSet, Set),
            address: input.address.map_or(NotSet, |a| Set(a.apply_to(&current.address))),
            created_at: NotSet,
            updated_at: Set(now),
        }
    }

    fn filter_condition(filter: &CustomerFilter) -> Condition {
        Condition::all()
            .add_option(filter.company_id.as_ref().map(|v| Column::CompanyId.eq(v.as_str())))
            .add_option(filter.first_name.as_ref().map(|v| Column::FirstName.eq(v.as_str())))
            .add_option(filter.last_name.as_ref().map(|v| Column::LastName.eq(v.as_str())))
            .add_option(filter.email.as_ref().map(|v| Column::Email.eq(v.as_str())))
    }
}
