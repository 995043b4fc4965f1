use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, validate::{self, Validate}};

pub mod limits {
    pub const LINE_MAX_LENGTH: usize = 100;
    pub const CITY_MAX_LENGTH: usize = 50;
    pub const REGION_MAX_LENGTH: usize = 50;
    pub const POSTAL_CODE_MAX_LENGTH: usize = 20;
}

/// Postal address stored inline (JSON column) with its owning resource.
///
/// Also the request shape for nested address input on create. Updates use
/// [`AddressUpdate`] and are merged onto the stored value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub postal_code: String,
    pub country: String,
}

impl Validate for Address {
    fn validate(&self) -> Result<(), ModelError> {
        validate::length("address.line1", &self.line1, 1, limits::LINE_MAX_LENGTH)?;
        if let Some(line2) = &self.line2 {
            validate::max_length("address.line2", line2, limits::LINE_MAX_LENGTH)?;
        }
        validate::length("address.city", &self.city, 1, limits::CITY_MAX_LENGTH)?;
        if let Some(region) = &self.region {
            validate::max_length("address.region", region, limits::REGION_MAX_LENGTH)?;
        }
        validate::length("address.postalCode", &self.postal_code, 1, limits::POSTAL_CODE_MAX_LENGTH)?;
        validate::country_code("address.country", &self.country)?;
        Ok(())
    }
}

/// Nested partial update; absent fields keep their stored value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressUpdate {
    #[serde(default)]
    pub line1: Option<String>,
    #[serde(default)]
    pub line2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl AddressUpdate {
    pub fn apply_to(self, base: &Address) -> Address {
        Address {
            line1: self.line1.unwrap_or_else(|| base.line1.clone()),
            line2: self.line2.or_else(|| base.line2.clone()),
            city: self.city.unwrap_or_else(|| base.city.clone()),
            region: self.region.or_else(|| base.region.clone()),
            postal_code: self.postal_code.unwrap_or_else(|| base.postal_code.clone()),
            country: self.country.unwrap_or_else(|| base.country.clone()),
        }
    }
}

impl Validate for AddressUpdate {
    fn validate(&self) -> Result<(), ModelError> {
        if let Some(line1) = &self.line1 {
            validate::length("address.line1", line1, 1, limits::LINE_MAX_LENGTH)?;
        }
        if let Some(line2) = &self.line2 {
            validate::max_length("address.line2", line2, limits::LINE_MAX_LENGTH)?;
        }
        if let Some(city) = &self.city {
            validate::length("address.city", city, 1, limits::CITY_MAX_LENGTH)?;
        }
        if let Some(region) = &self.region {
            validate::max_length("address.region", region, limits::REGION_MAX_LENGTH)?;
        }
        if let Some(postal_code) = &self.postal_code {
            validate::length("address.postalCode", postal_code, 1, limits::POSTAL_CODE_MAX_LENGTH)?;
        }
        if let Some(country) = &self.country {
            validate::country_code("address.country", country)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn sample() -> Address {
    Address {
        line1: "1 Main Street".into(),
        line2: None,
        city: "Toronto".into(),
        region: Some("ON".into()),
        postal_code: "M5V 2T6".into(),
        country: "CA".into(),
    }
}
