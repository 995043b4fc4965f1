//! OpenAPI document served at `/api-docs/openapi.json`.
//!
//! The doc structs mirror the JSON shapes of the models without pulling
//! utoipa into the `models` crate.

use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CreatedDoc { pub id: String }

#[derive(ToSchema)]
pub struct ErrorBodyDoc {
    /// invalid_request | resource_not_found | database_error
    #[schema(rename = "type")]
    pub error_type: String,
    pub status: u16,
    pub message: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct AddressDoc {
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub region: Option<String>,
    pub postal_code: String,
    /// ISO 3166-1 alpha-2
    pub country: String,
}

/// Partial address; absent fields keep their stored value.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct AddressUpdateDoc {
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CompanyDoc {
    pub id: String,
    pub name: String,
    pub email: String,
    pub address: AddressDoc,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(ToSchema)]
pub struct CompanyCreateDoc {
    pub name: String,
    pub email: String,
    pub address: AddressDoc,
}

#[derive(ToSchema)]
pub struct CompanyUpdateDoc {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<AddressUpdateDoc>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CustomerDoc {
    pub id: String,
    pub company_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: AddressDoc,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CustomerCreateDoc {
    pub company_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: AddressDoc,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CustomerUpdateDoc {
    pub company_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub address: Option<AddressUpdateDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::companies::list,
        crate::routes::companies::create,
        crate::routes::companies::get,
        crate::routes::companies::update,
        crate::routes::companies::delete,
        crate::routes::customers::list,
        crate::routes::customers::create,
        crate::routes::customers::get,
        crate::routes::customers::update,
        crate::routes::customers::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CreatedDoc,
            ErrorBodyDoc,
            AddressDoc,
            AddressUpdateDoc,
            CompanyDoc,
            CompanyCreateDoc,
            CompanyUpdateDoc,
            CustomerDoc,
            CustomerCreateDoc,
            CustomerUpdateDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "companies"),
        (name = "customers")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_resource_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/health", "/companies", "/companies/{id}", "/customers", "/customers/{id}"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
