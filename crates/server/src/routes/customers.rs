use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::info;
use utoipa::IntoParams;

use common::types::Created;
use models::customer::{self, CustomerCreate, CustomerFilter, CustomerUpdate};
use models::{validate, Validate};
use service::{ListOptions, ListQuery};

use crate::errors::ApiError;
use crate::responses::{CreatedResponse, NoContentResponse, OkResponse};
use crate::state::ServerState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CustomerListParams {
    pub company_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub limit: Option<u64>,
    pub page: Option<u64>,
}

impl CustomerListParams {
    pub fn into_query(self) -> Result<Option<ListQuery<CustomerFilter>>, ApiError> {
        let options = ListOptions::new(self.limit, self.page);
        options.validate()?;
        let filter = CustomerFilter {
            company_id: self.company_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        };
        let no_filter = filter.company_id.is_none()
            && filter.first_name.is_none()
            && filter.last_name.is_none()
            && filter.email.is_none();
        if options.is_empty() && no_filter {
            return Ok(None);
        }
        let query = ListQuery::new(filter);
        Ok(Some(if options.is_empty() { query } else { query.with_options(options) }))
    }
}

fn checked_id(id: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    let Path(id) = id?;
    validate::resource_id("id", &id, Some(customer::ID_PREFIX))?;
    Ok(id)
}

#[utoipa::path(
    get, path = "/customers", tag = "customers",
    params(CustomerListParams),
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::CustomerDoc]),
        (status = 400, description = "Invalid query", body = crate::openapi::ErrorBodyDoc),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    params: Result<Query<CustomerListParams>, QueryRejection>,
) -> Result<OkResponse<Vec<customer::Model>>, ApiError> {
    let Query(params) = params?;
    let rows = state.customers.list(params.into_query()?).await?;
    Ok(OkResponse(rows))
}

#[utoipa::path(
    post, path = "/customers", tag = "customers",
    request_body = crate::openapi::CustomerCreateDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CreatedDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorBodyDoc),
        (status = 404, description = "Company Not Found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CustomerCreate>, JsonRejection>,
) -> Result<CreatedResponse<Created>, ApiError> {
    let Json(input) = payload?;
    input.validate()?;
    // the owning company must exist before a customer can reference it
    state.companies.get_or_fail(&input.company_id).await?;
    let id = state.customers.create(input).await?;
    info!(%id, "customer created");
    Ok(CreatedResponse(Created { id }))
}

#[utoipa::path(
    get, path = "/customers/{id}", tag = "customers",
    params(("id" = String, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CustomerDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<OkResponse<customer::Model>, ApiError> {
    let id = checked_id(id)?;
    Ok(OkResponse(state.customers.get_or_fail(&id).await?))
}

#[utoipa::path(
    patch, path = "/customers/{id}", tag = "customers",
    params(("id" = String, Path, description = "Customer ID")),
    request_body = crate::openapi::CustomerUpdateDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorBodyDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<CustomerUpdate>, JsonRejection>,
) -> Result<NoContentResponse, ApiError> {
    let id = checked_id(id)?;
    let Json(mut input) = payload?;
    input.id = id;
    input.validate()?;
    if let Some(company_id) = &input.company_id {
        state.companies.get_or_fail(company_id).await?;
    }
    state.customers.update(input).await?;
    Ok(NoContentResponse)
}

#[utoipa::path(
    delete, path = "/customers/{id}", tag = "customers",
    params(("id" = String, Path, description = "Customer ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<NoContentResponse, ApiError> {
    let id = checked_id(id)?;
    state.customers.delete(&id).await?;
    Ok(NoContentResponse)
}
