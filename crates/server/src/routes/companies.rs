use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::info;
use utoipa::IntoParams;

use common::types::Created;
use models::company::{self, CompanyCreate, CompanyFilter, CompanyUpdate};
use models::{validate, Validate};
use service::{ListOptions, ListQuery};

use crate::errors::ApiError;
use crate::responses::{CreatedResponse, NoContentResponse, OkResponse};
use crate::state::ServerState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CompanyListParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub limit: Option<u64>,
    pub page: Option<u64>,
}

impl CompanyListParams {
    /// `None` when no parameter was supplied at all.
    pub fn into_query(self) -> Result<Option<ListQuery<CompanyFilter>>, ApiError> {
        let options = ListOptions::new(self.limit, self.page);
        options.validate()?;
        let filter = CompanyFilter { name: self.name, email: self.email };
        if options.is_empty() && filter.name.is_none() && filter.email.is_none() {
            return Ok(None);
        }
        let query = ListQuery::new(filter);
        Ok(Some(if options.is_empty() { query } else { query.with_options(options) }))
    }
}

fn checked_id(id: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    let Path(id) = id?;
    validate::resource_id("id", &id, Some(company::ID_PREFIX))?;
    Ok(id)
}

#[utoipa::path(
    get, path = "/companies", tag = "companies",
    params(CompanyListParams),
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::CompanyDoc]),
        (status = 400, description = "Invalid query", body = crate::openapi::ErrorBodyDoc),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    params: Result<Query<CompanyListParams>, QueryRejection>,
) -> Result<OkResponse<Vec<company::Model>>, ApiError> {
    let Query(params) = params?;
    let rows = state.companies.list(params.into_query()?).await?;
    Ok(OkResponse(rows))
}

#[utoipa::path(
    post, path = "/companies", tag = "companies",
    request_body = crate::openapi::CompanyCreateDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CreatedDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorBodyDoc),
        (status = 500, description = "Create Failed", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CompanyCreate>, JsonRejection>,
) -> Result<CreatedResponse<Created>, ApiError> {
    let Json(input) = payload?;
    input.validate()?;
    let id = state.companies.create(input).await?;
    info!(%id, "company created");
    Ok(CreatedResponse(Created { id }))
}

#[utoipa::path(
    get, path = "/companies/{id}", tag = "companies",
    params(("id" = String, Path, description = "Company ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CompanyDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<OkResponse<company::Model>, ApiError> {
    let id = checked_id(id)?;
    Ok(OkResponse(state.companies.get_or_fail(&id).await?))
}

#[utoipa::path(
    patch, path = "/companies/{id}", tag = "companies",
    params(("id" = String, Path, description = "Company ID")),
    request_body = crate::openapi::CompanyUpdateDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorBodyDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<CompanyUpdate>, JsonRejection>,
) -> Result<NoContentResponse, ApiError> {
    let id = checked_id(id)?;
    let Json(mut input) = payload?;
    input.id = id;
    input.validate()?;
    state.companies.update(input).await?;
    Ok(NoContentResponse)
}

#[utoipa::path(
    delete, path = "/companies/{id}", tag = "companies",
    params(("id" = String, Path, description = "Company ID")),
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
    state.companies.delete(&id).await?;
    Ok(NoContentResponse)
}
