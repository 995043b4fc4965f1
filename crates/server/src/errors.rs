use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use models::errors::ModelError;
use service::ServiceError;
use thiserror::Error;
use tracing::error;

use crate::responses::{ErrorResponse, ErrorType};

/// Handler error; converted to an [`ErrorResponse`] at the boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("{0}")]
    BadRequest(String),
}

impl From<ModelError> for ApiError {
    fn from(e: ModelError) -> Self { Self::Service(ServiceError::Model(e)) }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self { Self::BadRequest(e.body_text()) }
}

impl From<QueryRejection> for ApiError {
    fn from(e: QueryRejection) -> Self { Self::BadRequest(e.body_text()) }
}

impl From<PathRejection> for ApiError {
    fn from(e: PathRejection) -> Self { Self::BadRequest(e.body_text()) }
}

impl ApiError {
    pub fn to_error_response(&self) -> ErrorResponse {
        match self {
            ApiError::BadRequest(msg) => ErrorResponse::bad_request(ErrorType::InvalidRequest, msg.clone()),
            ApiError::Service(e) => match e {
                ServiceError::NotFound(msg) => {
                    ErrorResponse::not_found(ErrorType::ResourceNotFound).with_message(msg.clone())
                }
                ServiceError::Model(m) => ErrorResponse::bad_request(ErrorType::InvalidRequest, m.to_string()),
                ServiceError::Persistence(db) => {
                    error!(err = %db, "persistence failure");
                    ErrorResponse::internal_error(ErrorType::DatabaseError)
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.to_error_response().into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
