//! Typed HTTP response wrappers.
//!
//! Success responses carry an optional JSON body; error responses always
//! render `{ "type", "status", "message" }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Category tag carried by every error body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    InvalidRequest,
    ResourceNotFound,
    DatabaseError,
}

/// 200 with a JSON body.
#[derive(Debug)]
pub struct OkResponse<T>(pub T);

impl<T: Serialize> IntoResponse for OkResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.0)).into_response()
    }
}

/// 201 with a JSON body.
#[derive(Debug)]
pub struct CreatedResponse<T>(pub T);

impl<T: Serialize> IntoResponse for CreatedResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

/// Request succeeded, nothing to return.
#[derive(Debug)]
pub struct NoContentResponse;

impl IntoResponse for NoContentResponse {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    #[serde(rename = "type")]
    pub error_type: ErrorType,
    pub status: u16,
    pub message: String,
}

#[derive(Debug)]
pub struct ErrorResponse {
    pub status: StatusCode,
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorResponse {
    pub const NOT_FOUND_MESSAGE: &'static str = "Cannot find resource.";
    pub const INTERNAL_ERROR_MESSAGE: &'static str = "An unknown server error has occurred.";

    pub fn new(status: StatusCode, error_type: ErrorType, message: impl Into<String>) -> Self {
        Self { status, error_type, message: message.into() }
    }

    pub fn bad_request(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_type, message)
    }

    pub fn not_found(error_type: ErrorType) -> Self {
        Self::new(StatusCode::NOT_FOUND, error_type, Self::NOT_FOUND_MESSAGE)
    }

    /// The message is fixed by default so internals never reach the client.
    pub fn internal_error(error_type: ErrorType) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, error_type, Self::INTERNAL_ERROR_MESSAGE)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody { error_type: self.error_type, status: self.status.as_u16(), message: self.message.clone() }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let body = self.body();
        (self.status, Json(body)).into_response()
    }
}
