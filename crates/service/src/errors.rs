use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    /// Store-level failure, propagated as-is.
    #[error("database error: {0}")]
    Persistence(#[from] sea_orm::DbErr),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    /// `action` is the verb used in the message, e.g. "retrieve".
    pub fn not_found(action: &str, resource: &str, id: &str) -> Self {
        Self::NotFound(format!("Cannot {action} {resource}. ID {id} does not exist."))
    }

    pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound(_)) }
}
