use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error(transparent)]
    ValidationError(#[from] garde::Report),
    #[error("booking queue is full")]
    TooManyRequests,
    #[error("booking queue is closed")]
    QueueClosed,
    #[error("transaction failed to run")]
    TransactionError(#[source] sqlx::Error),
    #[error("database operation failed")]
    SpecificOperationError(#[source] sqlx::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            AppError::QueueClosed
            | AppError::TransactionError(_)
            | AppError::SpecificOperationError(_) => {
                tracing::error!(
                    error.cause_chain = ?self,
                    error.message = %self,
                    "unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Store error details stay in the server log.
        let message = if status_code.is_server_error() {
            "internal server error".to_string()
        } else {
            self.to_string()
        };

        (status_code, message).into_response()
    }
}
