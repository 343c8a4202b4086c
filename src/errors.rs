use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Authentication required")]
    MissingCredential,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not found")]
    UnknownSubject,

    #[error("Forbidden")]
    Forbidden,

    #[error("Forbidden: not owner")]
    NotOwner,

    #[error("Cannot create admin user")]
    AdminProofRejected,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// The message surfaced to the caller. Database/internal detail stays in
    /// the server log; the client only ever sees a generic message.
    fn public_message(&self) -> String {
        match self {
            AppError::Database(_) | AppError::Internal(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingCredential
            | AppError::InvalidToken
            | AppError::InvalidCredentials
            | AppError::UnknownSubject => StatusCode::UNAUTHORIZED,
            AppError::Forbidden | AppError::NotOwner | AppError::AdminProofRejected => {
                StatusCode::FORBIDDEN
            }
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AlreadyExists(_) => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("request failed: {}", self);
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            message: self.public_message(),
        })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for AppError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        AppError::Internal(format!("BSON serialization error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::MissingCredential.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::InvalidToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::UnknownSubject.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AppError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::NotOwner.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::AdminProofRejected.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::NotFound("Student not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::AlreadyExists("Email already in use".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Database("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AppError::MissingCredential.to_string(),
            "Authentication required"
        );
        assert_eq!(
            AppError::InvalidToken.to_string(),
            "Invalid or expired token"
        );
        assert_eq!(AppError::NotOwner.to_string(), "Forbidden: not owner");
    }

    #[test]
    fn test_internal_detail_is_not_surfaced() {
        let err = AppError::Database("connection refused to 10.0.0.3".into());
        assert_eq!(err.public_message(), "Internal server error");

        let err = AppError::Internal("bson encode failed".into());
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn test_login_failures_are_indistinguishable() {
        // Unknown email and wrong password must map to the same error.
        let unknown = AppError::InvalidCredentials;
        let wrong_password = AppError::InvalidCredentials;
        assert_eq!(unknown.to_string(), wrong_password.to_string());
        assert_eq!(unknown.status_code(), wrong_password.status_code());
    }
}
