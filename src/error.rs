//! Application error type
//!
//! Every fallible path funnels into [`AppError`], which renders as a
//! JSON body of the form `{"error": {"code", "message"}}`. Backend
//! faults are logged here and never leak their internals to clients.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Result alias used throughout the crate
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Too many requests")]
    TooManyRequests,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Redis error: {0}")]
    Redis(String),

    #[error("Judge error: {0}")]
    Judge(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status and machine-readable code, kept in one table so the
    /// two cannot drift apart.
    pub fn kind(&self) -> (StatusCode, &'static str) {
        use StatusCode as S;

        match self {
            Self::InvalidCredentials => (S::UNAUTHORIZED, "INVALID_CREDENTIALS"),
            Self::InvalidToken => (S::UNAUTHORIZED, "INVALID_TOKEN"),
            Self::TokenExpired => (S::UNAUTHORIZED, "TOKEN_EXPIRED"),
            Self::Unauthorized => (S::UNAUTHORIZED, "UNAUTHORIZED"),
            Self::Forbidden(_) => (S::FORBIDDEN, "FORBIDDEN"),
            Self::Validation(_) => (S::BAD_REQUEST, "VALIDATION_ERROR"),
            Self::InvalidInput(_) => (S::BAD_REQUEST, "INVALID_INPUT"),
            Self::NotFound(_) => (S::NOT_FOUND, "NOT_FOUND"),
            Self::AlreadyExists(_) => (S::CONFLICT, "ALREADY_EXISTS"),
            Self::Conflict(_) => (S::CONFLICT, "CONFLICT"),
            Self::TooManyRequests => (S::TOO_MANY_REQUESTS, "TOO_MANY_REQUESTS"),
            Self::Judge(_) => (S::BAD_GATEWAY, "JUDGE_ERROR"),
            Self::Database(_) => (S::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            Self::Redis(_) => (S::INTERNAL_SERVER_ERROR, "REDIS_ERROR"),
            Self::Configuration(_) => (S::INTERNAL_SERVER_ERROR, "CONFIGURATION_ERROR"),
            Self::Internal(_) => (S::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    /// What the client is allowed to see. Server-side faults get logged
    /// and replaced with a generic message.
    fn public_message(&self) -> String {
        match self {
            Self::Internal(e) => {
                tracing::error!(error = ?e, "internal error");
                "An internal error occurred".to_string()
            }
            Self::Database(e) => {
                tracing::error!(error = %e, "database error");
                "A database error occurred".to_string()
            }
            Self::Redis(e) => {
                tracing::error!(error = %e, "redis error");
                "A cache error occurred".to_string()
            }
            Self::Judge(e) => {
                tracing::error!(error = %e, "judge error");
                "The judge service is unavailable".to_string()
            }
            Self::Configuration(e) => {
                tracing::error!(error = %e, "configuration error");
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.kind();
        let message = self.public_message();

        let body = json!({
            "error": {
                "code": code,
                "message": message,
            }
        });

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound("Resource not found".to_string()),
            // Duplicate email, vote, or registration rows surface as
            // user-correctable conflicts rather than 500s.
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Self::AlreadyExists("Resource already exists".to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<redis::RedisError> for AppError {
    fn from(err: redis::RedisError) -> Self {
        Self::Redis(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self::Judge(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => Self::TokenExpired,
            _ => Self::InvalidToken,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_expected_statuses() {
        let cases = [
            (AppError::Validation("empty title".into()), StatusCode::BAD_REQUEST),
            (AppError::Unauthorized, StatusCode::UNAUTHORIZED),
            (AppError::Forbidden("admins only".into()), StatusCode::FORBIDDEN),
            (AppError::NotFound("thread".into()), StatusCode::NOT_FOUND),
            (AppError::AlreadyExists("email".into()), StatusCode::CONFLICT),
            (AppError::Conflict("already registered".into()), StatusCode::CONFLICT),
            (AppError::TooManyRequests, StatusCode::TOO_MANY_REQUESTS),
            (AppError::Judge("connection refused".into()), StatusCode::BAD_GATEWAY),
        ];
        for (err, status) in cases {
            assert_eq!(err.kind().0, status, "{err}");
        }
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(AppError::Unauthorized.kind().1, "UNAUTHORIZED");
        assert_eq!(AppError::Conflict("x".into()).kind().1, "CONFLICT");
        assert_eq!(AppError::TooManyRequests.kind().1, "TOO_MANY_REQUESTS");
    }

    #[test]
    fn row_not_found_becomes_not_found() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn backend_faults_hide_their_details() {
        let msg = AppError::Database("relation users does not exist".into()).public_message();
        assert_eq!(msg, "A database error occurred");

        let msg = AppError::Validation("title too long".into()).public_message();
        assert_eq!(msg, "Validation error: title too long");
    }
}
