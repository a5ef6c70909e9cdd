//! Account Error Types
//!
//! Infrastructure and protocol failures. Anything a user can fix by
//! re-submitting a form (mismatched passwords, taken email, bad credentials)
//! is an `Outcome::Rejected`, not an error.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::sqlx_error_kind, kind::ErrorKind};
use platform::password::PasswordHashError;
use thiserror::Error;

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Account-specific error variants
#[derive(Debug, Error)]
pub enum AccountError {
    /// Insert hit the UNIQUE constraint on `users.email`
    #[error("Email address already in use")]
    DuplicateEmail,

    /// Session token missing, malformed or badly signed
    #[error("Session not found or invalid")]
    SessionInvalid,

    /// Password hashing failed
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] PasswordHashError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::DuplicateEmail => ErrorKind::Conflict,
            AccountError::SessionInvalid => ErrorKind::Unauthorized,
            AccountError::Database(e) => sqlx_error_kind(e),
            AccountError::PasswordHash(_) | AccountError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let app_error = AppError::new(self.kind(), self.to_string());
        if self.kind() == ErrorKind::ServiceUnavailable {
            app_error.with_action("Please try again in a moment")
        } else {
            app_error
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Account database error");
            }
            AccountError::PasswordHash(e) => {
                tracing::error!(error = %e, "Password hashing failed");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Account internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Account error");
            }
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
