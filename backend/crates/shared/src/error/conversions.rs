//! Error conversions
//!
//! Storage and HTTP integrations for [`AppError`](crate::error::app_error::AppError), each behind its feature.

#[cfg(any(feature = "sqlx", feature = "axum"))]
use super::app_error::AppError;
#[cfg(feature = "sqlx")]
use super::kind::ErrorKind;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// Classify a database error without consuming it
#[cfg(feature = "sqlx")]
pub fn sqlx_error_kind(err: &sqlx::Error) -> ErrorKind {
    match err {
        sqlx::Error::RowNotFound => ErrorKind::NotFound,
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            ErrorKind::ServiceUnavailable
        }
        sqlx::Error::Database(db_err)
            if db_err.is_unique_violation() || db_err.is_foreign_key_violation() =>
        {
            ErrorKind::Conflict
        }
        sqlx::Error::Database(db_err) if db_err.is_check_violation() => ErrorKind::BadRequest,
        _ => ErrorKind::InternalServerError,
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let message = match sqlx_error_kind(&err) {
            ErrorKind::NotFound => "Record not found",
            ErrorKind::ServiceUnavailable => "Database unavailable",
            ErrorKind::Conflict => "Duplicate or dangling record",
            ErrorKind::BadRequest => "Check constraint violation",
            _ => "Database error",
        };
        AppError::new(sqlx_error_kind(&err), message).with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use http::{StatusCode, header};

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // 5xx の詳細はクライアントに返さない
        let detail = if self.is_server_error() {
            "Something went wrong on our side."
        } else {
            self.message()
        };

        let mut body = format!("{} {}\n\n{}\n", status.as_u16(), self.kind().as_str(), detail);
        if let Some(action) = self.action() {
            body.push_str(action);
            body.push('\n');
        }

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    #[cfg(feature = "sqlx")]
    #[test]
    fn test_sqlx_row_not_found() {
        use super::*;

        let app_err: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(app_err.kind(), ErrorKind::NotFound);
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_sqlx_pool_timeout() {
        use super::*;

        assert_eq!(
            sqlx_error_kind(&sqlx::Error::PoolTimedOut),
            ErrorKind::ServiceUnavailable
        );
    }

    #[cfg(feature = "axum")]
    #[test]
    fn test_into_response_hides_server_detail() {
        use super::*;
        use axum::response::IntoResponse;

        let response = AppError::internal("connection string leaked").into_response();
        assert_eq!(response.status().as_u16(), 500);

        let response = AppError::conflict("Duplicate").into_response();
        assert_eq!(response.status().as_u16(), 409);
    }
}
