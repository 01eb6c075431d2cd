use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use validator::ValidationErrors;

/// Failure kinds surfaced by the controllers. Each kind maps to exactly
/// one transport status, so the status a caller sees is decided here and
/// nowhere else.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Forwarded with the validator's own error structure, untouched.
    #[error("validation failed")]
    Validation(#[from] ValidationErrors),
    #[error("{0}")]
    NotFound(&'static str),
    /// Zero rows matched an ownership-filtered mutation. Reported as a
    /// server error, not a not-found: callers cannot tell an absent
    /// record from one they don't own.
    #[error("{0}")]
    NoMatch(&'static str),
    /// A write call yielded no result object.
    #[error("{0}")]
    Server(&'static str),
    #[error("{0}")]
    Request(String),
    #[error("authentication required")]
    Unauthorized,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Request(_) => StatusCode::BAD_REQUEST,
            Error::Unauthorized => StatusCode::UNAUTHORIZED,
            Error::NoMatch(_)
            | Error::Server(_)
            | Error::Database(_)
            | Error::Migrate(_)
            | Error::Config(_)
            | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Mutation handlers report unexpected database failures as request
    /// errors; read handlers surface them as-is. Deliberate outcomes
    /// (validation, no-match, missing result) keep their own kind.
    pub fn into_request_error(self) -> Self {
        match self {
            Error::Database(err) => Error::Request(err.to_string()),
            other => other,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        }
        let body = match &self {
            Error::Validation(errors) => json!({ "errors": errors }),
            other => json!({ "message": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_kind_maps_to_one_status() {
        assert_eq!(
            Error::NotFound("missing").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::NoMatch("no match").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            Error::Server("no result").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            Error::Request("bad input".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(Error::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            Error::Database(sqlx::Error::PoolClosed).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn request_error_demotes_only_database_failures() {
        let err = Error::Database(sqlx::Error::PoolClosed).into_request_error();
        assert!(matches!(err, Error::Request(_)));

        let err = Error::NoMatch("no match").into_request_error();
        assert!(matches!(err, Error::NoMatch(_)));

        let err = Error::Server("no result").into_request_error();
        assert!(matches!(err, Error::Server(_)));
    }

    #[test]
    fn responses_carry_the_mapped_status() {
        let response = Error::NotFound("Job not found.").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = Error::NoMatch("Failed to update job. No match job found!").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
