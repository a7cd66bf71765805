use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::db::{is_foreign_key_violation, is_unique_violation};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Validation(String),
    #[error("user not found")]
    UnknownOwner,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Classify a failed INSERT/UPDATE on `resource`.
    pub fn from_write(err: sqlx::Error, resource: &'static str) -> Self {
        if is_unique_violation(&err) {
            AppError::Conflict(format!("{resource} already exists"))
        } else if is_foreign_key_violation(&err) {
            AppError::UnknownOwner
        } else {
            AppError::Db(err)
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::UnknownOwner => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Db(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            error!(error = %self, "request failed");
            "internal server error".to_string()
        } else {
            self.to_string()
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: AppError) -> (StatusCode, serde_json::Value) {
        let res = err.into_response();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_names_the_resource() {
        let (status, body) = body_of(AppError::NotFound("user")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({ "error": "user not found" }));
    }

    #[tokio::test]
    async fn conflict_is_409() {
        let (status, body) = body_of(AppError::Conflict("ad already exists".into())).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "ad already exists");
    }

    #[tokio::test]
    async fn unknown_owner_is_422() {
        let (status, body) = body_of(AppError::UnknownOwner).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "user not found");
    }

    #[tokio::test]
    async fn server_errors_hide_details() {
        let (status, body) = body_of(AppError::Db(sqlx::Error::PoolTimedOut)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "internal server error");

        let (status, body) = body_of(AppError::Internal(anyhow::anyhow!("argon2 blew up"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "internal server error");
    }

    #[test]
    fn from_write_keeps_other_errors_as_db() {
        let err = AppError::from_write(sqlx::Error::RowNotFound, "user");
        assert!(matches!(err, AppError::Db(sqlx::Error::RowNotFound)));
    }
}
