use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::adapters::{repositories::RepositoryError, transform::TransformError};
use crate::domain::message::ValidationErrors;

#[derive(Debug, Error)]
pub enum ServiceError {
	#[error("validation failed: {0}")]
	Validation(ValidationErrors),
	#[error(transparent)]
	Transform(#[from] TransformError),
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),
	/// Request body rejected before any work was done; keeps the rejection's status.
	#[error("bad request: {1}")]
	BadRequest(StatusCode, String),
	#[error("invalid configuration: {0}")]
	InvalidConfig(String),
}

impl From<RepositoryError> for ServiceError {
	fn from(value: RepositoryError) -> Self {
		match value {
			RepositoryError::Validation(errors) => ServiceError::Validation(errors),
			RepositoryError::Database(err) => ServiceError::Database(err),
		}
	}
}

impl ServiceError {
	pub fn status(&self) -> StatusCode {
		match self {
			ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
			ServiceError::Transform(TransformError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
			ServiceError::Transform(_) => StatusCode::BAD_GATEWAY,
			ServiceError::BadRequest(status, _) => *status,
			ServiceError::Database(_) | ServiceError::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl IntoResponse for ServiceError {
	fn into_response(self) -> Response {
		let status = self.status();
		match self {
			ServiceError::Validation(errors) => (status, Json(errors)).into_response(),
			ServiceError::Transform(err) => {
				tracing::error!(error = %err, "transform service failure");
				(status, Json(json!({ "error": err.to_string() }))).into_response()
			}
			ServiceError::BadRequest(_, message) => (status, Json(json!({ "error": message }))).into_response(),
			ServiceError::Database(err) => {
				tracing::error!(error = %err, "database error");
				(status, Json(json!({ "error": "internal server error" }))).into_response()
			}
			ServiceError::InvalidConfig(message) => {
				tracing::error!(message = %message, "invalid configuration");
				(status, Json(json!({ "error": "internal server error" }))).into_response()
			}
		}
	}
}
