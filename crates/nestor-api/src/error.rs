//! API error handling
//!
//! Everything a handler can fail with collapses into [`ApiError`], which
//! renders as a JSON body with a stable machine-readable `code`. Field
//! level validation messages ride along under `errors` keyed by attribute.

use std::collections::HashMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use nestor_core::{NestorError, ServiceResult, ValidationErrors};
use nestor_store::StoreError;
use serde::Serialize;

#[derive(Debug)]
pub enum ApiError {
    NotFound { resource: &'static str, id: String },
    Validation(ValidationErrors),
    Conflict(String),
    BadRequest(String),
    Upstream(String),
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "not_found",
            ApiError::Validation(_) => "validation_failed",
            ApiError::Conflict(_) => "conflict",
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Upstream(_) => "upstream_error",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl From<NestorError> for ApiError {
    fn from(err: NestorError) -> Self {
        match err {
            NestorError::NotFound { entity, value, .. } => ApiError::NotFound {
                resource: entity,
                id: value,
            },
            NestorError::Validation(errors) => ApiError::Validation(errors),
            NestorError::Contract(contract) => ApiError::Validation(contract.into()),
            NestorError::Conflict { message } => ApiError::Conflict(message),
            NestorError::ExternalService { service, message } => {
                ApiError::Upstream(format!("{}: {}", service, message))
            }
            NestorError::Store(message)
            | NestorError::Internal(message)
            | NestorError::Config(message) => ApiError::Internal(message),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::from(NestorError::from(err))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    errors: HashMap<String, Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        let (message, errors) = match self {
            ApiError::NotFound { resource, id } => {
                (format!("{} {} not found", resource, id), HashMap::new())
            }
            ApiError::Validation(validation) => {
                (validation.full_messages().join(", "), validation.errors)
            }
            ApiError::Conflict(message)
            | ApiError::BadRequest(message)
            | ApiError::Upstream(message)
            | ApiError::Internal(message) => (message, HashMap::new()),
        };

        if status.is_server_error() {
            tracing::error!(code, %message, "request failed");
        }

        (
            status,
            Json(ErrorBody {
                code,
                message,
                errors,
            }),
        )
            .into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Unwrap a write-service outcome, turning a validation failure into a 422
pub fn validated<T>(outcome: ServiceResult<T>) -> ApiResult<T> {
    outcome.into_result().map_err(ApiError::Validation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_not_found_body() {
        let err = ApiError::from(NestorError::not_found("project", "id", "p-404"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), 4096)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "not_found");
        assert_eq!(body["message"], "project p-404 not found");
        assert!(body.get("errors").is_none());
    }

    #[tokio::test]
    async fn test_validation_body_carries_field_errors() {
        let mut errors = ValidationErrors::new();
        errors.add("title", "cannot be blank");
        let response = ApiError::Validation(errors).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = axum::body::to_bytes(response.into_body(), 4096)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "validation_failed");
        assert_eq!(body["errors"]["title"][0], "cannot be blank");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(NestorError::conflict("still referenced")).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(NestorError::Store("disk gone".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(NestorError::ExternalService {
                service: "report engine".into(),
                message: "timeout".into(),
            })
            .status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_validated_unwraps_success() {
        let outcome = ServiceResult::success(41).map(|n| n + 1);
        assert_eq!(validated(outcome).unwrap(), 42);

        let mut errors = ValidationErrors::new();
        errors.add("vat_number", "must be a nine-digit tax number");
        let outcome: ServiceResult<i32> = ServiceResult::failure(errors);
        assert!(matches!(
            validated(outcome),
            Err(ApiError::Validation(errors)) if errors.has_error("vat_number")
        ));
    }
}
