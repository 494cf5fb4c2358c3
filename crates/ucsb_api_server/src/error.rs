//! HTTP error contract.
//!
//! Every failure is a JSON object. Lookup misses and authorization failures
//! carry `{type, message}`; record-style delete misses carry `{message}` only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use ucsb_api_core::{RepoError, ServiceError};

pub const ENTITY_NOT_FOUND_TYPE: &str = "EntityNotFoundException";
pub const ACCESS_DENIED_TYPE: &str = "AccessDeniedException";
pub const ACCESS_DENIED_MESSAGE: &str = "Access Denied";
pub const BAD_REQUEST_TYPE: &str = "BadRequest";
pub const INTERNAL_ERROR_TYPE: &str = "InternalError";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub message: String,
}

/// `{message}` body used by delete confirmations and record-style misses.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    RecordNotFound(String),
    Forbidden,
    BadRequest(String),
    /// Detail is logged, never returned to the caller.
    Internal(String),
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(message) | Self::RecordNotFound(message) => write!(f, "{message}"),
            Self::Forbidden => write!(f, "{ACCESS_DENIED_MESSAGE}"),
            Self::BadRequest(message) => write!(f, "bad request: {message}"),
            Self::Internal(detail) => write!(f, "internal error: {detail}"),
        }
    }
}

impl Error for ApiError {}

impl From<ServiceError> for ApiError {
    fn from(value: ServiceError) -> Self {
        match value {
            err @ ServiceError::NotFound { .. } => Self::NotFound(err.to_string()),
            err @ ServiceError::RecordNotFound { .. } => Self::RecordNotFound(err.to_string()),
            ServiceError::Repo(RepoError::NotFound { entity, key }) => Self::NotFound(
                ucsb_api_core::model::not_found_message(entity, key),
            ),
            ServiceError::Repo(other) => Self::Internal(other.to_string()),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) | Self::RecordNotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::NotFound(message) => (
                status,
                Json(ErrorBody {
                    kind: ENTITY_NOT_FOUND_TYPE,
                    message,
                }),
            )
                .into_response(),
            Self::RecordNotFound(message) => (status, Json(MessageBody { message })).into_response(),
            Self::Forbidden => (
                status,
                Json(ErrorBody {
                    kind: ACCESS_DENIED_TYPE,
                    message: ACCESS_DENIED_MESSAGE.to_string(),
                }),
            )
                .into_response(),
            Self::BadRequest(message) => (
                status,
                Json(ErrorBody {
                    kind: BAD_REQUEST_TYPE,
                    message,
                }),
            )
                .into_response(),
            Self::Internal(detail) => {
                error!("event=request_failed module=http status=error error={detail}");
                (
                    status,
                    Json(ErrorBody {
                        kind: INTERNAL_ERROR_TYPE,
                        message: "internal error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use axum::http::StatusCode;
    use ucsb_api_core::{RepoError, ServiceError};

    #[test]
    fn maps_service_errors_to_statuses() {
        let not_found: ApiError = ServiceError::NotFound {
            entity: "RecommendationRequest",
            key: "7".to_string(),
        }
        .into();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.to_string(), "RecommendationRequest with id 7 not found");

        let record: ApiError = ServiceError::RecordNotFound {
            key: "15".to_string(),
        }
        .into();
        assert!(matches!(record, ApiError::RecordNotFound(ref message) if message == "record 15 not found"));

        let internal: ApiError =
            ServiceError::Repo(RepoError::InvalidData("bad row".to_string())).into();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn forbidden_is_403() {
        assert_eq!(ApiError::Forbidden.status(), StatusCode::FORBIDDEN);
    }
}
