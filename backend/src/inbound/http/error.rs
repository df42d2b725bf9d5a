//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and status
//! codes. Every error body is the envelope `{"detail": "..."}`.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::Error;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// JSON envelope returned for every error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable failure description.
    #[schema(example = "Method not found")]
    pub detail: String,
}

fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        Error::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        Error::NotFound(_) => StatusCode::NOT_FOUND,
        Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self)
    }

    fn error_response(&self) -> HttpResponse {
        let detail = if matches!(self, Error::Internal(_)) {
            // Do not leak implementation details to clients.
            error!(error = %self, "internal error surfaced to handler");
            "Internal server error".to_owned()
        } else {
            self.to_string()
        };
        HttpResponse::build(self.status_code()).json(ErrorBody { detail })
    }
}

/// Map JSON body failures (missing fields, wrong types, bad syntax) to the
/// 422 envelope instead of Actix's default 400 plain-text response.
///
/// Installed via [`actix_web::web::JsonConfig::error_handler`] on the API
/// scope.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::validation(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;

    #[rstest]
    #[case(Error::validation("bad"), StatusCode::UNPROCESSABLE_ENTITY)]
    #[case(Error::invalid_request("bad range"), StatusCode::BAD_REQUEST)]
    #[case(Error::unauthorized("Invalid credentials"), StatusCode::UNAUTHORIZED)]
    #[case(Error::not_found("User not found"), StatusCode::NOT_FOUND)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_mapping(#[case] error: Error, #[case] expected: StatusCode) {
        assert_eq!(error.status_code(), expected);
    }

    #[actix_web::test]
    async fn body_uses_detail_envelope() {
        let response = Error::not_found("Feature not found").error_response();
        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        let body: ErrorBody = serde_json::from_slice(&bytes).expect("error envelope");
        assert_eq!(body.detail, "Feature not found");
    }

    #[actix_web::test]
    async fn internal_detail_is_redacted() {
        let response = Error::internal("connection string leaked").error_response();
        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        let body: ErrorBody = serde_json::from_slice(&bytes).expect("error envelope");
        assert_eq!(body.detail, "Internal server error");
    }
}
