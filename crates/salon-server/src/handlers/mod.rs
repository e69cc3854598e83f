//! HTTP request handlers, split by endpoint family.

mod contact;
mod search;

pub use contact::handle_contact;
pub use search::{handle_search, handle_search_options};

use axum::{
    body::Bytes,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use salon_core::{SalonError, ValidationError};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, error};

/// Everything a handler can answer with besides success.
#[derive(Debug)]
pub enum ApiError {
    /// Body was not valid JSON for the expected shape.
    InvalidJson(String),
    /// Body exceeded the size ceiling.
    PayloadTooLarge,
    MethodNotAllowed,
    NotFound,
    /// Body could not be read for another reason.
    BadBody(String),
    Domain(SalonError),
}

impl From<SalonError> for ApiError {
    fn from(err: SalonError) -> Self {
        ApiError::Domain(err)
    }
}

impl From<Vec<ValidationError>> for ApiError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ApiError::Domain(SalonError::Validation(errors))
    }
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidJson(detail) => {
                debug!("Rejected request body: {}", detail);
                error_body(StatusCode::BAD_REQUEST, "Invalid JSON body")
            }
            ApiError::PayloadTooLarge => {
                error_body(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large")
            }
            ApiError::MethodNotAllowed => {
                error_body(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
            }
            ApiError::NotFound => error_body(StatusCode::NOT_FOUND, "Not found"),
            ApiError::BadBody(detail) => {
                debug!("Unreadable request body: {}", detail);
                error_body(StatusCode::BAD_REQUEST, "Invalid request body")
            }
            ApiError::Domain(SalonError::Validation(details)) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Validation failed", "details": details })),
            )
                .into_response(),
            ApiError::Domain(err) if err.is_client_error() => {
                let status = StatusCode::from_u16(err.http_status_code())
                    .unwrap_or(StatusCode::BAD_REQUEST);
                error_body(status, &err.to_string())
            }
            ApiError::Domain(err @ SalonError::Mail { .. }) => {
                error!("Mail dispatch failed: {}", err);
                error_body(StatusCode::INTERNAL_SERVER_ERROR, "Failed to send email")
            }
            ApiError::Domain(err) => {
                error!("Internal error: {}", err);
                error_body(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

/// Decode a size-limited body as JSON.
///
/// The body limit layer turns oversized bodies into a rejection before any
/// bytes are parsed.
pub(crate) fn parse_json_body<T: DeserializeOwned>(
    body: Result<Bytes, BytesRejection>,
) -> Result<T, ApiError> {
    let bytes = match body {
        Ok(bytes) => bytes,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return Err(ApiError::PayloadTooLarge)
        }
        Err(rejection) => return Err(ApiError::BadBody(rejection.body_text())),
    };

    serde_json::from_slice(&bytes).map_err(|e| ApiError::InvalidJson(e.to_string()))
}

/// Health check endpoint.
pub async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

/// Answer an `OPTIONS` request that the CORS layer did not treat as a preflight.
pub async fn handle_preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn handle_method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

pub async fn handle_not_found() -> ApiError {
    ApiError::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_response() {
        let response = ApiError::from(vec![ValidationError::new("min_price", "out of range")])
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Validation failed");
        assert_eq!(json["details"][0]["field"], "min_price");
        assert_eq!(json["details"][0]["message"], "out of range");
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let response = ApiError::Domain(SalonError::Config {
            message: "secret path /etc".into(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Internal server error");
    }

    #[tokio::test]
    async fn test_mail_error_response() {
        let response = ApiError::Domain(SalonError::Mail {
            message: "502".into(),
            status_code: Some(502),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "Failed to send email");
    }

    #[tokio::test]
    async fn test_client_domain_error_keeps_message() {
        let response =
            ApiError::Domain(SalonError::UnknownFormType("newsletter".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            "Unknown form type: newsletter"
        );
    }

    #[test]
    fn test_parse_json_body() {
        let parsed: Value = parse_json_body(Ok(Bytes::from_static(b"{\"a\": 1}"))).unwrap();
        assert_eq!(parsed["a"], 1);

        let err = parse_json_body::<Value>(Ok(Bytes::from_static(b"{invalid json}"))).unwrap_err();
        assert!(matches!(err, ApiError::InvalidJson(_)));
    }
}
