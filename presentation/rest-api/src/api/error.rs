use std::any::Any;

use poem::Response;
use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// JSON body of every error response. Messages are i18n-style codes and never
/// carry internal error detail.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
    /// Per-field validation failures
    #[oai(default, skip_serializing_if_is_empty)]
    pub details: Vec<ErrorDetail>,
}

#[derive(Object, Debug)]
pub struct ErrorDetail {
    pub field: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            details: Vec::new(),
        }
    }

    pub fn invalid_id() -> Self {
        Self::new("ValidationError", "product.invalid_id")
    }

    pub fn internal() -> Self {
        Self::new("InternalError", "server.internal_error")
    }

    /// Body for requests poem-openapi could not parse (malformed JSON, wrong
    /// field types, missing required fields).
    pub fn malformed_request(err: &poem::Error) -> Self {
        tracing::warn!(error = %err, "Rejected malformed request");
        Self::new("ValidationError", "request.malformed_body")
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Turns a handler panic into a generic 500 so no partial state leaks out.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_default();
    tracing::error!(panic = %detail, "Request handler panicked");

    let body = serde_json::json!({
        "name": "InternalError",
        "message": "server.internal_error",
    });

    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .content_type("application/json")
        .body(body.to_string())
}
