use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};

/// Closed set of failure kinds reported by the request pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Timeout,
    NetworkError,
    ParsingError,
    HttpError,
    UnexpectedError,
    EmptyResponse,
    InvalidData,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Timeout => "TIMEOUT",
            ErrorCode::NetworkError => "NETWORK_ERROR",
            ErrorCode::ParsingError => "PARSING_ERROR",
            ErrorCode::HttpError => "HTTP_ERROR",
            ErrorCode::UnexpectedError => "UNEXPECTED_ERROR",
            ErrorCode::EmptyResponse => "EMPTY_RESPONSE",
            ErrorCode::InvalidData => "INVALID_DATA",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific diagnostics attached to a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum FailureDetail {
    None,
    Timeout { timeout: Duration },
    Http { status: u16 },
    Exception { kind: String, message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    pub timestamp: DateTime<Utc>,
    pub operation: Option<String>,
    pub detail: FailureDetail,
}

impl ErrorContext {
    fn new(operation: &str, detail: FailureDetail) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Some(operation.to_string()),
            detail,
        }
    }

    /// Flattens the context into key/value pairs for log output.
    pub fn entries(&self) -> BTreeMap<&'static str, String> {
        let mut entries = BTreeMap::new();
        entries.insert(
            "timestamp",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        );
        if let Some(operation) = &self.operation {
            entries.insert("operation", operation.clone());
        }
        match &self.detail {
            FailureDetail::None => {}
            FailureDetail::Timeout { timeout } => {
                entries.insert("timeoutSeconds", timeout.as_secs_f64().to_string());
            }
            FailureDetail::Http { status } => {
                entries.insert("statusCode", status.to_string());
            }
            FailureDetail::Exception { kind, message } => {
                entries.insert("exceptionType", kind.clone());
                entries.insert("exceptionMessage", message.clone());
            }
        }
        entries
    }
}

/// Failure half of [`ApiResult`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("{code}: {message}")]
pub struct ApiError {
    pub message: String,
    pub code: ErrorCode,
    pub context: ErrorContext,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    fn new(code: ErrorCode, message: String, operation: &str, detail: FailureDetail) -> Self {
        Self {
            message,
            code,
            context: ErrorContext::new(operation, detail),
        }
    }

    pub fn timeout(operation: &str, timeout: Duration) -> Self {
        Self::new(
            ErrorCode::Timeout,
            format!(
                "The request timed out after {} seconds. Please try again.",
                timeout.as_secs_f64()
            ),
            operation,
            FailureDetail::Timeout { timeout },
        )
    }

    pub fn network(operation: &str, kind: &str, message: String) -> Self {
        Self::new(
            ErrorCode::NetworkError,
            "Unable to reach the server. Check your connection and the API address.".to_string(),
            operation,
            FailureDetail::Exception {
                kind: kind.to_string(),
                message,
            },
        )
    }

    pub fn http(operation: &str, status: u16) -> Self {
        Self::new(
            ErrorCode::HttpError,
            http_status_message(status),
            operation,
            FailureDetail::Http { status },
        )
    }

    pub fn empty_response(operation: &str) -> Self {
        Self::new(
            ErrorCode::EmptyResponse,
            "The server returned an empty response.".to_string(),
            operation,
            FailureDetail::None,
        )
    }

    pub fn parsing(operation: &str, error: &serde_json::Error) -> Self {
        Self::new(
            ErrorCode::ParsingError,
            "The server response could not be read.".to_string(),
            operation,
            FailureDetail::Exception {
                kind: std::any::type_name::<serde_json::Error>().to_string(),
                message: error.to_string(),
            },
        )
    }

    pub fn invalid_data(operation: &str) -> Self {
        Self::new(
            ErrorCode::InvalidData,
            "The server returned no usable data.".to_string(),
            operation,
            FailureDetail::None,
        )
    }

    pub fn unexpected(operation: &str, kind: &str, message: String) -> Self {
        Self::new(
            ErrorCode::UnexpectedError,
            "An unexpected error occurred while calling the server.".to_string(),
            operation,
            FailureDetail::Exception {
                kind: kind.to_string(),
                message,
            },
        )
    }

    /// HTTP status of an `HTTP_ERROR`, if any.
    pub fn status(&self) -> Option<u16> {
        match self.context.detail {
            FailureDetail::Http { status } => Some(status),
            _ => None,
        }
    }
}

/// User-facing text for an error status.
pub fn http_status_message(status: u16) -> String {
    match status {
        400 => "The request was invalid. Check the submitted data.".to_string(),
        401 => "Authentication is required to access this resource.".to_string(),
        403 => "Access to this resource was denied.".to_string(),
        404 => "The requested resource was not found. Check the API configuration.".to_string(),
        500 => "The server encountered an error. Please try again later.".to_string(),
        503 => "The service is temporarily unavailable. Please try again later.".to_string(),
        other => format!("The server returned status {other}. Please try again."),
    }
}
