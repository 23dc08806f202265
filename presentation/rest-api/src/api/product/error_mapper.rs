use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorDetail, ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let code = self.to_string();
        let (status, body) = match self {
            ProductError::InvalidId => (StatusCode::BAD_REQUEST, ErrorResponse::invalid_id()),
            ProductError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    details: violations
                        .into_iter()
                        .map(|v| ErrorDetail {
                            field: v.field.to_string(),
                            message: v.code.to_string(),
                        })
                        .collect(),
                    ..ErrorResponse::new("ValidationError", &code)
                },
            ),
            ProductError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NotFound", &code),
            ),
            ProductError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal())
            }
        };

        (status, Json(body))
    }
}
