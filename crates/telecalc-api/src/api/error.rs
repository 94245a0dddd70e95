//! API error type.
//!
//! Every failure leaves the service as `{"error": "..."}`; validation
//! failures add `"fields": [{"field", "message"}, ...]`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;

use telecalc_common::{FieldError, ValidationError};

use crate::explain::ExplainError;

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    fields: Vec<FieldError>,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::with_status(StatusCode::BAD_REQUEST, msg)
    }
    pub fn unprocessable(msg: impl Into<String>, fields: Vec<FieldError>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: msg.into(),
            fields,
        }
    }
    pub fn bad_gateway(msg: impl Into<String>) -> Self {
        Self::with_status(StatusCode::BAD_GATEWAY, msg)
    }
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_status(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }

    fn with_status(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            message: msg.into(),
            fields: Vec::new(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::unprocessable("validation failed", err.fields)
    }
}

impl From<ExplainError> for ApiError {
    fn from(err: ExplainError) -> Self {
        match err {
            ExplainError::Inputs(e) => ApiError::internal(e.to_string()),
            other => {
                tracing::error!(error = %other, "explanation request failed");
                ApiError::bad_gateway(other.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let text = rejection.body_text();
        match rejection {
            JsonRejection::JsonDataError(_) => {
                let fields = offending_field(&text)
                    .map(|field| {
                        vec![FieldError {
                            field,
                            message: detail(&text).to_string(),
                        }]
                    })
                    .unwrap_or_default();
                ApiError::unprocessable(text, fields)
            }
            JsonRejection::JsonSyntaxError(_) => ApiError::bad_request(text),
            other => ApiError::with_status(other.status(), text),
        }
    }
}

/// Strip axum's generic prefix from a deserialization message.
fn detail(text: &str) -> &str {
    text.split_once("target type: ")
        .map_or(text, |(_, detail)| detail)
}

/// Best-effort field name from a serde message: either
/// "missing field `name` ..." or "name: invalid type ...".
fn offending_field(text: &str) -> Option<String> {
    let detail = detail(text);
    if let Some(rest) = detail.strip_prefix("missing field `") {
        return rest.split_once('`').map(|(name, _)| name.to_string());
    }
    detail
        .split_once(": ")
        .map(|(path, _)| path)
        .filter(|path| !path.is_empty() && !path.contains(' '))
        .map(str::to_string)
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = if self.fields.is_empty() {
            serde_json::json!({ "error": self.message })
        } else {
            serde_json::json!({ "error": self.message, "fields": self.fields })
        };
        (self.status, Json(body)).into_response()
    }
}
