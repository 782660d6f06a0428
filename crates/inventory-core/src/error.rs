use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Numeric error codes shared by every service. Service-specific codes start at 1100.
pub mod codes {
    pub const INTERNAL: u16 = 1000;
    pub const UNAUTHORIZED: u16 = 1001;
    pub const MISSING_PARAM: u16 = 1002;
}

/// JSON error envelope: `{"code": 1100, "details": "item not found"}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub code: u16,
    pub details: String,
}

impl ErrorBody {
    pub fn new(code: u16, details: impl Into<String>) -> Self {
        Self {
            code,
            details: details.into(),
        }
    }

    /// Render the envelope with the given HTTP status.
    pub fn with_status(self, status: StatusCode) -> Response {
        (status, axum::Json(self)).into_response()
    }
}
