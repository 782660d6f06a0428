use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use inventory_core::error::{ErrorBody, codes};

/// Inventory service error variants.
#[derive(Debug, thiserror::Error)]
pub enum InventoryServiceError {
    #[error("Missing param - {0}")]
    MissingParam(String),
    #[error("invalid direction {0:?}, expected \"in\" or \"out\"")]
    InvalidDirection(String),
    #[error("{0}")]
    MalformedRequest(String),
    #[error("user is not authorized to make this request")]
    Unauthorized,
    #[error("you are not authorized to perform this action")]
    NotAdmin,
    #[error("incorrect username or password")]
    InvalidCredentials,
    #[error("item not found")]
    ItemNotFound,
    #[error("item already exists")]
    ItemAlreadyExists,
    #[error("username not found or already deleted")]
    UserNotFound,
    #[error("the system account cannot be modified")]
    SystemAccount,
    #[error("no username with that email on record")]
    EmailMismatch,
    #[error("username already taken")]
    UserAlreadyExists,
    #[error("{0}")]
    EmailUnavailable(String),
    #[error("barcode lookup is not configured")]
    BarcodeUnavailable,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl InventoryServiceError {
    pub fn code(&self) -> u16 {
        match self {
            Self::MissingParam(_) => codes::MISSING_PARAM,
            Self::InvalidDirection(_) => 1003,
            Self::MalformedRequest(_) => 1004,
            Self::Unauthorized | Self::NotAdmin | Self::InvalidCredentials => codes::UNAUTHORIZED,
            Self::ItemNotFound => 1100,
            Self::ItemAlreadyExists => 1101,
            Self::UserNotFound => 1200,
            Self::SystemAccount => 1201,
            Self::EmailMismatch => 1202,
            Self::UserAlreadyExists => 1203,
            Self::EmailUnavailable(_) | Self::BarcodeUnavailable | Self::Internal(_) => {
                codes::INTERNAL
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingParam(_)
            | Self::InvalidDirection(_)
            | Self::MalformedRequest(_)
            | Self::ItemAlreadyExists
            | Self::EmailMismatch
            | Self::UserAlreadyExists => StatusCode::BAD_REQUEST,
            Self::Unauthorized | Self::NotAdmin | Self::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            Self::ItemNotFound | Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::SystemAccount => StatusCode::FORBIDDEN,
            Self::EmailUnavailable(_) | Self::BarcodeUnavailable | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn missing(param: &str) -> Self {
        Self::MissingParam(param.to_owned())
    }
}

impl From<JsonRejection> for InventoryServiceError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for InventoryServiceError {
    fn from(rejection: QueryRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl IntoResponse for InventoryServiceError {
    fn into_response(self) -> Response {
        // TraceLayer already records method/uri/status; only the anyhow chain of a 500
        // needs logging here.
        match &self {
            Self::Internal(e) => tracing::error!(error = ?e, code = self.code(), "internal error"),
            Self::EmailUnavailable(msg) => tracing::error!(error = %msg, "email delivery failed"),
            _ => {}
        }
        ErrorBody::new(self.code(), self.to_string()).with_status(self.status())
    }
}
