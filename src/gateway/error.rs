//! API error responses
//!
//! Every error body is `{ "error": <message> }`. Internal causes are logged,
//! never serialized.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::content::PageLookupError;

pub const SLUG_REQUIRED: &str = "Slug required";
pub const PAGE_NOT_FOUND: &str = "Page not found";
pub const INTERNAL_ERROR: &str = "Internal server error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 400: bad or missing input
    Validation(&'static str),
    /// 404: no visible resource
    NotFound(&'static str),
    /// 500: store or infrastructure failure
    Internal,
}

impl ApiError {
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Validation(msg) | Self::NotFound(msg) => *msg,
            Self::Internal => INTERNAL_ERROR,
        }
    }
}

/// JSON response body for errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Page not found")]
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message().to_string(),
        };
        (self.http_status(), Json(body)).into_response()
    }
}

impl From<PageLookupError> for ApiError {
    fn from(e: PageLookupError) -> Self {
        match e {
            PageLookupError::MissingSlug => ApiError::Validation(SLUG_REQUIRED),
            PageLookupError::NotFound => ApiError::NotFound(PAGE_NOT_FOUND),
            PageLookupError::Store(_) => ApiError::Internal,
        }
    }
}
