//! Public content page handler

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Serialize;
use utoipa::ToSchema;

use super::super::error::{ApiError, ErrorBody};
use super::super::state::AppState;
use crate::content::{Page, PageLookupError, get_public_page};

/// Page lookup response
#[derive(Debug, Serialize, ToSchema)]
pub struct PageResponse {
    pub page: Page,
}

/// Get a published page by slug
///
/// Draft pages answer exactly like unknown slugs.
#[utoipa::path(
    get,
    path = "/api/pages",
    params(
        ("slug" = String, Query, description = "Page slug, e.g. terms-of-service")
    ),
    responses(
        (status = 200, description = "Page found", body = PageResponse),
        (status = 400, description = "Slug required", body = ErrorBody),
        (status = 404, description = "Page not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Content"
)]
pub async fn get_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<PageResponse>, ApiError> {
    let slug = params.get("slug").map(String::as_str);
    let page = get_public_page(state.pages.as_ref(), slug)
        .await
        .map_err(|e| {
            if let PageLookupError::Store(err) = &e {
                tracing::error!(error = %err, "[pages] Page lookup failed");
            }
            ApiError::from(e)
        })?;
    tracing::debug!(slug = %page.slug, "[pages] Served page");
    Ok(Json(PageResponse { page }))
}
