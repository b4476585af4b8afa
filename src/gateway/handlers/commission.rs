//! Commission rate preview handler

use std::sync::Arc;

use axum::{Json, extract::State};

use super::super::state::AppState;
use crate::commission::{CommissionPreview, preview_commission};

/// Commission rate preview
///
/// Percentages for display only. Always 200: on any settings failure the
/// defaults (3% first order, 1% repeat) are returned.
#[utoipa::path(
    get,
    path = "/api/commission/preview",
    responses(
        (status = 200, description = "Commission rates in percent", body = CommissionPreview)
    ),
    tag = "Commission"
)]
pub async fn get_commission_preview(State(state): State<Arc<AppState>>) -> Json<CommissionPreview> {
    Json(preview_commission(state.settings.as_ref()).await)
}
