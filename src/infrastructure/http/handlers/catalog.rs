//! Catalog HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::ValidateCatalog;
use crate::domain::ValidationReport;
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 目录完整性报告
pub async fn validate_catalog(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<ValidationReport>>, ApiError> {
    let report = state.validate_catalog_handler.handle(ValidateCatalog).await?;
    Ok(Json(ApiResponse::success(report)))
}
