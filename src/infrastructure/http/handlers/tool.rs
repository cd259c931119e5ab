//! Tool HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{ValidateToolArguments, ValidateToolArgumentsResponse};
use crate::infrastructure::http::dto::{ApiResponse, ValidateToolRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 校验工具调用参数
pub async fn validate_tool_arguments(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ValidateToolRequest>,
) -> Result<Json<ApiResponse<ValidateToolArgumentsResponse>>, ApiError> {
    let command = ValidateToolArguments {
        profile_name: req.profile,
        tool_name: req.tool,
        arguments: req.arguments,
    };

    let result = state.validate_tool_handler.handle(command).await?;
    Ok(Json(ApiResponse::success(result)))
}
