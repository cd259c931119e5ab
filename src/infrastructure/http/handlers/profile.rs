//! Profile HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{GetProfile, ListProfiles, ResolveSessionConfig, SessionConfig};
use crate::domain::profile::Profile;
use crate::infrastructure::http::dto::{ApiResponse, GetProfileRequest, SessionConfigRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取 Profile 列表
pub async fn list_profiles(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Profile>>>, ApiError> {
    let profiles = state.list_profiles_handler.handle(ListProfiles).await?;
    Ok(Json(ApiResponse::success(profiles)))
}

/// 获取 Profile 详情
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GetProfileRequest>,
) -> Result<Json<ApiResponse<Profile>>, ApiError> {
    let profile = state
        .get_profile_handler
        .handle(GetProfile { name: req.name })
        .await?;
    Ok(Json(ApiResponse::success(profile)))
}

/// 解析会话初始化配置
pub async fn session_config(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SessionConfigRequest>,
) -> Result<Json<ApiResponse<SessionConfig>>, ApiError> {
    let query = ResolveSessionConfig {
        profile_name: req.name,
        voice_id: req.voice_id,
    };

    let config = state.session_config_handler.handle(query).await?;

    tracing::info!(
        profile = %config.profile,
        voice_id = %config.voice_id,
        "Session config issued"
    );

    Ok(Json(ApiResponse::success(config)))
}
