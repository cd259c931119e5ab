//! Voice HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{
    GetLanguage, GetVoice, LanguageResponse, ListVoices, ListVoicesByLanguage,
};
use crate::domain::voice::{FlattenedVoiceEntry, VoiceCatalog};
use crate::infrastructure::http::dto::{ApiResponse, GetLanguageRequest, GetVoiceRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取扁平化音色列表
pub async fn list_voices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<FlattenedVoiceEntry>>>, ApiError> {
    let voices = state.list_voices_handler.handle(ListVoices).await?;
    Ok(Json(ApiResponse::success(voices)))
}

/// 获取按语言分组的音色目录
pub async fn list_voices_by_language(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<VoiceCatalog>>, ApiError> {
    let catalog = state
        .list_voices_by_language_handler
        .handle(ListVoicesByLanguage)
        .await?;
    Ok(Json(ApiResponse::success(catalog)))
}

/// 获取单个语言的音色
pub async fn get_language(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GetLanguageRequest>,
) -> Result<Json<ApiResponse<LanguageResponse>>, ApiError> {
    let result = state
        .get_language_handler
        .handle(GetLanguage {
            language: req.language,
        })
        .await?;
    Ok(Json(ApiResponse::success(result)))
}

/// 根据 value 获取音色
pub async fn get_voice(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GetVoiceRequest>,
) -> Result<Json<ApiResponse<FlattenedVoiceEntry>>, ApiError> {
    let voice = state
        .get_voice_handler
        .handle(GetVoice { value: req.value })
        .await?;
    Ok(Json(ApiResponse::success(voice)))
}
