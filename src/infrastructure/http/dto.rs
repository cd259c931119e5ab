//! Data Transfer Objects

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Profile DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GetProfileRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfigRequest {
    pub name: String,
    #[serde(default)]
    pub voice_id: Option<String>,
}

// ============================================================================
// Tool DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ValidateToolRequest {
    pub profile: String,
    pub tool: String,
    #[serde(default)]
    pub arguments: Value,
}

// ============================================================================
// Voice DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GetVoiceRequest {
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct GetLanguageRequest {
    pub language: String,
}
