//! Profile Query Handlers

use serde::Serialize;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::CatalogRepositoryPort;
use crate::application::queries::{GetProfile, ListProfiles, ResolveSessionConfig};
use crate::domain::profile::{Profile, ToolConfig};
use crate::domain::voice::VoiceError;

// ============================================================================
// Response DTOs
// ============================================================================

/// 会话初始化配置
///
/// 会话客户端发送给语音服务的字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    pub profile: String,
    pub system_prompt: String,
    pub tool_config: ToolConfig,
    pub voice_id: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// ListProfiles Handler
pub struct ListProfilesHandler {
    catalog_repo: Arc<dyn CatalogRepositoryPort>,
}

impl ListProfilesHandler {
    pub fn new(catalog_repo: Arc<dyn CatalogRepositoryPort>) -> Self {
        Self { catalog_repo }
    }

    pub async fn handle(&self, _query: ListProfiles) -> Result<Vec<Profile>, ApplicationError> {
        Ok(self.catalog_repo.find_all_profiles().await?)
    }
}

/// GetProfile Handler
pub struct GetProfileHandler {
    catalog_repo: Arc<dyn CatalogRepositoryPort>,
}

impl GetProfileHandler {
    pub fn new(catalog_repo: Arc<dyn CatalogRepositoryPort>) -> Self {
        Self { catalog_repo }
    }

    pub async fn handle(&self, query: GetProfile) -> Result<Profile, ApplicationError> {
        self.catalog_repo
            .find_profile_by_name(&query.name)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Profile", query.name))
    }
}

/// ResolveSessionConfig Handler
///
/// voiceId 在目录中不可解析时返回 NotFound
pub struct ResolveSessionConfigHandler {
    catalog_repo: Arc<dyn CatalogRepositoryPort>,
}

impl ResolveSessionConfigHandler {
    pub fn new(catalog_repo: Arc<dyn CatalogRepositoryPort>) -> Self {
        Self { catalog_repo }
    }

    pub async fn handle(
        &self,
        query: ResolveSessionConfig,
    ) -> Result<SessionConfig, ApplicationError> {
        if query.profile_name.trim().is_empty() {
            return Err(ApplicationError::validation("Profile name is required"));
        }

        let profile = self
            .catalog_repo
            .find_profile_by_name(&query.profile_name)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Profile", query.profile_name.clone()))?;

        let voice_id = query
            .voice_id
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| profile.voice_id().to_string());

        let catalog = self.catalog_repo.find_voice_catalog().await?;
        if !catalog.contains_voice(&voice_id) {
            return Err(VoiceError::NotFound(voice_id).into());
        }

        tracing::debug!(
            profile = %profile.name(),
            voice_id = %voice_id,
            tools = profile.tool_config().tools.len(),
            "Session config resolved"
        );

        Ok(SessionConfig {
            profile: profile.name().to_string(),
            system_prompt: profile.system_prompt().to_string(),
            tool_config: profile.tool_config().clone(),
            voice_id,
        })
    }
}
