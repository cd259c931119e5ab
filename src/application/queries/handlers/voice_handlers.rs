//! Voice Query Handlers

use serde::Serialize;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::CatalogRepositoryPort;
use crate::application::queries::{GetLanguage, GetVoice, ListVoices, ListVoicesByLanguage};
use crate::domain::voice::{FlattenedVoiceEntry, VoiceCatalog, VoiceEntry, VoiceError};

// ============================================================================
// Response DTOs
// ============================================================================

/// 单个语言的音色列表
#[derive(Debug, Clone, Serialize)]
pub struct LanguageResponse {
    pub language: String,
    pub flag: String,
    pub voices: Vec<VoiceEntry>,
}

// ============================================================================
// Handlers
// ============================================================================

/// ListVoices Handler（扁平化列表）
pub struct ListVoicesHandler {
    catalog_repo: Arc<dyn CatalogRepositoryPort>,
}

impl ListVoicesHandler {
    pub fn new(catalog_repo: Arc<dyn CatalogRepositoryPort>) -> Self {
        Self { catalog_repo }
    }

    pub async fn handle(
        &self,
        _query: ListVoices,
    ) -> Result<Vec<FlattenedVoiceEntry>, ApplicationError> {
        Ok(self.catalog_repo.find_flattened_voices().await?)
    }
}

/// ListVoicesByLanguage Handler
pub struct ListVoicesByLanguageHandler {
    catalog_repo: Arc<dyn CatalogRepositoryPort>,
}

impl ListVoicesByLanguageHandler {
    pub fn new(catalog_repo: Arc<dyn CatalogRepositoryPort>) -> Self {
        Self { catalog_repo }
    }

    pub async fn handle(
        &self,
        _query: ListVoicesByLanguage,
    ) -> Result<VoiceCatalog, ApplicationError> {
        Ok(self.catalog_repo.find_voice_catalog().await?)
    }
}

/// GetLanguage Handler
pub struct GetLanguageHandler {
    catalog_repo: Arc<dyn CatalogRepositoryPort>,
}

impl GetLanguageHandler {
    pub fn new(catalog_repo: Arc<dyn CatalogRepositoryPort>) -> Self {
        Self { catalog_repo }
    }

    pub async fn handle(&self, query: GetLanguage) -> Result<LanguageResponse, ApplicationError> {
        let catalog = self.catalog_repo.find_voice_catalog().await?;
        let entry = catalog
            .get(&query.language)
            .ok_or_else(|| VoiceError::LanguageNotFound(query.language.clone()))?;

        Ok(LanguageResponse {
            language: query.language,
            flag: entry.flag.clone(),
            voices: entry.voices.clone(),
        })
    }
}

/// GetVoice Handler
pub struct GetVoiceHandler {
    catalog_repo: Arc<dyn CatalogRepositoryPort>,
}

impl GetVoiceHandler {
    pub fn new(catalog_repo: Arc<dyn CatalogRepositoryPort>) -> Self {
        Self { catalog_repo }
    }

    pub async fn handle(&self, query: GetVoice) -> Result<FlattenedVoiceEntry, ApplicationError> {
        let catalog = self.catalog_repo.find_voice_catalog().await?;
        let (language, voice) = catalog
            .find_voice(&query.value)
            .ok_or(VoiceError::NotFound(query.value.clone()))?;

        Ok(FlattenedVoiceEntry::from_voice(language, voice))
    }
}
