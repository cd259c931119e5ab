//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    ValidateToolArgumentsHandler,
    // Query handlers
    GetLanguageHandler, GetProfileHandler, GetVoiceHandler, ListProfilesHandler,
    ListVoicesByLanguageHandler, ListVoicesHandler, ResolveSessionConfigHandler,
    ValidateCatalogHandler,
    // Ports
    CatalogRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub catalog_repo: Arc<dyn CatalogRepositoryPort>,

    // ========== Command Handlers ==========
    pub validate_tool_handler: ValidateToolArgumentsHandler,

    // ========== Query Handlers ==========
    pub list_profiles_handler: ListProfilesHandler,
    pub get_profile_handler: GetProfileHandler,
    pub session_config_handler: ResolveSessionConfigHandler,
    pub list_voices_handler: ListVoicesHandler,
    pub list_voices_by_language_handler: ListVoicesByLanguageHandler,
    pub get_language_handler: GetLanguageHandler,
    pub get_voice_handler: GetVoiceHandler,
    pub validate_catalog_handler: ValidateCatalogHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(catalog_repo: Arc<dyn CatalogRepositoryPort>) -> Self {
        Self {
            // Ports
            catalog_repo: catalog_repo.clone(),

            // Command handlers
            validate_tool_handler: ValidateToolArgumentsHandler::new(catalog_repo.clone()),

            // Query handlers
            list_profiles_handler: ListProfilesHandler::new(catalog_repo.clone()),
            get_profile_handler: GetProfileHandler::new(catalog_repo.clone()),
            session_config_handler: ResolveSessionConfigHandler::new(catalog_repo.clone()),
            list_voices_handler: ListVoicesHandler::new(catalog_repo.clone()),
            list_voices_by_language_handler: ListVoicesByLanguageHandler::new(catalog_repo.clone()),
            get_language_handler: GetLanguageHandler::new(catalog_repo.clone()),
            get_voice_handler: GetVoiceHandler::new(catalog_repo.clone()),
            validate_catalog_handler: ValidateCatalogHandler::new(catalog_repo),
        }
    }
}
