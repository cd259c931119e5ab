//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（CatalogRepository）
//! - commands: 工具参数校验命令及处理器
//! - queries: Profile / 音色 / 目录校验查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{ValidateToolArgumentsHandler, ValidateToolArgumentsResponse},
    ValidateToolArguments,
};

pub use error::ApplicationError;

pub use ports::{CatalogRepositoryPort, RepositoryError};

pub use queries::{
    // Profile queries
    GetProfile,
    ListProfiles,
    ResolveSessionConfig,
    // Voice queries
    GetLanguage,
    GetVoice,
    ListVoices,
    ListVoicesByLanguage,
    // Catalog queries
    ValidateCatalog,
    // Handlers
    handlers::{
        GetLanguageHandler, GetProfileHandler, GetVoiceHandler, LanguageResponse,
        ListProfilesHandler, ListVoicesByLanguageHandler, ListVoicesHandler,
        ResolveSessionConfigHandler, SessionConfig, ValidateCatalogHandler,
    },
};
