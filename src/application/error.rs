//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::domain::profile::ProfileError;
use crate::domain::voice::VoiceError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 工具参数不满足 inputSchema
    #[error("Tool argument validation failed for {tool}: {}", issues.join("; "))]
    ToolArgumentValidation { tool: String, issues: Vec<String> },

    /// inputSchema 无法解析
    #[error("Schema parse error for {tool}: {reason}")]
    SchemaParse { tool: String, reason: String },

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

impl From<crate::application::ports::RepositoryError> for ApplicationError {
    fn from(err: crate::application::ports::RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

impl From<ProfileError> for ApplicationError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::SchemaParse { tool, reason } => Self::SchemaParse { tool, reason },
            ProfileError::ToolArgumentValidation { tool, issues } => {
                Self::ToolArgumentValidation { tool, issues }
            }
            ProfileError::ToolNotFound(tool) => Self::not_found("Tool", tool),
        }
    }
}

impl From<VoiceError> for ApplicationError {
    fn from(err: VoiceError) -> Self {
        match err {
            VoiceError::NotFound(value) => Self::not_found("Voice", value),
            VoiceError::LanguageNotFound(language) => Self::not_found("Language", language),
        }
    }
}
