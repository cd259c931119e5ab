//! Profile Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("工具 {tool} 的 inputSchema 无法解析: {reason}")]
    SchemaParse { tool: String, reason: String },

    #[error("工具 {tool} 的参数校验失败: {}", issues.join("; "))]
    ToolArgumentValidation { tool: String, issues: Vec<String> },

    #[error("工具不存在: {0}")]
    ToolNotFound(String),
}

impl ProfileError {
    pub fn schema_parse(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SchemaParse {
            tool: tool.into(),
            reason: reason.into(),
        }
    }
}
