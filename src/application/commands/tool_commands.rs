//! Tool Commands

use serde_json::Value;

/// 校验工具调用参数命令
#[derive(Debug, Clone)]
pub struct ValidateToolArguments {
    pub profile_name: String,
    pub tool_name: String,
    pub arguments: Value,
}
