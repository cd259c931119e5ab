//! Profile Context - 演示配置上下文
//!
//! 职责:
//! - 演示 Profile（系统提示词、音色、工具配置）
//! - 工具声明与 inputSchema 解析
//! - 工具调用参数校验

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::{Profile, ToolConfig, ToolEntry};
pub use errors::ProfileError;
pub use value_objects::{InputSchema, SchemaProperty, ToolSchema, ToolSpec};
