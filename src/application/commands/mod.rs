//! 应用层 - 命令
//!
//! CQRS 命令侧：工具调用参数校验

mod tool_commands;

pub mod handlers;

pub use tool_commands::*;
