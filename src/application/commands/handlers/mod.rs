//! Command Handlers 实现

mod tool_handlers;

pub use tool_handlers::*;
