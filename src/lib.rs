//! s2s-catalog - 语音对话演示目录服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Profile Context: 演示 Profile、工具声明、参数校验
//! - Voice Context: 按语言分组的音色目录与扁平化派生
//! - 目录完整性校验
//!
//! 应用层 (application/):
//! - Ports: CatalogRepositoryPort
//! - Commands: 工具参数校验
//! - Queries: Profile / 音色 / 会话配置 / 目录报告
//!
//! 基础设施层 (infrastructure/):
//! - Catalog: 内置演示数据、文件目录
//! - HTTP: 只读 RESTful API

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
pub use domain::voice::flatten;
pub use infrastructure::catalog::{demo_profiles, voices, voices_by_language};
