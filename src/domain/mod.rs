//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Profile Context: 演示 Profile 与工具声明
//! - Voice Context: 按语言分组的音色目录

pub mod profile;
pub mod voice;

// 跨上下文的完整性校验
mod catalog_validator;

pub use catalog_validator::{validate_catalog, CatalogIssue, ValidationReport};
