//! Catalog Adapters - 目录数据来源
//!
//! - builtin: 内置演示数据
//! - BuiltinCatalogRepository: 内置数据适配器
//! - FileCatalogRepository: JSON / TOML 文件适配器

mod builtin;
mod builtin_repo;
mod file_repo;

pub use builtin::{demo_profiles, voices, voices_by_language};
pub use builtin_repo::BuiltinCatalogRepository;
pub use file_repo::{CatalogFile, FileCatalogRepository};
