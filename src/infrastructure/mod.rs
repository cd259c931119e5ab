//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod catalog;
pub mod http;

pub use catalog::{BuiltinCatalogRepository, FileCatalogRepository};
