//! Catalog Queries

/// 校验目录完整性查询
#[derive(Debug, Clone)]
pub struct ValidateCatalog;
