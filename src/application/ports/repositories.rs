//! Repository Ports - 出站端口
//!
//! 定义目录数据读取的抽象接口
//! 具体实现在 infrastructure 层（内置数据 / 文件）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::profile::Profile;
use crate::domain::voice::{FlattenedVoiceEntry, VoiceCatalog};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),
}

/// Catalog Repository Port
///
/// 目录数据只读，实现方在构造后不再修改数据
#[async_trait]
pub trait CatalogRepositoryPort: Send + Sync {
    /// 获取所有 Profile（声明顺序）
    async fn find_all_profiles(&self) -> Result<Vec<Profile>, RepositoryError>;

    /// 根据名称查找 Profile（名称重复时返回第一个）
    async fn find_profile_by_name(&self, name: &str) -> Result<Option<Profile>, RepositoryError> {
        Ok(self
            .find_all_profiles()
            .await?
            .into_iter()
            .find(|profile| profile.name() == name))
    }

    /// 获取按语言分组的音色目录
    async fn find_voice_catalog(&self) -> Result<VoiceCatalog, RepositoryError>;

    /// 获取扁平化音色列表（目录顺序）
    async fn find_flattened_voices(&self) -> Result<Vec<FlattenedVoiceEntry>, RepositoryError> {
        Ok(self.find_voice_catalog().await?.flatten())
    }

    /// 数据来源描述（用于日志）
    fn source(&self) -> String;
}
