//! File Catalog Repository
//!
//! 从 JSON 或 TOML 文件加载目录，构造时读取一次，之后只读

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::application::ports::{CatalogRepositoryPort, RepositoryError};
use crate::domain::profile::Profile;
use crate::domain::voice::VoiceCatalog;

/// 目录文件结构
///
/// ```json
/// { "profiles": [...], "voicesByLanguage": { "English": { "flag": "...", "voices": [...] } } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFile {
    #[serde(default)]
    pub profiles: Vec<Profile>,
    #[serde(default)]
    pub voices_by_language: VoiceCatalog,
}

impl CatalogFile {
    /// 按扩展名解析（.json / .toml）
    pub fn parse(path: &Path, content: &str) -> Result<Self, RepositoryError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => serde_json::from_str(content)
                .map_err(|e| RepositoryError::SerializationError(e.to_string())),
            "toml" => toml::from_str(content)
                .map_err(|e| RepositoryError::SerializationError(e.to_string())),
            _ => Err(RepositoryError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// 文件 Repository
pub struct FileCatalogRepository {
    path: PathBuf,
    catalog: CatalogFile,
}

impl FileCatalogRepository {
    /// 读取并解析目录文件
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let path = path.into();
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| RepositoryError::IoError(format!("{}: {}", path.display(), e)))?;

        let catalog = CatalogFile::parse(&path, &content)?;

        tracing::info!(
            path = %path.display(),
            profiles = catalog.profiles.len(),
            languages = catalog.voices_by_language.len(),
            voices = catalog.voices_by_language.voice_count(),
            "Catalog file loaded"
        );

        Ok(Self { path, catalog })
    }
}

#[async_trait]
impl CatalogRepositoryPort for FileCatalogRepository {
    async fn find_all_profiles(&self) -> Result<Vec<Profile>, RepositoryError> {
        Ok(self.catalog.profiles.clone())
    }

    async fn find_voice_catalog(&self) -> Result<VoiceCatalog, RepositoryError> {
        Ok(self.catalog.voices_by_language.clone())
    }

    fn source(&self) -> String {
        self.path.display().to_string()
    }
}
