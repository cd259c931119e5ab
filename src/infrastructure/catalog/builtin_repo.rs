//! Builtin Catalog Repository

use async_trait::async_trait;

use super::builtin::{demo_profiles, voices, voices_by_language};
use crate::application::ports::{CatalogRepositoryPort, RepositoryError};
use crate::domain::profile::Profile;
use crate::domain::voice::{FlattenedVoiceEntry, VoiceCatalog};

/// 内置演示数据 Repository
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalogRepository;

impl BuiltinCatalogRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CatalogRepositoryPort for BuiltinCatalogRepository {
    async fn find_all_profiles(&self) -> Result<Vec<Profile>, RepositoryError> {
        Ok(demo_profiles().to_vec())
    }

    async fn find_profile_by_name(&self, name: &str) -> Result<Option<Profile>, RepositoryError> {
        Ok(demo_profiles().iter().find(|p| p.name() == name).cloned())
    }

    async fn find_voice_catalog(&self) -> Result<VoiceCatalog, RepositoryError> {
        Ok(voices_by_language().clone())
    }

    async fn find_flattened_voices(&self) -> Result<Vec<FlattenedVoiceEntry>, RepositoryError> {
        Ok(voices().to_vec())
    }

    fn source(&self) -> String {
        "builtin".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_profile_by_name() {
        let repo = BuiltinCatalogRepository::new();
        let profile = repo
            .find_profile_by_name("MCP - get location")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(profile.voice_id(), "matthew");
        assert!(repo.find_profile_by_name("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_voice_catalog() {
        let repo = BuiltinCatalogRepository::new();
        let catalog = repo.find_voice_catalog().await.unwrap();
        assert_eq!(&catalog, voices_by_language());
    }

    #[tokio::test]
    async fn test_flattened_voices_match_catalog() {
        let repo = BuiltinCatalogRepository::new();
        let flattened = repo.find_flattened_voices().await.unwrap();
        assert_eq!(flattened, voices());
        assert_eq!(flattened, voices_by_language().flatten());
    }
}
