//! Catalog Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::CatalogRepositoryPort;
use crate::application::queries::ValidateCatalog;
use crate::domain::{validate_catalog, ValidationReport};

/// ValidateCatalog Handler
pub struct ValidateCatalogHandler {
    catalog_repo: Arc<dyn CatalogRepositoryPort>,
}

impl ValidateCatalogHandler {
    pub fn new(catalog_repo: Arc<dyn CatalogRepositoryPort>) -> Self {
        Self { catalog_repo }
    }

    pub async fn handle(&self, _query: ValidateCatalog) -> Result<ValidationReport, ApplicationError> {
        let profiles = self.catalog_repo.find_all_profiles().await?;
        let voices = self.catalog_repo.find_voice_catalog().await?;

        let report = validate_catalog(&profiles, &voices);
        for issue in &report.issues {
            tracing::warn!(source = %self.catalog_repo.source(), issue = %issue, "Catalog issue");
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::catalog::BuiltinCatalogRepository;

    #[tokio::test]
    async fn test_builtin_catalog_has_single_issue() {
        let handler = ValidateCatalogHandler::new(Arc::new(BuiltinCatalogRepository::new()));
        let report = handler.handle(ValidateCatalog).await.unwrap();
        assert_eq!(report.len(), 1);
        assert!(!report.is_clean());
    }
}
