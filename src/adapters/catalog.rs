use crate::domain::model::Catalog;
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

/// 內建的預設目錄，可設定模擬載入延遲
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    delay: Duration,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch(&self) -> Result<Catalog> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(Catalog::sample())
    }
}

/// 從 JSON 檔讀取目錄，驗證通過才採用
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn fetch(&self) -> Result<Catalog> {
        tracing::debug!("Reading catalog from {}", self.path.display());
        let data = tokio::fs::read(&self.path).await?;
        let catalog: Catalog = serde_json::from_slice(&data)?;
        catalog.validate()?;
        tracing::debug!(
            "Catalog file provided {} services, {} packages",
            catalog.services.len(),
            catalog.packages.len()
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::AppError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_static_catalog_returns_sample() {
        let catalog = StaticCatalog::with_delay(Duration::from_millis(5))
            .fetch()
            .await
            .unwrap();
        assert_eq!(catalog, Catalog::sample());
    }

    #[tokio::test]
    async fn test_file_catalog_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        let mut catalog = Catalog::sample();
        catalog.services.truncate(2);
        tokio::fs::write(&path, serde_json::to_vec(&catalog).unwrap())
            .await
            .unwrap();

        let loaded = JsonFileCatalog::new(&path).fetch().await.unwrap();
        assert_eq!(loaded.services.len(), 2);
    }

    #[tokio::test]
    async fn test_file_catalog_rejects_malformed_entries() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        let mut catalog = Catalog::sample();
        catalog.packages[1].total_price = 999_999;
        tokio::fs::write(&path, serde_json::to_vec(&catalog).unwrap())
            .await
            .unwrap();

        let result = JsonFileCatalog::new(&path).fetch().await;
        assert!(matches!(result, Err(AppError::CatalogValidation { .. })));
    }

    #[tokio::test]
    async fn test_file_catalog_missing_file() {
        let result = JsonFileCatalog::new("/nonexistent/catalog.json").fetch().await;
        assert!(matches!(result, Err(AppError::IoError(_))));
    }
}
