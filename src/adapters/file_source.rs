use crate::core::{Catalog, CatalogSource, Result};
use crate::utils::error::CatalogError;
use async_trait::async_trait;
use std::path::PathBuf;

/// Loads the catalog from a JSON file on local disk.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn load(&self) -> Result<Catalog> {
        tracing::debug!("Reading catalog from: {}", self.path.display());

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::CatalogReadError {
                path: self.path.display().to_string(),
                source,
            })?;

        let catalog = Catalog::from_json_str(&content)?;

        tracing::info!(
            "📚 Loaded catalog from {}: {} year groups, {} courses",
            self.path.display(),
            catalog.year_groups().len(),
            catalog.course_count()
        );
        Ok(catalog)
    }
}
