use crate::domain::model::Catalog;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Where the catalog comes from. Loaded once at startup.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Catalog>;
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn catalog_path(&self) -> &Path;
}
