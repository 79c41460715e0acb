use clap::Parser;
use course_catalog::utils::{logger, validation::Validate};
use course_catalog::{CatalogSource, CliConfig, ConfigProvider, FileCatalogSource};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 日誌格式可能來自設定檔，所以先解析設定
    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    logger::init_logger(settings.log_format, cli.verbose, settings.log_level.as_deref());

    tracing::info!("Starting course-catalog");
    if cli.verbose {
        tracing::debug!("Resolved settings: {:?}", settings);
    }

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let source = FileCatalogSource::new(settings.catalog_path());
    let catalog = match source.load().await {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("❌ Catalog load failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    course_catalog::serve(&settings, Arc::new(catalog)).await?;

    Ok(())
}
