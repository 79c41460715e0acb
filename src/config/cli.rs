use crate::config::{ServerSettings, TomlConfig};
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "course-catalog")]
#[command(about = "Read-only HTTP API over a static course catalog")]
pub struct CliConfig {
    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Path to the catalog JSON file
    #[arg(long, env = "CATALOG_PATH")]
    pub catalog: Option<PathBuf>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// 合併設定：預設值 < TOML 檔案 < 命令列/環境變數
    pub fn resolve(&self) -> Result<ServerSettings> {
        let mut settings = match &self.config {
            Some(path) => ServerSettings::from_toml(&TomlConfig::from_file(path)?),
            None => ServerSettings::default(),
        };

        self.apply_overrides(&mut settings);
        Ok(settings)
    }

    pub fn apply_overrides(&self, settings: &mut ServerSettings) {
        if let Some(host) = &self.host {
            settings.host = host.clone();
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        if let Some(catalog) = &self.catalog {
            settings.catalog_path = catalog.clone();
        }
        if self.json_logs {
            settings.log_format = LogFormat::Json;
        }
    }
}
