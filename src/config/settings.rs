use crate::config::{TomlConfig, DEFAULT_CATALOG_PATH, DEFAULT_HOST, DEFAULT_PORT};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{invalid_value, Validate};
use std::path::{Path, PathBuf};

/// Fully resolved runtime settings: defaults, then the TOML file, then CLI/env overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub catalog_path: PathBuf,
    pub log_format: LogFormat,
    pub log_level: Option<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            log_format: LogFormat::default(),
            log_level: None,
        }
    }
}

impl ServerSettings {
    pub fn from_toml(file: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            host: file.server.host.clone().unwrap_or(defaults.host),
            port: file.server.port.unwrap_or(defaults.port),
            catalog_path: file
                .catalog
                .path
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
            log_format: file.logging.format.unwrap_or(defaults.log_format),
            log_level: file.logging.level.clone(),
        }
    }
}

impl ConfigProvider for ServerSettings {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }
}

impl Validate for ServerSettings {
    fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(invalid_value("host", &self.host, "Host cannot be empty"));
        }

        if self.port == 0 {
            return Err(invalid_value("port", self.port, "Port must be between 1 and 65535"));
        }

        let path = self.catalog_path.to_string_lossy();
        if path.is_empty() {
            return Err(invalid_value("catalog_path", &path, "Path cannot be empty"));
        }
        if path.contains('\0') {
            return Err(invalid_value("catalog_path", &path, "Path contains null bytes"));
        }

        Ok(())
    }
}
