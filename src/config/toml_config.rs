use crate::utils::error::{CatalogError, Result};
use crate::utils::logger::LogFormat;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| CatalogError::ConfigError {
            message: format!("Cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PORT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[server]
host = "127.0.0.1"
port = 8080

[catalog]
path = "/srv/catalog/courses.json"

[logging]
level = "course_catalog=debug"
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.server.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(config.server.port, Some(8080));
        assert_eq!(config.catalog.path.as_deref(), Some("/srv/catalog/courses.json"));
        assert_eq!(config.logging.level.as_deref(), Some("course_catalog=debug"));
        assert_eq!(config.logging.format, Some(LogFormat::Json));
    }

    #[test]
    fn test_empty_toml_leaves_everything_unset() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert!(config.server.host.is_none());
        assert!(config.server.port.is_none());
        assert!(config.catalog.path.is_none());
        assert!(config.logging.format.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("COURSE_CATALOG_TEST_PATH", "/tmp/test-courses.json");

        let toml_content = r#"
[catalog]
path = "${COURSE_CATALOG_TEST_PATH}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.catalog.path.as_deref(), Some("/tmp/test-courses.json"));

        std::env::remove_var("COURSE_CATALOG_TEST_PATH");
    }

    #[test]
    fn test_unset_env_var_is_left_untouched() {
        let toml_content = r#"
[server]
host = "${COURSE_CATALOG_SURELY_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.server.host.as_deref(),
            Some("${COURSE_CATALOG_SURELY_UNSET_VAR}")
        );
    }

    #[test]
    fn test_unknown_log_format_is_config_error() {
        let err = TomlConfig::from_toml_str("[logging]\nformat = \"pretty\"\n").unwrap_err();
        assert!(matches!(err, CatalogError::ConfigError { .. }));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[server\nport = ").unwrap_err();
        assert!(matches!(err, CatalogError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[server]\nport = 4000\n").unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.server.port, Some(4000));
    }
}
