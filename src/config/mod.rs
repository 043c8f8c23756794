#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{AppError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"));

pub const DEFAULT_CONFIG_FILE: &str = "lifeui.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080/v1".to_string(),
            api_key: None,
            timeout_seconds: Some(10),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// 草稿與收藏的 JSON 檔
    pub path: String,
    /// 選用：外部服務目錄 JSON 檔，未設定時使用內建目錄
    pub catalog_path: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: "./lifeui-store.json".to_string(),
            catalog_path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_debounce_ms")]
    pub search_debounce_ms: u64,
    #[serde(default)]
    pub simulated_load_delay_ms: u64,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_currency_symbol() -> String {
    crate::core::pricing::DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: default_debounce_ms(),
            simulated_load_delay_ms: 0,
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl UiConfig {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn simulated_load_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_load_delay_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 檔案存在才載入，否則使用預設值
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(
                "Config file {} not found, using defaults",
                path.as_ref().display()
            );
            Ok(Self::default())
        }
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${LIFEUI_API_KEY})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("gateway.endpoint", &self.gateway.endpoint)?;
        if let Some(timeout) = self.gateway.timeout_seconds {
            validate_range("gateway.timeout_seconds", timeout, 1, 300)?;
        }
        validate_path("storage.path", &self.storage.path)?;
        if let Some(catalog_path) = &self.storage.catalog_path {
            validate_path("storage.catalog_path", catalog_path)?;
        }
        validate_range("ui.search_debounce_ms", self.ui.search_debounce_ms, 0, 5_000)?;
        validate_range(
            "ui.simulated_load_delay_ms",
            self.ui.simulated_load_delay_ms,
            0,
            10_000,
        )?;
        validate_non_empty_string("ui.currency_symbol", &self.ui.currency_symbol)?;

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(AppError::InvalidConfigValueError {
                field: "logging.level".to_string(),
                value: self.logging.level.clone(),
                reason: format!("Valid levels: {}", valid_levels.join(", ")),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[gateway]
endpoint = "https://store.example.com/v1"
api_key = "secret"
timeout_seconds = 5

[storage]
path = "./data/store.json"
catalog_path = "./data/catalog.json"

[ui]
search_debounce_ms = 250
simulated_load_delay_ms = 1000

[logging]
level = "debug"
json = true
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.gateway.endpoint, "https://store.example.com/v1");
        assert_eq!(config.gateway.api_key.as_deref(), Some("secret"));
        assert_eq!(config.ui.search_debounce(), Duration::from_millis(250));
        assert_eq!(config.ui.currency_symbol, "NT$");
        assert!(config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.ui.search_debounce_ms, 300);
        assert_eq!(config.storage.path, "./lifeui-store.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("LIFEUI_TEST_GATEWAY", "https://test.store.com");

        let toml_content = r#"
[gateway]
endpoint = "${LIFEUI_TEST_GATEWAY}"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.gateway.endpoint, "https://test.store.com");

        std::env::remove_var("LIFEUI_TEST_GATEWAY");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[gateway]
endpoint = "invalid-url"
"#;
        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[ui]\nsearch_debounce_ms = 100\n")
            .unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.ui.search_debounce_ms, 100);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_or_default("/nonexistent/lifeui.toml").unwrap();
        assert_eq!(config.gateway.timeout_seconds, Some(10));
    }
}
