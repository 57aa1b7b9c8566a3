use serde::Deserialize;
use thiserror::Error;

/// Key in `localStorage` holding a TOML override of the configuration
pub const STORAGE_KEY: &str = "app_config";

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
}

/// Адреса сервисов REST API.
///
/// Каждый endpoint это абсолютный URL или путь; путь склеивается с `base_url`,
/// а при пустом `base_url` с origin страницы.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub banks: String,
    pub commissions: String,
    pub fraud_rules: String,
    pub fraud_monitoring: String,
    pub transactions: String,
    pub connection_logs: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            banks: "/api/v1/bancos".to_string(),
            commissions: "/v1/comisiones".to_string(),
            fraud_rules: "/v1/fraudes/reglas".to_string(),
            fraud_monitoring: "/api/v1/monitoreo-fraude".to_string(),
            transactions: "/v1/historial-estados".to_string(),
            connection_logs: "/api/v1/logs-conexion".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn resolve(&self, endpoint: &str, origin: &str) -> String {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return endpoint.trim_end_matches('/').to_string();
        }
        let base = if self.base_url.trim().is_empty() {
            origin
        } else {
            self.base_url.trim()
        };
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            endpoint.trim_start_matches('/').trim_end_matches('/')
        )
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
banks = "/api/v1/bancos"
commissions = "/v1/comisiones"
fraud_rules = "/v1/fraudes/reglas"
fraud_monitoring = "/api/v1/monitoreo-fraude"
transactions = "/v1/historial-estados"
connection_logs = "/api/v1/logs-conexion"
"#;

pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Load configuration
///
/// Search order:
/// 1. `localStorage["app_config"]` (deployment override)
/// 2. Falls back to embedded default config
pub fn load_config() -> Config {
    if let Some(contents) = read_override() {
        match parse_config(&contents) {
            Ok(config) => {
                log::info!("Loading config from localStorage[{}]", STORAGE_KEY);
                return config;
            }
            Err(e) => log::error!("Ignoring localStorage[{}]: {}", STORAGE_KEY, e),
        }
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::error!("Embedded configuration is broken: {}", e);
        Config::default()
    })
}

fn read_override() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(STORAGE_KEY)
        .ok()?
        .filter(|s| !s.trim().is_empty())
}
