use crate::utils::error::{RateError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_RATE_ENDPOINT: &str = "https://soa-gw.canadapost.ca/rs/ship/price";
pub const DEFAULT_EXCHANGE_ENDPOINT: &str = "https://api.exchangerate-api.com/v4/latest/CAD";

const PLACEHOLDER: &str = "changeme";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OriginConfig {
    pub street: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
}

/// File-backed settings: carrier credentials, endpoints, and the default
/// origin address. Loaded once by the entry point and passed in; the core
/// never reads the filesystem or environment itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api_secret: String,
    #[serde(default)]
    pub customer_number: String,
    #[serde(default = "default_rate_endpoint")]
    pub rate_endpoint: String,
    #[serde(default = "default_exchange_endpoint")]
    pub exchange_endpoint: String,
    pub origin: OriginConfig,
}

fn default_rate_endpoint() -> String {
    DEFAULT_RATE_ENDPOINT.to_string()
}

fn default_exchange_endpoint() -> String {
    DEFAULT_EXCHANGE_ENDPOINT.to_string()
}

impl AppConfig {
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".shiprate")
            .join("config.json")
    }

    /// Loads the config file, writing a placeholder template on first run so
    /// the user has something to fill in.
    pub fn load_or_bootstrap(path: &Path) -> Result<Self> {
        if !path.exists() {
            let template = Self::template();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, serde_json::to_string_pretty(&template)?)?;
            tracing::warn!(
                "Created placeholder config at {}; fill in your carrier credentials",
                path.display()
            );
            return Ok(template);
        }

        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    fn template() -> Self {
        Self {
            api_key: PLACEHOLDER.to_string(),
            api_secret: PLACEHOLDER.to_string(),
            customer_number: PLACEHOLDER.to_string(),
            rate_endpoint: DEFAULT_RATE_ENDPOINT.to_string(),
            exchange_endpoint: DEFAULT_EXCHANGE_ENDPOINT.to_string(),
            origin: OriginConfig {
                street: "123 Example St".to_string(),
                city: "Ottawa".to_string(),
                province: "ON".to_string(),
                postal_code: "K1A 0B1".to_string(),
            },
        }
    }

    /// The configured origin in the same free-text shape the `-f` flag takes,
    /// so both paths go through the one address parser.
    pub fn origin_address(&self) -> String {
        format!(
            "{}, {}, {}, {}",
            self.origin.street, self.origin.city, self.origin.province, self.origin.postal_code
        )
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        let required = [
            ("api_key", &self.api_key),
            ("api_secret", &self.api_secret),
            ("customer_number", &self.customer_number),
        ];
        for (key, value) in required {
            if value.trim().is_empty() || value == PLACEHOLDER {
                return Err(RateError::MissingConfig {
                    key: key.to_string(),
                });
            }
        }

        validation::validate_url("rate_endpoint", &self.rate_endpoint)?;
        validation::validate_url("exchange_endpoint", &self.exchange_endpoint)?;
        validation::validate_non_empty_string("origin.postal_code", &self.origin.postal_code)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn valid_config_json() -> String {
        serde_json::json!({
            "api_key": "key",
            "api_secret": "secret",
            "customer_number": "0001234567",
            "origin": {
                "street": "475 Main St",
                "city": "Ottawa",
                "province": "ON",
                "postal_code": "K1A 0B1"
            }
        })
        .to_string()
    }

    #[test]
    fn test_bootstrap_writes_placeholder_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");

        let config = AppConfig::load_or_bootstrap(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config.api_key, "changeme");
        // Placeholder credentials must not pass validation.
        assert!(config.validate().is_err());

        // Re-loading reads the file it just wrote.
        let reloaded = AppConfig::load_or_bootstrap(&path).unwrap();
        assert_eq!(reloaded.api_key, config.api_key);
    }

    #[test]
    fn test_load_existing_config_with_endpoint_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, valid_config_json()).unwrap();

        let config = AppConfig::load_or_bootstrap(&path).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.rate_endpoint, DEFAULT_RATE_ENDPOINT);
        assert_eq!(config.exchange_endpoint, DEFAULT_EXCHANGE_ENDPOINT);
        assert_eq!(
            config.origin_address(),
            "475 Main St, Ottawa, ON, K1A 0B1"
        );
    }

    #[test]
    fn test_missing_key_is_named() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        let json = serde_json::json!({
            "api_secret": "secret",
            "customer_number": "0001234567",
            "origin": {
                "street": "475 Main St",
                "city": "Ottawa",
                "province": "ON",
                "postal_code": "K1A 0B1"
            }
        });
        std::fs::write(&path, json.to_string()).unwrap();

        let config = AppConfig::load_or_bootstrap(&path).unwrap();
        let err = config.validate().unwrap_err();

        match err {
            RateError::MissingConfig { key } => assert_eq!(key, "api_key"),
            other => panic!("expected MissingConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let mut config: AppConfig = serde_json::from_str(&valid_config_json()).unwrap();
        config.rate_endpoint = "not-a-url".to_string();
        assert!(config.validate().is_err());
    }
}
