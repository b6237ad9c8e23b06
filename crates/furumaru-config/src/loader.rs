//! Configuration loader with layered sources.

use crate::{ConfigValidator, GatewayConfig};
use config::{Config, ConfigError, Environment, File};
use furumaru_core::GatewayError;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<GatewayConfig>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Uncommitted local overrides
    /// 4. Environment variables with `FURUMARU__` prefix
    pub fn new(config_dir: impl Into<String>) -> Result<Self, GatewayError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, GatewayError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> GatewayConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    ///
    /// The previous configuration stays in place when the new one is invalid.
    pub async fn reload(&self) -> Result<(), GatewayError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> Result<GatewayConfig, GatewayError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("FURUMARU_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{}/{}.toml", config_dir, name);
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("FURUMARU")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_gateway_error)?;

        let gateway_config: GatewayConfig = config
            .try_deserialize()
            .map_err(config_error_to_gateway_error)?;

        Self::validate_config(&gateway_config)?;

        Ok(gateway_config)
    }

    /// Validates the configuration, joining every problem into one error.
    fn validate_config(config: &GatewayConfig) -> Result<(), GatewayError> {
        ConfigValidator::validate(config).map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            GatewayError::configuration(messages.join("; "))
        })
    }

    /// Gets a specific configuration value by key path.
    pub async fn get_value<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let config = self.config.read().await;
        let json = serde_json::to_value(&*config).ok()?;

        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }

        serde_json::from_value(current.clone()).ok()
    }
}

fn config_error_to_gateway_error(err: ConfigError) -> GatewayError {
    GatewayError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_directory_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::new(dir.path().join("absent").to_string_lossy()).unwrap();
        let config = loader.get().await;
        assert_eq!(config.app.name, "furumaru-user-gateway");
        assert_eq!(config.merchant_center.currency, "JPY");
    }

    #[tokio::test]
    async fn test_get_value() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::new(dir.path().to_string_lossy()).unwrap();
        let currency: Option<String> = loader.get_value("merchant_center.currency").await;
        assert_eq!(currency.as_deref(), Some("JPY"));
        let missing: Option<String> = loader.get_value("merchant_center.nothing").await;
        assert!(missing.is_none());
    }
}
