//! Configuration validation.
//!
//! Collects every problem in one pass so a misconfigured deployment fails
//! at startup with the full list.

use crate::{GatewayConfig, MerchantCenterConfig, WebConfig};
use furumaru_core::LoggingConfig;
use std::fmt;
use url::Url;
use validator::Validate;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    /// URL format is invalid.
    InvalidUrl { url_type: String, message: String },
    /// Log filter directive cannot be parsed.
    InvalidLogLevel { value: String },
    /// Merchant-center feed setting rejected.
    InvalidFeedSetting { field: String, message: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl { url_type, message } => {
                write!(f, "Invalid {} URL: {}", url_type, message)
            }
            Self::InvalidLogLevel { value } => {
                write!(f, "Invalid log level: '{}'", value)
            }
            Self::InvalidFeedSetting { field, message } => {
                write!(f, "Invalid merchant_center.{}: {}", field, message)
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates the entire gateway configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &GatewayConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_logging(&config.logging, &mut errors);
        Self::validate_web(&config.web, &mut errors);
        Self::validate_merchant_center(&config.merchant_center, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// The level must parse with the same filter syntax `init_logging` uses.
    fn validate_logging(config: &LoggingConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.level.trim().is_empty() || config.level_filter().is_err() {
            errors.push(ConfigValidationError::InvalidLogLevel {
                value: config.level.clone(),
            });
        }
    }

    fn validate_web(config: &WebConfig, errors: &mut Vec<ConfigValidationError>) {
        for (url_type, value) in [
            ("user_web", &config.user_web_url),
            ("assets", &config.assets_url),
        ] {
            if let Err(e) = Url::parse(value) {
                errors.push(ConfigValidationError::InvalidUrl {
                    url_type: url_type.to_string(),
                    message: e.to_string(),
                });
            }
        }
    }

    fn validate_merchant_center(
        config: &MerchantCenterConfig,
        errors: &mut Vec<ConfigValidationError>,
    ) {
        let Err(validation) = config.validate() else {
            return;
        };

        let mut fields: Vec<_> = validation.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));
        for (field, field_errors) in fields {
            for error in field_errors {
                errors.push(ConfigValidationError::InvalidFeedSetting {
                    field: field.to_string(),
                    message: error.code.to_string(),
                });
            }
        }
    }
}
