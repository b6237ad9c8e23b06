//! Gateway configuration structures.

use furumaru_core::LoggingConfig;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Root gateway configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Public URLs of the client application.
    #[serde(default)]
    pub web: WebConfig,

    /// Google Merchant Center product feed settings.
    #[serde(default)]
    pub merchant_center: MerchantCenterConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "furumaru-user-gateway".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

impl AppMetadata {
    /// Checks if running in production.
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

/// Public URLs of the client application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    /// Base URL of the user-facing web application.
    pub user_web_url: String,
    /// Base URL that serves uploaded media.
    pub assets_url: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            user_web_url: "http://localhost:3000".to_string(),
            assets_url: "http://localhost:3000/assets".to_string(),
        }
    }
}

impl WebConfig {
    /// Joins a path onto the user web URL without doubling slashes.
    #[must_use]
    pub fn user_web_link(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.user_web_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Google Merchant Center feed settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MerchantCenterConfig {
    /// Channel title.
    #[validate(length(min = 1, max = 150))]
    pub title: String,

    /// Channel description.
    #[validate(length(max = 5000))]
    pub description: String,

    /// ISO 4217 currency code appended to prices.
    #[validate(length(equal = 3))]
    pub currency: String,

    /// Brand reported for every item.
    #[validate(length(min = 1, max = 70))]
    pub brand: String,

    /// Path of the product detail page; `{id}` is replaced by the product ID.
    #[validate(contains(pattern = "{id}"))]
    pub product_path: String,
}

impl Default for MerchantCenterConfig {
    fn default() -> Self {
        Self {
            title: "ふるマル".to_string(),
            description: "ふるマル 商品一覧".to_string(),
            currency: "JPY".to_string(),
            brand: "ふるマル".to_string(),
            product_path: "/items/{id}".to_string(),
        }
    }
}

impl MerchantCenterConfig {
    /// Path of the detail page of a product.
    #[must_use]
    pub fn product_path_for(&self, product_id: &str) -> String {
        self.product_path.replace("{id}", product_id)
    }
}
