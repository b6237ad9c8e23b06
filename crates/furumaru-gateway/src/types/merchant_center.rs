//! Google Merchant Center product feed (RSS 2.0 with the `g:` namespace).

use serde::Serialize;

/// Namespace bound to the `g:` prefix.
pub const MERCHANT_CENTER_NAMESPACE: &str = "http://base.google.com/ns/1.0";

/// Stock state reported to Merchant Center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MerchantCenterAvailability {
    InStock,
    OutOfStock,
    Preorder,
}

impl MerchantCenterAvailability {
    /// Value of the `g:availability` element.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InStock => "in_stock",
            Self::OutOfStock => "out_of_stock",
            Self::Preorder => "preorder",
        }
    }
}

/// `<rss>` root element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MerchantCenterFeedResponse {
    #[serde(rename = "@version")]
    pub version: String,
    #[serde(rename = "@xmlns:g")]
    pub namespace: String,
    pub channel: MerchantCenterChannel,
}

/// `<channel>` element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MerchantCenterChannel {
    pub title: String,
    pub link: String,
    pub description: String,
    #[serde(rename = "item")]
    pub items: Vec<MerchantCenterItem>,
}

/// `<item>` element, one per product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MerchantCenterItem {
    #[serde(rename = "g:id")]
    pub id: String,
    #[serde(rename = "g:title")]
    pub title: String,
    #[serde(rename = "g:description")]
    pub description: String,
    #[serde(rename = "g:link")]
    pub link: String,
    #[serde(rename = "g:image_link")]
    pub image_link: String,
    #[serde(rename = "g:additional_image_link", skip_serializing_if = "Vec::is_empty")]
    pub additional_image_links: Vec<String>,
    #[serde(rename = "g:availability")]
    pub availability: String,
    /// "<amount> <currency>", e.g. "1980 JPY".
    #[serde(rename = "g:price")]
    pub price: String,
    #[serde(rename = "g:brand")]
    pub brand: String,
    #[serde(rename = "g:condition")]
    pub condition: String,
    /// "<kilograms> kg".
    #[serde(rename = "g:shipping_weight")]
    pub shipping_weight: String,
    /// "category > product type".
    #[serde(rename = "g:product_type")]
    pub product_type: String,
}
