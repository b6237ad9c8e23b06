use super::{Product, Products};
use crate::types::{self, MerchantCenterAvailability};
use furumaru_config::{MerchantCenterConfig, WebConfig};
use furumaru_core::domain::entities as entity;
use furumaru_core::{GatewayError, GatewayResult};
use std::collections::HashMap;
use tracing::{debug, info};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const RSS_VERSION: &str = "2.0";
const CONDITION_NEW: &str = "new";

/// Lookup tables needed to label each product of the feed.
#[derive(Debug, Clone, Copy)]
pub struct MerchantCenterCatalog<'a> {
    pub product_types: &'a HashMap<String, entity::ProductType>,
    pub categories: &'a HashMap<String, entity::Category>,
}

impl MerchantCenterCatalog<'_> {
    /// "category > product type", leaving out whichever name is unknown.
    fn product_type_label(&self, product: &types::Product) -> String {
        let category = self
            .categories
            .get(&product.category_id)
            .map(|c| c.name.as_str());
        let product_type = self
            .product_types
            .get(&product.product_type_id)
            .map(|t| t.name.as_str());
        [category, product_type]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" > ")
    }
}

/// Stock state of a product as Merchant Center understands it.
#[must_use]
pub fn merchant_center_availability(product: &Product) -> MerchantCenterAvailability {
    if product.is_for_sale() {
        MerchantCenterAvailability::InStock
    } else if product.response().status == types::ProductStatus::Presale {
        MerchantCenterAvailability::Preorder
    } else {
        MerchantCenterAvailability::OutOfStock
    }
}

/// Product feed for Google Merchant Center.
#[derive(Debug, Clone, PartialEq)]
pub struct MerchantCenterFeed(types::MerchantCenterFeedResponse);

impl MerchantCenterFeed {
    #[must_use]
    pub fn new(
        products: &Products,
        catalog: MerchantCenterCatalog<'_>,
        settings: &MerchantCenterConfig,
        web: &WebConfig,
    ) -> Self {
        let items = products
            .iter()
            .map(|p| Self::item(p, catalog, settings, web))
            .collect::<Vec<_>>();
        debug!(items = items.len(), "Built merchant center feed");

        Self(types::MerchantCenterFeedResponse {
            version: RSS_VERSION.to_string(),
            namespace: types::MERCHANT_CENTER_NAMESPACE.to_string(),
            channel: types::MerchantCenterChannel {
                title: settings.title.clone(),
                link: web.user_web_url.clone(),
                description: settings.description.clone(),
                items,
            },
        })
    }

    fn item(
        product: &Product,
        catalog: MerchantCenterCatalog<'_>,
        settings: &MerchantCenterConfig,
        web: &WebConfig,
    ) -> types::MerchantCenterItem {
        let response = product.response();
        let additional_image_links = response
            .media
            .iter()
            .filter(|m| !m.is_thumbnail)
            .map(|m| m.url.clone())
            .collect();
        types::MerchantCenterItem {
            id: response.id.clone(),
            title: response.name.clone(),
            description: response.description.clone(),
            link: web.user_web_link(&settings.product_path_for(&response.id)),
            image_link: response.thumbnail_url.clone(),
            additional_image_links,
            availability: merchant_center_availability(product).as_str().to_string(),
            price: format!("{} {}", response.price, settings.currency),
            brand: settings.brand.clone(),
            condition: CONDITION_NEW.to_string(),
            shipping_weight: format!("{:.1} kg", response.weight),
            product_type: catalog.product_type_label(response),
        }
    }

    #[must_use]
    pub fn response(&self) -> &types::MerchantCenterFeedResponse {
        &self.0
    }

    /// Renders the feed as an XML document.
    pub fn to_xml(&self) -> GatewayResult<String> {
        let body = quick_xml::se::to_string_with_root("rss", &self.0)
            .map_err(|e| GatewayError::serialization("xml", e))?;
        info!(
            items = self.0.channel.items.len(),
            bytes = body.len(),
            "Rendered merchant center feed"
        );
        Ok(format!("{XML_DECLARATION}\n{body}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::ReviewRates;

    fn product(
        id: &str,
        status: entity::ProductStatus,
        inventory: i64,
        media: &[(&str, bool)],
    ) -> entity::Product {
        entity::Product {
            id: id.to_string(),
            type_id: "type-id".to_string(),
            name: "新鮮なじゃがいも".to_string(),
            description: "北海道産".to_string(),
            status,
            inventory,
            weight: 1250,
            weight_unit: entity::WeightUnit::Gram,
            media: media
                .iter()
                .map(|(url, is_thumbnail)| entity::ProductMedia {
                    url: (*url).to_string(),
                    is_thumbnail: *is_thumbnail,
                })
                .collect(),
            revision: entity::ProductRevision {
                id: 1,
                product_id: id.to_string(),
                price: 1980,
            },
            ..Default::default()
        }
    }

    struct Fixture {
        product_types: HashMap<String, entity::ProductType>,
        categories: HashMap<String, entity::Category>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                product_types: HashMap::from([(
                    "type-id".to_string(),
                    entity::ProductType {
                        id: "type-id".to_string(),
                        category_id: "category-id".to_string(),
                        name: "じゃがいも".to_string(),
                        icon_url: String::new(),
                    },
                )]),
                categories: HashMap::from([(
                    "category-id".to_string(),
                    entity::Category {
                        id: "category-id".to_string(),
                        name: "野菜".to_string(),
                    },
                )]),
            }
        }

        fn catalog(&self) -> MerchantCenterCatalog<'_> {
            MerchantCenterCatalog {
                product_types: &self.product_types,
                categories: &self.categories,
            }
        }

        fn products(&self, products: &[entity::Product]) -> Products {
            Products::new(products, &self.product_types, &ReviewRates::default())
        }
    }

    fn web() -> WebConfig {
        WebConfig {
            user_web_url: "https://www.furumaru.example/".to_string(),
            assets_url: "https://assets.furumaru.example".to_string(),
        }
    }

    #[test]
    fn test_availability() {
        let fixture = Fixture::new();
        let products = fixture.products(&[
            product("p-1", entity::ProductStatus::ForSale, 3, &[]),
            product("p-2", entity::ProductStatus::ForSale, 0, &[]),
            product("p-3", entity::ProductStatus::Presale, 10, &[]),
            product("p-4", entity::ProductStatus::OutOfSale, 10, &[]),
            product("p-5", entity::ProductStatus::Private, 10, &[]),
        ]);
        let actual: Vec<_> = products.iter().map(merchant_center_availability).collect();
        assert_eq!(
            actual,
            vec![
                MerchantCenterAvailability::InStock,
                MerchantCenterAvailability::OutOfStock,
                MerchantCenterAvailability::Preorder,
                MerchantCenterAvailability::OutOfStock,
                MerchantCenterAvailability::OutOfStock,
            ]
        );
    }

    #[test]
    fn test_feed_new() {
        let fixture = Fixture::new();
        let products = fixture.products(&[product(
            "product-id",
            entity::ProductStatus::ForSale,
            5,
            &[
                ("https://example.com/a.png", true),
                ("https://example.com/b.png", false),
                ("https://example.com/c.png", false),
            ],
        )]);
        let settings = MerchantCenterConfig::default();
        let feed = MerchantCenterFeed::new(&products, fixture.catalog(), &settings, &web());

        let response = feed.response();
        assert_eq!(response.version, "2.0");
        assert_eq!(response.namespace, "http://base.google.com/ns/1.0");
        assert_eq!(response.channel.title, "ふるマル");
        assert_eq!(response.channel.link, "https://www.furumaru.example/");
        assert_eq!(
            response.channel.items,
            vec![types::MerchantCenterItem {
                id: "product-id".to_string(),
                title: "新鮮なじゃがいも".to_string(),
                description: "北海道産".to_string(),
                link: "https://www.furumaru.example/items/product-id".to_string(),
                image_link: "https://example.com/a.png".to_string(),
                additional_image_links: vec![
                    "https://example.com/b.png".to_string(),
                    "https://example.com/c.png".to_string(),
                ],
                availability: "in_stock".to_string(),
                price: "1980 JPY".to_string(),
                brand: "ふるマル".to_string(),
                condition: "new".to_string(),
                shipping_weight: "1.3 kg".to_string(),
                product_type: "野菜 > じゃがいも".to_string(),
            }]
        );
    }

    #[test]
    fn test_feed_product_type_label_without_catalog() {
        let fixture = Fixture::new();
        let products = fixture.products(&[product("p-1", entity::ProductStatus::ForSale, 1, &[])]);
        let empty = HashMap::new();
        let categories = HashMap::new();
        let catalog = MerchantCenterCatalog {
            product_types: &empty,
            categories: &categories,
        };
        let feed = MerchantCenterFeed::new(
            &products,
            catalog,
            &MerchantCenterConfig::default(),
            &web(),
        );
        assert_eq!(feed.response().channel.items[0].product_type, "");
    }

    #[test]
    fn test_feed_to_xml() {
        let fixture = Fixture::new();
        let products = fixture.products(&[product(
            "product-id",
            entity::ProductStatus::Presale,
            5,
            &[("https://example.com/a.png", true)],
        )]);
        let feed = MerchantCenterFeed::new(
            &products,
            fixture.catalog(),
            &MerchantCenterConfig::default(),
            &web(),
        );

        let xml = feed.to_xml().unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"<rss version="2.0" xmlns:g="http://base.google.com/ns/1.0">"#));
        assert!(xml.contains("<channel><title>ふるマル</title>"));
        assert!(xml.contains("<item><g:id>product-id</g:id>"));
        assert!(xml.contains("<g:availability>preorder</g:availability>"));
        assert!(xml.contains("<g:price>1980 JPY</g:price>"));
        assert!(xml.contains("<g:shipping_weight>1.3 kg</g:shipping_weight>"));
        assert!(xml.contains("<g:product_type>野菜 "));
        assert!(xml.contains(" じゃがいも</g:product_type>"));
        assert!(!xml.contains("g:additional_image_link"));
        assert!(xml.trim_end().ends_with("</rss>"));
    }

    #[test]
    fn test_feed_to_xml_empty() {
        let feed = MerchantCenterFeed::new(
            &Products::default(),
            Fixture::new().catalog(),
            &MerchantCenterConfig::default(),
            &web(),
        );
        let xml = feed.to_xml().unwrap();
        assert!(xml.contains("<channel><title>"));
        assert!(!xml.contains("<item>"));
    }
}
