//! Shared catalog fixtures for gateway integration tests.

use chrono::{DateTime, TimeZone, Utc};
use furumaru_core::domain::entities as entity;
use std::collections::HashMap;

/// 2024-01-01T00:00:00Z.
pub const JAN_1: i64 = 1_704_067_200;

pub fn jan_1() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

pub fn product(
    id: &str,
    revision_id: i64,
    status: entity::ProductStatus,
    inventory: i64,
    price: i64,
) -> entity::Product {
    entity::Product {
        id: id.to_string(),
        coordinator_id: "coordinator-id".to_string(),
        producer_id: "producer-id".to_string(),
        type_id: "potato".to_string(),
        name: format!("じゃがいも {id}"),
        description: "新鮮なじゃがいもをお届けします。".to_string(),
        public: true,
        status,
        inventory,
        weight: 2,
        weight_unit: entity::WeightUnit::Kilogram,
        media: vec![entity::ProductMedia {
            url: format!("https://example.com/{id}.png"),
            is_thumbnail: true,
        }],
        origin_prefecture_code: 1,
        origin_city: "札幌市".to_string(),
        start_at: jan_1(),
        end_at: jan_1(),
        revision: entity::ProductRevision {
            id: revision_id,
            product_id: id.to_string(),
            price,
        },
        ..Default::default()
    }
}

pub fn product_types() -> HashMap<String, entity::ProductType> {
    HashMap::from([(
        "potato".to_string(),
        entity::ProductType {
            id: "potato".to_string(),
            category_id: "vegetable".to_string(),
            name: "じゃがいも".to_string(),
            icon_url: String::new(),
        },
    )])
}

pub fn categories() -> HashMap<String, entity::Category> {
    HashMap::from([(
        "vegetable".to_string(),
        entity::Category {
            id: "vegetable".to_string(),
            name: "野菜".to_string(),
        },
    )])
}

pub fn order(id: &str, status: entity::OrderStatus, revisions: &[i64]) -> entity::Order {
    entity::Order {
        id: id.to_string(),
        user_id: "user-id".to_string(),
        coordinator_id: "coordinator-id".to_string(),
        order_type: entity::OrderType::Product,
        status,
        payment: entity::OrderPayment {
            order_id: id.to_string(),
            method_type: entity::PaymentMethodType::Konbini,
            status: entity::PaymentStatus::Pending,
            ordered_at: Some(jan_1()),
            ..Default::default()
        },
        items: revisions
            .iter()
            .map(|&revision| entity::OrderItem {
                fulfillment_id: "fulfillment-id".to_string(),
                product_revision_id: revision,
                order_id: id.to_string(),
                quantity: 2,
            })
            .collect(),
        created_at: jan_1(),
        updated_at: jan_1(),
        ..Default::default()
    }
}
