use super::{unique, Product, Promotion};
use crate::types;
use furumaru_core::domain::entities as entity;
use std::collections::HashMap;
use std::ops::Deref;
use tracing::warn;

impl From<entity::ShippingType> for types::ShippingType {
    fn from(shipping_type: entity::ShippingType) -> Self {
        match shipping_type {
            entity::ShippingType::Normal => Self::Normal,
            entity::ShippingType::Frozen => Self::Frozen,
            entity::ShippingType::Refrigerated => Self::Refrigerated,
            entity::ShippingType::Unknown => Self::Unknown,
        }
    }
}

impl From<entity::ShippingSize> for types::ShippingSize {
    fn from(size: entity::ShippingSize) -> Self {
        match size {
            entity::ShippingSize::Size60 => Self::Size60,
            entity::ShippingSize::Size80 => Self::Size80,
            entity::ShippingSize::Size100 => Self::Size100,
            entity::ShippingSize::Unknown => Self::Unknown,
        }
    }
}

/// One shipping box of a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart(types::Cart);

impl Cart {
    #[must_use]
    pub fn new(basket: &entity::CartBasket) -> Self {
        Self(types::Cart {
            number: basket.box_number,
            shipping_type: basket.box_type.into(),
            size: basket.box_size.into(),
            rate: basket.box_rate,
            items: basket
                .items
                .iter()
                .map(|item| types::CartItem {
                    product_id: item.product_id.clone(),
                    quantity: item.quantity,
                })
                .collect(),
            coordinator_id: basket.coordinator_id.clone(),
        })
    }

    #[must_use]
    pub fn response(&self) -> &types::Cart {
        &self.0
    }
}

/// Shipping boxes of a cart in box order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Carts(Vec<Cart>);

impl Carts {
    #[must_use]
    pub fn new(cart: &entity::Cart) -> Self {
        Self(cart.baskets.iter().map(Cart::new).collect())
    }

    /// Distinct product IDs across every box.
    #[must_use]
    pub fn product_ids(&self) -> Vec<String> {
        unique(
            self.0
                .iter()
                .flat_map(|c| c.0.items.iter().map(|item| item.product_id.clone())),
        )
    }

    #[must_use]
    pub fn coordinator_ids(&self) -> Vec<String> {
        unique(self.0.iter().map(|c| c.0.coordinator_id.clone()))
    }

    #[must_use]
    pub fn response(&self) -> Vec<types::Cart> {
        self.0.iter().map(|c| c.0.clone()).collect()
    }
}

impl Deref for Carts {
    type Target = [Cart];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Totals of a cart before checkout.
///
/// Items whose product is not in `products` are left out of the subtotal. A
/// free-shipping promotion waives `shipping_fee`; any other promotion is
/// discounted from the subtotal.
#[must_use]
pub fn calc_cart_summary(
    baskets: &[entity::CartBasket],
    products: &HashMap<String, Product>,
    promotion: Option<&Promotion>,
    shipping_fee: i64,
) -> types::CartSummary {
    let subtotal = baskets
        .iter()
        .flat_map(|basket| basket.items.iter())
        .filter_map(|item| match products.get(&item.product_id) {
            Some(product) => Some(product.response().price.saturating_mul(item.quantity)),
            None => {
                warn!(product_id = %item.product_id, "Cart item references an unknown product");
                None
            }
        })
        .fold(0_i64, i64::saturating_add);

    let (discount, shipping_fee) = match promotion {
        Some(p) if p.is_free_shipping() => (0, 0),
        Some(p) => (p.discount(subtotal), shipping_fee),
        None => (0, shipping_fee),
    };

    types::CartSummary {
        subtotal,
        discount,
        shipping_fee,
        total: subtotal.saturating_sub(discount).saturating_add(shipping_fee),
    }
}
