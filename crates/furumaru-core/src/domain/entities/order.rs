//! Order entity.

use super::{Address, ShippingSize, ShippingType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Internal order status as tracked by the checkout workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Unknown,
    /// Awaiting payment.
    Unpaid,
    /// Paid, awaiting the coordinator's confirmation.
    Waiting,
    /// Confirmed, being packed.
    Preparing,
    /// Handed to the carrier.
    Shipped,
    Completed,
    Canceled,
    Refunded,
    Failed,
}

/// What was purchased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    #[default]
    Unknown,
    Product,
    Experience,
}

/// Payment method chosen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodType {
    #[default]
    Unknown,
    Cash,
    CreditCard,
    Konbini,
    BankTransfer,
    PayPay,
    LinePay,
    MerPay,
    RakutenPay,
    AuPay,
    Paidy,
    PayEasy,
}

/// Payment state reported by the payment provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Unknown,
    Pending,
    Authorized,
    Captured,
    Canceled,
    Refunded,
    Failed,
    Expired,
}

/// Shipping state of a fulfillment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentStatus {
    #[default]
    Unknown,
    Unfulfilled,
    Fulfilled,
}

/// Delivery company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShippingCarrier {
    #[default]
    Unknown,
    Yamato,
    Sagawa,
}

/// Why money was returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RefundType {
    #[default]
    None,
    Canceled,
    Refunded,
}

/// Payment part of an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPayment {
    pub order_id: String,
    pub address_revision_id: i64,
    pub transaction_id: String,
    pub method_type: PaymentMethodType,
    pub status: PaymentStatus,
    pub subtotal: i64,
    pub discount: i64,
    pub shipping_fee: i64,
    pub tax: i64,
    pub total: i64,
    pub refund_total: i64,
    pub refund_type: RefundType,
    pub refund_reason: String,
    pub ordered_at: Option<DateTime<Utc>>,
    pub paid_at: Option<DateTime<Utc>>,
    pub captured_at: Option<DateTime<Utc>>,
    pub canceled_at: Option<DateTime<Utc>>,
    pub refunded_at: Option<DateTime<Utc>>,
}

/// One shipping box of an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFulfillment {
    pub id: String,
    pub order_id: String,
    pub address_revision_id: i64,
    pub tracking_number: String,
    pub status: FulfillmentStatus,
    pub shipping_carrier: ShippingCarrier,
    pub shipping_type: ShippingType,
    pub box_number: i64,
    pub box_size: ShippingSize,
    pub box_rate: i64,
    pub shipped_at: Option<DateTime<Utc>>,
}

/// A purchased product line, referencing the price revision at purchase time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub fulfillment_id: String,
    pub product_revision_id: i64,
    pub order_id: String,
    pub quantity: i64,
}

/// Booking details of an experience order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderExperience {
    pub order_id: String,
    pub experience_revision_id: i64,
    pub adult_count: i64,
    pub junior_high_school_count: i64,
    pub elementary_school_count: i64,
    pub preschool_count: i64,
    pub senior_count: i64,
    pub transportation: String,
    pub requested_date: String,
    pub requested_time: String,
}

/// A completed checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub session_id: String,
    pub user_id: String,
    pub coordinator_id: String,
    pub promotion_id: String,
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub payment: OrderPayment,
    /// Billing address snapshot.
    pub billing_address: Option<Address>,
    pub fulfillments: Vec<OrderFulfillment>,
    pub items: Vec<OrderItem>,
    pub experience: Option<OrderExperience>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Revision IDs of every purchased product line.
    #[must_use]
    pub fn product_revision_ids(&self) -> Vec<i64> {
        self.items.iter().map(|i| i.product_revision_id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_eq_impl<T: Eq>() {}

    #[test]
    fn test_order_equality_includes_billing_address() {
        assert_eq_impl::<Address>();
        assert_eq_impl::<Order>();

        let order = Order {
            id: "order-id".to_string(),
            billing_address: Some(Address {
                lastname: "ふるマル".to_string(),
                city: "彦根市".to_string(),
                ..Default::default()
            }),
            items: vec![
                OrderItem {
                    product_revision_id: 1,
                    ..Default::default()
                },
                OrderItem {
                    product_revision_id: 2,
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let mut other = order.clone();
        assert_eq!(order, other);

        other.billing_address = None;
        assert_ne!(order, other);
        assert_eq!(order.product_revision_ids(), vec![1, 2]);
    }
}
