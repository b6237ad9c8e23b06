use super::{unique, unix, unix_opt, Address, Product};
use crate::types;
use furumaru_core::domain::entities as entity;
use std::collections::HashMap;
use std::ops::Deref;
use tracing::warn;

impl From<entity::OrderStatus> for types::OrderStatus {
    fn from(status: entity::OrderStatus) -> Self {
        match status {
            entity::OrderStatus::Unpaid => Self::Unpaid,
            entity::OrderStatus::Waiting | entity::OrderStatus::Preparing => Self::Preparing,
            entity::OrderStatus::Shipped | entity::OrderStatus::Completed => Self::Completed,
            entity::OrderStatus::Canceled => Self::Canceled,
            entity::OrderStatus::Refunded => Self::Refunded,
            entity::OrderStatus::Failed => Self::Failed,
            entity::OrderStatus::Unknown => Self::Unknown,
        }
    }
}

impl From<entity::OrderType> for types::OrderType {
    fn from(order_type: entity::OrderType) -> Self {
        match order_type {
            entity::OrderType::Product => Self::Product,
            entity::OrderType::Experience => Self::Experience,
            entity::OrderType::Unknown => Self::Unknown,
        }
    }
}

impl From<entity::PaymentMethodType> for types::PaymentMethodType {
    fn from(method: entity::PaymentMethodType) -> Self {
        use entity::PaymentMethodType as M;

        match method {
            M::Cash => Self::Cash,
            M::CreditCard => Self::CreditCard,
            M::Konbini => Self::Konbini,
            M::BankTransfer => Self::BankTransfer,
            M::PayPay => Self::PayPay,
            M::LinePay => Self::LinePay,
            M::MerPay => Self::MerPay,
            M::RakutenPay => Self::RakutenPay,
            M::AuPay => Self::AuPay,
            M::Paidy => Self::Paidy,
            M::PayEasy => Self::PayEasy,
            M::Unknown => Self::Unknown,
        }
    }
}

impl From<entity::PaymentStatus> for types::PaymentStatus {
    fn from(status: entity::PaymentStatus) -> Self {
        use entity::PaymentStatus as S;

        match status {
            S::Pending => Self::Unpaid,
            S::Authorized => Self::Authorized,
            S::Captured => Self::Paid,
            S::Canceled | S::Refunded => Self::Canceled,
            S::Failed | S::Expired => Self::Failed,
            S::Unknown => Self::Unknown,
        }
    }
}

impl From<entity::FulfillmentStatus> for types::FulfillmentStatus {
    fn from(status: entity::FulfillmentStatus) -> Self {
        match status {
            entity::FulfillmentStatus::Unfulfilled => Self::Unfulfilled,
            entity::FulfillmentStatus::Fulfilled => Self::Fulfilled,
            entity::FulfillmentStatus::Unknown => Self::Unknown,
        }
    }
}

impl From<entity::ShippingCarrier> for types::ShippingCarrier {
    fn from(carrier: entity::ShippingCarrier) -> Self {
        match carrier {
            entity::ShippingCarrier::Yamato => Self::Yamato,
            entity::ShippingCarrier::Sagawa => Self::Sagawa,
            entity::ShippingCarrier::Unknown => Self::Unknown,
        }
    }
}

impl From<entity::RefundType> for types::OrderRefundType {
    fn from(refund: entity::RefundType) -> Self {
        match refund {
            entity::RefundType::Canceled => Self::Canceled,
            entity::RefundType::Refunded => Self::Refunded,
            entity::RefundType::None => Self::Unknown,
        }
    }
}

fn payment(order: &entity::Order) -> types::OrderPayment {
    let payment = &order.payment;
    types::OrderPayment {
        transaction_id: payment.transaction_id.clone(),
        method_type: payment.method_type.into(),
        status: payment.status.into(),
        subtotal: payment.subtotal,
        discount: payment.discount,
        shipping_fee: payment.shipping_fee,
        total: payment.total,
        ordered_at: unix_opt(payment.ordered_at.as_ref()),
        paid_at: unix_opt(payment.paid_at.as_ref()),
        address: Address::new(order.billing_address.as_ref()).map(Address::into_response),
    }
}

fn refund(payment: &entity::OrderPayment) -> types::OrderRefund {
    types::OrderRefund {
        total: payment.refund_total,
        refund_type: payment.refund_type.into(),
        reason: payment.refund_reason.clone(),
        canceled: payment.refund_type == entity::RefundType::Canceled,
        canceled_at: unix_opt(payment.canceled_at.as_ref()),
    }
}

fn fulfillment(fulfillment: &entity::OrderFulfillment) -> types::OrderFulfillment {
    types::OrderFulfillment {
        fulfillment_id: fulfillment.id.clone(),
        tracking_number: fulfillment.tracking_number.clone(),
        status: fulfillment.status.into(),
        shipping_carrier: fulfillment.shipping_carrier.into(),
        shipping_type: fulfillment.shipping_type.into(),
        box_number: fulfillment.box_number,
        box_size: fulfillment.box_size.into(),
        box_rate: fulfillment.box_rate,
        shipped_at: unix_opt(fulfillment.shipped_at.as_ref()),
    }
}

fn experience(experience: &entity::OrderExperience) -> types::OrderExperience {
    types::OrderExperience {
        adult_count: experience.adult_count,
        junior_high_school_count: experience.junior_high_school_count,
        elementary_school_count: experience.elementary_school_count,
        preschool_count: experience.preschool_count,
        senior_count: experience.senior_count,
        transportation: experience.transportation.clone(),
        requested_date: experience.requested_date.clone(),
        requested_time: experience.requested_time.clone(),
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order(types::Order);

impl Order {
    /// Maps an order, resolving each item through `products` keyed by
    /// product revision ID. Items with an unknown revision are dropped.
    #[must_use]
    pub fn new(order: Option<&entity::Order>, products: &HashMap<i64, Product>) -> Option<Self> {
        let order = order?;
        let items = order
            .items
            .iter()
            .filter_map(|item| {
                let Some(product) = products.get(&item.product_revision_id) else {
                    warn!(
                        order_id = %order.id,
                        product_revision_id = item.product_revision_id,
                        "Skipping order item with unknown product revision"
                    );
                    return None;
                };
                Some(types::OrderItem {
                    fulfillment_id: item.fulfillment_id.clone(),
                    product_id: product.id().to_string(),
                    price: product.response().price,
                    quantity: item.quantity,
                })
            })
            .collect();

        Some(Self(types::Order {
            id: order.id.clone(),
            coordinator_id: order.coordinator_id.clone(),
            promotion_id: order.promotion_id.clone(),
            order_type: order.order_type.into(),
            status: order.status.into(),
            payment: payment(order),
            refund: refund(&order.payment),
            fulfillments: order.fulfillments.iter().map(fulfillment).collect(),
            items,
            experience: order.experience.as_ref().map(experience),
            created_at: unix(&order.created_at),
            updated_at: unix(&order.updated_at),
        }))
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.0.id
    }

    #[must_use]
    pub fn response(&self) -> &types::Order {
        &self.0
    }

    #[must_use]
    pub fn into_response(self) -> types::Order {
        self.0
    }
}

/// Orders in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Orders(Vec<Order>);

impl Orders {
    #[must_use]
    pub fn new(orders: &[entity::Order], products: &HashMap<i64, Product>) -> Self {
        Self(
            orders
                .iter()
                .filter_map(|o| Order::new(Some(o), products))
                .collect(),
        )
    }

    #[must_use]
    pub fn coordinator_ids(&self) -> Vec<String> {
        unique(self.0.iter().map(|o| o.0.coordinator_id.clone()))
    }

    /// Distinct product revisions referenced by the given orders, needed to
    /// build the revision map `new` expects.
    #[must_use]
    pub fn product_revision_ids(orders: &[entity::Order]) -> Vec<i64> {
        unique(orders.iter().flat_map(entity::Order::product_revision_ids))
    }

    #[must_use]
    pub fn response(&self) -> Vec<types::Order> {
        self.0.iter().map(|o| o.0.clone()).collect()
    }
}

impl Deref for Orders {
    type Target = [Order];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
