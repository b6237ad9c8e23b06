use super::{Address, ShippingSize, ShippingType};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

response_enum! {
    /// Order progress shown to the purchaser.
    pub enum OrderStatus {
        /// Awaiting payment.
        Unpaid = 1,
        /// Paid and being packed.
        Preparing = 2,
        /// Shipped or otherwise fulfilled.
        Completed = 3,
        Canceled = 4,
        Refunded = 5,
        Failed = 6,
    }
}

response_enum! {
    /// What was purchased.
    pub enum OrderType {
        Product = 1,
        Experience = 2,
    }
}

response_enum! {
    /// Payment method.
    pub enum PaymentMethodType {
        Cash = 1,
        CreditCard = 2,
        Konbini = 3,
        BankTransfer = 4,
        PayPay = 5,
        LinePay = 6,
        MerPay = 7,
        RakutenPay = 8,
        AuPay = 9,
        Paidy = 10,
        PayEasy = 11,
    }
}

response_enum! {
    /// Payment state.
    pub enum PaymentStatus {
        Unpaid = 1,
        Authorized = 2,
        Paid = 3,
        Canceled = 4,
        Failed = 5,
    }
}

response_enum! {
    /// Shipping state of a box.
    pub enum FulfillmentStatus {
        Unfulfilled = 1,
        Fulfilled = 2,
    }
}

response_enum! {
    /// Delivery company.
    pub enum ShippingCarrier {
        Yamato = 1,
        Sagawa = 2,
    }
}

response_enum! {
    /// Why money was returned.
    pub enum OrderRefundType {
        Canceled = 1,
        Refunded = 2,
    }
}

/// Payment details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayment {
    pub transaction_id: String,
    #[schema(value_type = i32)]
    pub method_type: PaymentMethodType,
    #[schema(value_type = i32)]
    pub status: PaymentStatus,
    pub subtotal: i64,
    pub discount: i64,
    pub shipping_fee: i64,
    pub total: i64,
    pub ordered_at: i64,
    pub paid_at: i64,
    /// Billing address.
    pub address: Option<Address>,
}

/// Cancellation or refund details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRefund {
    pub total: i64,
    #[serde(rename = "type")]
    #[schema(value_type = i32)]
    pub refund_type: OrderRefundType,
    pub reason: String,
    pub canceled: bool,
    pub canceled_at: i64,
}

/// One shipping box.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderFulfillment {
    pub fulfillment_id: String,
    pub tracking_number: String,
    #[schema(value_type = i32)]
    pub status: FulfillmentStatus,
    #[schema(value_type = i32)]
    pub shipping_carrier: ShippingCarrier,
    #[schema(value_type = i32)]
    pub shipping_type: ShippingType,
    pub box_number: i64,
    #[schema(value_type = i32)]
    pub box_size: ShippingSize,
    pub box_rate: i64,
    pub shipped_at: i64,
}

/// Purchased product line, priced at purchase time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub fulfillment_id: String,
    pub product_id: String,
    pub price: i64,
    pub quantity: i64,
}

/// Booking details of an experience order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderExperience {
    pub adult_count: i64,
    pub junior_high_school_count: i64,
    pub elementary_school_count: i64,
    pub preschool_count: i64,
    pub senior_count: i64,
    pub transportation: String,
    pub requested_date: String,
    pub requested_time: String,
}

/// Purchase history entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub coordinator_id: String,
    pub promotion_id: String,
    #[serde(rename = "type")]
    #[schema(value_type = i32)]
    pub order_type: OrderType,
    #[schema(value_type = i32)]
    pub status: OrderStatus,
    pub payment: OrderPayment,
    pub refund: OrderRefund,
    pub fulfillments: Vec<OrderFulfillment>,
    pub items: Vec<OrderItem>,
    pub experience: Option<OrderExperience>,
    pub created_at: i64,
    pub updated_at: i64,
}
