use super::unix;
use crate::types;
use chrono::{DateTime, Utc};
use furumaru_core::domain::entities as entity;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

impl From<entity::DiscountType> for types::DiscountType {
    fn from(discount: entity::DiscountType) -> Self {
        match discount {
            entity::DiscountType::Amount => Self::Amount,
            entity::DiscountType::Rate => Self::Rate,
            entity::DiscountType::FreeShipping => Self::FreeShipping,
            entity::DiscountType::Unknown => Self::Unknown,
        }
    }
}

/// A discount code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Promotion {
    response: types::Promotion,
    public: bool,
    start_at: DateTime<Utc>,
    end_at: DateTime<Utc>,
}

impl Promotion {
    #[must_use]
    pub fn new(promotion: Option<&entity::Promotion>) -> Option<Self> {
        promotion.map(Self::from)
    }

    /// Whether the code can be redeemed at `now`.
    #[must_use]
    pub fn is_enabled(&self, now: DateTime<Utc>) -> bool {
        self.public && self.start_at <= now && now <= self.end_at
    }

    #[must_use]
    pub fn is_free_shipping(&self) -> bool {
        self.response.discount_type == types::DiscountType::FreeShipping
    }

    /// Amount taken off `subtotal`, never negative and never above it.
    ///
    /// Rate discounts are truncated towards zero.
    #[must_use]
    pub fn discount(&self, subtotal: i64) -> i64 {
        let subtotal = subtotal.max(0);
        let discount = match self.response.discount_type {
            types::DiscountType::Amount => self.response.discount_rate,
            types::DiscountType::Rate => {
                let rate = Decimal::from(self.response.discount_rate) / Decimal::ONE_HUNDRED;
                (Decimal::from(subtotal) * rate)
                    .trunc()
                    .to_i64()
                    .unwrap_or_default()
            }
            types::DiscountType::FreeShipping | types::DiscountType::Unknown => 0,
        };
        discount.clamp(0, subtotal)
    }

    #[must_use]
    pub fn response(&self) -> &types::Promotion {
        &self.response
    }

    #[must_use]
    pub fn into_response(self) -> types::Promotion {
        self.response
    }
}

impl From<&entity::Promotion> for Promotion {
    fn from(promotion: &entity::Promotion) -> Self {
        Self {
            response: types::Promotion {
                id: promotion.id.clone(),
                title: promotion.title.clone(),
                description: promotion.description.clone(),
                discount_type: promotion.discount_type.into(),
                discount_rate: promotion.discount_rate,
                code: promotion.code.clone(),
                start_at: unix(&promotion.start_at),
                end_at: unix(&promotion.end_at),
            },
            public: promotion.public,
            start_at: promotion.start_at,
            end_at: promotion.end_at,
        }
    }
}
