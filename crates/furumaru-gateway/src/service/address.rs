use crate::types;
use furumaru_core::domain::entities as entity;
use furumaru_core::Prefecture;
use std::collections::HashMap;
use std::ops::Deref;

/// A registered address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address(types::Address);

impl Address {
    /// Maps an optional address; no address yields no response.
    #[must_use]
    pub fn new(address: Option<&entity::Address>) -> Option<Self> {
        address.map(Self::from)
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.0.id
    }

    #[must_use]
    pub fn response(&self) -> &types::Address {
        &self.0
    }

    #[must_use]
    pub fn into_response(self) -> types::Address {
        self.0
    }
}

impl From<&entity::Address> for Address {
    fn from(address: &entity::Address) -> Self {
        Self(types::Address {
            id: address.id.clone(),
            is_default: address.is_default,
            lastname: address.lastname.clone(),
            firstname: address.firstname.clone(),
            lastname_kana: address.lastname_kana.clone(),
            firstname_kana: address.firstname_kana.clone(),
            postal_code: address.postal_code.clone(),
            prefecture: Prefecture::name_of(address.prefecture_code),
            prefecture_code: address.prefecture_code,
            city: address.city.clone(),
            address_line1: address.address_line1.clone(),
            address_line2: address.address_line2.clone(),
            phone_number: address.phone_number.clone(),
        })
    }
}

/// Addresses in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Addresses(Vec<Address>);

impl Addresses {
    #[must_use]
    pub fn new(addresses: &[entity::Address]) -> Self {
        Self(addresses.iter().map(Address::from).collect())
    }

    /// Indexes the addresses by ID.
    #[must_use]
    pub fn map(&self) -> HashMap<String, Address> {
        self.0
            .iter()
            .map(|a| (a.id().to_string(), a.clone()))
            .collect()
    }

    #[must_use]
    pub fn response(&self) -> Vec<types::Address> {
        self.0.iter().map(|a| a.response().clone()).collect()
    }
}

impl Deref for Addresses {
    type Target = [Address];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
