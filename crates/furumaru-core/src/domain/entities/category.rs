//! Product classification entities.

use serde::{Deserialize, Serialize};

/// Top-level product category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Product type, nested under a category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductType {
    pub id: String,
    pub category_id: String,
    pub name: String,
    pub icon_url: String,
}

/// Free-form tag attached to products.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTag {
    pub id: String,
    pub name: String,
}
