use super::unique;
use crate::types;
use furumaru_core::domain::entities as entity;
use std::collections::HashMap;
use std::ops::Deref;

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category(types::Category);

impl Category {
    #[must_use]
    pub fn new(category: &entity::Category) -> Self {
        Self(types::Category {
            id: category.id.clone(),
            name: category.name.clone(),
        })
    }

    #[must_use]
    pub fn response(&self) -> &types::Category {
        &self.0
    }
}

/// Categories in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Categories(Vec<Category>);

impl Categories {
    #[must_use]
    pub fn new(categories: &[entity::Category]) -> Self {
        Self(categories.iter().map(Category::new).collect())
    }

    /// Indexes the categories by ID.
    #[must_use]
    pub fn map(&self) -> HashMap<String, Category> {
        self.0
            .iter()
            .map(|c| (c.0.id.clone(), c.clone()))
            .collect()
    }

    #[must_use]
    pub fn response(&self) -> Vec<types::Category> {
        self.0.iter().map(|c| c.response().clone()).collect()
    }
}

impl Deref for Categories {
    type Target = [Category];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A product type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductType(types::ProductType);

impl ProductType {
    #[must_use]
    pub fn new(product_type: &entity::ProductType) -> Self {
        Self(types::ProductType {
            id: product_type.id.clone(),
            category_id: product_type.category_id.clone(),
            name: product_type.name.clone(),
            icon_url: product_type.icon_url.clone(),
        })
    }

    #[must_use]
    pub fn response(&self) -> &types::ProductType {
        &self.0
    }
}

/// Product types in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductTypes(Vec<ProductType>);

impl ProductTypes {
    #[must_use]
    pub fn new(product_types: &[entity::ProductType]) -> Self {
        Self(product_types.iter().map(ProductType::new).collect())
    }

    /// Distinct category IDs, first-seen order.
    #[must_use]
    pub fn category_ids(&self) -> Vec<String> {
        unique(self.0.iter().map(|t| t.0.category_id.clone()))
    }

    /// Indexes the product types by ID.
    #[must_use]
    pub fn map(&self) -> HashMap<String, ProductType> {
        self.0
            .iter()
            .map(|t| (t.0.id.clone(), t.clone()))
            .collect()
    }

    #[must_use]
    pub fn response(&self) -> Vec<types::ProductType> {
        self.0.iter().map(|t| t.response().clone()).collect()
    }
}

impl Deref for ProductTypes {
    type Target = [ProductType];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A product tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductTag(types::ProductTag);

impl ProductTag {
    #[must_use]
    pub fn new(tag: &entity::ProductTag) -> Self {
        Self(types::ProductTag {
            id: tag.id.clone(),
            name: tag.name.clone(),
        })
    }

    #[must_use]
    pub fn response(&self) -> &types::ProductTag {
        &self.0
    }
}

/// Product tags in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductTags(Vec<ProductTag>);

impl ProductTags {
    #[must_use]
    pub fn new(tags: &[entity::ProductTag]) -> Self {
        Self(tags.iter().map(ProductTag::new).collect())
    }

    #[must_use]
    pub fn response(&self) -> Vec<types::ProductTag> {
        self.0.iter().map(|t| t.response().clone()).collect()
    }
}

impl Deref for ProductTags {
    type Target = [ProductTag];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
