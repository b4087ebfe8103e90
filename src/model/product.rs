//! Product records and the payloads used to create and edit them.
//!
//! # Wire Format
//! The service speaks camelCase JSON and names the identifier `_id`. A plain `id` is
//! read only when `_id` is absent, so documents carrying both (Mongoose virtuals) still
//! decode. Timestamps are opaque strings.
//!
//! - Creation payload ([`ProductDraft`])
//! - Partial update payload ([`ProductPatch`])

use serde::{Deserialize, Serialize};

use std::fmt::Display;
use std::str::FromStr;

use super::validation::{validate_name, validate_price, ValidationError};

/// Type-safe identifier for Products, assigned by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True only for products the server has not yet accepted.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents one catalog entry as the remote service returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ProductDocument")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

/// The document as received, before the identifier fields are reconciled.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductDocument {
    #[serde(rename = "_id")]
    mongo_id: Option<ProductId>,
    id: Option<ProductId>,
    name: String,
    price: f64,
    category: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    created_at: String,
    #[serde(default)]
    updated_at: String,
}

impl From<ProductDocument> for Product {
    fn from(doc: ProductDocument) -> Self {
        Self {
            id: doc.mongo_id.or(doc.id).unwrap_or_default(),
            name: doc.name,
            price: doc.price,
            category: doc.category,
            description: doc.description,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        }
    }
}

impl Product {
    /// Creates a new Product instance without timestamps.
    ///
    /// # Arguments
    /// * `id` - Server-assigned identifier
    /// * `name` - Display name
    /// * `price` - Non-negative amount
    /// * `category` - Category label as stored by the server
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: category.into(),
            description: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_timestamps(mut self, created_at: impl Into<String>, updated_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self.updated_at = updated_at.into();
        self
    }

    /// The draft that would recreate this product's editable fields.
    ///
    /// Fails when the stored category is outside the closed set, which can only happen
    /// for records another client wrote.
    pub fn to_draft(&self) -> Result<ProductDraft, ValidationError> {
        Ok(ProductDraft {
            name: self.name.clone(),
            price: self.price,
            category: self.category.parse()?,
            description: self.description.clone(),
        })
    }
}

/// The closed set of categories offered when collecting input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Electronics,
    Clothing,
    Food,
    Books,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Electronics,
        Category::Clothing,
        Category::Food,
        Category::Books,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Food => "Food",
            Category::Books => "Books",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnknownCategory(wanted.to_owned()))
    }
}

/// Payload for creating a product: everything except identity and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub category: Category,
    pub description: String,
}

impl ProductDraft {
    /// Builds a validated draft.
    pub fn new(
        name: impl Into<String>,
        price: f64,
        category: Category,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let draft = Self {
            name: name.into(),
            price,
            category,
            description: description.into(),
        };
        draft.validate()?;
        Ok(draft)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        validate_price(self.price)?;
        Ok(())
    }
}

/// Payload for a partial update. Absent fields are left untouched by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProductPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.description.is_none()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::EmptyPatch);
        }
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        Ok(())
    }
}
