use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product entity - the canonical catalog record
///
/// Serialized as-is at the boundary (all fields including `id`), so it
/// doubles as the output DTO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, assigned by the store on insert
    pub id: i32,
    /// Product name (unique across the catalog)
    pub name: String,
    /// Product description
    pub description: String,
    /// Monetary amount; treated as opaque, no rounding policy
    pub price: f64,
    /// Units in stock
    pub stock_quantity: i32,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_quantity: i32,
}

/// DTO for partially updating a product
///
/// Each `Option` is the present-fields marker: `None` means the caller did
/// not send the field and the stored value is left untouched; `Some(v)`
/// overwrites it. Fields cannot be cleared through this contract.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock_quantity: Option<i32>,
}

impl Product {
    /// Apply the present fields of an UpdateProduct, leaving the rest as-is
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(stock_quantity) = update.stock_quantity {
            self.stock_quantity = stock_quantity;
        }
    }
}
