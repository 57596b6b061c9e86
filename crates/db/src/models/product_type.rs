//! Product type entity model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use osaka_core::types::{DbId, Timestamp};

/// A row from the `product_types` table.
///
/// Names are unique ignoring case. Deleting a type does not touch products
/// whose composed names already reference it; the name is not a live
/// foreign key.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductType {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new product type.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductType {
    pub name: String,
}
