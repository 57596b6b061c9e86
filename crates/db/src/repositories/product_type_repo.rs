//! Repository for the `product_types` table.

use sqlx::PgPool;

use osaka_core::types::DbId;

use crate::models::product_type::{CreateProductType, ProductType};

const COLUMNS: &str = "id, name, created_at";

/// Provides CRUD operations for product types.
///
/// Names are unique ignoring case, enforced by the
/// `uq_product_types_name_lower` index; [`Self::exists_by_name_ci`] lets the
/// API reject duplicates before attempting the insert.
pub struct ProductTypeRepo;

impl ProductTypeRepo {
    /// List all types, ordered case-insensitively by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProductType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM product_types ORDER BY LOWER(name) ASC");
        sqlx::query_as::<_, ProductType>(&query)
            .fetch_all(pool)
            .await
    }

    /// Whether a type with this name already exists, ignoring case.
    pub async fn exists_by_name_ci(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM product_types WHERE LOWER(name) = LOWER($1))",
        )
        .bind(name)
        .fetch_one(pool)
        .await
    }

    /// Insert a new type, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProductType,
    ) -> Result<ProductType, sqlx::Error> {
        let query = format!("INSERT INTO product_types (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, ProductType>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Permanently delete a type by ID. Returns `true` if a row was removed.
    ///
    /// Does not cascade: products whose composed names reference the deleted
    /// type keep their stored name string.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM product_types WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
