//! Repository for the `hero_slides` table.

use sqlx::PgPool;

use osaka_core::types::DbId;

use crate::models::hero_slide::{CreateHeroSlide, HeroSlide, UpdateHeroSlide};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, image_url, display_order, is_active, created_at, updated_at";

/// Provides CRUD operations for hero slides. Deletes are hard deletes.
pub struct HeroSlideRepo;

impl HeroSlideRepo {
    /// List all slides in carousel order (`display_order` ascending).
    pub async fn list(pool: &PgPool) -> Result<Vec<HeroSlide>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hero_slides ORDER BY display_order ASC, id ASC");
        sqlx::query_as::<_, HeroSlide>(&query).fetch_all(pool).await
    }

    /// List only publicly visible slides, same ordering as [`Self::list`].
    pub async fn list_active(pool: &PgPool) -> Result<Vec<HeroSlide>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM hero_slides WHERE is_active = TRUE
             ORDER BY display_order ASC, id ASC"
        );
        sqlx::query_as::<_, HeroSlide>(&query).fetch_all(pool).await
    }

    /// Find a slide by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HeroSlide>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hero_slides WHERE id = $1");
        sqlx::query_as::<_, HeroSlide>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new slide, returning the created row.
    ///
    /// If `display_order` is `None`, defaults to `0`. If `is_active` is
    /// `None`, defaults to `true`.
    pub async fn create(pool: &PgPool, input: &CreateHeroSlide) -> Result<HeroSlide, sqlx::Error> {
        let query = format!(
            "INSERT INTO hero_slides
                (title, description, image_url, display_order, is_active)
             VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeroSlide>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(input.display_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Update a slide. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHeroSlide,
    ) -> Result<Option<HeroSlide>, sqlx::Error> {
        let query = format!(
            "UPDATE hero_slides SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                image_url = COALESCE($4, image_url),
                display_order = COALESCE($5, display_order),
                is_active = COALESCE($6, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeroSlide>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(input.display_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Set the public visibility flag. Returns `None` if the id is gone.
    pub async fn set_active(
        pool: &PgPool,
        id: DbId,
        is_active: bool,
    ) -> Result<Option<HeroSlide>, sqlx::Error> {
        let query = format!(
            "UPDATE hero_slides SET is_active = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeroSlide>(&query)
            .bind(id)
            .bind(is_active)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a slide by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hero_slides WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
