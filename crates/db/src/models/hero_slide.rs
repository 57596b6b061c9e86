//! Hero slide entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use osaka_core::types::{DbId, Timestamp};

/// A row from the `hero_slides` table. Carousel order is `display_order`
/// ascending.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HeroSlide {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new hero slide.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHeroSlide {
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    /// Defaults to `0` if omitted.
    pub display_order: Option<i32>,
    /// Defaults to `true` if omitted.
    pub is_active: Option<bool>,
}

/// DTO for updating an existing hero slide. Only non-`None` fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateHeroSlide {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}
