//! Public catalog projection (no auth gate).
//!
//! The storefront reads one payload: active products grouped into sections
//! by category, in static category display order, plus the active hero
//! slides in carousel order. Grouping is a pure function over already-listed
//! rows so it stays unit-testable without a database.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use osaka_core::catalog::{category_position, CATEGORIES};
use osaka_db::models::hero_slide::HeroSlide;
use osaka_db::models::product::Product;
use osaka_db::repositories::{HeroSlideRepo, ProductRepo, ProductTypeRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// One storefront section: a category with its active products in store
/// order.
#[derive(Debug, Serialize)]
pub struct CatalogSection {
    pub category: String,
    pub size: String,
    pub products: Vec<Product>,
}

/// The full public catalog payload.
#[derive(Debug, Serialize)]
pub struct CatalogView {
    pub sections: Vec<CatalogSection>,
    pub hero_slides: Vec<HeroSlide>,
}

/// Static configuration for one category, as served to the admin form.
#[derive(Debug, Serialize)]
pub struct CategoryView {
    pub key: &'static str,
    pub size: &'static str,
    pub models: &'static [&'static str],
    pub has_types: bool,
}

/// Admin form configuration: the static category table plus the dynamic
/// type names, joined here so the form has a single source to render from.
#[derive(Debug, Serialize)]
pub struct CatalogConfig {
    pub categories: Vec<CategoryView>,
    pub type_names: Vec<String>,
}

/// GET /api/v1/catalog
pub async fn public_catalog(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<CatalogView>>> {
    let products = ProductRepo::list_active(&state.pool).await?;
    let slides = HeroSlideRepo::list_active(&state.pool).await?;
    Ok(Json(DataResponse {
        data: project_catalog(products, slides),
    }))
}

/// GET /api/v1/catalog/config
pub async fn catalog_config(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<CatalogConfig>>> {
    let type_names = ProductTypeRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(|t| t.name)
        .collect();
    let categories = CATEGORIES
        .iter()
        .map(|c| CategoryView {
            key: c.key,
            size: c.size,
            models: c.models,
            has_types: c.has_types,
        })
        .collect();
    Ok(Json(DataResponse {
        data: CatalogConfig {
            categories,
            type_names,
        },
    }))
}

/// Group active products into sections by category, in static display
/// order, preserving store order within each section. Products whose
/// category is no longer configured are dropped from the storefront.
fn project_catalog(products: Vec<Product>, hero_slides: Vec<HeroSlide>) -> CatalogView {
    let mut sections: Vec<CatalogSection> = CATEGORIES
        .iter()
        .map(|c| CatalogSection {
            category: c.key.to_string(),
            size: c.size.to_string(),
            products: Vec::new(),
        })
        .collect();

    for product in products {
        if let Some(pos) = category_position(&product.category) {
            sections[pos].products.push(product);
        }
    }

    sections.retain(|s| !s.products.is_empty());
    CatalogView {
        sections,
        hero_slides,
    }
}
