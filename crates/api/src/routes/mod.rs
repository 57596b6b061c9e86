pub mod auth;
pub mod catalog;
pub mod health;
pub mod hero_slide;
pub mod product;
pub mod product_type;
pub mod upload;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                      login (public)
///
/// /catalog                         public storefront projection
/// /catalog/config                  category configuration + type names
///
/// /products                        list, create (admin)
/// /products/{id}                   update, delete
/// /products/{id}/active            visibility toggle (PUT)
///
/// /hero-slides                     list, create (admin)
/// /hero-slides/{id}                update, delete
/// /hero-slides/{id}/active         visibility toggle (PUT)
///
/// /product-types                   list, create (admin)
/// /product-types/{id}              delete
///
/// /uploads/hero                    multipart image upload (admin)
/// /uploads/product                 multipart image upload (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/catalog", catalog::router())
        .nest("/products", product::router())
        .nest("/hero-slides", hero_slide::router())
        .nest("/product-types", product_type::router())
        .nest("/uploads", upload::router())
}
