pub mod auth;
pub mod catalog;
pub mod hero_slide;
pub mod product;
pub mod product_type;
pub mod upload;
