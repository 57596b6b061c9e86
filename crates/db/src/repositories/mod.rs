//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod hero_slide_repo;
pub mod product_repo;
pub mod product_type_repo;

pub use hero_slide_repo::HeroSlideRepo;
pub use product_repo::ProductRepo;
pub use product_type_repo::ProductTypeRepo;
