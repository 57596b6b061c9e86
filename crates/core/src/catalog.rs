//! Catalog composition engine.
//!
//! The category table is static, process-wide configuration: which screen
//! sizes exist, which base models each size carries, and whether a size has
//! type variants. Product types themselves are dynamic (store-backed); the
//! two sources are joined only here, when a display name is composed or
//! decomposed.

use crate::error::CoreError;

/// Separator between the base model and the type segment of a composed
/// product name, e.g. `"Gold Series - Voice Control"`.
pub const NAME_SEPARATOR: &str = " - ";

/// Static configuration for one product category (screen size class).
#[derive(Debug)]
pub struct CategoryConfig {
    /// Stored category key, e.g. `"32 inch"`.
    pub key: &'static str,
    /// Display size string, derived one-to-one from the category.
    pub size: &'static str,
    /// Base model names selectable for this category, in display order.
    pub models: &'static [&'static str],
    /// Whether products in this category compose a type variant into their name.
    pub has_types: bool,
}

/// All categories, in public display order.
pub const CATEGORIES: &[CategoryConfig] = &[
    CategoryConfig {
        key: "24 inch",
        size: "24 Inch",
        models: &["Smart Frameless", "Basic LED"],
        has_types: false,
    },
    CategoryConfig {
        key: "32 inch",
        size: "32 Inch",
        models: &["Gold Series", "Silver Series", "Smart Android"],
        has_types: true,
    },
    CategoryConfig {
        key: "43 inch",
        size: "43 Inch",
        models: &["Gold Series", "Smart Android", "Frameless 4K"],
        has_types: true,
    },
    CategoryConfig {
        key: "50 inch",
        size: "50 Inch",
        models: &["Smart Android", "QLED Pro"],
        has_types: true,
    },
    CategoryConfig {
        key: "65 inch",
        size: "65 Inch",
        models: &["QLED Pro", "Ultra 4K"],
        has_types: true,
    },
];

/// Look up a category's configuration by its stored key.
pub fn config_for(category: &str) -> Result<&'static CategoryConfig, CoreError> {
    CATEGORIES
        .iter()
        .find(|c| c.key == category)
        .ok_or_else(|| CoreError::Validation(format!("Unknown category '{category}'")))
}

/// Display size string for a category. Total over [`CATEGORIES`].
pub fn size_for_category(category: &str) -> Result<&'static str, CoreError> {
    Ok(config_for(category)?.size)
}

/// Base model names selectable for a category, in display order.
pub fn models_for_category(category: &str) -> Result<&'static [&'static str], CoreError> {
    Ok(config_for(category)?.models)
}

/// Whether products in this category require a type variant in their name.
pub fn requires_type(category: &str) -> Result<bool, CoreError> {
    Ok(config_for(category)?.has_types)
}

/// Position of a category in public display order, if it exists.
pub fn category_position(category: &str) -> Option<usize> {
    CATEGORIES.iter().position(|c| c.key == category)
}

/// Compose a product's canonical display name from its parts.
///
/// For categories without type variants, or when no type is chosen yet, the
/// name is just the base model. Otherwise `model` and `type_name` are joined
/// with [`NAME_SEPARATOR`].
pub fn compose_name(model: &str, type_name: &str, category: &str) -> Result<String, CoreError> {
    if !requires_type(category)? || type_name.is_empty() {
        return Ok(model.to_string());
    }
    Ok(format!("{model}{NAME_SEPARATOR}{type_name}"))
}

/// Decompose a stored display name back into `(model, type)`.
///
/// Splits on the first occurrence of [`NAME_SEPARATOR`]; everything after it
/// (including any further separators) is the type segment. A name with no
/// separator is entirely the model, with an empty type -- the admin form must
/// then require a type before the product can be saved again.
pub fn split_name(name: &str) -> (&str, &str) {
    match name.split_once(NAME_SEPARATOR) {
        Some((model, type_name)) => (model, type_name),
        None => (name, ""),
    }
}
