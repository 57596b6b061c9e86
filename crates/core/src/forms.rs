//! Admin form state and validation.
//!
//! Each record kind edited in the back-office has an explicit tagged form
//! value validated by a pure function before anything is persisted. The
//! [`EditorState`] machine models the editing surface: a failed validation
//! keeps the user in `Editing` with the violations attached, a store failure
//! returns to `Editing` with the form intact, and only a successful persist
//! returns to `Idle`.

use serde::{Deserialize, Serialize};

use crate::catalog;

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// A form that can be checked before entering `Persisting`.
pub trait AdminForm {
    /// All violated rules, empty when the form may be saved.
    fn violations(&self) -> Vec<FieldViolation>;
}

// ---------------------------------------------------------------------------
// Product form
// ---------------------------------------------------------------------------

/// Editable state of the product form.
///
/// `model` and `type_name` are the decomposed halves of the stored display
/// name; composition happens in [`ProductForm::into_payload`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductForm {
    pub category: String,
    pub model: String,
    #[serde(default)]
    pub type_name: String,
    pub price: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Validated, composed payload ready for the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPayload {
    pub name: String,
    pub category: String,
    pub size: String,
    pub price: i64,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl ProductForm {
    /// Recover form fields from a stored record for editing.
    ///
    /// Runs name decomposition: a stored name without a separator leaves
    /// `type_name` empty, and validation will then demand a type before the
    /// record can be saved again (for type-requiring categories).
    pub fn from_record(
        category: &str,
        name: &str,
        price: i64,
        description: Option<String>,
        image_url: Option<String>,
    ) -> Self {
        let (model, type_name) = catalog::split_name(name);
        Self {
            category: category.to_string(),
            model: model.to_string(),
            type_name: type_name.to_string(),
            price,
            description,
            image_url,
        }
    }

    /// Validate and compose the persistence payload.
    ///
    /// Violations are returned in field order (category, model, type, price)
    /// so callers can surface all of them at once.
    pub fn into_payload(self) -> Result<ProductPayload, Vec<FieldViolation>> {
        let violations = self.violations();
        if !violations.is_empty() {
            return Err(violations);
        }

        // The category was validated above, so these lookups cannot fail;
        // map any residual error back onto the category field regardless.
        let onto_category = |e: crate::error::CoreError| vec![FieldViolation::new("category", e.to_string())];
        let size = catalog::size_for_category(&self.category).map_err(onto_category)?;
        let name = catalog::compose_name(&self.model, &self.type_name, &self.category)
            .map_err(onto_category)?;

        Ok(ProductPayload {
            name,
            category: self.category,
            size: size.to_string(),
            price: self.price,
            description: self.description,
            image_url: self.image_url,
        })
    }
}

impl AdminForm for ProductForm {
    fn violations(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        let category_valid = match catalog::config_for(&self.category) {
            Ok(_) => true,
            Err(_) if self.category.is_empty() => {
                violations.push(FieldViolation::new("category", "Category is required"));
                false
            }
            Err(e) => {
                violations.push(FieldViolation::new("category", e.to_string()));
                false
            }
        };

        if self.model.trim().is_empty() {
            violations.push(FieldViolation::new("model", "Model is required"));
        }

        // The type rule only applies once the category itself is valid.
        if category_valid
            && catalog::requires_type(&self.category).unwrap_or(false)
            && self.type_name.trim().is_empty()
        {
            violations.push(FieldViolation::new(
                "type",
                "A type is required for this category",
            ));
        }

        if self.price <= 0 {
            violations.push(FieldViolation::new("price", "Price must be positive"));
        }

        violations
    }
}

// ---------------------------------------------------------------------------
// Hero slide form
// ---------------------------------------------------------------------------

/// Editable state of the hero slide form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeroSlideForm {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub display_order: i32,
}

impl AdminForm for HeroSlideForm {
    fn violations(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        if self.title.trim().is_empty() {
            violations.push(FieldViolation::new("title", "Title is required"));
        }
        if self.image_url.trim().is_empty() {
            violations.push(FieldViolation::new("image_url", "Image is required"));
        }
        violations
    }
}

// ---------------------------------------------------------------------------
// Editor state machine
// ---------------------------------------------------------------------------

/// Per-form editing lifecycle: `Idle -> Editing -> Persisting -> Idle`, with
/// validation failures and store failures both landing back in `Editing`.
#[derive(Debug)]
pub enum EditorState<F> {
    /// No editing surface open.
    Idle,
    /// Form open; `violations` is non-empty after a rejected submit.
    Editing {
        form: F,
        violations: Vec<FieldViolation>,
    },
    /// A save is in flight; no local mutation is applied until it lands.
    Persisting { form: F },
}

impl<F: AdminForm> EditorState<F> {
    /// Open the editing surface, either from an empty template (add) or a
    /// decomposed record (edit).
    pub fn begin(form: F) -> Self {
        EditorState::Editing {
            form,
            violations: Vec::new(),
        }
    }

    /// Submit the form. Valid forms move to `Persisting`; invalid forms stay
    /// in `Editing` with the violations attached. Submitting in any other
    /// state is a no-op.
    pub fn submit(self) -> Self {
        match self {
            EditorState::Editing { form, .. } => {
                let violations = form.violations();
                if violations.is_empty() {
                    EditorState::Persisting { form }
                } else {
                    EditorState::Editing { form, violations }
                }
            }
            other => other,
        }
    }

    /// The store accepted the write: close the editing surface. The caller
    /// must follow with exactly one full re-list.
    pub fn persisted(self) -> Self {
        match self {
            EditorState::Persisting { .. } => EditorState::Idle,
            other => other,
        }
    }

    /// The store rejected the write: stay in the form with its
    /// pre-attempt contents so the user can retry.
    pub fn store_failed(self) -> Self {
        match self {
            EditorState::Persisting { form } => EditorState::Editing {
                form,
                violations: Vec::new(),
            },
            other => other,
        }
    }
}
