//! Preset catalog records, categories, and submission validation.
//!
//! A [`PresetRecord`] is the single wire and domain shape for a catalog
//! entry. Drafts are records without an `id`; persisted records carry the
//! identifier assigned by the collection resource.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::DbId;

/* --------------------------------------------------------------------------
   Categories
   -------------------------------------------------------------------------- */

/// The fixed set of catalog categories.
///
/// Records carry the category as its display label on the wire, so the
/// server never needs to know this enum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    Professional,
    Warm,
    Cool,
    Retro,
    Soft,
    Vivid,
}

impl Category {
    /// Every category, in the order the admin form offers them.
    pub const ALL: [Category; 6] = [
        Category::Professional,
        Category::Warm,
        Category::Cool,
        Category::Retro,
        Category::Soft,
        Category::Vivid,
    ];

    /// Wire label for this category.
    pub fn label(self) -> &'static str {
        match self {
            Category::Professional => "Профессиональные",
            Category::Warm => "Тёплые",
            Category::Cool => "Холодные",
            Category::Retro => "Ретро",
            Category::Soft => "Нежные",
            Category::Vivid => "Яркие",
        }
    }

    /// Map a wire label back to a category. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/* --------------------------------------------------------------------------
   Records
   -------------------------------------------------------------------------- */

/// A catalog entry, as exchanged with the collection resource.
///
/// Every field except `id` has a serde default, applied both when the key is
/// missing and when it is `null`, so partially filled rows still
/// deserialize; required-ness is checked by [`validate_submission`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PresetRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    #[serde(default, deserialize_with = "serde_helpers::default_on_null")]
    #[validate(length(min = 1, message = "Preset name must not be empty"))]
    pub name: String,
    #[serde(default, deserialize_with = "serde_helpers::default_on_null")]
    pub description: String,
    #[serde(
        default = "default_category_label",
        deserialize_with = "serde_helpers::category_label"
    )]
    pub category: String,
    #[serde(default, deserialize_with = "serde_helpers::default_on_null")]
    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price: i32,
    #[serde(default, deserialize_with = "serde_helpers::default_on_null")]
    pub preview_image_url: String,
    #[serde(default, deserialize_with = "serde_helpers::default_on_null")]
    #[validate(length(min = 1, message = "Preset file URL must not be empty"))]
    pub preset_file_url: String,
    #[serde(
        default = "default_is_active",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_active: bool,
    #[serde(default, deserialize_with = "serde_helpers::default_on_null")]
    pub sort_order: i32,
}

/// Field deserializers that read `null` as the field's default.
mod serde_helpers {
    use serde::{Deserialize, Deserializer};

    pub fn default_on_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }

    pub fn bool_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
    }

    pub fn category_label<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?
            .unwrap_or_else(super::default_category_label))
    }
}

fn default_category_label() -> String {
    Category::default().label().to_string()
}

fn default_is_active() -> bool {
    true
}

impl Default for PresetRecord {
    /// The empty draft the admin form starts from.
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            category: default_category_label(),
            price: 0,
            preview_image_url: String::new(),
            preset_file_url: String::new(),
            is_active: true,
            sort_order: 0,
        }
    }
}

impl PresetRecord {
    /// Known category of this record, if its label is one of [`Category::ALL`].
    pub fn category(&self) -> Option<Category> {
        Category::from_label(&self.category)
    }

    /// A copy of this record with only `is_active` inverted.
    pub fn with_active_toggled(&self) -> Self {
        Self {
            is_active: !self.is_active,
            ..self.clone()
        }
    }

    /// A copy of this record carrying the given server-assigned id.
    pub fn with_id(&self, id: DbId) -> Self {
        Self {
            id: Some(id),
            ..self.clone()
        }
    }
}

/* --------------------------------------------------------------------------
   Validation
   -------------------------------------------------------------------------- */

/// Validate a record before it is created or replaced.
///
/// Enforces a non-empty name, a non-empty preset file URL, and a
/// non-negative price. The category label is not checked.
pub fn validate_submission(record: &PresetRecord) -> Result<(), CoreError> {
    record.validate().map_err(|errors| {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{field} is invalid"),
                })
            })
            .collect();
        messages.sort();
        CoreError::Validation(messages.join("; "))
    })
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
