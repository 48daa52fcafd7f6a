//! Editable-field schema.
//!
//! Each block kind enumerates which of its props an operator may edit and
//! with which control. [`FieldControl::List`] nests a per-item field set,
//! which is how array-of-record props (services, team members) are described.

use serde::{Deserialize, Serialize};

/// One option of a [`FieldControl::Select`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Editing affordance for one prop key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "control", rename_all = "snake_case")]
pub enum FieldControl {
    /// Single-line text.
    Text,
    /// Multi-line text.
    Textarea,
    /// Free-form color value.
    Color,
    /// Single choice from a closed option list.
    Select { options: Vec<SelectOption> },
    /// String URL prop whose editor may trigger an asynchronous upload.
    /// The upload happens in the editor shell on explicit user action; the
    /// resolved URL is stored as a plain string.
    ImageUpload { category: String },
    /// Ordered list of records; `item` describes one record's fields.
    List { item: Vec<Field> },
}

/// One editable prop key and its control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub key: String,
    pub label: String,
    #[serde(flatten)]
    pub control: FieldControl,
}

impl Field {
    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            control: FieldControl::Text,
        }
    }

    pub fn textarea(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            control: FieldControl::Textarea,
        }
    }

    pub fn color(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            control: FieldControl::Color,
        }
    }

    pub fn select(
        key: impl Into<String>,
        label: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            control: FieldControl::Select { options },
        }
    }

    pub fn image(
        key: impl Into<String>,
        label: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            control: FieldControl::ImageUpload {
                category: category.into(),
            },
        }
    }

    pub fn list(key: impl Into<String>, label: impl Into<String>, item: Vec<Field>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            control: FieldControl::List { item },
        }
    }
}
