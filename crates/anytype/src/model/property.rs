//! Property definitions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::impl_entity;
use super::{Meta, Patch};

/// Value format of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyFormat {
    Text,
    Number,
    Select,
    MultiSelect,
    Date,
    Files,
    Checkbox,
    Url,
    Email,
    Phone,
    Objects,
}

/// A property definition within a space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(flatten)]
    pub meta: Meta,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub format: PropertyFormat,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub is_readonly: bool,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub is_archived: bool,
    /// Shape depends on `format`.
    #[serde(default)]
    pub default_value: Option<Value>,
    #[serde(default)]
    pub source: Vec<String>,
}

impl_entity!(Property);

/// Payload for creating a property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyCreate {
    pub name: String,
    pub format: PropertyFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_readonly: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Vec<String>>,
}

impl PropertyCreate {
    pub fn new(name: impl Into<String>, format: PropertyFormat) -> Self {
        Self {
            name: name.into(),
            format,
            description: None,
            is_required: None,
            is_readonly: None,
            is_hidden: None,
            default_value: None,
            source: None,
        }
    }
}

/// Partial update of a property.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PropertyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub description: Patch<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<PropertyFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_readonly: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub default_value: Patch<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn format_uses_snake_case() {
        assert_eq!(
            serde_json::to_value(PropertyFormat::MultiSelect).unwrap(),
            json!("multi_select")
        );
        let format: PropertyFormat = serde_json::from_value(json!("checkbox")).unwrap();
        assert_eq!(format, PropertyFormat::Checkbox);
    }

    #[test]
    fn flags_default_to_false() {
        let property: Property = serde_json::from_value(json!({
            "id": "p1",
            "name": "Due",
            "format": "date"
        }))
        .unwrap();
        assert!(!property.is_required && !property.is_hidden);
        assert!(property.source.is_empty());
    }
}
