//! Templates.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::impl_entity;
use super::{Meta, Patch};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateType {
    Object,
    Page,
    Set,
    Collection,
}

/// Built-in object kinds, as used by templates and search filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Note,
    Task,
    Bookmark,
    Collection,
    Set,
    Profile,
    Space,
    Type,
}

/// A template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    #[serde(flatten)]
    pub meta: Meta,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub template_type: TemplateType,
    #[serde(default)]
    pub object_type: Option<ObjectKind>,
    #[serde(default)]
    pub icon_emoji: Option<String>,
    #[serde(default)]
    pub icon_image: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub usage_count: u64,
    #[serde(default)]
    pub content: Map<String, Value>,
}

impl_entity!(Template);

/// Payload for creating a template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateCreate {
    pub name: String,
    pub template_type: TemplateType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_type: Option<ObjectKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Map<String, Value>>,
}

impl TemplateCreate {
    pub fn new(name: impl Into<String>, template_type: TemplateType) -> Self {
        Self {
            name: name.into(),
            template_type,
            description: None,
            object_type: None,
            icon_emoji: None,
            icon_image: None,
            content: None,
        }
    }
}

/// Partial update of a template.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TemplateUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub description: Patch<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_type: Option<TemplateType>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub object_type: Patch<ObjectKind>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub icon_emoji: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub icon_image: Patch<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Map<String, Value>>,
}
