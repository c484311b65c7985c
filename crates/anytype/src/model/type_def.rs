//! Object type definitions.

use serde::{Deserialize, Serialize};

use super::Layout;
use super::Meta;
use super::common::impl_entity;

/// A type definition: the schema objects are created from. Read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectTypeDefinition {
    #[serde(flatten)]
    pub meta: Meta,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon_emoji: Option<String>,
    pub layout: TypeLayoutSpec,
    #[serde(default)]
    pub default_template_id: Option<String>,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub recommended_layout: Option<Layout>,
    #[serde(default)]
    pub recommended_relations: Vec<String>,
}

impl_entity!(ObjectTypeDefinition);

impl ObjectTypeDefinition {
    /// The layout, whichever way the server described it.
    pub fn layout(&self) -> &Layout {
        match &self.layout {
            TypeLayoutSpec::Descriptor(descriptor) => &descriptor.layout,
            TypeLayoutSpec::Named(layout) => layout,
        }
    }
}

/// A type's layout: a bare layout name or a structured descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeLayoutSpec {
    Descriptor(TypeLayout),
    Named(Layout),
}

/// Structured layout descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeLayout {
    #[serde(rename = "type")]
    pub layout: Layout,
    #[serde(default)]
    pub is_collection: bool,
    #[serde(default)]
    pub default_template_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn layout_as_name() {
        let def: ObjectTypeDefinition = serde_json::from_value(json!({
            "id": "t1",
            "name": "Task",
            "layout": "action"
        }))
        .unwrap();
        assert_eq!(def.layout(), &Layout::Action);
        assert!(def.recommended_relations.is_empty());
    }

    #[test]
    fn layout_as_descriptor() {
        let def: ObjectTypeDefinition = serde_json::from_value(json!({
            "id": "t2",
            "name": "Set",
            "layout": {"type": "basic", "is_collection": true}
        }))
        .unwrap();
        assert_eq!(def.layout(), &Layout::Basic);
        assert!(matches!(
            def.layout,
            TypeLayoutSpec::Descriptor(TypeLayout { is_collection: true, .. })
        ));
    }
}
