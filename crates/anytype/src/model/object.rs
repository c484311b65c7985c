//! Objects, the central content entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::impl_entity;
use super::{Meta, Patch};

/// An object: a page, note, task, bookmark or any custom type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Object {
    #[serde(flatten)]
    pub meta: Meta,
    pub name: String,
    #[serde(rename = "type")]
    pub object_type: ObjectTypeRef,
    pub layout: Layout,
    #[serde(default)]
    pub properties: Vec<PropertyValue>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub icon: Option<Icon>,
    #[serde(default)]
    pub is_favorite: Option<bool>,
    #[serde(default)]
    pub is_archived: Option<bool>,
    /// Markdown body.
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub last_opened_date: Option<DateTime<Utc>>,
}

impl_entity!(Object);

impl Object {
    pub fn type_key(&self) -> Option<&str> {
        self.object_type.key.as_deref()
    }

    pub fn type_name(&self) -> Option<&str> {
        self.object_type.name.as_deref()
    }

    pub fn icon_emoji(&self) -> Option<&str> {
        self.icon.as_ref().and_then(Icon::as_emoji)
    }

    pub fn icon_image(&self) -> Option<&str> {
        self.icon.as_ref().and_then(Icon::as_image)
    }

    /// Whether either archive flag is set.
    ///
    /// After a delete the object may still be readable with this set; the API
    /// does not say whether a deletion was hard or soft.
    pub fn is_archived(&self) -> bool {
        self.archived || self.is_archived.unwrap_or(false)
    }

    /// Looks up a property value by key.
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.iter().find(|p| p.key == key)
    }
}

/// Reference to an object's type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectTypeRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Object layout.
///
/// Layouts this client does not know are kept verbatim in [`Layout::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Layout {
    Basic,
    Profile,
    Action,
    Note,
    Other(String),
}

impl Layout {
    pub fn as_str(&self) -> &str {
        match self {
            Layout::Basic => "basic",
            Layout::Profile => "profile",
            Layout::Action => "action",
            Layout::Note => "note",
            Layout::Other(s) => s,
        }
    }
}

impl From<String> for Layout {
    fn from(s: String) -> Self {
        match s.as_str() {
            "basic" => Layout::Basic,
            "profile" => Layout::Profile,
            "action" => Layout::Action,
            "note" => Layout::Note,
            _ => Layout::Other(s),
        }
    }
}

impl From<Layout> for String {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

/// Object icon: an emoji, an image or another server-defined format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Icon {
    pub fn emoji(emoji: impl Into<String>) -> Self {
        Self {
            format: "emoji".to_string(),
            emoji: Some(emoji.into()),
            url: None,
            extra: Map::new(),
        }
    }

    pub fn image(url: impl Into<String>) -> Self {
        Self {
            format: "image".to_string(),
            emoji: None,
            url: Some(url.into()),
            extra: Map::new(),
        }
    }

    pub fn as_emoji(&self) -> Option<&str> {
        if self.format == "emoji" {
            self.emoji.as_deref()
        } else {
            None
        }
    }

    pub fn as_image(&self) -> Option<&str> {
        if self.format == "image" {
            self.url.as_deref()
        } else {
            None
        }
    }
}

/// A property value on an object.
///
/// The value's field name depends on the property format (`text`, `number`,
/// `select`, ...), so everything besides the key is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyValue {
    pub key: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl PropertyValue {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            fields: Map::new(),
        }
    }

    /// Add a field, e.g. `PropertyValue::new("status").with("select", "done")`.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

/// Payload for creating an object.
///
/// There is no space field: the space is part of the request path.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ObjectCreate {
    pub name: String,
    pub type_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<PropertyValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Required by the server for bookmarks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
}

impl ObjectCreate {
    pub fn new(name: impl Into<String>, type_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_key: type_key.into(),
            ..Default::default()
        }
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn property(mut self, value: PropertyValue) -> Self {
        self.properties.get_or_insert_with(Vec::new).push(value);
        self
    }
}

/// Partial update of an object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ObjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<PropertyValue>>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub icon: Patch<Icon>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub body: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub description: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub source_url: Patch<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object() -> Object {
        serde_json::from_value(json!({
            "object": "object",
            "id": "o1",
            "space_id": "s1",
            "name": "Meeting notes",
            "type": {"id": "t1", "key": "page", "name": "Page", "icon": null},
            "layout": "basic",
            "properties": [{"key": "status", "format": "select", "select": {"name": "Done"}}],
            "icon": {"format": "emoji", "emoji": "📝"},
            "is_archived": true,
            "created_date": "2025-05-20T10:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn derived_accessors() {
        let object = object();
        assert_eq!(object.type_key(), Some("page"));
        assert_eq!(object.type_name(), Some("Page"));
        assert_eq!(object.icon_emoji(), Some("📝"));
        assert_eq!(object.icon_image(), None);
        assert!(object.is_archived());
        assert_eq!(
            object.property("status").and_then(|p| p.get("format")),
            Some(&json!("select"))
        );
    }

    #[test]
    fn unknown_layout_is_preserved() {
        let layout: Layout = serde_json::from_value(json!("kanban")).unwrap();
        assert_eq!(layout, Layout::Other("kanban".into()));
        assert_eq!(serde_json::to_value(&layout).unwrap(), json!("kanban"));
        assert_eq!(serde_json::to_value(Layout::Note).unwrap(), json!("note"));
    }

    #[test]
    fn create_has_no_space_field() {
        let body = serde_json::to_value(ObjectCreate::new("Doc", "page").body("# Hi")).unwrap();
        assert_eq!(body, json!({"name": "Doc", "type_key": "page", "body": "# Hi"}));
    }

    #[test]
    fn update_distinguishes_unset_and_clear() {
        let update = ObjectUpdate {
            is_archived: Some(true),
            description: Patch::Clear,
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(update).unwrap(),
            json!({"description": null, "is_archived": true})
        );
    }
}
