//! Spaces.

use serde::{Deserialize, Serialize};

use super::common::impl_entity;
use super::{Meta, Patch};

/// A space: the top-level container for objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    #[serde(flatten)]
    pub meta: Meta,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Emoji or image URL.
    #[serde(default)]
    pub icon: Option<String>,
    pub gateway_url: String,
    pub network_id: String,
}

impl_entity!(Space);

impl Space {
    /// The icon, if it looks like an emoji.
    ///
    /// Client-side inference from the icon's length; the API does not say
    /// which kind of icon it returned.
    pub fn icon_emoji(&self) -> Option<&str> {
        self.icon
            .as_deref()
            .filter(|icon| !icon.is_empty() && icon.chars().count() <= 2)
    }

    /// The icon, if it looks like an image URL.
    ///
    /// Client-side inference from the icon's scheme prefix.
    pub fn icon_image(&self) -> Option<&str> {
        self.icon
            .as_deref()
            .filter(|icon| icon.starts_with("http://") || icon.starts_with("https://"))
    }
}

/// Payload for creating a space.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpaceCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,
}

impl SpaceCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn icon_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.icon_emoji = Some(emoji.into());
        self
    }
}

/// Partial update of a space.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpaceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub description: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub icon_emoji: Patch<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn space(icon: Option<&str>) -> Space {
        serde_json::from_value(json!({
            "object": "space",
            "id": "s1",
            "name": "Personal",
            "icon": icon,
            "gateway_url": "http://127.0.0.1:47800",
            "network_id": "N1"
        }))
        .unwrap()
    }

    #[test]
    fn deserializes_api_shape() {
        let space = space(None);
        assert_eq!(space.meta.id, "s1");
        assert_eq!(space.description, "");
        assert!(space.meta.created_date.is_none());
    }

    #[test]
    fn emoji_icon_is_inferred() {
        let space = space(Some("🚀"));
        assert_eq!(space.icon_emoji(), Some("🚀"));
        assert_eq!(space.icon_image(), None);
    }

    #[test]
    fn image_icon_is_inferred() {
        let space = space(Some("https://example.com/icon.png"));
        assert_eq!(space.icon_emoji(), None);
        assert_eq!(space.icon_image(), Some("https://example.com/icon.png"));
    }

    #[test]
    fn create_skips_unset_fields() {
        let body = serde_json::to_value(SpaceCreate::new("Work")).unwrap();
        assert_eq!(body, json!({"name": "Work"}));
    }
}
