//! Tags.

use serde::{Deserialize, Serialize};

use super::common::impl_entity;
use super::{Meta, Patch};

/// One of the fixed tag colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    #[default]
    Grey,
}

impl std::str::FromStr for TagColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_value(serde_json::Value::String(s.to_lowercase()))
            .map_err(|_| format!("unknown tag color: {}", s))
    }
}

/// A tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(flatten)]
    pub meta: Meta,
    pub name: String,
    #[serde(default)]
    pub color: TagColor,
    #[serde(default)]
    pub description: Option<String>,
    /// Maintained by the server.
    #[serde(default)]
    pub usage_count: u64,
    #[serde(default)]
    pub is_archived: bool,
}

impl_entity!(Tag);

/// Payload for creating a tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TagCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<TagColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TagCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn color(mut self, color: TagColor) -> Self {
        self.color = Some(color);
        self
    }
}

/// Partial update of a tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TagUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<TagColor>,
    #[serde(skip_serializing_if = "Patch::is_unset")]
    pub description: Patch<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn color_defaults_to_grey() {
        let tag: Tag = serde_json::from_value(json!({"id": "t1", "name": "x"})).unwrap();
        assert_eq!(tag.color, TagColor::Grey);
        assert_eq!(tag.usage_count, 0);
    }

    #[test]
    fn color_parses_case_insensitively() {
        assert_eq!("Blue".parse::<TagColor>(), Ok(TagColor::Blue));
        assert!("teal".parse::<TagColor>().is_err());
    }

    #[test]
    fn update_sends_only_archive_flag() {
        let update = TagUpdate {
            is_archived: Some(true),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(update).unwrap(), json!({"is_archived": true}));
    }
}
