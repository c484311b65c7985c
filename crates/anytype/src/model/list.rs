//! Lists (collections of objects).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::impl_entity;
use super::{Meta, Patch};

/// A list and its ordered items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    #[serde(flatten)]
    pub meta: Meta,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub items: Vec<ListItem>,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub total_items: u64,
}

impl_entity!(List);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: String,
    pub object_id: String,
    pub position: i64,
    pub added_at: DateTime<Utc>,
}

/// Payload for creating a list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ListCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}

/// Partial update of a list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
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
    fn items_keep_order() {
        let list: List = serde_json::from_value(json!({
            "id": "l1",
            "name": "Reading",
            "items": [
                {"id": "i1", "object_id": "o2", "position": 0, "added_at": "2025-01-01T00:00:00Z"},
                {"id": "i2", "object_id": "o1", "position": 1, "added_at": "2025-01-02T00:00:00Z"}
            ],
            "total_items": 2
        }))
        .unwrap();
        let ids: Vec<_> = list.items.iter().map(|i| i.object_id.as_str()).collect();
        assert_eq!(ids, ["o2", "o1"]);
        assert_eq!(list.total_items, 2);
    }
}
