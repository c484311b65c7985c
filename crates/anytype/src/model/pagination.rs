//! Pagination parameters for list calls.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Pagination passed through as query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
    pub sort_by: Option<String>,
    pub sort_direction: SortDirection,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
            sort_by: None,
            sort_direction: SortDirection::Asc,
        }
    }
}

impl Pagination {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit,
            offset,
            ..Default::default()
        }
    }

    pub fn sort_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_by = Some(field.into());
        self.sort_direction = direction;
        self
    }

    /// Query parameters for this page. `sort_by` is omitted when unset.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("limit".to_string(), self.limit.to_string()),
            ("offset".to_string(), self.offset.to_string()),
        ];
        if let Some(sort_by) = &self.sort_by {
            query.push(("sort_by".to_string(), sort_by.clone()));
        }
        query.push((
            "sort_direction".to_string(),
            self.sort_direction.as_str().to_string(),
        ));
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query() {
        let query = Pagination::default().to_query();
        assert_eq!(
            query,
            vec![
                ("limit".to_string(), "20".to_string()),
                ("offset".to_string(), "0".to_string()),
                ("sort_direction".to_string(), "asc".to_string()),
            ]
        );
    }

    #[test]
    fn sorted_query() {
        let query = Pagination::new(5, 10)
            .sort_by("name", SortDirection::Desc)
            .to_query();
        assert!(query.contains(&("sort_by".to_string(), "name".to_string())));
        assert!(query.contains(&("sort_direction".to_string(), "desc".to_string())));
    }
}
