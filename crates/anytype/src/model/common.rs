//! Fields shared by every entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-assigned identity and bookkeeping fields.
///
/// Timestamps are whatever the server sent; nothing is filled in locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateTime<Utc>>,
    /// Owning space. Absent for spaces themselves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,
}

/// An entity with server-assigned identity.
pub trait Entity {
    fn meta(&self) -> &Meta;

    fn id(&self) -> &str {
        &self.meta().id
    }

    fn space_id(&self) -> Option<&str> {
        self.meta().space_id.as_deref()
    }
}

macro_rules! impl_entity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::model::Entity for $ty {
                fn meta(&self) -> &$crate::model::Meta {
                    &self.meta
                }
            }
        )+
    };
}

pub(crate) use impl_entity;
