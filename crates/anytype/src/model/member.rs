//! Space members.

use serde::{Deserialize, Serialize};

use super::Meta;
use super::common::impl_entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Owner,
    Admin,
    Editor,
    Viewer,
}

/// A member of a space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    #[serde(flatten)]
    pub meta: Meta,
    pub name: String,
    /// Network identity.
    #[serde(default)]
    pub identity: Option<String>,
    /// Global name such as `someone.any`.
    #[serde(default)]
    pub global_name: Option<String>,
    pub role: MemberRole,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "active".to_string()
}

impl_entity!(Member);

impl Member {
    /// The global name, if it looks like an email address.
    ///
    /// Client-side inference; the API has no email field.
    pub fn email(&self) -> Option<&str> {
        self.global_name.as_deref().filter(|name| name.contains('@'))
    }

    pub fn avatar(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

/// Payload for inviting a member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberInvite {
    pub email: String,
    pub role: MemberRole,
}

impl MemberInvite {
    pub fn new(email: impl Into<String>, role: MemberRole) -> Self {
        Self {
            email: email.into(),
            role,
        }
    }
}

/// Partial update of a member.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MemberUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<MemberRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
