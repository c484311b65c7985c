//! API key secret type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An API key for authenticated requests.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key value.
    ///
    /// # Security
    ///
    /// Use only when constructing authorization headers or persisting the key.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Returns the key with everything but the last four characters masked.
    pub fn masked(&self) -> String {
        let tail: String = {
            let chars: Vec<char> = self.0.chars().collect();
            let start = chars.len().saturating_sub(4);
            chars[start..].iter().collect()
        };
        format!("********{}", tail)
    }
}

// Hide key value in Debug output
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_hides_value_in_debug() {
        let key = ApiKey::new("sk-very-secret-value");
        let debug = format!("{:?}", key);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn masked_shows_only_tail() {
        assert_eq!(ApiKey::new("abcdefgh1234").masked(), "********1234");
        assert_eq!(ApiKey::new("ab").masked(), "********ab");
    }

    #[test]
    fn whitespace_key_is_empty() {
        assert!(ApiKey::new("  ").is_empty());
        assert!(!ApiKey::new("k").is_empty());
    }
}
