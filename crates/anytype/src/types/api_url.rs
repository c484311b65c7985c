//! API base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{ConfigError, Error};

/// Base URL of a locally running Anytype API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:31009/v1/";

/// A validated API base URL.
///
/// The path is normalized once, at construction, to end in exactly one `/`,
/// so endpoint paths can be appended without separator bookkeeping.
///
/// # Example
///
/// ```
/// use anytype::ApiUrl;
///
/// let base = ApiUrl::new("http://localhost:31009/v1").unwrap();
/// assert_eq!(base.as_str(), "http://localhost:31009/v1/");
/// assert_eq!(
///     base.endpoint(["spaces", "abc", "objects"]).as_str(),
///     "http://localhost:31009/v1/spaces/abc/objects"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new base URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not an absolute `http`/`https` URL.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let mut url = Url::parse(s).map_err(|e| ConfigError::BaseUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        let path = format!("{}/", url.path().trim_end_matches('/'));
        url.set_path(&path);

        Ok(Self(url))
    }

    /// Returns the URL for an endpoint given as path segments.
    ///
    /// Each segment is percent-encoded, so identifiers containing `/` or `?`
    /// stay a single segment.
    pub fn endpoint<I>(&self, segments: I) -> Url
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.0.clone();
        // validate() rejects cannot-be-a-base URLs, so this always succeeds
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Returns the base URL as a string (always ending in `/`).
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(ConfigError::BaseUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::BaseUrl {
                value: original.to_string(),
                reason: "must use http or https".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(ConfigError::BaseUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for ApiUrl {
    fn default() -> Self {
        Self(Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"))
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_api() {
        let base = ApiUrl::default();
        assert_eq!(base.as_str(), DEFAULT_BASE_URL);
        assert_eq!(base.host(), Some("localhost"));
    }

    #[test]
    fn missing_trailing_slash_is_added() {
        let base = ApiUrl::new("http://localhost:31009/v1").unwrap();
        assert_eq!(base.as_str(), "http://localhost:31009/v1/");
    }

    #[test]
    fn doubled_trailing_slash_is_collapsed() {
        let base = ApiUrl::new("http://localhost:31009/v1//").unwrap();
        assert_eq!(base.as_str(), "http://localhost:31009/v1/");
    }

    #[test]
    fn root_url_keeps_single_slash() {
        let base = ApiUrl::new("https://api.example.com").unwrap();
        assert_eq!(base.as_str(), "https://api.example.com/");
        assert_eq!(
            base.endpoint(["spaces"]).as_str(),
            "https://api.example.com/spaces"
        );
    }

    #[test]
    fn endpoint_joins_segments() {
        for raw in [
            "http://localhost:31009/v1",
            "http://localhost:31009/v1/",
            "http://localhost:31009/v1//",
        ] {
            let base = ApiUrl::new(raw).unwrap();
            assert_eq!(
                base.endpoint(["spaces", "s1", "tags"]).as_str(),
                "http://localhost:31009/v1/spaces/s1/tags"
            );
        }
    }

    #[test]
    fn endpoint_encodes_segments() {
        let base = ApiUrl::default();
        let url = base.endpoint(["objects", "a/b?c"]);
        assert_eq!(url.path(), "/v1/objects/a%2Fb%3Fc");
        assert!(url.query().is_none());
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(ApiUrl::new("ftp://localhost/v1").is_err());
    }

    #[test]
    fn rejects_relative_url() {
        assert!(ApiUrl::new("/v1/spaces").is_err());
    }
}
