//! Client configuration.
//!
//! Configuration is resolved once, when a client is built: an explicit value
//! wins, then the environment, then the built-in default. A missing API key
//! fails here, before any request is attempted.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::auth::{ApiKey, Handshake};
use crate::blocking::BlockingClient;
use crate::client::Client;
use crate::error::AuthenticationError;
use crate::types::ApiUrl;
use crate::Result;

/// Environment variable consulted when no API key is given explicitly.
pub const API_KEY_ENV: &str = "ANYTYPE_API_KEY";

/// Environment variable consulted when no base URL is given explicitly.
pub const BASE_URL_ENV: &str = "ANYTYPE_BASE_URL";

/// Wire-protocol version this client was built against.
///
/// Sent with every request; the server pins its behavior to it. Bump it
/// deliberately when targeting a new API version.
pub const API_VERSION: &str = "2025-05-20";

/// Header carrying [`API_VERSION`].
pub const VERSION_HEADER: &str = "x-anytype-version";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) type TransportHook =
    Arc<dyn Fn(reqwest::ClientBuilder) -> reqwest::ClientBuilder + Send + Sync>;

/// Builder for [`Client`], [`BlockingClient`] and [`Handshake`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use anytype::Client;
///
/// # fn example() -> Result<(), anytype::Error> {
/// let client = Client::builder()
///     .api_key("my-api-key")
///     .base_url("http://localhost:31009/v1")
///     .timeout(Duration::from_secs(10))
///     .transport(|http| http.danger_accept_invalid_certs(true))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default)]
pub struct ClientBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    transport: Option<TransportHook>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key. Falls back to `ANYTYPE_API_KEY` when not set.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(ApiKey::new(key));
        self
    }

    /// Set the base URL. Falls back to `ANYTYPE_BASE_URL`, then
    /// [`DEFAULT_BASE_URL`](crate::DEFAULT_BASE_URL).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the timeout applied to every request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Customize the underlying HTTP client builder.
    ///
    /// The closure runs each time the transport is (re)built, after the
    /// client's own defaults are applied. Use it for TLS verification,
    /// redirect policy, proxies and similar transport concerns.
    pub fn transport<F>(mut self, customize: F) -> Self
    where
        F: Fn(reqwest::ClientBuilder) -> reqwest::ClientBuilder + Send + Sync + 'static,
    {
        self.transport = Some(Arc::new(customize));
        self
    }

    /// Build an async client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`](crate::Error::Authentication) if no
    /// API key is available, or [`Error::Config`](crate::Error::Config) if the
    /// base URL or key is malformed.
    pub fn build(self) -> Result<Client> {
        Client::from_settings(self.settings(true)?)
    }

    /// Build a blocking client.
    pub fn build_blocking(self) -> Result<BlockingClient> {
        BlockingClient::from_client(self.build()?)
    }

    /// Build a client for the authentication handshake.
    ///
    /// The handshake is how an API key is obtained, so this is the one entry
    /// point that does not require one.
    pub fn build_handshake(self) -> Result<Handshake> {
        Handshake::from_settings(self.settings(false)?)
    }

    fn settings(self, require_key: bool) -> Result<Settings> {
        let api_key = if require_key {
            Some(resolve_api_key(
                self.api_key,
                std::env::var(API_KEY_ENV).ok(),
            )?)
        } else {
            None
        };

        let base_url = match self.base_url.or_else(|| std::env::var(BASE_URL_ENV).ok()) {
            Some(url) => ApiUrl::new(url)?,
            None => ApiUrl::default(),
        };

        Ok(Settings {
            base_url,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            api_key,
            transport: self.transport,
        })
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("api_key", &self.api_key)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("transport", &self.transport.as_ref().map(|_| "<customized>"))
            .finish()
    }
}

/// Fully resolved configuration.
#[derive(Clone)]
pub(crate) struct Settings {
    pub base_url: ApiUrl,
    pub timeout: Duration,
    pub api_key: Option<ApiKey>,
    pub transport: Option<TransportHook>,
}

/// Pick the explicit key, else the environment value. Blank keys count as absent.
pub(crate) fn resolve_api_key(
    explicit: Option<ApiKey>,
    env: Option<String>,
) -> std::result::Result<ApiKey, AuthenticationError> {
    explicit
        .filter(|key| !key.is_empty())
        .or_else(|| env.map(ApiKey::new).filter(|key| !key.is_empty()))
        .ok_or(AuthenticationError::MissingApiKey { var: API_KEY_ENV })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_key_wins_over_environment() {
        let key = resolve_api_key(Some(ApiKey::new("explicit")), Some("env".into())).unwrap();
        assert_eq!(key.expose(), "explicit");
    }

    #[test]
    fn environment_key_is_fallback() {
        let key = resolve_api_key(None, Some("env".into())).unwrap();
        assert_eq!(key.expose(), "env");
    }

    #[test]
    fn blank_explicit_key_falls_back_to_environment() {
        let key = resolve_api_key(Some(ApiKey::new("")), Some("env".into())).unwrap();
        assert_eq!(key.expose(), "env");
    }

    #[test]
    fn missing_key_is_an_authentication_error() {
        let err = resolve_api_key(None, None).unwrap_err();
        assert!(matches!(
            err,
            AuthenticationError::MissingApiKey { var } if var == API_KEY_ENV
        ));
        assert!(resolve_api_key(None, Some("   ".into())).is_err());
    }

    #[test]
    fn invalid_base_url_fails_at_build_time() {
        let err = ClientBuilder::new()
            .api_key("key")
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn builder_debug_redacts_key() {
        let builder = ClientBuilder::new().api_key("super-secret");
        let debug = format!("{:?}", builder);
        assert!(!debug.contains("super-secret"));
    }
}
