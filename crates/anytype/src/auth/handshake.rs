//! Challenge handshake.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::Result;
use crate::config::{ClientBuilder, Settings};
use crate::http::{Call, Envelope, Transport, decode_one, static_path};
use crate::types::ApiUrl;

use super::ApiKey;

const CREATE_CHALLENGE: &str = "auth/challenges";
const CREATE_API_KEY: &str = "auth/api_keys";

const BARE: &[Envelope] = &[Envelope::Bare];

/// A pending challenge. Only meaningful during the handshake.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthChallenge {
    pub challenge_id: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// The key issued at the end of the handshake.
///
/// The client does not store it; keeping it is up to the caller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiKeyGrant {
    #[serde(alias = "api_key")]
    pub key: ApiKey,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_used_at: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
struct CreateChallengeRequest<'a> {
    app_name: &'a str,
}

#[derive(Serialize)]
struct CreateApiKeyRequest<'a> {
    challenge_id: &'a str,
    code: &'a str,
}

/// Handshake operations over a borrowed transport.
#[derive(Clone, Copy)]
pub struct Auth<'a> {
    transport: &'a Transport,
}

impl<'a> Auth<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Start the handshake for `app_name`.
    #[instrument(skip(self))]
    pub async fn create_challenge(&self, app_name: &str) -> Result<AuthChallenge> {
        debug!("Creating auth challenge");
        let call = Call::post(static_path(CREATE_CHALLENGE))
            .json(&CreateChallengeRequest { app_name })?;
        let response = self.transport.send_json(call).await?;
        decode_one(response, BARE)
    }

    /// Finish the handshake with the code shown by the desktop app.
    #[instrument(skip(self, code))]
    pub async fn exchange_challenge(&self, challenge_id: &str, code: &str) -> Result<ApiKeyGrant> {
        debug!("Exchanging auth challenge");
        let call = Call::post(static_path(CREATE_API_KEY))
            .json(&CreateApiKeyRequest { challenge_id, code })?;
        let response = self.transport.send_json(call).await?;
        decode_one(response, BARE)
    }
}

/// A client for the handshake only.
///
/// Unlike [`Client`](crate::Client) it needs no API key and sends no
/// `Authorization` header, since obtaining a key is its purpose.
///
/// ```no_run
/// # async fn example() -> Result<(), anytype::Error> {
/// let handshake = anytype::Handshake::new()?;
/// let challenge = handshake.create_challenge("my-app").await?;
/// let code = "1234"; // shown by the desktop app
/// let grant = handshake.exchange_challenge(&challenge.challenge_id, code).await?;
/// let client = anytype::Client::new(grant.key.expose())?;
/// # Ok(())
/// # }
/// ```
pub struct Handshake {
    transport: Transport,
}

impl Handshake {
    /// Handshake against the default (or `ANYTYPE_BASE_URL`) base URL.
    pub fn new() -> Result<Self> {
        ClientBuilder::new().build_handshake()
    }

    pub(crate) fn from_settings(settings: Settings) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(settings)?,
        })
    }

    pub fn base_url(&self) -> &ApiUrl {
        self.transport.base_url()
    }

    pub fn auth(&self) -> Auth<'_> {
        Auth::new(&self.transport)
    }

    pub async fn create_challenge(&self, app_name: &str) -> Result<AuthChallenge> {
        self.auth().create_challenge(app_name).await
    }

    pub async fn exchange_challenge(&self, challenge_id: &str, code: &str) -> Result<ApiKeyGrant> {
        self.auth().exchange_challenge(challenge_id, code).await
    }

    /// Release the HTTP connection pool.
    pub fn close(&self) {
        self.transport.close();
    }
}

impl std::fmt::Debug for Handshake {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handshake")
            .field("base_url", self.transport.base_url())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn grant_accepts_either_key_field() {
        let grant: ApiKeyGrant = serde_json::from_value(json!({"key": "k1", "name": "cli"})).unwrap();
        assert_eq!(grant.key.expose(), "k1");

        let grant: ApiKeyGrant = serde_json::from_value(json!({"api_key": "k2"})).unwrap();
        assert_eq!(grant.key.expose(), "k2");
        assert!(grant.created_at.is_none());
    }

    #[test]
    fn grant_debug_hides_key() {
        let grant: ApiKeyGrant = serde_json::from_value(json!({"api_key": "secret-key"})).unwrap();
        assert!(!format!("{:?}", grant).contains("secret-key"));
    }
}
