//! Subcommand implementations.

pub mod auth;
pub mod objects;
pub mod search;
pub mod spaces;
pub mod tags;

use anyhow::{Context as _, Result, bail};
use anytype::{Client, Handshake};
use tracing::debug;

use crate::storage;

/// Connection settings shared by all commands.
#[derive(Debug)]
pub struct Context {
    base_url: Option<String>,
    api_key: Option<String>,
}

impl Context {
    pub fn new(base_url: Option<String>, api_key: Option<String>) -> Self {
        Self { base_url, api_key }
    }

    /// Build a client from the flag/environment key, else the stored key.
    pub fn client(&self) -> Result<Client> {
        let stored = storage::load().context("Failed to load stored API key")?;

        let (api_key, stored_url) = match (&self.api_key, stored) {
            (Some(key), _) => (key.clone(), None),
            (None, Some(stored)) => {
                debug!(app_name = %stored.app_name, "Using stored API key");
                (stored.api_key.expose().to_string(), Some(stored.base_url))
            }
            (None, None) => bail!(
                "No API key. Run 'anytype auth login', pass --api-key or set ANYTYPE_API_KEY."
            ),
        };

        let mut builder = Client::builder().api_key(api_key);
        if let Some(url) = self.base_url.clone().or(stored_url) {
            builder = builder.base_url(url);
        }

        builder.build().context("Failed to configure client")
    }

    pub fn handshake(&self) -> Result<Handshake> {
        let mut builder = Client::builder();
        if let Some(url) = &self.base_url {
            builder = builder.base_url(url.clone());
        }

        builder.build_handshake().context("Failed to configure client")
    }
}
