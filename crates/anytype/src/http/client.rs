//! HTTP transport implementation.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, instrument, trace};

use crate::auth::ApiKey;
use crate::config::{API_VERSION, Settings, VERSION_HEADER};
use crate::error::{ApiError, ConfigError, ParseError, RawResponse};
use crate::types::ApiUrl;
use crate::Result;

use super::Call;

/// A successful response with a JSON body.
#[derive(Debug)]
pub(crate) struct JsonResponse {
    pub raw: RawResponse,
    pub body: Value,
}

/// HTTP transport shared by every resource accessor of a client.
///
/// The underlying `reqwest::Client` is created on first use (or by
/// [`connect`](Self::connect)) and dropped by [`close`](Self::close). A
/// closed transport transparently reconnects on the next request.
pub(crate) struct Transport {
    settings: Settings,
    headers: HeaderMap,
    handle: Mutex<Option<reqwest::Client>>,
}

impl Transport {
    pub(crate) fn new(settings: Settings) -> Result<Self> {
        let headers = default_headers(settings.api_key.as_ref())?;
        Ok(Self {
            settings,
            headers,
            handle: Mutex::new(None),
        })
    }

    pub(crate) fn base_url(&self) -> &ApiUrl {
        &self.settings.base_url
    }

    pub(crate) fn timeout(&self) -> Duration {
        self.settings.timeout
    }

    /// Build the HTTP client now instead of on first request.
    pub(crate) fn connect(&self) -> Result<()> {
        self.handle().map(|_| ())
    }

    /// Drop the HTTP client and its connection pool.
    pub(crate) fn close(&self) {
        if self.lock().take().is_some() {
            debug!(base_url = %self.settings.base_url, "Transport closed");
        }
    }

    pub(crate) fn is_connected(&self) -> bool {
        self.lock().is_some()
    }

    /// Send a request and parse the JSON response body.
    #[instrument(skip(self, call), fields(method = %call.method, path = %call.display_path()))]
    pub(crate) async fn send_json(&self, call: Call) -> Result<JsonResponse> {
        let raw = self.execute(call).await?;
        if !raw.is_success() {
            return Err(ApiError::from_response(raw).into());
        }

        match serde_json::from_str(raw.body()) {
            Ok(body) => Ok(JsonResponse { raw, body }),
            Err(source) => Err(ParseError {
                source,
                response: raw,
            }
            .into()),
        }
    }

    /// Send a request whose response body is ignored.
    #[instrument(skip(self, call), fields(method = %call.method, path = %call.display_path()))]
    pub(crate) async fn send_no_content(&self, call: Call) -> Result<()> {
        let raw = self.execute(call).await?;
        if !raw.is_success() {
            return Err(ApiError::from_response(raw).into());
        }
        Ok(())
    }

    async fn execute(&self, call: Call) -> Result<RawResponse> {
        let client = self.handle()?;
        let url = self.settings.base_url.endpoint(&call.path);
        debug!(%url, "API request");
        trace!(query = ?call.query, body = ?call.body, "request payload");

        let mut request = client.request(call.method, url);
        if !call.query.is_empty() {
            request = request.query(&call.query);
        }
        if let Some(body) = &call.body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;
        trace!(status = status.as_u16(), bytes = body.len(), "API response");

        Ok(RawResponse::new(status.as_u16(), headers, body))
    }

    fn lock(&self) -> MutexGuard<'_, Option<reqwest::Client>> {
        self.handle.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn handle(&self) -> Result<reqwest::Client> {
        let mut handle = self.lock();
        if let Some(client) = handle.as_ref() {
            return Ok(client.clone());
        }

        let client = self.build_client()?;
        debug!(base_url = %self.settings.base_url, "Transport connected");
        *handle = Some(client.clone());
        Ok(client)
    }

    fn build_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("anytype-rs/", env!("CARGO_PKG_VERSION")))
            .default_headers(self.headers.clone())
            .timeout(self.settings.timeout);

        if let Some(customize) = &self.settings.transport {
            builder = customize(builder);
        }

        builder.build().map_err(|e| {
            ConfigError::Transport {
                message: e.to_string(),
            }
            .into()
        })
    }
}

fn default_headers(api_key: Option<&ApiKey>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    if let Some(key) = api_key {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", key.expose()))
            .map_err(|_| ConfigError::InvalidApiKey)?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(VERSION_HEADER, HeaderValue::from_static(API_VERSION));

    Ok(headers)
}
