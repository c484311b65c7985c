//! Async client.

use std::fmt;
use std::sync::Arc;

use tracing::instrument;

use crate::Result;
use crate::auth::Auth;
use crate::config::{ClientBuilder, Settings};
use crate::http::Transport;
use crate::model::{
    List, Member, Object, ObjectTypeDefinition, Property, SearchQuery, Space, Tag, Template,
};
use crate::resource::{self, Resource};
use crate::types::ApiUrl;

/// Client for the Anytype API.
///
/// Cloning is cheap; clones share one transport. Calls issued concurrently
/// are independent: one failing does not affect the others.
///
/// ```no_run
/// use anytype::{Client, TagColor, TagCreate};
///
/// # async fn example() -> Result<(), anytype::Error> {
/// let client = Client::from_env()?;
/// for space in client.spaces().list(None).await? {
///     println!("{} {}", space.meta.id, space.name);
/// }
///
/// let tags = client.tags("space-id");
/// let tag = tags.create(&TagCreate::new("urgent").color(TagColor::Red)).await?;
/// tags.delete(&tag.meta.id).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    transport: Arc<Transport>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Client with an explicit API key and default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new().api_key(api_key).build()
    }

    /// Client with the API key taken from `ANYTYPE_API_KEY`.
    ///
    /// # Errors
    ///
    /// [`Error::Authentication`](crate::Error::Authentication) if the variable
    /// is unset or blank.
    pub fn from_env() -> Result<Self> {
        ClientBuilder::new().build()
    }

    pub(crate) fn from_settings(settings: Settings) -> Result<Self> {
        Ok(Self {
            transport: Arc::new(Transport::new(settings)?),
        })
    }

    pub fn base_url(&self) -> &ApiUrl {
        self.transport.base_url()
    }

    /// Create the HTTP connection pool now rather than on first request.
    pub fn connect(&self) -> Result<()> {
        self.transport.connect()
    }

    /// Release the HTTP connection pool. The next request creates a new one.
    pub fn close(&self) {
        self.transport.close();
    }

    pub fn is_connected(&self) -> bool {
        self.transport.is_connected()
    }

    pub fn spaces(&self) -> Resource<'_, Space> {
        Resource::new(&self.transport, None)
    }

    pub fn objects<'a>(&'a self, space_id: &'a str) -> Resource<'a, Object> {
        Resource::new(&self.transport, Some(space_id))
    }

    /// Type definitions in a space. Read-only.
    pub fn types<'a>(&'a self, space_id: &'a str) -> Resource<'a, ObjectTypeDefinition> {
        Resource::new(&self.transport, Some(space_id))
    }

    pub fn lists<'a>(&'a self, space_id: &'a str) -> Resource<'a, List> {
        Resource::new(&self.transport, Some(space_id))
    }

    pub fn members<'a>(&'a self, space_id: &'a str) -> Resource<'a, Member> {
        Resource::new(&self.transport, Some(space_id))
    }

    pub fn properties<'a>(&'a self, space_id: &'a str) -> Resource<'a, Property> {
        Resource::new(&self.transport, Some(space_id))
    }

    pub fn tags<'a>(&'a self, space_id: &'a str) -> Resource<'a, Tag> {
        Resource::new(&self.transport, Some(space_id))
    }

    pub fn templates<'a>(&'a self, space_id: &'a str) -> Resource<'a, Template> {
        Resource::new(&self.transport, Some(space_id))
    }

    /// Search objects across all accessible spaces.
    ///
    /// Use [`SearchQuery::space`] to restrict results to one space.
    #[instrument(skip(self, query))]
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Object>> {
        resource::search(&self.transport, query).await
    }

    /// The challenge handshake, sent with this client's key.
    ///
    /// To obtain a first key use [`Handshake`](crate::Handshake) instead.
    pub fn auth(&self) -> Auth<'_> {
        Auth::new(&self.transport)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", self.transport.base_url())
            .field("timeout", &self.transport.timeout())
            .field("connected", &self.transport.is_connected())
            .finish()
    }
}
