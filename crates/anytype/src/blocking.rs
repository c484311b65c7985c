//! Blocking client.
//!
//! Runs the async implementation on a private current-thread runtime, so
//! both calling conventions share every line of request and response
//! handling.
//!
//! Do not use a [`BlockingClient`] from inside an async runtime: blocking
//! on a runtime from within another one panics.

use std::fmt;
use std::future::Future;

use tokio::runtime::{Builder, Runtime};

use crate::Result;
use crate::auth::{ApiKeyGrant, AuthChallenge};
use crate::client::Client;
use crate::config::ClientBuilder;
use crate::error::ConfigError;
use crate::model::{
    List, Member, MemberInvite, Object, ObjectTypeDefinition, Pagination, Property, SearchQuery,
    Space, Tag, Template,
};
use crate::resource::{Kind, Mutable, Resource};
use crate::types::ApiUrl;

/// Blocking counterpart of [`Client`].
///
/// The transport is created eagerly at construction.
///
/// ```no_run
/// # fn example() -> Result<(), anytype::Error> {
/// let client = anytype::BlockingClient::from_env()?;
/// for space in client.spaces().list(None)? {
///     println!("{}", space.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct BlockingClient {
    runtime: Runtime,
    client: Client,
}

impl BlockingClient {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new().api_key(api_key).build_blocking()
    }

    pub fn from_env() -> Result<Self> {
        ClientBuilder::new().build_blocking()
    }

    pub(crate) fn from_client(client: Client) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ConfigError::Transport {
                message: format!("failed to start runtime: {}", e),
            })?;
        client.connect()?;
        Ok(Self { runtime, client })
    }

    /// The async client this wraps.
    pub fn as_async(&self) -> &Client {
        &self.client
    }

    pub fn base_url(&self) -> &ApiUrl {
        self.client.base_url()
    }

    pub fn connect(&self) -> Result<()> {
        self.client.connect()
    }

    /// Release the HTTP connection pool. The next request creates a new one.
    pub fn close(&self) {
        self.client.close();
    }

    pub fn is_connected(&self) -> bool {
        self.client.is_connected()
    }

    pub fn spaces(&self) -> BlockingResource<'_, Space> {
        self.wrap(self.client.spaces())
    }

    pub fn objects<'a>(&'a self, space_id: &'a str) -> BlockingResource<'a, Object> {
        self.wrap(self.client.objects(space_id))
    }

    pub fn types<'a>(&'a self, space_id: &'a str) -> BlockingResource<'a, ObjectTypeDefinition> {
        self.wrap(self.client.types(space_id))
    }

    pub fn lists<'a>(&'a self, space_id: &'a str) -> BlockingResource<'a, List> {
        self.wrap(self.client.lists(space_id))
    }

    pub fn members<'a>(&'a self, space_id: &'a str) -> BlockingResource<'a, Member> {
        self.wrap(self.client.members(space_id))
    }

    pub fn properties<'a>(&'a self, space_id: &'a str) -> BlockingResource<'a, Property> {
        self.wrap(self.client.properties(space_id))
    }

    pub fn tags<'a>(&'a self, space_id: &'a str) -> BlockingResource<'a, Tag> {
        self.wrap(self.client.tags(space_id))
    }

    pub fn templates<'a>(&'a self, space_id: &'a str) -> BlockingResource<'a, Template> {
        self.wrap(self.client.templates(space_id))
    }

    pub fn search(&self, query: &SearchQuery) -> Result<Vec<Object>> {
        self.block_on(self.client.search(query))
    }

    pub fn auth(&self) -> BlockingAuth<'_> {
        BlockingAuth { client: self }
    }

    fn wrap<'a, K: Kind>(&'a self, inner: Resource<'a, K>) -> BlockingResource<'a, K> {
        BlockingResource {
            runtime: &self.runtime,
            inner,
        }
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}

impl fmt::Debug for BlockingClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockingClient")
            .field("client", &self.client)
            .finish()
    }
}

/// Blocking counterpart of [`Resource`].
pub struct BlockingResource<'a, K> {
    runtime: &'a Runtime,
    inner: Resource<'a, K>,
}

impl<K: Kind> BlockingResource<'_, K> {
    pub fn space_id(&self) -> Option<&str> {
        self.inner.space_id()
    }

    pub fn list(&self, page: Option<&Pagination>) -> Result<Vec<K>> {
        self.runtime.block_on(self.inner.list(page))
    }

    pub fn get(&self, id: &str) -> Result<K> {
        self.runtime.block_on(self.inner.get(id))
    }
}

impl<K: Mutable> BlockingResource<'_, K> {
    pub fn create(&self, payload: &K::Create) -> Result<K> {
        self.runtime.block_on(self.inner.create(payload))
    }

    pub fn update(&self, id: &str, patch: &K::Update) -> Result<K> {
        self.runtime.block_on(self.inner.update(id, patch))
    }

    /// See [`Resource::delete`].
    pub fn delete(&self, id: &str) -> Result<bool> {
        self.runtime.block_on(self.inner.delete(id))
    }
}

impl BlockingResource<'_, Member> {
    pub fn invite(&self, invite: &MemberInvite) -> Result<Member> {
        self.runtime.block_on(self.inner.invite(invite))
    }
}

/// Blocking counterpart of [`Auth`](crate::Auth).
pub struct BlockingAuth<'a> {
    client: &'a BlockingClient,
}

impl BlockingAuth<'_> {
    pub fn create_challenge(&self, app_name: &str) -> Result<AuthChallenge> {
        self.client
            .block_on(self.client.client.auth().create_challenge(app_name))
    }

    pub fn exchange_challenge(&self, challenge_id: &str, code: &str) -> Result<ApiKeyGrant> {
        self.client.block_on(
            self.client
                .client
                .auth()
                .exchange_challenge(challenge_id, code),
        )
    }
}
