//! anytype - Client for the Anytype local HTTP API
//!
//! Typed access to spaces, objects, types, lists, members, properties, tags
//! and templates, plus global search and the API-key handshake. The same
//! operations are available through the async [`Client`] and the
//! [`BlockingClient`].
//!
//! # Example
//!
//! ```no_run
//! use anytype::{Client, ObjectCreate, Pagination, SearchQuery};
//!
//! # async fn example() -> Result<(), anytype::Error> {
//! let client = Client::builder().api_key("my-api-key").build()?;
//!
//! let spaces = client.spaces().list(None).await?;
//! let space_id = &spaces[0].meta.id;
//!
//! let objects = client.objects(space_id);
//! let note = objects.create(&ObjectCreate::new("Standup", "page").body("# Notes")).await?;
//! let page = objects.list(Some(&Pagination::new(50, 0))).await?;
//!
//! let hits = client.search(&SearchQuery::text("standup").space(space_id.as_str())).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Every call returns [`Result`]. Failures from the API are [`ApiError`]s;
//! branch on [`ApiErrorKind`] rather than on messages:
//!
//! ```no_run
//! use anytype::{ApiErrorKind, Client};
//!
//! # async fn example(client: Client) -> Result<(), anytype::Error> {
//! match client.spaces().get("missing").await {
//!     Ok(space) => println!("{}", space.name),
//!     Err(e) if e.api_kind() == Some(ApiErrorKind::NotFound) => println!("no such space"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod blocking;
pub mod client;
pub mod config;
pub mod error;
mod http;
pub mod model;
pub mod resource;
pub mod types;

// Re-export primary types at crate root for convenience
pub use auth::{ApiKey, ApiKeyGrant, Auth, AuthChallenge, Handshake};
pub use blocking::{BlockingAuth, BlockingClient, BlockingResource};
pub use client::Client;
pub use config::{API_VERSION, ClientBuilder};
pub use error::{ApiError, ApiErrorKind, Error, RawResponse};
pub use http::Envelope;
pub use model::*;
pub use resource::{Kind, Mutable, Resource};
pub use types::{ApiUrl, DEFAULT_BASE_URL};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
