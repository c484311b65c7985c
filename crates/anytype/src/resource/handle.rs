//! Resource handle.

use std::fmt;
use std::marker::PhantomData;

use tracing::{debug, instrument};

use crate::Result;
use crate::http::{Call, Transport, decode_many, decode_one};
use crate::model::{Member, MemberInvite, Pagination};

use super::{Kind, Mutable};

/// Operations on one entity kind, optionally scoped to a space.
///
/// Obtained from [`Client`](crate::Client) accessors such as
/// [`Client::tags`](crate::Client::tags). Cheap to copy.
pub struct Resource<'a, K> {
    transport: &'a Transport,
    space_id: Option<&'a str>,
    _kind: PhantomData<fn() -> K>,
}

impl<K> Clone for Resource<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Resource<'_, K> {}

impl<K: Kind> fmt::Debug for Resource<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("kind", &K::NAME)
            .field("space_id", &self.space_id)
            .finish()
    }
}

impl<'a, K: Kind> Resource<'a, K> {
    pub(crate) fn new(transport: &'a Transport, space_id: Option<&'a str>) -> Self {
        Self {
            transport,
            space_id,
            _kind: PhantomData,
        }
    }

    /// The space this handle is scoped to, if any.
    pub fn space_id(&self) -> Option<&'a str> {
        self.space_id
    }

    /// List entities. An empty list is a valid result.
    #[instrument(skip(self, page), fields(kind = K::NAME, space_id = ?self.space_id))]
    pub async fn list(&self, page: Option<&Pagination>) -> Result<Vec<K>> {
        debug!("Listing");
        let query = page.map(Pagination::to_query).unwrap_or_default();
        let call = Call::get(K::ROUTES.collection_path(self.space_id)).query(query);

        let response = self.transport.send_json(call).await?;
        let items: Vec<K> = decode_many(response, K::LIST, K::NAME)?;
        Ok(items.into_iter().map(|item| self.scoped(item)).collect())
    }

    /// Fetch one entity.
    ///
    /// # Errors
    ///
    /// [`ApiErrorKind::NotFound`](crate::ApiErrorKind::NotFound) if the id
    /// does not exist in scope.
    #[instrument(skip(self), fields(kind = K::NAME, space_id = ?self.space_id))]
    pub async fn get(&self, id: &str) -> Result<K> {
        debug!("Fetching");
        let call = Call::get(K::ROUTES.item_path(self.space_id, id));
        let response = self.transport.send_json(call).await?;
        decode_one(response, K::SINGLE).map(|item| self.scoped(item))
    }

    fn scoped(&self, mut item: K) -> K {
        if let Some(space_id) = self.space_id {
            item.attach_scope(space_id);
        }
        item
    }
}

impl<K: Mutable> Resource<'_, K> {
    /// Create an entity and return it as the server stored it.
    ///
    /// Objects carry their space in the path only; other space-scoped kinds
    /// also send it as `space_id` in the body.
    #[instrument(skip(self, payload), fields(kind = K::NAME, space_id = ?self.space_id))]
    pub async fn create(&self, payload: &K::Create) -> Result<K> {
        debug!("Creating");
        let mut call = Call::post(K::ROUTES.collection_path(self.space_id)).json(payload)?;
        if let (true, Some(space_id)) = (K::BODY_SCOPE, self.space_id) {
            call = call.with_body_field("space_id", space_id);
        }
        let response = self.transport.send_json(call).await?;
        decode_one(response, K::SINGLE).map(|item| self.scoped(item))
    }

    /// Apply a partial update. Fields left unset in `patch` are not sent.
    #[instrument(skip(self, patch), fields(kind = K::NAME, space_id = ?self.space_id))]
    pub async fn update(&self, id: &str, patch: &K::Update) -> Result<K> {
        debug!("Updating");
        let call = Call::patch(K::ROUTES.item_path(self.space_id, id)).json(patch)?;
        let response = self.transport.send_json(call).await?;
        decode_one(response, K::SINGLE).map(|item| self.scoped(item))
    }

    /// Delete an entity. Returns `true` whenever the call does not fail.
    ///
    /// The server may archive instead of removing; a later `get` can still
    /// succeed with the archived flag set. Re-fetch if the distinction
    /// matters.
    #[instrument(skip(self), fields(kind = K::NAME, space_id = ?self.space_id))]
    pub async fn delete(&self, id: &str) -> Result<bool> {
        debug!("Deleting");
        let call = Call::delete(K::ROUTES.item_path(self.space_id, id));
        self.transport.send_no_content(call).await?;
        Ok(true)
    }
}

impl Resource<'_, Member> {
    /// Invite a member. The server may notify the invitee out of band.
    pub async fn invite(&self, invite: &MemberInvite) -> Result<Member> {
        self.create(invite).await
    }
}
