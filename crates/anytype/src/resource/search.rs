//! Global search.

use tracing::{debug, instrument};

use crate::Result;
use crate::http::{Call, Envelope, Transport, decode_many, static_path};
use crate::model::{Object, SearchQuery};

const SEARCH_PATH: &str = "search";

/// Search responses have their own envelope table.
const SEARCH_ENVELOPES: &[Envelope] = &[
    Envelope::Key("results"),
    Envelope::Key("data"),
    Envelope::Key("objects"),
];

#[instrument(skip(transport, query), fields(space_id = ?query.space_id))]
pub(crate) async fn search(transport: &Transport, query: &SearchQuery) -> Result<Vec<Object>> {
    debug!("Searching");
    let call = Call::post(static_path(SEARCH_PATH)).json(query)?;
    let response = transport.send_json(call).await?;
    decode_many(response, SEARCH_ENVELOPES, "search result")
}
