//! Blocking client tests.
//!
//! The blocking client owns its own runtime, so the mock server runs on a
//! separate one and the client is driven from plain test threads.

use anytype::{ApiErrorKind, BlockingClient, SearchQuery, TagCreate};
use serde_json::json;
use tokio::runtime::Runtime;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Field order matters: the server is dropped (and verified) first.
struct Harness {
    server: MockServer,
    runtime: Runtime,
}

impl Harness {
    fn start() -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    fn client(&self) -> BlockingClient {
        BlockingClient::builder()
            .api_key("test-key")
            .base_url(format!("{}/v1", self.server.uri()))
            .build_blocking()
            .unwrap()
    }
}

#[test]
fn test_blocking_list_and_get() {
    let harness = Harness::start();

    harness.mount(
        Mock::given(method("GET"))
            .and(path("/v1/spaces"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{
                    "id": "s1",
                    "name": "Personal",
                    "gateway_url": "http://127.0.0.1:47800",
                    "network_id": "N1"
                }]
            }))),
    );

    harness.mount(
        Mock::given(method("GET"))
            .and(path("/v1/spaces/s1/objects/missing"))
            .respond_with(ResponseTemplate::new(404)),
    );

    let client = harness.client();
    assert!(client.is_connected());

    let spaces = client.spaces().list(None).unwrap();
    assert_eq!(spaces[0].name, "Personal");

    let err = client.objects("s1").get("missing").unwrap_err();
    assert_eq!(err.api_kind(), Some(ApiErrorKind::NotFound));
}

#[test]
fn test_blocking_create_and_search() {
    let harness = Harness::start();

    harness.mount(
        Mock::given(method("POST"))
            .and(path("/v1/spaces/s1/tags"))
            .and(body_json(json!({"name": "Test", "space_id": "s1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tag": {"id": "t1", "name": "Test"}
            }))),
    );

    harness.mount(
        Mock::given(method("POST"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []}))),
    );

    let client = harness.client();

    let tag = client.tags("s1").create(&TagCreate::new("Test")).unwrap();
    assert_eq!(tag.meta.id, "t1");

    let hits = client.search(&SearchQuery::text("anything")).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn test_blocking_close_then_reuse() {
    let harness = Harness::start();

    harness.mount(
        Mock::given(method("DELETE"))
            .and(path("/v1/tags/t1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(2),
    );

    let client = harness.client();
    assert!(client.tags("s1").delete("t1").unwrap());

    client.close();
    assert!(!client.is_connected());

    assert!(client.tags("s1").delete("t1").unwrap());
    assert!(client.is_connected());
}

#[test]
fn test_blocking_handshake() {
    let harness = Harness::start();

    harness.mount(
        Mock::given(method("POST"))
            .and(path("/v1/auth/challenges"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "challenge_id": "ch1",
                "expires_at": "2025-05-20T10:05:00Z"
            }))),
    );

    let client = harness.client();
    let challenge = client.auth().create_challenge("cli").unwrap();
    assert_eq!(challenge.challenge_id, "ch1");
    assert!(challenge.expires_at.is_some());
}
