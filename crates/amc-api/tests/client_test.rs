#![allow(clippy::unwrap_used)]
// Integration tests for the service clients using wiremock.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use amc_api::types::{DeleteCbsdRequest, RequestPayload};
use amc_api::{ActiveModeClient, Error, RadioControllerClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn radio_controller() -> (MockServer, RadioControllerClient) {
    let server = MockServer::start().await;
    let client = RadioControllerClient::with_client(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

async fn active_mode() -> (MockServer, ActiveModeClient) {
    let server = MockServer::start().await;
    let client = ActiveModeClient::with_client(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

// ── Radio controller ────────────────────────────────────────────────

#[tokio::test]
async fn test_upload_requests() {
    let (server, client) = radio_controller().await;
    let payload = r#"{"deregistrationRequest":[{"cbsdId":"some_cbsd_id"}]}"#;

    Mock::given(method("POST"))
        .and(path("/requests"))
        .and(body_json(json!({ "payload": payload })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ids": [7] })))
        .expect(1)
        .mount(&server)
        .await;

    let ids = client
        .upload_requests(&RequestPayload {
            payload: payload.into(),
        })
        .await
        .unwrap();

    assert_eq!(ids.ids, vec![7]);
}

#[tokio::test]
async fn test_upload_requests_server_error() {
    let (server, client) = radio_controller().await;

    Mock::given(method("POST"))
        .and(path("/requests"))
        .respond_with(ResponseTemplate::new(503).set_body_string("database unavailable"))
        .mount(&server)
        .await;

    let result = client
        .upload_requests(&RequestPayload {
            payload: "{}".into(),
        })
        .await;

    let err = result.unwrap_err();
    assert!(err.is_transient());
    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 503);
            assert!(message.contains("database unavailable"), "got: {message}");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_upload_requests_bad_body() {
    let (server, client) = radio_controller().await;

    Mock::given(method("POST"))
        .and(path("/requests"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = client
        .upload_requests(&RequestPayload {
            payload: "{}".into(),
        })
        .await;

    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}

// ── Active mode ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_state() {
    let (server, client) = active_mode().await;

    let body = json!({
        "activeModeConfigs": [{
            "desiredState": "registered",
            "cbsd": {
                "id": "some_cbsd_id",
                "state": "registered",
                "lastSeenTimestamp": 1000,
                "grants": [{ "id": "some_grant_id", "state": "granted" }],
                "eirpCapabilities": {
                    "minPower": 0.0,
                    "maxPower": 100.0,
                    "antennaGain": 0.0,
                    "numberOfPorts": 1
                }
            }
        }]
    });

    Mock::given(method("GET"))
        .and(path("/state"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let state = client.get_state().await.unwrap();

    assert_eq!(state.active_mode_configs.len(), 1);
    let cbsd = state.active_mode_configs[0].cbsd.as_ref().unwrap();
    assert_eq!(cbsd.id, "some_cbsd_id");
    assert_eq!(cbsd.last_seen_timestamp, 1000);
    assert_eq!(cbsd.grants[0].state, "granted");
    assert_eq!(cbsd.eirp_capabilities.unwrap().number_of_ports, 1);
}

#[tokio::test]
async fn test_delete_cbsd() {
    let (server, client) = active_mode().await;

    Mock::given(method("POST"))
        .and(path("/cbsds/delete"))
        .and(body_json(json!({ "serialNumber": "some_serial_number" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client
        .delete_cbsd(&DeleteCbsdRequest {
            serial_number: "some_serial_number".into(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_cbsd_not_found() {
    let (server, client) = active_mode().await;

    Mock::given(method("POST"))
        .and(path("/cbsds/delete"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such cbsd"))
        .mount(&server)
        .await;

    let result = client
        .delete_cbsd(&DeleteCbsdRequest {
            serial_number: "missing".into(),
        })
        .await;

    match result {
        Err(ref err) if err.is_not_found() => {}
        other => panic!("expected not-found error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_base_url_with_path_prefix() {
    let server = MockServer::start().await;
    let client = ActiveModeClient::with_client(
        &format!("{}/dp/v1", server.uri()),
        reqwest::Client::new(),
    )
    .unwrap();

    Mock::given(method("GET"))
        .and(path("/dp/v1/state"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let state = client.get_state().await.unwrap();
    assert!(state.active_mode_configs.is_empty());
}
