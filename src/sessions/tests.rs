use crate::http::tests::test_server;
use crate::map::consts::{DETAIL_ZOOM, OVERVIEW_ZOOM};
use crate::sessions::models::{Session, ViewState, ViewStateError};
use crate::storage::consts::SESSION_ID_LENGTH;
use axum_test::TestServer;
use serde_json::{json, Value};

async fn create_session(server: &TestServer) -> String {
    let response = server.post("/sessions").await;
    response.assert_status_ok();
    let body: Value = response.json();
    body["sessionId"]
        .as_str()
        .expect("No session id in the response.")
        .to_string()
}

async fn generate_locations(server: &TestServer, session_id: &str, quantity: i64) -> Vec<Value> {
    let response = server
        .post(&format!("/sessions/{session_id}/generate"))
        .json(&json!({"quantity": quantity}))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["error"], false);
    body["locations"]
        .as_array()
        .expect("No locations in the response.")
        .clone()
}

#[test]
fn test_select_then_close_detail_restores_the_list() {
    let mut session = Session::new();
    session.regenerate(3);
    let locations_before = session.locations.clone();

    let selected = session.select(1).expect("Selection was rejected.");

    assert_eq!(selected, locations_before[1]);
    assert_eq!(session.view, ViewState::DetailShown { selected_index: 1 });

    session
        .close_detail()
        .expect("Closing the detail view was rejected.");

    assert_eq!(session.view, ViewState::ListShown);
    assert_eq!(session.locations, locations_before);
}

#[test]
fn test_transitions_rejected_before_any_generation() {
    let mut session = Session::new();

    assert_eq!(session.select(0), Err(ViewStateError::NothingGenerated));
    assert_eq!(session.show_all(), Err(ViewStateError::NothingGenerated));
    assert_eq!(session.close_detail(), Err(ViewStateError::DetailNotOpen));
    assert_eq!(session.close_all(), Err(ViewStateError::OverviewNotOpen));
    assert_eq!(session.view, ViewState::Idle);
}

#[test]
fn test_regenerate_clears_an_open_overlay() {
    let mut session = Session::new();
    session.regenerate(2);
    session.select(0).expect("Selection was rejected.");

    session.regenerate(5);

    assert_eq!(session.view, ViewState::ListShown);
    assert_eq!(session.locations.len(), 5);
}

#[tokio::test]
async fn test_create_session() {
    let server = test_server();

    let session_id = create_session(&server).await;

    assert_eq!(session_id.len(), SESSION_ID_LENGTH);
    assert!(session_id
        .chars()
        .all(|symbol| symbol.is_ascii_alphanumeric()));
}

#[tokio::test]
async fn test_fresh_session_is_idle() {
    let server = test_server();
    let session_id = create_session(&server).await;

    let response = server.get(&format!("/sessions/{session_id}/view")).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["error"], false);
    assert_eq!(body["view"], "idle");
    assert_eq!(body["locations"], json!([]));
}

#[tokio::test]
async fn test_generate_select_close_roundtrip() {
    let server = test_server();
    let session_id = create_session(&server).await;
    let locations = generate_locations(&server, &session_id, 3).await;
    assert_eq!(locations.len(), 3);

    let response = server
        .post(&format!("/sessions/{session_id}/select"))
        .json(&json!({"index": 1}))
        .await;
    response.assert_status_ok();
    let selected: Value = response.json();
    assert_eq!(selected["error"], false);
    assert_eq!(selected["detail"]["location"], locations[1]);
    assert_eq!(selected["detail"]["viewport"]["center"], locations[1]);
    assert_eq!(selected["detail"]["viewport"]["zoom"], DETAIL_ZOOM);
    assert_eq!(selected["detail"]["marker"]["position"], locations[1]);
    let external_url = selected["detail"]["externalUrl"]
        .as_str()
        .expect("No external URL in the response.");
    assert!(external_url.starts_with("https://www.google.com/maps?q="));

    let response = server.get(&format!("/sessions/{session_id}/view")).await;
    let body: Value = response.json();
    assert_eq!(body["view"]["detailShown"]["selectedIndex"], 1);

    let response = server
        .post(&format!("/sessions/{session_id}/close-detail"))
        .await;
    response.assert_status_ok();
    let closed: Value = response.json();
    assert_eq!(closed["error"], false);
    assert_eq!(closed["view"], "listShown");
    assert_eq!(
        closed["locations"]
            .as_array()
            .expect("No locations in the response."),
        &locations,
    );
}

#[tokio::test]
async fn test_generate_replaces_the_list_wholesale() {
    let server = test_server();
    let session_id = create_session(&server).await;
    let first_batch = generate_locations(&server, &session_id, 2).await;

    let second_batch = generate_locations(&server, &session_id, 3).await;

    assert_eq!(second_batch.len(), 3);
    assert_ne!(first_batch, second_batch);

    let response = server.get(&format!("/sessions/{session_id}/view")).await;
    let body: Value = response.json();
    assert_eq!(body["view"], "listShown");
    assert_eq!(
        body["locations"]
            .as_array()
            .expect("No locations in the response."),
        &second_batch,
    );
}

#[tokio::test]
async fn test_zero_quantity_yields_empty_list_and_no_overview() {
    let server = test_server();
    let session_id = create_session(&server).await;

    let locations = generate_locations(&server, &session_id, 0).await;
    assert!(locations.is_empty());

    let response = server
        .post(&format!("/sessions/{session_id}/show-all"))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["error"], true);
    assert_eq!(body["errorCode"], "nothingGenerated");

    let response = server.get(&format!("/sessions/{session_id}/view")).await;
    let body: Value = response.json();
    assert_eq!(body["view"], "idle");
}

#[tokio::test]
async fn test_show_all_labels_every_location() {
    let server = test_server();
    let session_id = create_session(&server).await;
    let locations = generate_locations(&server, &session_id, 4).await;

    let response = server
        .post(&format!("/sessions/{session_id}/show-all"))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["error"], false);
    assert_eq!(body["overview"]["count"], 4);
    assert_eq!(body["overview"]["viewport"]["zoom"], OVERVIEW_ZOOM);
    assert_eq!(body["overview"]["viewport"]["center"], locations[0]);
    let markers = body["overview"]["markers"]
        .as_array()
        .expect("No markers in the response.");
    assert_eq!(markers.len(), 4);
    for (index, marker) in markers.iter().enumerate() {
        assert_eq!(marker["position"], locations[index]);
        assert_eq!(marker["label"], (index + 1).to_string());
    }

    let response = server
        .post(&format!("/sessions/{session_id}/close-all"))
        .await;
    response.assert_status_ok();
    let closed: Value = response.json();
    assert_eq!(closed["error"], false);
    assert_eq!(closed["view"], "listShown");
    assert_eq!(
        closed["locations"]
            .as_array()
            .expect("No locations in the response."),
        &locations,
    );
}

#[tokio::test]
async fn test_select_out_of_bounds_is_rejected() {
    let server = test_server();
    let session_id = create_session(&server).await;
    generate_locations(&server, &session_id, 2).await;

    let response = server
        .post(&format!("/sessions/{session_id}/select"))
        .json(&json!({"index": 5}))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["error"], true);
    assert_eq!(body["errorCode"], "noSuchLocation");

    let response = server.get(&format!("/sessions/{session_id}/view")).await;
    let body: Value = response.json();
    assert_eq!(body["view"], "listShown");
}

#[tokio::test]
async fn test_overlays_are_mutually_exclusive() {
    let server = test_server();
    let session_id = create_session(&server).await;
    generate_locations(&server, &session_id, 2).await;

    let response = server
        .post(&format!("/sessions/{session_id}/show-all"))
        .await;
    response.assert_status_ok();

    let response = server
        .post(&format!("/sessions/{session_id}/select"))
        .json(&json!({"index": 0}))
        .await;
    let body: Value = response.json();
    assert_eq!(body["errorCode"], "overlayAlreadyOpen");

    let response = server
        .post(&format!("/sessions/{session_id}/show-all"))
        .await;
    let body: Value = response.json();
    assert_eq!(body["errorCode"], "overlayAlreadyOpen");

    let response = server
        .post(&format!("/sessions/{session_id}/close-detail"))
        .await;
    let body: Value = response.json();
    assert_eq!(body["errorCode"], "detailNotOpen");

    let response = server
        .post(&format!("/sessions/{session_id}/close-all"))
        .await;
    let body: Value = response.json();
    assert_eq!(body["error"], false);
    assert_eq!(body["view"], "listShown");
}

#[tokio::test]
async fn test_unknown_session_is_rejected() {
    let server = test_server();

    let response = server
        .post("/sessions/nonexistent/generate")
        .json(&json!({"quantity": 1}))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["error"], true);
    assert_eq!(body["errorCode"], "sessionNotFound");

    let response = server.get("/sessions/nonexistent/view").await;
    let body: Value = response.json();
    assert_eq!(body["errorCode"], "sessionNotFound");
}
