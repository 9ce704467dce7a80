//! Full lookups through `App` against stub decode and recall services.
//!
//! The recall stub runs on its own listener so every test also exercises the
//! configured recall URL being independent of the page origin.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use crate::infrastructure::config::LookupConfig;
use crate::page::{
    render_html, render_text, PageState, RecallSection, UiState, GENERIC_ERROR_MESSAGE,
    INVALID_VIN_MESSAGE, NO_RECALLS_MESSAGE, RECALL_UNAVAILABLE_MESSAGE,
};
use crate::use_cases::LookupError;
use crate::App;

const VIN: &str = "1HGCM82633A004352";

/// Canned reply plus a log of the VINs each stub received.
#[derive(Clone)]
struct Stub {
    status: StatusCode,
    body: Value,
    seen: Arc<Mutex<Vec<String>>>,
}

impl Stub {
    fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn with_status(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            ..Self::ok(body)
        }
    }

    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

async fn stub_handler(State(stub): State<Stub>, Json(request): Json<Value>) -> Response {
    let vin = request["vin"].as_str().unwrap_or_default().to_string();
    stub.seen.lock().unwrap().push(vin);
    (stub.status, Json(stub.body.clone())).into_response()
}

async fn spawn(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn spawn_decode(stub: &Stub) -> SocketAddr {
    spawn(
        Router::new()
            .route("/decode_vin", post(stub_handler))
            .with_state(stub.clone()),
    )
    .await
}

async fn spawn_recall(stub: &Stub) -> SocketAddr {
    spawn(
        Router::new()
            .route("/api/recalls", post(stub_handler))
            .with_state(stub.clone()),
    )
    .await
}

fn app(decode: SocketAddr, recall: SocketAddr) -> App {
    let config = LookupConfig::new(
        &format!("http://{decode}"),
        &format!("http://{recall}/api/recalls"),
    )
    .unwrap();
    App::new(&config)
}

fn honda() -> Value {
    json!({
        "Make": "HONDA",
        "Model": "Accord",
        "ModelYear": "2003",
        "BodyClass": "Coupe",
        "EngineCylinders": "4",
        "DisplacementL": "2.4",
        "PlantCity": "MARYSVILLE",
        "PlantState": "OHIO",
        "PlantCountry": "UNITED STATES (USA)",
        "ErrorCode": "0",
        "Message": "Results returned successfully"
    })
}

fn two_recalls() -> Value {
    json!({ "Results": [
        { "Component": "AIR BAGS", "NHTSACampaignNumber": "19V182000",
          "ReportReceivedDate": "07/03/2019", "Summary": "Inflator may rupture." },
        { "Component": "SEAT BELTS", "NHTSACampaignNumber": "21V554000",
          "ReportReceivedDate": "08/10/2021", "Summary": "Buckle may not latch." }
    ]})
}

#[tokio::test]
async fn invalid_input_contacts_no_service() {
    let decode = Stub::ok(honda());
    let recall = Stub::ok(two_recalls());
    let app = app(spawn_decode(&decode).await, spawn_recall(&recall).await);
    let mut page = PageState::new();

    let result = app.submit("1HGCM8263", &mut page).await;

    assert!(matches!(result, Err(LookupError::InvalidInput(_))));
    assert_eq!(page.error_message(), Some(INVALID_VIN_MESSAGE));
    assert!(decode.seen().is_empty());
    assert!(recall.seen().is_empty());
}

#[tokio::test]
async fn successful_lookup_uses_same_vin_for_both_services() {
    let decode = Stub::ok(honda());
    let recall = Stub::ok(two_recalls());
    let app = app(spawn_decode(&decode).await, spawn_recall(&recall).await);
    let mut page = PageState::new();

    app.submit(" 1hgcm82633a004352", &mut page).await.unwrap();

    assert_eq!(decode.seen(), vec![VIN]);
    assert_eq!(recall.seen(), vec![VIN]);
    assert_eq!(page.ui_state(), UiState::ResultsShown);

    let text = render_text(&page);
    assert!(text.contains("  Make: HONDA\n"));
    assert!(text.contains("  Vehicle Type: N/A\n"));
    assert!(text.contains("  Manufactured In: MARYSVILLE, OHIO, UNITED STATES (USA)\n"));

    let html = render_html(&page);
    assert_eq!(html.matches("<div class=\"recall-item\">").count(), 2);
    let air_bags = html.find("<h4>AIR BAGS</h4>").unwrap();
    let seat_belts = html.find("<h4>SEAT BELTS</h4>").unwrap();
    assert!(air_bags < seat_belts);
}

#[tokio::test]
async fn decode_error_message_is_shown_and_recall_skipped() {
    let decode = Stub::ok(json!({ "ErrorCode": "1", "Message": "Invalid VIN" }));
    let recall = Stub::ok(two_recalls());
    let app = app(spawn_decode(&decode).await, spawn_recall(&recall).await);
    let mut page = PageState::new();

    let result = app.submit(VIN, &mut page).await;

    assert!(matches!(result, Err(LookupError::Decode(_))));
    assert_eq!(page.error_message(), Some("Invalid VIN"));
    assert!(!page.results_visible());
    assert!(recall.seen().is_empty());
}

#[tokio::test]
async fn decode_server_error_without_error_code_still_chains_recalls() {
    let decode = Stub::with_status(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "Failed to fetch data from NHTSA API" }),
    );
    let recall = Stub::ok(json!({ "Results": [] }));
    let app = app(spawn_decode(&decode).await, spawn_recall(&recall).await);
    let mut page = PageState::new();

    app.submit(VIN, &mut page).await.unwrap();

    assert_eq!(page.ui_state(), UiState::ResultsShown);
    assert!(page.error_message().is_none());
    assert_eq!(recall.seen(), vec![VIN]);
    let text = render_text(&page);
    assert!(text.contains("  Make: N/A\n"));
    assert!(text.contains("  Manufactured In: , , \n"));
    assert_eq!(page.recall_section(), &RecallSection::Empty);
}

#[tokio::test]
async fn decode_non_json_reply_is_fatal() {
    let decode_addr = spawn(Router::new().route(
        "/decode_vin",
        post(|| async { (StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>") }),
    ))
    .await;
    let recall = Stub::ok(two_recalls());
    let app = app(decode_addr, spawn_recall(&recall).await);
    let mut page = PageState::new();

    let result = app.submit(VIN, &mut page).await;

    assert!(matches!(result, Err(LookupError::Transport(_))));
    assert_eq!(page.error_message(), Some(GENERIC_ERROR_MESSAGE));
    assert!(!page.results_visible());
    assert!(recall.seen().is_empty());
}

#[tokio::test]
async fn empty_recalls_show_no_recalls_message() {
    let decode = Stub::ok(honda());
    let recall = Stub::ok(json!({ "Count": 0, "Results": [] }));
    let app = app(spawn_decode(&decode).await, spawn_recall(&recall).await);
    let mut page = PageState::new();

    app.submit(VIN, &mut page).await.unwrap();

    assert_eq!(page.recall_section(), &RecallSection::Empty);
    assert!(page.results_visible());
    let html = render_html(&page);
    assert_eq!(html.matches(NO_RECALLS_MESSAGE).count(), 1);
    assert!(!html.contains("recall-item"));
}

#[tokio::test]
async fn recall_connection_refused_keeps_vehicle_details() {
    let decode = Stub::ok(honda());
    let closed = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let app = app(spawn_decode(&decode).await, closed);
    let mut page = PageState::new();

    let result = app.submit(VIN, &mut page).await.unwrap();

    assert!(result.recalls.is_none());
    assert_eq!(page.ui_state(), UiState::ResultsShown);
    assert!(page.error_message().is_none());
    assert!(render_text(&page).contains(RECALL_UNAVAILABLE_MESSAGE));
    assert!(render_html(&page).contains("<div id=\"error-container\" class=\"hidden\">"));
}

#[tokio::test]
async fn recall_server_error_is_isolated() {
    let decode = Stub::ok(honda());
    let recall = Stub::with_status(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "Failed to fetch recall data from NHTSA API" }),
    );
    let app = app(spawn_decode(&decode).await, spawn_recall(&recall).await);
    let mut page = PageState::new();

    app.submit(VIN, &mut page).await.unwrap();

    assert_eq!(page.recall_section(), &RecallSection::Unavailable);
    assert!(page.results_visible());
}

#[tokio::test]
async fn same_vin_twice_renders_identically() {
    let decode = Stub::ok(honda());
    let recall = Stub::ok(two_recalls());
    let app = app(spawn_decode(&decode).await, spawn_recall(&recall).await);
    let mut page = PageState::new();

    app.submit(VIN, &mut page).await.unwrap();
    let first = (render_text(&page), render_html(&page));
    app.submit(VIN, &mut page).await.unwrap();
    let second = (render_text(&page), render_html(&page));

    assert_eq!(first, second);
    assert_eq!(recall.seen().len(), 2);
}
