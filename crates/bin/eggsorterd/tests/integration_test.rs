//! End-to-end smoke tests for the full eggsorterd stack.
//!
//! Each test wires the fixture dataset, a running clock task and the real
//! axum router, then exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use eggsorter_adapter_fixture::FixtureDataset;
use eggsorter_adapter_http_axum::router;
use eggsorter_adapter_http_axum::state::AppState;
use eggsorter_app::clock_task::ClockTask;
use eggsorter_app::ports::Clock;
use eggsorter_app::services::navigation_service::NavigationService;
use eggsorter_domain::time::{DEFAULT_UTC_OFFSET_MINUTES, Timestamp, utc_offset};

/// Always reports 2026-10-19T06:03:09Z.
struct FrozenClock;

impl Clock for FrozenClock {
    fn now(&self) -> Timestamp {
        "2026-10-19T06:03:09Z".parse().unwrap()
    }
}

/// Build a fully-wired router and the clock task feeding it.
fn app() -> (axum::Router, ClockTask) {
    let offset = utc_offset(DEFAULT_UTC_OFFSET_MINUTES).unwrap();
    let clock = ClockTask::start(FrozenClock, offset, Duration::from_secs(1));
    let state = AppState::new(
        NavigationService::new(FixtureDataset::new().unwrap()),
        clock.subscribe(),
        1,
    );
    (router::build(state), clock)
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (app, clock) = app();
    let (status, _) = get(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    clock.stop().await;
}

// ---------------------------------------------------------------------------
// Dashboard (SSR) pages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_home_page_with_local_clock() {
    let (app, clock) = app();
    let (status, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("AUTO EGG SORTER"));
    assert!(body.contains("October 19, 2026"));
    assert!(body.contains("Monday"));
    clock.stop().await;
}

#[tokio::test]
async fn should_walk_every_page_in_one_session() {
    let (app, clock) = app();

    let (_, device) = get(app.clone(), "/device").await;
    assert!(device.contains("PICO System Info Dashboard"));
    assert!(device.contains("14:03:09"));

    let (_, counters) = get(app.clone(), "/counters").await;
    assert!(counters.contains("EGGS Info Dashboard"));
    assert!(counters.contains("23,450"));

    let (_, logs) = get(app.clone(), "/logs").await;
    assert!(logs.contains("System Log Dashboard"));
    assert!(logs.contains("Servo not responding"));

    let (_, state) = get(app, "/api/state").await;
    let json: serde_json::Value = serde_json::from_str(&state).unwrap();
    assert_eq!(json["current_page"], "logs");

    clock.stop().await;
}

#[tokio::test]
async fn should_return_404_for_unknown_page() {
    let (app, clock) = app();
    let (status, _) = get(app, "/settings").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    clock.stop().await;
}

// ---------------------------------------------------------------------------
// JSON API
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_serve_clock_published_by_task() {
    let (app, clock) = app();
    let (status, body) = get(app, "/api/clock").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["date"], "October 19, 2026");
    assert_eq!(json["weekday"], "Monday");
    assert_eq!(json["time"], "14:03:09");
    clock.stop().await;
}

#[tokio::test]
async fn should_return_counters_screen_as_json() {
    let (app, clock) = app();
    let (status, body) = get(app, "/api/pages/counters").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["view"]["kind"], "counters");
    assert_eq!(json["view"]["average_weight"], "57.87 g");
    clock.stop().await;
}
