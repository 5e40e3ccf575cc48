//! Mount lifecycle tests against a mock status endpoint.

use statusdeck_core::{Monitoring, UptimeTier};
use statusdeck_store::{FetchState, StatusConfig, StatusMount, catalog};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const STATUS_PATH: &str = "/api/public/status/personal";

fn page_body() -> serde_json::Value {
    serde_json::json!({
        "page": { "name": "Personal", "slug": "personal" },
        "services": [
            { "name": "Jarvis", "url": "jarvischeck.com", "status": "OK",
              "uptime": 99.95, "incidentCount": 0, "avgResponseTime": 212.4 },
            { "name": "Syncoli", "url": "https://syncoli.com", "status": "WARNING",
              "uptime": 99.3, "incidentCount": 2, "avgResponseTime": null },
            { "name": "Blaze", "url": "http://blaze.codes", "status": "MAINTENANCE",
              "uptime": 95.0, "lastChecked": "yesterday" }
        ],
        "allOperational": false,
        "timeframeDays": 30,
        "lastRefreshed": "2026-10-15T08:00:00Z"
    })
}

fn config_for(server: &MockServer) -> StatusConfig {
    StatusConfig::default().with_api_url(server.uri())
}

/// Counts events at WARN or above.
struct WarningCounter(Arc<AtomicUsize>);

impl<S: tracing::Subscriber> Layer<S> for WarningCounter {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() <= tracing::Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[tokio::test]
async fn test_catalog_merged_with_live_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STATUS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body()))
        .expect(1)
        .mount(&server)
        .await;

    let mut mount = StatusMount::from_config(&config_for(&server)).unwrap();
    assert!(matches!(mount.settled().await, FetchState::Loaded(_)));

    let views = mount.store().project_views(&catalog::portfolio()).await;
    let by_name = |name: &str| {
        views
            .iter()
            .find(|v| v.project.name == name)
            .map(|v| v.monitoring.clone())
            .unwrap()
    };

    assert_eq!(by_name("jarvischeck.com").tier(), Some(UptimeTier::Healthy));
    assert_eq!(by_name("jarvischeck.com").label(), Some("Operational"));
    assert_eq!(by_name("syncoli.com").tier(), Some(UptimeTier::Degraded));
    assert_eq!(by_name("blaze.codes").tier(), Some(UptimeTier::Critical));
    assert_eq!(by_name("blaze.codes").label(), Some("Unknown"));
    assert_eq!(by_name("xalarm.cz"), Monitoring::NotMonitored);

    let summary = mount.store().page_summary().await.unwrap();
    assert_eq!(summary.banner(), "Issues detected");
    assert_eq!(summary.services[0].avg_response_ms, Some(212));
}

#[tokio::test]
async fn test_server_error_loads_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STATUS_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let mut mount = StatusMount::from_config(&config_for(&server)).unwrap();

    assert_eq!(mount.settled().await, FetchState::Errored);
    assert!(mount.is_loaded().await);
    for project in catalog::portfolio() {
        assert!(mount.get_status(&project.url).await.is_none());
    }
    assert!(mount.store().page_summary().await.is_none());
}

#[tokio::test]
async fn test_malformed_body_loads_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STATUS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let mut mount = StatusMount::from_config(&config_for(&server)).unwrap();

    assert_eq!(mount.settled().await, FetchState::Errored);
    assert!(mount.get_status("jarvischeck.com").await.is_none());
}

#[tokio::test]
async fn test_teardown_during_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STATUS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body())
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&server)
        .await;

    let mount = StatusMount::from_config(&config_for(&server)).unwrap();
    let store = mount.store().clone();
    let mut rx = store.subscribe();
    rx.wait_for(|version| *version >= 1).await.unwrap();

    let state = mount.teardown().await;

    assert_eq!(state, FetchState::Idle);
    assert!(!store.is_loaded().await);
    assert!(store.get_status("jarvischeck.com").await.is_none());
}

#[tokio::test]
async fn test_failed_fetch_logs_no_warnings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STATUS_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let warnings = Arc::new(AtomicUsize::new(0));
    let subscriber =
        tracing_subscriber::registry().with(WarningCounter(Arc::clone(&warnings)));
    // Current-thread runtime: the spawned fetch task runs under this default.
    let _guard = tracing::subscriber::set_default(subscriber);

    let mut mount = StatusMount::from_config(&config_for(&server)).unwrap();

    assert_eq!(mount.settled().await, FetchState::Errored);
    assert_eq!(warnings.load(Ordering::SeqCst), 0);
}
