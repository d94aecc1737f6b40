//! Integration tests for the info service.
//!
//! These bind a real TCP listener and talk to it over HTTP, so the peer
//! address and the full middleware stack are exercised.
//! The fixed-port test is ignored by default:
//! Run with: cargo test --test integration -- --ignored

use std::net::SocketAddr;

use devops_info_service::api::AppState;
use devops_info_service::config::Config;
use devops_info_service::server;
use devops_info_service::system::mock::{sample_info, MockCollector};
use devops_info_service::system::StartTime;
use serde_json::Value;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A running server and the handle to stop it.
struct TestServer {
    addr: SocketAddr,
    stop: oneshot::Sender<()>,
    handle: JoinHandle<devops_info_service::Result<()>>,
}

impl TestServer {
    async fn start(config: Config, state: AppState) -> Self {
        let listener = server::bind(&config).await.expect("bind listener");
        let addr = listener.local_addr().unwrap();
        let (stop, stopped) = oneshot::channel::<()>();

        let handle = tokio::spawn(server::serve(listener, state, async move {
            let _ = stopped.await;
        }));

        Self { addr, stop, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn shutdown(self) {
        let _ = self.stop.send(());
        self.handle.await.unwrap().unwrap();
    }
}

fn loopback_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..Config::default()
    }
}

fn mock_state() -> AppState {
    AppState::with_collector(StartTime::now(), MockCollector::healthy(sample_info()))
}

#[tokio::test]
async fn test_health_over_tcp() {
    let server = TestServer::start(loopback_config(), mock_state()).await;

    let response = reqwest::get(server.url("/health")).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].as_u64().is_some());

    server.shutdown().await;
}

#[tokio::test]
async fn test_root_echoes_peer_address_and_user_agent() {
    let server = TestServer::start(loopback_config(), mock_state()).await;

    let client = reqwest::Client::builder()
        .user_agent("integration-test/1.0")
        .build()
        .unwrap();
    let body: Value = client
        .get(server.url("/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["request"]["client_ip"], "127.0.0.1");
    assert_eq!(body["request"]["user_agent"], "integration-test/1.0");
    assert_eq!(body["request"]["method"], "GET");
    assert_eq!(body["request"]["path"], "/");
    assert_eq!(body["endpoints"].as_array().unwrap().len(), 2);

    server.shutdown().await;
}

#[tokio::test]
async fn test_uptime_non_decreasing_across_requests() {
    let server = TestServer::start(loopback_config(), mock_state()).await;

    let first: Value = reqwest::get(server.url("/health")).await.unwrap().json().await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    let second: Value = reqwest::get(server.url("/health")).await.unwrap().json().await.unwrap();

    assert!(second["uptime_seconds"].as_u64() >= first["uptime_seconds"].as_u64());

    server.shutdown().await;
}

#[tokio::test]
async fn test_unknown_path_is_404_json() {
    let server = TestServer::start(loopback_config(), mock_state()).await;

    let response = reqwest::get(server.url("/nope")).await.unwrap();
    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({"error": "Not Found", "message": "Endpoint does not exist"})
    );

    server.shutdown().await;
}

#[tokio::test]
async fn test_root_against_real_host() {
    let server = TestServer::start(loopback_config(), AppState::new(StartTime::now())).await;

    let response = reqwest::get(server.url("/")).await.unwrap();
    // A host without a resolvable hostname answers with the fixed 500 body.
    if response.status() == 500 {
        server.shutdown().await;
        return;
    }
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["system"]["architecture"], std::env::consts::ARCH);
    assert!(!body["system"]["hostname"].as_str().unwrap().is_empty());

    server.shutdown().await;
}

#[tokio::test]
#[ignore = "binds the fixed port 8080"]
async fn test_port_from_env_binds_8080() {
    let config = Config::from_pairs([("HOST", "127.0.0.1"), ("PORT", "8080")]).unwrap();
    let server = TestServer::start(config, mock_state()).await;

    assert_eq!(server.addr.port(), 8080);
    let response = reqwest::get("http://127.0.0.1:8080/health").await.unwrap();
    assert_eq!(response.status(), 200);

    server.shutdown().await;
}
