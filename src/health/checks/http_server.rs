//! HTTP round-trip check
//!
//! Serves a single route from a short-lived local listener and issues
//! one request against it. The listener reports its bound address over
//! a one-shot channel as soon as the bind succeeds, so the probe
//! request can never race the bind.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use axum::{Router, routing::get};
use chrono::Local;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::debug;

use crate::health::check::{CheckResult, EnvCheck};

/// Route served by the short-lived listener
const TEST_PATH: &str = "/test";

/// Fixed prefix of the greeting body; the current timestamp follows it
pub const GREETING_PREFIX: &str = "Rust Workshop 2025 HTTP Test - ";

/// Default port for the probe listener
const DEFAULT_PORT: u16 = 8080;

/// How long the probe waits for the listener to report its address
const READY_TIMEOUT: Duration = Duration::from_secs(5);

/// Checks that a local HTTP server can be started and reached
///
/// An unreachable or already-taken port is a warning, not a failure:
/// some hosting sandboxes do not allow the loopback round trip.
pub struct HttpServerCheck {
    port: u16,
}

impl HttpServerCheck {
    /// Creates a check binding the default workshop port
    pub fn new() -> Self {
        Self { port: DEFAULT_PORT }
    }

    /// Creates a check binding the given port (0 picks an ephemeral one)
    pub fn with_port(port: u16) -> Self {
        Self { port }
    }
}

impl Default for HttpServerCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvCheck for HttpServerCheck {
    fn name(&self) -> &'static str {
        "HTTP Server"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Starts a short-lived local HTTP server and performs one round trip")
    }

    fn check(&self) -> CheckResult {
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                return CheckResult::warn("Failed to start async runtime")
                    .with_details(format!("  ⚠ {}", e));
            }
        };

        match runtime.block_on(round_trip(self.port)) {
            Ok(url) => CheckResult::pass("HTTP基本機能: 成功").with_details(format!(
                "  ✓ GET {} → 200 OK\n  → Webサーバー構築の準備完了",
                url
            )),
            Err(e) => CheckResult::warn("HTTPテストリクエストエラー").with_details(format!(
                "  ⚠ {:#}\n  → ホスティング環境のポート設定で解決される場合があります",
                e
            )),
        }
    }
}

/// Handler for the probe route
async fn greet() -> String {
    format!("{}{}", GREETING_PREFIX, Local::now().format("%Y-%m-%d %H:%M:%S"))
}

/// Builds the single-route application served during the probe
pub fn router() -> Router {
    Router::new().route(TEST_PATH, get(greet))
}

/// Starts the listener, performs one GET against it, then shuts it
/// down without draining. Returns the probed URL.
async fn round_trip(port: u16) -> Result<String> {
    let (ready_tx, ready_rx) = oneshot::channel::<std::io::Result<SocketAddr>>();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(async move {
        let listener = match TcpListener::bind(("0.0.0.0", port)).await {
            Ok(listener) => listener,
            Err(e) => {
                let _ = ready_tx.send(Err(e));
                return Ok(());
            }
        };
        let addr = listener.local_addr()?;
        let _ = ready_tx.send(Ok(addr));

        axum::serve(listener, router())
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
    });

    let bound = tokio::time::timeout(READY_TIMEOUT, ready_rx)
        .await
        .context("リスナー起動がタイムアウトしました")?
        .context("リスナータスクが起動前に終了しました")?
        .context("ポートをバインドできません")?;

    let url = format!("http://127.0.0.1:{}{}", bound.port(), TEST_PATH);
    debug!(%url, "issuing probe request");
    let probed = probe(&url).await;

    // Stop the listener immediately; in-flight work is not drained.
    let _ = shutdown_tx.send(());
    let _ = server.await;

    probed.map(|_| url)
}

/// Issues the single probe request; the response body is discarded
async fn probe(url: &str) -> Result<()> {
    let response = reqwest::get(url).await.context("リクエスト失敗")?;
    let status = response.status();
    ensure!(status.is_success(), "unexpected status: {}", status);
    Ok(())
}
