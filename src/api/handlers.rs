//! HTTP API handlers.

use std::time::Duration;

use axum::extract::ws::rejection::WebSocketUpgradeRejection;
use axum::extract::ws::WebSocketUpgrade;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use time::OffsetDateTime;
use tracing::{info, warn};

use super::channel;
use crate::health::{generate_snapshot, HealthSnapshot};
use crate::metrics;

/// Application state shared with handlers.
///
/// Deliberately small: there is no cross-connection state. Each open
/// channel owns its own timer and generates its own snapshots.
#[derive(Clone)]
pub struct AppState {
    /// Interval between periodic pushes on an open channel.
    pub push_interval: Duration,
    /// Prometheus render handle, when a recorder is installed.
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state with the given push interval.
    pub fn new(push_interval: Duration) -> Self {
        Self {
            push_interval,
            prometheus: None,
        }
    }

    /// Attach a Prometheus render handle for the `/metrics` route.
    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }

    /// Generate one fresh snapshot at the current instant.
    pub fn snapshot(&self) -> HealthSnapshot {
        generate_snapshot(&mut rand::thread_rng(), OffsetDateTime::now_utc())
    }
}

/// Error body returned on a failed upgrade attempt.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Failure reason.
    pub error: String,
}

/// Health endpoint: plain JSON snapshot, or WebSocket push channel when
/// the request carries an `Upgrade: websocket` header.
pub async fn health(
    State(state): State<AppState>,
    headers: HeaderMap,
    upgrade: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
) -> Response {
    let wants_upgrade = headers
        .get(header::UPGRADE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.eq_ignore_ascii_case("websocket"))
        .unwrap_or(false);

    if !wants_upgrade {
        metrics::inc_http_snapshots();
        return Json(state.snapshot()).into_response();
    }

    match upgrade {
        Ok(ws) => {
            info!("upgrading request to health push channel");
            ws.on_upgrade(move |socket| channel::run(socket, state))
                .into_response()
        }
        Err(rejection) => {
            warn!(%rejection, "websocket upgrade failed");
            metrics::inc_upgrades_rejected();
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: format!("websocket upgrade failed: {rejection}"),
                }),
            )
                .into_response()
        }
    }
}

/// Render Prometheus metrics, when a recorder is installed.
pub async fn render_metrics(State(state): State<AppState>) -> Response {
    match &state.prometheus {
        Some(handle) => handle.render().into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_fresh_per_call() {
        let state = AppState::new(Duration::from_secs(30));
        let a = state.snapshot();
        let b = state.snapshot();
        // Gauges are redrawn each call; identical draws are vanishingly
        // unlikely across four independent f64 samples.
        assert!(a.metrics != b.metrics);
    }

    #[test]
    fn state_without_recorder_has_no_prometheus_handle() {
        let state = AppState::new(Duration::from_secs(30));
        assert!(state.prometheus.is_none());
    }
}
