//! Prometheus counters for the health endpoint.

use metrics::{counter, describe_counter};

// === Metric Name Constants ===

/// Snapshots served on the plain HTTP path.
pub const METRIC_HTTP_SNAPSHOTS: &str = "http_snapshots_served_total";
/// Snapshots pushed over open channels (initial, periodic and refresh).
pub const METRIC_WS_SNAPSHOTS: &str = "ws_snapshots_pushed_total";
/// Channels opened.
pub const METRIC_CHANNELS_OPENED: &str = "ws_channels_opened_total";
/// Channels closed.
pub const METRIC_CHANNELS_CLOSED: &str = "ws_channels_closed_total";
/// Keep-alive probes answered.
pub const METRIC_KEEPALIVES: &str = "ws_keepalives_total";
/// Upgrade attempts rejected.
pub const METRIC_UPGRADES_REJECTED: &str = "ws_upgrades_rejected_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_HTTP_SNAPSHOTS,
        "Total snapshots served as plain JSON responses"
    );
    describe_counter!(
        METRIC_WS_SNAPSHOTS,
        "Total snapshots pushed over WebSocket channels"
    );
    describe_counter!(METRIC_CHANNELS_OPENED, "Total WebSocket channels opened");
    describe_counter!(METRIC_CHANNELS_CLOSED, "Total WebSocket channels closed");
    describe_counter!(METRIC_KEEPALIVES, "Total keep-alive probes answered");
    describe_counter!(
        METRIC_UPGRADES_REJECTED,
        "Total WebSocket upgrade attempts rejected"
    );
}

/// Record a snapshot served on the HTTP path.
pub fn inc_http_snapshots() {
    counter!(METRIC_HTTP_SNAPSHOTS).increment(1);
}

/// Record a snapshot pushed over a channel.
pub fn inc_ws_snapshots() {
    counter!(METRIC_WS_SNAPSHOTS).increment(1);
}

/// Record a channel open.
pub fn inc_channels_opened() {
    counter!(METRIC_CHANNELS_OPENED).increment(1);
}

/// Record a channel close.
pub fn inc_channels_closed() {
    counter!(METRIC_CHANNELS_CLOSED).increment(1);
}

/// Record an answered keep-alive probe.
pub fn inc_keepalives() {
    counter!(METRIC_KEEPALIVES).increment(1);
}

/// Record a rejected upgrade attempt.
pub fn inc_upgrades_rejected() {
    counter!(METRIC_UPGRADES_REJECTED).increment(1);
}
