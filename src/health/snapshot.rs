//! Snapshot wire types.
//!
//! These structs define the JSON shape sent to clients on both the plain
//! HTTP path and the WebSocket push path. Field names are camelCase and
//! enum values lowercase; the kiosk dashboard parses this shape directly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::OffsetDateTime;

/// Reported state of one monitored service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ServiceStatus {
    /// Service is running normally.
    Active,
    /// Service is stopped but not in error.
    Inactive,
    /// Service has crashed or failed its unit checks.
    Failed,
    /// Service state could not be determined.
    Unknown,
}

/// Alert severity, lowest to highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    /// Informational only.
    Info,
    /// Degraded but functional.
    Warn,
    /// Something is broken.
    Error,
    /// Immediate attention required.
    Critical,
}

/// Host resource gauges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeSet {
    /// CPU utilization percentage.
    pub cpu_percent: f64,
    /// Memory utilization percentage.
    pub memory_percent: f64,
    /// Free disk space in GB.
    pub disk_free_gb: f64,
    /// Total disk space in GB.
    pub disk_total_gb: f64,
}

/// One alert derived from a snapshot's own values.
///
/// Alerts are not persisted or deduplicated across snapshots; a condition
/// that holds for two consecutive snapshots produces two alerts with
/// distinct ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Identifier, e.g. `cpu-<unix-millis>` or `svc-grafana-<unix-millis>`.
    pub id: String,
    /// Alert severity.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Instant the alert was derived.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// One immutable bundle of timestamp, service states, gauges and derived
/// alerts. Generated fresh per request or tick and discarded after send.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthSnapshot {
    /// Instant of generation.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Per-service states, keyed by service name.
    pub services: BTreeMap<String, ServiceStatus>,
    /// Resource gauges.
    pub metrics: GaugeSet,
    /// Alerts derived from this snapshot's values.
    pub alerts: Vec<Alert>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn snapshot_serializes_with_camel_case_keys() {
        let snapshot = HealthSnapshot {
            timestamp: datetime!(2026-01-01 00:00:00 UTC),
            services: BTreeMap::from([("grafana".to_string(), ServiceStatus::Active)]),
            metrics: GaugeSet {
                cpu_percent: 20.0,
                memory_percent: 50.0,
                disk_free_gb: 45.0,
                disk_total_gb: 100.0,
            },
            alerts: vec![],
        };

        let value = serde_json::to_value(&snapshot).unwrap();
        let metrics = &value["metrics"];
        assert!(metrics.get("cpuPercent").is_some());
        assert!(metrics.get("memoryPercent").is_some());
        assert!(metrics.get("diskFreeGb").is_some());
        assert!(metrics.get("diskTotalGb").is_some());
        assert_eq!(value["services"]["grafana"], "active");
        assert_eq!(value["timestamp"], "2026-01-01T00:00:00Z");
    }

    #[test]
    fn enums_round_trip_lowercase() {
        assert_eq!(
            serde_json::to_string(&ServiceStatus::Failed).unwrap(),
            "\"failed\""
        );
        assert_eq!(
            serde_json::from_str::<Severity>("\"critical\"").unwrap(),
            Severity::Critical
        );
        assert_eq!(ServiceStatus::Inactive.to_string(), "inactive");
        assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warn);
    }

    #[test]
    fn severity_orders_by_urgency() {
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        assert!(Severity::Error < Severity::Critical);
    }
}
