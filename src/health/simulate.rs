//! Simulated metric generation.
//!
//! The kiosk has no agent collecting real host metrics yet, so snapshots
//! are synthesized within plausible bands. Generation is a pure function
//! over an injected random source and clock, which keeps it deterministic
//! under a seeded RNG; a real collector would slot in behind the same
//! signature.

use std::collections::BTreeMap;

use rand::Rng;
use time::OffsetDateTime;

use super::snapshot::{Alert, GaugeSet, HealthSnapshot, ServiceStatus, Severity};

/// CPU percent band: base + up to span.
const CPU_BASE: f64 = 15.0;
const CPU_SPAN: f64 = 25.0;
/// Memory percent band.
const MEM_BASE: f64 = 40.0;
const MEM_SPAN: f64 = 20.0;
/// Free disk band (GB).
const DISK_FREE_BASE: f64 = 40.0;
const DISK_FREE_SPAN: f64 = 10.0;
/// Total disk is fixed (GB).
const DISK_TOTAL_GB: f64 = 100.0;

/// Alert thresholds.
const CPU_WARN_PERCENT: f64 = 80.0;
const MEM_CRITICAL_PERCENT: f64 = 85.0;
const DISK_LOW_GB: f64 = 10.0;

/// How one monitored service misbehaves in simulation.
struct ServiceProfile {
    name: &'static str,
    /// Probability of reporting the degraded state instead of active.
    flake_chance: f64,
    /// State reported when the service flakes.
    degraded: ServiceStatus,
}

/// Fixed service set for a kiosk deployment.
const SERVICE_PROFILES: &[ServiceProfile] = &[
    ServiceProfile {
        name: "tsijukebox",
        flake_chance: 0.0,
        degraded: ServiceStatus::Failed,
    },
    ServiceProfile {
        name: "grafana",
        flake_chance: 0.10,
        degraded: ServiceStatus::Inactive,
    },
    ServiceProfile {
        name: "prometheus",
        flake_chance: 0.15,
        degraded: ServiceStatus::Inactive,
    },
    ServiceProfile {
        name: "spotify",
        flake_chance: 0.0,
        degraded: ServiceStatus::Failed,
    },
    ServiceProfile {
        name: "playerctl",
        flake_chance: 0.05,
        degraded: ServiceStatus::Failed,
    },
];

/// Generate one fresh [`HealthSnapshot`] at `now`.
pub fn generate_snapshot<R: Rng + ?Sized>(rng: &mut R, now: OffsetDateTime) -> HealthSnapshot {
    let metrics = GaugeSet {
        cpu_percent: CPU_BASE + rng.gen::<f64>() * CPU_SPAN,
        memory_percent: MEM_BASE + rng.gen::<f64>() * MEM_SPAN,
        disk_free_gb: DISK_FREE_BASE + rng.gen::<f64>() * DISK_FREE_SPAN,
        disk_total_gb: DISK_TOTAL_GB,
    };

    let mut services = BTreeMap::new();
    for profile in SERVICE_PROFILES {
        let status = if profile.flake_chance > 0.0 && rng.gen_bool(profile.flake_chance) {
            profile.degraded
        } else {
            ServiceStatus::Active
        };
        services.insert(profile.name.to_string(), status);
    }

    let alerts = derive_alerts(&metrics, &services, now);

    HealthSnapshot {
        timestamp: now,
        services,
        metrics,
        alerts,
    }
}

/// Derive alerts from a snapshot's own gauges and service states.
///
/// Purely deterministic: same inputs, same alerts (ids embed `now` only).
pub fn derive_alerts(
    metrics: &GaugeSet,
    services: &BTreeMap<String, ServiceStatus>,
    now: OffsetDateTime,
) -> Vec<Alert> {
    let millis = now.unix_timestamp_nanos() / 1_000_000;
    let mut alerts = Vec::new();

    if metrics.cpu_percent > CPU_WARN_PERCENT {
        alerts.push(Alert {
            id: format!("cpu-{millis}"),
            severity: Severity::Warn,
            message: format!("CPU usage high: {:.1}%", metrics.cpu_percent),
            timestamp: now,
        });
    }

    if metrics.memory_percent > MEM_CRITICAL_PERCENT {
        alerts.push(Alert {
            id: format!("mem-{millis}"),
            severity: Severity::Error,
            message: format!("Memory usage critical: {:.1}%", metrics.memory_percent),
            timestamp: now,
        });
    }

    if metrics.disk_free_gb < DISK_LOW_GB {
        alerts.push(Alert {
            id: format!("disk-{millis}"),
            severity: Severity::Critical,
            message: format!("Low disk space: {:.1}GB remaining", metrics.disk_free_gb),
            timestamp: now,
        });
    }

    for (name, status) in services {
        match status {
            ServiceStatus::Failed => alerts.push(Alert {
                id: format!("svc-{name}-{millis}"),
                severity: Severity::Error,
                message: format!("Service {name} has failed"),
                timestamp: now,
            }),
            ServiceStatus::Inactive => alerts.push(Alert {
                id: format!("svc-{name}-{millis}"),
                severity: Severity::Warn,
                message: format!("Service {name} is inactive"),
                timestamp: now,
            }),
            ServiceStatus::Active | ServiceStatus::Unknown => {}
        }
    }

    alerts
}
